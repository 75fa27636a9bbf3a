//! Fixed-stride reduction for chart-scale output.
//!
//! Keeps the samples at indices `0, s, 2s, ...` with `s = ceil(n / max_points)`.
//! Values are copied untouched, nothing is averaged, so extremes that fall
//! between kept indices are lost. Use the result for drawing only; peak and
//! recovery analysis always run on the full series.

/// Stride that brings `len` items down to at most `max_points`.
/// Always at least 1; a budget of 0 is treated as 1.
pub fn stride_for(len: usize, max_points: usize) -> usize {
    let budget = max_points.max(1);
    len.div_ceil(budget).max(1)
}

/// Indices kept when reducing `len` items to at most `max_points`.
pub fn downsample_indices(len: usize, max_points: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(stride_for(len, max_points))
}

/// Reduce `items` to at most `max_points` entries by fixed stride.
///
/// Returns a copy of the input when it already fits.
///
/// # Example
/// ```
/// use activity_analytics::downsample;
///
/// let values: Vec<u32> = (0..10).collect();
/// assert_eq!(downsample(&values, 3), vec![0, 4, 8]);
/// assert_eq!(downsample(&values, 20), values);
/// ```
pub fn downsample<T: Clone>(items: &[T], max_points: usize) -> Vec<T> {
    downsample_indices(items.len(), max_points)
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride() {
        assert_eq!(stride_for(0, 10), 1);
        assert_eq!(stride_for(10, 10), 1);
        assert_eq!(stride_for(11, 10), 2);
        assert_eq!(stride_for(3600, 500), 8);
        assert_eq!(stride_for(5, 0), 5);
    }

    #[test]
    fn test_output_never_exceeds_budget() {
        for n in 1..300 {
            for m in 1..40 {
                let idx: Vec<usize> = downsample_indices(n, m).collect();
                assert!(idx.len() <= m, "n={} m={} got {}", n, m, idx.len());
                assert_eq!(idx[0], 0);
                assert!(idx.windows(2).all(|w| w[1] > w[0]));
            }
        }
    }

    #[test]
    fn test_exact_stride_positions() {
        let values: Vec<usize> = (0..1001).collect();
        let reduced = downsample(&values, 100);
        // ceil(1001 / 100) = 11
        assert_eq!(reduced.len(), 91);
        assert!(reduced.iter().enumerate().all(|(k, &v)| v == k * 11));
    }

    #[test]
    fn test_values_are_not_averaged() {
        let values = vec![1.0, 50.0, 2.0, 3.0];
        assert_eq!(downsample(&values, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<f64> = vec![];
        assert!(downsample(&empty, 10).is_empty());
    }
}
