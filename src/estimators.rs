//! Centered index-window estimators for the chart curves.
//!
//! Both estimators look at the samples `lo = max(0, i - W)` to
//! `hi = min(n - 1, i + W)` around index `i`. The window shrinks at the series
//! edges instead of reflecting, so the first and last `W` points use a
//! one-sided window.
//!
//! - [`vertical_rate_at`]: secant slope of altitude between `lo` and `hi`,
//!   in meters per hour, clamped to `±vertical_rate_limit`.
//! - [`pace_at`]: arithmetic mean of the speeds present in the window,
//!   converted to seconds per kilometer and capped at `max_pace`.

use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: f64 = 3600.0;
const METERS_PER_KM: f64 = 1000.0;

/// Configuration for the windowed estimators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct EstimatorConfig {
    /// Samples on each side of the centre index.
    /// Default: 5
    pub window_radius: u32,
    /// Absolute ceiling for vertical rate (m/h); larger values are sensor noise.
    /// Default: 2000.0
    pub vertical_rate_limit: f64,
    /// Windows spanning less time than this (hours) report a rate of 0.
    /// Default: 0.001 (3.6 s)
    pub min_time_span_hours: f64,
    /// Mean speeds below this (m/s) are reported as stationary.
    /// Default: 0.1
    pub min_moving_speed: f64,
    /// Slowest pace reported (s/km); slower values are clamped to it.
    /// Default: 1200.0 (20 min/km)
    pub max_pace: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_radius: 5,
            vertical_rate_limit: 2000.0,
            min_time_span_hours: 0.001,
            min_moving_speed: 0.1,
            max_pace: 1200.0,
        }
    }
}

/// Pace derived from a window of speed readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum Pace {
    /// Seconds per kilometer, capped at [`EstimatorConfig::max_pace`].
    Moving {
        #[serde(rename = "secondsPerKm")]
        seconds_per_km: f64,
    },
    /// Mean speed below [`EstimatorConfig::min_moving_speed`].
    Stationary,
}

impl Pace {
    pub fn seconds_per_km(&self) -> Option<f64> {
        match self {
            Pace::Moving { seconds_per_km } => Some(*seconds_per_km),
            Pace::Stationary => None,
        }
    }

    pub fn is_stationary(&self) -> bool {
        matches!(self, Pace::Stationary)
    }
}

/// Bounds `(lo, hi)` of the centered window around `index`.
pub(crate) fn window_bounds(len: usize, index: usize, radius: usize) -> (usize, usize) {
    let lo = index.saturating_sub(radius);
    let hi = index.saturating_add(radius).min(len.saturating_sub(1));
    (lo, hi)
}

/// Vertical rate (m/h) at `index` from parallel time/altitude slices.
///
/// Returns 0 when the window spans less than `min_time_span_hours`, including
/// single-sample windows and out-of-range indices.
///
/// # Example
/// ```
/// use activity_analytics::{vertical_rate_at, EstimatorConfig};
///
/// // climbing 0.1 m every second = 360 m/h
/// let times: Vec<f64> = (0..30).map(|t| t as f64).collect();
/// let altitudes: Vec<f64> = times.iter().map(|t| t * 0.1).collect();
/// let rate = vertical_rate_at(&times, &altitudes, 15, &EstimatorConfig::default());
/// assert!((rate - 360.0).abs() < 1e-6);
/// ```
pub fn vertical_rate_at(times: &[f64], altitudes: &[f64], index: usize, config: &EstimatorConfig) -> f64 {
    let len = times.len().min(altitudes.len());
    if index >= len {
        return 0.0;
    }

    let (lo, hi) = window_bounds(len, index, config.window_radius as usize);
    let span_hours = (times[hi] - times[lo]) / SECONDS_PER_HOUR;
    if span_hours < config.min_time_span_hours {
        return 0.0;
    }

    // sign of the limit is ignored; a NaN limit leaves the rate unclamped
    let limit = config.vertical_rate_limit.abs();
    let rate = (altitudes[hi] - altitudes[lo]) / span_hours;
    rate.max(-limit).min(limit)
}

/// Pace at `index` from the mean of the speeds present in the window.
///
/// `None` when no sample in the window carries a speed. Never infinite or NaN:
/// slow windows become [`Pace::Stationary`] and the rest are capped.
pub fn pace_at(speeds: &[Option<f64>], index: usize, config: &EstimatorConfig) -> Option<Pace> {
    if index >= speeds.len() {
        return None;
    }

    let (lo, hi) = window_bounds(speeds.len(), index, config.window_radius as usize);
    let (sum, count) = speeds[lo..=hi]
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }

    let mean_speed = sum / count as f64;
    if !(mean_speed >= config.min_moving_speed) {
        return Some(Pace::Stationary);
    }

    let seconds_per_km = (METERS_PER_KM / mean_speed).min(config.max_pace);
    Some(Pace::Moving { seconds_per_km })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(n: usize) -> Vec<f64> {
        (0..n).map(|t| t as f64).collect()
    }

    #[test]
    fn test_window_shrinks_at_edges() {
        assert_eq!(window_bounds(100, 0, 5), (0, 5));
        assert_eq!(window_bounds(100, 50, 5), (45, 55));
        assert_eq!(window_bounds(100, 98, 5), (93, 99));
        assert_eq!(window_bounds(1, 0, 5), (0, 0));
        assert_eq!(window_bounds(10, 5, usize::MAX), (0, 9));
    }

    #[test]
    fn test_vertical_rate_steady_climb() {
        let times = seconds(60);
        let altitudes: Vec<f64> = times.iter().map(|t| t * 0.1).collect();
        let config = EstimatorConfig::default();

        for i in [0, 3, 30, 59] {
            let rate = vertical_rate_at(&times, &altitudes, i, &config);
            assert!((rate - 360.0).abs() < 1e-6, "index {} rate {}", i, rate);
        }
    }

    #[test]
    fn test_vertical_rate_is_clamped() {
        let times = seconds(20);
        let up: Vec<f64> = times.iter().map(|t| t * 5.0).collect();
        let down: Vec<f64> = times.iter().map(|t| -t * 5.0).collect();
        let config = EstimatorConfig::default();

        assert_eq!(vertical_rate_at(&times, &up, 10, &config), 2000.0);
        assert_eq!(vertical_rate_at(&times, &down, 10, &config), -2000.0);
    }

    #[test]
    fn test_vertical_rate_odd_limits_do_not_panic() {
        let times = seconds(20);
        let up: Vec<f64> = times.iter().map(|t| t * 5.0).collect();

        let negative = EstimatorConfig { vertical_rate_limit: -100.0, ..Default::default() };
        assert_eq!(vertical_rate_at(&times, &up, 10, &negative), 100.0);

        let nan = EstimatorConfig { vertical_rate_limit: f64::NAN, ..Default::default() };
        let unclamped = vertical_rate_at(&times, &up, 10, &nan);
        assert!((unclamped - 18000.0).abs() < 1e-6);

        let huge_window = EstimatorConfig { window_radius: u32::MAX, ..Default::default() };
        assert_eq!(vertical_rate_at(&times, &up, 10, &huge_window), 2000.0);
    }

    #[test]
    fn test_vertical_rate_short_span_is_zero() {
        // 11 samples within 2 seconds: span below 3.6 s
        let times: Vec<f64> = (0..11).map(|i| i as f64 * 0.2).collect();
        let altitudes: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let config = EstimatorConfig::default();

        assert_eq!(vertical_rate_at(&times, &altitudes, 5, &config), 0.0);
        assert_eq!(vertical_rate_at(&[0.0], &[100.0], 0, &config), 0.0);
        assert_eq!(vertical_rate_at(&[], &[], 0, &config), 0.0);
    }

    #[test]
    fn test_pace_from_mean_speed() {
        let speeds = vec![Some(4.0); 20];
        let pace = pace_at(&speeds, 10, &EstimatorConfig::default()).unwrap();
        assert_eq!(pace, Pace::Moving { seconds_per_km: 250.0 });
    }

    #[test]
    fn test_pace_ignores_absent_speeds() {
        let speeds = vec![Some(2.0), None, None, Some(3.0), None];
        let pace = pace_at(&speeds, 2, &EstimatorConfig::default()).unwrap();
        assert_eq!(pace.seconds_per_km(), Some(400.0));

        assert_eq!(pace_at(&[None, None], 0, &EstimatorConfig::default()), None);
    }

    #[test]
    fn test_pace_is_capped() {
        let speeds = vec![Some(0.5); 11];
        let pace = pace_at(&speeds, 5, &EstimatorConfig::default()).unwrap();
        assert_eq!(pace.seconds_per_km(), Some(1200.0));
    }

    #[test]
    fn test_momentary_stop_is_stationary() {
        let mut speeds = vec![Some(3.0); 40];
        for s in speeds.iter_mut().skip(10).take(15) {
            *s = Some(0.0);
        }
        let config = EstimatorConfig::default();

        // fully inside the stop
        for i in 15..=19 {
            let pace = pace_at(&speeds, i, &config).unwrap();
            assert!(pace.is_stationary());
        }
        // no point ever yields a non-finite pace
        for i in 0..speeds.len() {
            if let Some(Pace::Moving { seconds_per_km }) = pace_at(&speeds, i, &config) {
                assert!(seconds_per_km.is_finite());
                assert!(seconds_per_km <= config.max_pace);
            }
        }
    }
}
