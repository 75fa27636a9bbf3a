//! # Hill Peak Detection
//!
//! Finds summits in the altitude trace of the valid subset (samples with both
//! altitude and heart rate).
//!
//! ## Algorithm
//! A single left-to-right scan. Sample `i` is accepted when, in order:
//! 1. **Local maximum**: no sample within `peak_window_secs` of it (either
//!    direction) is higher. Equal neighbours are fine, so every point of a
//!    flat top passes this test.
//! 2. **Prominence**: the lowest altitude reached within the next
//!    `prominence_window_secs` is at least `min_prominence` below it.
//! 3. **Spacing**: it is at least `min_spacing_secs` after the previously
//!    accepted peak. Accepted peaks are never revisited, so on a plateau the
//!    leftmost qualifying sample wins.
//!
//! Series with fewer than `min_valid_samples` samples are too sparse and yield
//! no peaks.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ValidSample;

/// Configuration for hill peak detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PeakConfig {
    /// Fewer valid samples than this and detection is skipped.
    /// Default: 20
    pub min_valid_samples: u32,
    /// Half-width (seconds) of the local-maximum neighbourhood.
    /// Default: 60.0
    pub peak_window_secs: f64,
    /// Forward horizon (seconds) for the prominence minimum.
    /// Default: 300.0
    pub prominence_window_secs: f64,
    /// Minimum drop (meters) after the summit.
    /// Default: 15.0
    pub min_prominence: f64,
    /// Minimum time (seconds) between accepted peaks.
    /// Default: 120.0
    pub min_spacing_secs: f64,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            min_valid_samples: 20,
            peak_window_secs: 60.0,
            prominence_window_secs: 300.0,
            min_prominence: 15.0,
            min_spacing_secs: 120.0,
        }
    }
}

/// A detected summit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PeakCandidate {
    /// Index into the valid subset
    pub index: u32,
    pub elapsed_time: f64,
    pub altitude: f64,
    pub heart_rate: u8,
    pub distance: Option<f64>,
}

/// True when no sample within `window_secs` of `index` is higher.
pub fn is_local_maximum(valid: &[ValidSample], index: usize, window_secs: f64) -> bool {
    let centre = &valid[index];

    let before = valid[..index]
        .iter()
        .rev()
        .take_while(|s| centre.elapsed_time - s.elapsed_time <= window_secs);
    let after = valid[index + 1..]
        .iter()
        .take_while(|s| s.elapsed_time - centre.elapsed_time <= window_secs);

    before.chain(after).all(|s| s.altitude <= centre.altitude)
}

/// Altitude of `index` minus the lowest altitude within the following
/// `window_secs` (the sample itself included, so never negative).
pub fn prominence_at(valid: &[ValidSample], index: usize, window_secs: f64) -> f64 {
    let centre = &valid[index];
    let lowest = valid[index..]
        .iter()
        .take_while(|s| s.elapsed_time - centre.elapsed_time <= window_secs)
        .map(|s| s.altitude)
        .fold(centre.altitude, f64::min);
    centre.altitude - lowest
}

/// Detect hill peaks, ordered by elapsed time.
///
/// # Example
/// ```
/// use activity_analytics::{Sample, SampleSeries, PeakConfig, detect_peaks};
///
/// // up 60 m over two minutes, then back down
/// let samples: Vec<Sample> = (0..=240)
///     .map(|t| {
///         let altitude = if t <= 120 { t as f64 * 0.5 } else { (240 - t) as f64 * 0.5 };
///         Sample::new(t as f64).with_altitude(altitude).with_heart_rate(150)
///     })
///     .collect();
/// let series = SampleSeries::new(samples).unwrap();
///
/// let peaks = detect_peaks(&series.valid_subset(), &PeakConfig::default());
/// assert_eq!(peaks.len(), 1);
/// assert_eq!(peaks[0].elapsed_time, 120.0);
/// ```
pub fn detect_peaks(valid: &[ValidSample], config: &PeakConfig) -> Vec<PeakCandidate> {
    if valid.len() < config.min_valid_samples as usize {
        debug!(
            "[Peaks] Only {} valid samples (need {}), skipping detection",
            valid.len(),
            config.min_valid_samples
        );
        return Vec::new();
    }

    let mut peaks: Vec<PeakCandidate> = Vec::new();

    for (i, sample) in valid.iter().enumerate() {
        if !is_local_maximum(valid, i, config.peak_window_secs) {
            continue;
        }
        if prominence_at(valid, i, config.prominence_window_secs) < config.min_prominence {
            continue;
        }
        if let Some(last) = peaks.last() {
            if sample.elapsed_time - last.elapsed_time < config.min_spacing_secs {
                continue;
            }
        }

        debug!(
            "[Peaks] Peak at {:.0}s: {:.1}m, {} bpm",
            sample.elapsed_time, sample.altitude, sample.heart_rate
        );
        peaks.push(PeakCandidate {
            index: i as u32,
            elapsed_time: sample.elapsed_time,
            altitude: sample.altitude,
            heart_rate: sample.heart_rate,
            distance: sample.distance,
        });
    }

    peaks
}
