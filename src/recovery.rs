//! Heart-rate recovery after each detected hill peak.
//!
//! For every peak and each offset in [`RECOVERY_OFFSETS_SECS`], the sample
//! nearest to `peak time + offset` is looked up (forward from the peak only).
//! A match counts when it lies within `match_tolerance_secs` of the target, and
//! the recovery value is `peak heart rate - matched heart rate`. Peaks where no
//! offset matches are dropped.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::peaks::PeakCandidate;
use crate::ValidSample;

/// Offsets after the peak, in seconds, at which recovery is measured.
pub const RECOVERY_OFFSETS_SECS: [f64; 3] = [60.0, 120.0, 300.0];

/// Configuration for recovery matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RecoveryConfig {
    /// Largest allowed gap (seconds) between target time and matched sample.
    /// Default: 15.0
    pub match_tolerance_secs: f64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self { match_tolerance_secs: 15.0 }
    }
}

/// Recovery values for one peak. Positive means heart rate dropped.
/// `None` means no sample close enough to the offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RecoveryRecord {
    pub peak: PeakCandidate,
    #[serde(rename = "recoveryAt60s")]
    pub recovery_at_60s: Option<i32>,
    #[serde(rename = "recoveryAt120s")]
    pub recovery_at_120s: Option<i32>,
    #[serde(rename = "recoveryAt300s")]
    pub recovery_at_300s: Option<i32>,
}

impl RecoveryRecord {
    /// Number of offsets that produced a value.
    pub fn matched_offsets(&self) -> usize {
        [self.recovery_at_60s, self.recovery_at_120s, self.recovery_at_300s]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// Index of the sample nearest to `target_time`, scanning forward from `start`.
///
/// The scan stops once it is past the target and moving away from it. Ties go
/// to the earlier sample. `None` when the nearest sample is further than
/// `tolerance_secs` from the target.
pub fn match_sample_near(
    valid: &[ValidSample],
    start: usize,
    target_time: f64,
    tolerance_secs: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (j, sample) in valid.iter().enumerate().skip(start) {
        let gap = (sample.elapsed_time - target_time).abs();
        match best {
            Some((_, best_gap)) if gap >= best_gap => {
                if sample.elapsed_time > target_time {
                    break;
                }
            }
            _ => best = Some((j, gap)),
        }
    }

    best.filter(|&(_, gap)| gap <= tolerance_secs).map(|(j, _)| j)
}

fn recovery_at(valid: &[ValidSample], peak: &PeakCandidate, offset: f64, config: &RecoveryConfig) -> Option<i32> {
    let j = match_sample_near(
        valid,
        peak.index as usize,
        peak.elapsed_time + offset,
        config.match_tolerance_secs,
    )?;
    Some(i32::from(peak.heart_rate) - i32::from(valid[j].heart_rate))
}

/// Build recovery records for `peaks` detected on the same `valid` subset.
///
/// Output keeps the peak order; peaks without any matched offset are skipped.
pub fn analyze_recovery(
    valid: &[ValidSample],
    peaks: &[PeakCandidate],
    config: &RecoveryConfig,
) -> Vec<RecoveryRecord> {
    let [short, medium, long] = RECOVERY_OFFSETS_SECS;

    peaks
        .iter()
        .filter_map(|peak| {
            let record = RecoveryRecord {
                peak: *peak,
                recovery_at_60s: recovery_at(valid, peak, short, config),
                recovery_at_120s: recovery_at(valid, peak, medium, config),
                recovery_at_300s: recovery_at(valid, peak, long, config),
            };
            if record.matched_offsets() == 0 {
                debug!(
                    "[Recovery] Dropping peak at {:.0}s: no samples near any offset",
                    peak.elapsed_time
                );
                return None;
            }
            Some(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::symmetric_hill_series;
    use crate::peaks::{detect_peaks, PeakConfig};

    fn valid_at(times: &[f64], heart_rates: &[u8]) -> Vec<ValidSample> {
        times
            .iter()
            .zip(heart_rates)
            .map(|(&t, &hr)| ValidSample { elapsed_time: t, altitude: 0.0, heart_rate: hr, distance: None })
            .collect()
    }

    fn peak_at(valid: &[ValidSample], index: usize) -> PeakCandidate {
        PeakCandidate {
            index: index as u32,
            elapsed_time: valid[index].elapsed_time,
            altitude: valid[index].altitude,
            heart_rate: valid[index].heart_rate,
            distance: valid[index].distance,
        }
    }

    #[test]
    fn test_symmetric_hill_recovery() {
        let valid = symmetric_hill_series().valid_subset();
        let peaks = detect_peaks(&valid, &PeakConfig::default());
        let records = analyze_recovery(&valid, &peaks, &RecoveryConfig::default());

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.peak.elapsed_time, 600.0);
        assert_eq!(record.recovery_at_60s, Some(6));
        assert_eq!(record.recovery_at_120s, Some(12));
        assert_eq!(record.recovery_at_300s, Some(170 - 140));
    }

    #[test]
    fn test_nearest_sample_within_tolerance() {
        let valid = valid_at(&[0.0, 10.0, 50.0, 80.0, 200.0], &[160, 158, 150, 140, 120]);
        // target 60: 50 is 10 s away, 80 is 20 s away
        assert_eq!(match_sample_near(&valid, 0, 60.0, 15.0), Some(2));
        // target 120: 80 is 40 s away, 200 is 80 s away
        assert_eq!(match_sample_near(&valid, 0, 120.0, 15.0), None);
        // never looks before the start index
        assert_eq!(match_sample_near(&valid, 3, 10.0, 15.0), None);
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let exact = valid_at(&[0.0, 75.0], &[170, 158]);
        assert_eq!(match_sample_near(&exact, 0, 60.0, 15.0), Some(1));

        let beyond = valid_at(&[0.0, 75.5], &[170, 158]);
        assert_eq!(match_sample_near(&beyond, 0, 60.0, 15.0), None);

        let records = analyze_recovery(&exact, &[peak_at(&exact, 0)], &RecoveryConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].recovery_at_60s, Some(12));
        assert_eq!(records[0].recovery_at_120s, None);
    }

    #[test]
    fn test_equidistant_samples_prefer_earlier() {
        let valid = valid_at(&[0.0, 55.0, 65.0], &[170, 160, 150]);
        assert_eq!(match_sample_near(&valid, 0, 60.0, 15.0), Some(1));
    }

    #[test]
    fn test_recovery_is_signed() {
        // heart rate keeps rising after the summit
        let times: Vec<f64> = (0..=400).map(|t| t as f64).collect();
        let hrs: Vec<u8> = (0..=400).map(|t| 150 + (t / 20) as u8).collect();
        let valid = valid_at(&times, &hrs);

        let records = analyze_recovery(&valid, &[peak_at(&valid, 0)], &RecoveryConfig::default());
        assert_eq!(records[0].recovery_at_60s, Some(-3));
        assert_eq!(records[0].recovery_at_120s, Some(-6));
        assert_eq!(records[0].recovery_at_300s, Some(-15));
    }

    #[test]
    fn test_partial_record_near_end_of_series() {
        // series ends 130 s after the peak
        let times: Vec<f64> = (0..=130).map(|t| t as f64).collect();
        let hrs = vec![165u8; times.len()];
        let valid = valid_at(&times, &hrs);

        let records = analyze_recovery(&valid, &[peak_at(&valid, 0)], &RecoveryConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].recovery_at_60s, Some(0));
        assert_eq!(records[0].recovery_at_120s, Some(0));
        assert_eq!(records[0].recovery_at_300s, None);
        assert_eq!(records[0].matched_offsets(), 2);
    }

    #[test]
    fn test_peak_without_matches_is_dropped() {
        // recording stops 30 s after the first peak; second peak is fine
        let mut times: Vec<f64> = (0..=30).map(|t| t as f64).collect();
        times.extend((1000..=1400).map(|t| t as f64));
        let hrs = vec![150u8; times.len()];
        let valid = valid_at(&times, &hrs);

        let first = peak_at(&valid, 0);
        let second = peak_at(&valid, 31);
        let records = analyze_recovery(&valid, &[first, second], &RecoveryConfig::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].peak.elapsed_time, 1000.0);
    }
}
