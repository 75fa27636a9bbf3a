//! FFI exports for the mobile/desktop shell.

use log::info;
use rayon::prelude::*;

use crate::{
    analyze_activity, init_logging, ActivityAnalysis, AnalysisConfig, AnalyticsError,
    HrZoneThresholds, Sample, SampleSeries, Zone, ZoneClassifier, ZoneSummary, ZoneTally,
};

/// Samples of one activity, tagged with the shell's id.
#[derive(Debug, Clone, uniffi::Record)]
pub struct ActivityTrack {
    pub activity_id: String,
    pub samples: Vec<Sample>,
}

/// Per-activity batch result. Exactly one of `analysis` / `error` is set.
#[derive(Debug, Clone, uniffi::Record)]
pub struct TrackAnalysis {
    pub activity_id: String,
    pub analysis: Option<ActivityAnalysis>,
    pub error: Option<String>,
}

/// Analyze one activity.
#[uniffi::export]
pub fn analyze_samples(
    samples: Vec<Sample>,
    config: AnalysisConfig,
) -> Result<ActivityAnalysis, AnalyticsError> {
    init_logging();
    info!("[ActivityAnalyticsRust] analyze_samples called with {} samples", samples.len());
    let series = SampleSeries::new(samples)?;
    Ok(analyze_activity(&series, &config))
}

/// Analyze many activities in parallel. Invalid tracks report their error
/// instead of failing the whole batch.
#[uniffi::export]
pub fn analyze_samples_batch(tracks: Vec<ActivityTrack>, config: AnalysisConfig) -> Vec<TrackAnalysis> {
    init_logging();
    info!("[ActivityAnalyticsRust] analyze_samples_batch called with {} tracks", tracks.len());

    let start = std::time::Instant::now();
    let results: Vec<TrackAnalysis> = tracks
        .into_par_iter()
        .map(|track| match SampleSeries::new(track.samples) {
            Ok(series) => TrackAnalysis {
                activity_id: track.activity_id,
                analysis: Some(analyze_activity(&series, &config)),
                error: None,
            },
            Err(e) => TrackAnalysis {
                activity_id: track.activity_id,
                analysis: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    info!("[ActivityAnalyticsRust] Batch of {} analyzed in {:?}", results.len(), start.elapsed());
    results
}

/// Zone for a heart-rate reading.
#[uniffi::export]
pub fn classify_heart_rate(heart_rate: u8, thresholds: HrZoneThresholds) -> Zone {
    thresholds.classify(heart_rate)
}

/// Validate user-entered zone bounds.
#[uniffi::export]
pub fn create_zone_thresholds(
    zone1_max: u8,
    zone2_max: u8,
    zone3_max: u8,
    zone4_max: u8,
) -> Result<HrZoneThresholds, AnalyticsError> {
    HrZoneThresholds::new(zone1_max, zone2_max, zone3_max, zone4_max)
}

/// Roll up per-activity zone tallies for a week or month.
#[uniffi::export]
pub fn summarize_zone_tallies(tallies: Vec<ZoneTally>) -> ZoneSummary {
    ZoneSummary::from_tallies(&tallies)
}

/// Get default configuration.
#[uniffi::export]
pub fn default_analysis_config() -> AnalysisConfig {
    init_logging();
    AnalysisConfig::default()
}
