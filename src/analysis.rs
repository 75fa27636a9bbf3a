//! One-call analysis of an activity, plus batch helpers.
//!
//! Every step is a pure function of the series and config, so callers can cache
//! an [`ActivityAnalysis`] keyed on their activity id and config and simply
//! recompute when either changes.

use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use crate::charts::{elevation_chart, pace_chart, ChartConfig, ElevationChartPoint, PaceChartPoint};
use crate::peaks::{detect_peaks, PeakConfig};
use crate::recovery::{analyze_recovery, RecoveryConfig, RecoveryRecord};
use crate::summary::{summarize, ActivitySummary};
use crate::zones::{tally_zones, ZoneTally};
use crate::SampleSeries;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for a full activity analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct AnalysisConfig {
    pub chart: ChartConfig,
    pub peaks: PeakConfig,
    pub recovery: RecoveryConfig,
}

/// Everything the activity detail view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ActivityAnalysis {
    pub summary: ActivitySummary,
    pub elevation_chart: Vec<ElevationChartPoint>,
    pub pace_chart: Vec<PaceChartPoint>,
    pub zones: ZoneTally,
    /// Hill peaks with at least one recovery measurement, in time order
    pub hill_recoveries: Vec<RecoveryRecord>,
}

/// Run every analysis over one series.
///
/// # Example
/// ```
/// use activity_analytics::{Sample, SampleSeries, AnalysisConfig, Zone, analyze_activity};
///
/// let samples: Vec<Sample> = (0..120)
///     .map(|t| {
///         Sample::new(t as f64)
///             .with_heart_rate(130)
///             .with_altitude(500.0)
///             .with_speed(3.0)
///             .with_zone(Zone::Zone2)
///     })
///     .collect();
/// let series = SampleSeries::new(samples).unwrap();
///
/// let analysis = analyze_activity(&series, &AnalysisConfig::default());
/// assert_eq!(analysis.zones.zone2, 119.0);
/// assert_eq!(analysis.elevation_chart.len(), 120);
/// assert!(analysis.hill_recoveries.is_empty());
/// ```
pub fn analyze_activity(series: &SampleSeries, config: &AnalysisConfig) -> ActivityAnalysis {
    let start = Instant::now();

    let valid = series.valid_subset();
    let peaks = detect_peaks(&valid, &config.peaks);
    let hill_recoveries = analyze_recovery(&valid, &peaks, &config.recovery);

    let analysis = ActivityAnalysis {
        summary: summarize(series),
        elevation_chart: elevation_chart(series, &config.chart),
        pace_chart: pace_chart(series, &config.chart),
        zones: tally_zones(series),
        hill_recoveries,
    };

    info!(
        "[Analysis] {} samples ({} valid): {} peaks, {} with recovery in {:?}",
        series.len(),
        valid.len(),
        peaks.len(),
        analysis.hill_recoveries.len(),
        start.elapsed()
    );

    analysis
}

/// Analyze several activities one after another, preserving input order.
pub fn analyze_batch(series: &[SampleSeries], config: &AnalysisConfig) -> Vec<ActivityAnalysis> {
    info!("[Analysis] Sequential batch of {} activities", series.len());
    series.iter().map(|s| analyze_activity(s, config)).collect()
}

/// Analyze several activities across the rayon thread pool, preserving input order.
#[cfg(feature = "parallel")]
pub fn analyze_batch_parallel(series: &[SampleSeries], config: &AnalysisConfig) -> Vec<ActivityAnalysis> {
    info!("[Analysis] Parallel batch of {} activities", series.len());
    series.par_iter().map(|s| analyze_activity(s, config)).collect()
}
