//! Chart-ready point sequences for the elevation and pace/heart-rate charts.
//!
//! Estimators run over the full series; only the resulting points are
//! downsampled, so the window radius always refers to recorded samples.

use serde::{Deserialize, Serialize};

use crate::downsample::downsample_indices;
use crate::estimators::{pace_at, vertical_rate_at, EstimatorConfig, Pace};
use crate::SampleSeries;

/// Configuration for chart output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ChartConfig {
    /// Maximum points per chart.
    /// Default: 500
    pub max_points: u32,
    /// Estimator windows and limits.
    pub estimators: EstimatorConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_points: 500,
            estimators: EstimatorConfig::default(),
        }
    }
}

/// One point of the elevation / vertical-speed chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ElevationChartPoint {
    pub elapsed_time: f64,
    pub distance: Option<f64>,
    /// Meters
    pub altitude: f64,
    /// Meters per hour, positive when climbing
    pub vertical_rate: f64,
}

/// One point of the pace / heart-rate chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PaceChartPoint {
    pub elapsed_time: f64,
    pub distance: Option<f64>,
    /// `None` when no speed was recorded near this point
    pub pace: Option<Pace>,
    pub heart_rate: Option<u8>,
}

/// Elevation chart over the samples that carry altitude.
pub fn elevation_chart(series: &SampleSeries, config: &ChartConfig) -> Vec<ElevationChartPoint> {
    let with_altitude: Vec<(f64, f64, Option<f64>)> = series
        .samples()
        .iter()
        .filter_map(|s| Some((s.elapsed_time, s.altitude?, s.distance)))
        .collect();

    let times: Vec<f64> = with_altitude.iter().map(|p| p.0).collect();
    let altitudes: Vec<f64> = with_altitude.iter().map(|p| p.1).collect();

    downsample_indices(with_altitude.len(), config.max_points as usize)
        .map(|i| {
            let (elapsed_time, altitude, distance) = with_altitude[i];
            ElevationChartPoint {
                elapsed_time,
                distance,
                altitude,
                vertical_rate: vertical_rate_at(&times, &altitudes, i, &config.estimators),
            }
        })
        .collect()
}

/// Pace / heart-rate chart over the samples that carry speed or heart rate.
///
/// The pace window is taken over the full series, ignoring absent speeds.
pub fn pace_chart(series: &SampleSeries, config: &ChartConfig) -> Vec<PaceChartPoint> {
    let samples = series.samples();
    let speeds: Vec<Option<f64>> = samples.iter().map(|s| s.speed).collect();

    let charted: Vec<usize> = samples
        .iter()
        .enumerate()
        .filter(|(_, s)| s.speed.is_some() || s.heart_rate.is_some())
        .map(|(i, _)| i)
        .collect();

    downsample_indices(charted.len(), config.max_points as usize)
        .map(|k| {
            let i = charted[k];
            let sample = &samples[i];
            PaceChartPoint {
                elapsed_time: sample.elapsed_time,
                distance: sample.distance,
                pace: pace_at(&speeds, i, &config.estimators),
                heart_rate: sample.heart_rate,
            }
        })
        .collect()
}
