//! # Activity Analytics
//!
//! Training analytics for a single recorded outdoor activity.
//!
//! This library provides:
//! - Time-in-zone accumulation from per-sample heart-rate zones
//! - Chart-ready elevation / vertical-speed and pace / heart-rate curves
//! - Hill peak ("summit") detection with heart-rate recovery after each peak
//! - Whole-activity totals (duration, distance, climbing, heart rate)
//!
//! Everything operates on an immutable [`SampleSeries`] in SI units and is a
//! pure function of its inputs. Unit conversion for display is left to the
//! caller.
//!
//! ## Features
//!
//! - **`parallel`** - Analyze many activities at once with rayon
//! - **`ffi`** - Enable FFI bindings for mobile/desktop shells
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use activity_analytics::{
//!     Sample, SampleSeries, HrZoneThresholds, AnalysisConfig, analyze_activity,
//! };
//!
//! // 20 minutes at 1 Hz over a 100 m hill
//! let samples: Vec<Sample> = (0..1200)
//!     .map(|t| {
//!         let altitude = 100.0 - ((t as f64 - 600.0).abs() / 3.0).min(100.0);
//!         Sample::new(t as f64)
//!             .with_altitude(altitude)
//!             .with_heart_rate(if t <= 600 { 165 } else { 140 })
//!             .with_speed(2.5)
//!     })
//!     .collect();
//!
//! let series = SampleSeries::new(samples)
//!     .unwrap()
//!     .with_zones(&HrZoneThresholds::default());
//!
//! let analysis = analyze_activity(&series, &AnalysisConfig::default());
//! for record in &analysis.hill_recoveries {
//!     println!(
//!         "Summit at {:.0}s ({:.0} m), heart rate drop after 1 min: {:?}",
//!         record.peak.elapsed_time, record.peak.altitude, record.recovery_at_60s
//!     );
//! }
//! assert_eq!(analysis.hill_recoveries.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

// Input boundary errors
pub mod error;
pub use error::{AnalyticsError, Result};

// Sample data model and valid-subset filter
pub mod series;
pub use series::{Sample, SampleSeries, ValidSample};

// Zone labels, classifier capability and time-in-zone
pub mod zones;
pub use zones::{tally_zones, HrZoneThresholds, Zone, ZoneClassifier, ZoneSummary, ZoneTally};

// Fixed-stride reduction for charts
pub mod downsample;
pub use downsample::{downsample, downsample_indices, stride_for};

// Centered-window vertical rate and pace estimators
pub mod estimators;
pub use estimators::{pace_at, vertical_rate_at, EstimatorConfig, Pace};

// Chart point sequences
pub mod charts;
pub use charts::{elevation_chart, pace_chart, ChartConfig, ElevationChartPoint, PaceChartPoint};

// Hill peak detection
pub mod peaks;
pub use peaks::{detect_peaks, PeakCandidate, PeakConfig};

// Heart-rate recovery after peaks
pub mod recovery;
pub use recovery::{analyze_recovery, match_sample_near, RecoveryConfig, RecoveryRecord, RECOVERY_OFFSETS_SECS};

// Geographic utilities (distance, bounds)
pub mod geo_utils;

// Whole-activity totals
pub mod summary;
pub use summary::{summarize, ActivitySummary};

// One-call analysis and batches
pub mod analysis;
pub use analysis::{analyze_activity, analyze_batch, ActivityAnalysis, AnalysisConfig};
#[cfg(feature = "parallel")]
pub use analysis::analyze_batch_parallel;

#[cfg(feature = "ffi")]
mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("ActivityAnalyticsRust")
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use activity_analytics::GpsPoint;
/// let point = GpsPoint::new(46.5775, 7.9846); // Kleine Scheidegg
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box of an activity's positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from GPS points.
    pub fn from_points(points: &[GpsPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self { min_lat, max_lat, min_lng, max_lng })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GpsPoint {
        GpsPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

// ============================================================================
// Test Fixtures
// ============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// 20 minutes at 1 Hz: flat at 0 m for 5 min, up to 100 m over 5 min,
    /// back down over 5 min, flat for 5 min. Heart rate 130 until the climb,
    /// rising to 170 at the summit, falling linearly to 140 five minutes later.
    pub fn symmetric_hill_series() -> SampleSeries {
        let samples = (0..1200)
            .map(|t| {
                let tf = t as f64;
                let altitude = match t {
                    0..=299 => 0.0,
                    300..=600 => (tf - 300.0) / 3.0,
                    601..=900 => (900.0 - tf) / 3.0,
                    _ => 0.0,
                };
                let heart_rate = match t {
                    0..=299 => 130.0,
                    300..=600 => 130.0 + (tf - 300.0) * 40.0 / 300.0,
                    601..=900 => 170.0 - (tf - 600.0) * 30.0 / 300.0,
                    _ => 140.0,
                };
                Sample::new(tf)
                    .with_altitude(altitude)
                    .with_heart_rate(heart_rate.round() as u8)
                    .with_speed(2.0)
                    .with_distance(tf * 2.0)
            })
            .collect();

        SampleSeries::new(samples)
            .unwrap()
            .with_zones(&HrZoneThresholds::default())
    }

    /// `n` seconds at 1 Hz at constant altitude and heart rate.
    pub fn flat_series(n: usize, altitude: f64) -> SampleSeries {
        let samples = (0..n)
            .map(|t| {
                Sample::new(t as f64)
                    .with_altitude(altitude)
                    .with_heart_rate(140)
                    .with_speed(3.0)
                    .with_zone(Zone::Zone3)
            })
            .collect();
        SampleSeries::new(samples).unwrap()
    }

    /// Valid samples at a fixed interval with the given altitudes and 150 bpm.
    pub fn valid_from_altitudes(altitudes: &[f64], interval_secs: f64) -> Vec<ValidSample> {
        altitudes
            .iter()
            .enumerate()
            .map(|(i, &altitude)| ValidSample {
                elapsed_time: i as f64 * interval_secs,
                altitude,
                heart_rate: 150,
                distance: None,
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
