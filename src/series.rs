//! Sample data model and the valid-subset filter.
//!
//! A [`SampleSeries`] is the single input to every analysis in this crate. It is
//! validated once at construction (finite, non-decreasing elapsed time and
//! finite altitude, speed and distance readings) and is
//! immutable afterwards; relabelling zones produces a new series.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::zones::{Zone, ZoneClassifier};
use crate::GpsPoint;

/// One recorded instant of an activity. All values are SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Sample {
    /// Seconds since the start of the activity (ordering key)
    pub elapsed_time: f64,
    /// Beats per minute
    pub heart_rate: Option<u8>,
    /// Meters
    pub altitude: Option<f64>,
    /// Meters per second
    pub speed: Option<f64>,
    /// Cumulative meters, non-decreasing when present
    pub distance: Option<f64>,
    /// Degrees Celsius
    pub temperature: Option<f64>,
    pub position: Option<GpsPoint>,
    /// Intensity zone assigned by the importer
    pub zone: Option<Zone>,
}

impl Sample {
    /// A sample at `elapsed_time` with every measurement absent.
    pub fn new(elapsed_time: f64) -> Self {
        Self {
            elapsed_time,
            heart_rate: None,
            altitude: None,
            speed: None,
            distance: None,
            temperature: None,
            position: None,
            zone: None,
        }
    }

    pub fn with_heart_rate(mut self, heart_rate: u8) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_position(mut self, position: GpsPoint) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }
}

/// A sample that has both altitude and heart rate, as used by hill-peak and
/// recovery analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ValidSample {
    pub elapsed_time: f64,
    pub altitude: f64,
    pub heart_rate: u8,
    pub distance: Option<f64>,
}

/// Time-ordered samples of a single activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Build a series, rejecting non-finite or decreasing elapsed times and
    /// non-finite altitude, speed or distance readings. Equal consecutive times
    /// are allowed. Invalid positions are kept and skipped by the geo helpers.
    ///
    /// # Example
    /// ```
    /// use activity_analytics::{Sample, SampleSeries, AnalyticsError};
    ///
    /// let ok = SampleSeries::new(vec![Sample::new(0.0), Sample::new(0.0), Sample::new(1.0)]);
    /// assert!(ok.is_ok());
    ///
    /// let bad = SampleSeries::new(vec![Sample::new(2.0), Sample::new(1.0)]);
    /// assert!(matches!(bad, Err(AnalyticsError::NonMonotonicTime { index: 1, .. })));
    /// ```
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        let mut previous: Option<f64> = None;
        for (i, sample) in samples.iter().enumerate() {
            let t = sample.elapsed_time;
            if !t.is_finite() {
                return Err(AnalyticsError::NonFiniteTime { index: i as u32 });
            }
            let measurements = [
                ("altitude", sample.altitude),
                ("speed", sample.speed),
                ("distance", sample.distance),
            ];
            if let Some((field, _)) = measurements
                .iter()
                .find(|(_, value)| value.is_some_and(|v| !v.is_finite()))
            {
                return Err(AnalyticsError::NonFiniteMeasurement {
                    index: i as u32,
                    field: field.to_string(),
                });
            }
            if let Some(prev) = previous {
                if t < prev {
                    return Err(AnalyticsError::NonMonotonicTime {
                        index: i as u32,
                        previous: prev,
                        current: t,
                    });
                }
            }
            previous = Some(t);
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time between the first and last sample, 0 for fewer than two samples.
    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.elapsed_time - first.elapsed_time,
            _ => 0.0,
        }
    }

    /// Samples carrying both altitude and heart rate, re-indexed from zero.
    pub fn valid_subset(&self) -> Vec<ValidSample> {
        self.samples
            .iter()
            .filter_map(|s| {
                Some(ValidSample {
                    elapsed_time: s.elapsed_time,
                    altitude: s.altitude?,
                    heart_rate: s.heart_rate?,
                    distance: s.distance,
                })
            })
            .collect()
    }

    /// A copy of this series with zones relabelled from heart rate.
    /// Samples without heart rate lose their zone.
    pub fn with_zones<C: ZoneClassifier>(&self, classifier: &C) -> Self {
        let samples = self
            .samples
            .iter()
            .map(|s| Sample {
                zone: s.heart_rate.map(|hr| classifier.classify(hr)),
                ..s.clone()
            })
            .collect();
        Self { samples }
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for SampleSeries {
    type Error = AnalyticsError;

    fn try_from(samples: Vec<Sample>) -> Result<Self> {
        Self::new(samples)
    }
}
