//! Whole-activity totals shown in activity lists and headers.

use serde::{Deserialize, Serialize};

use crate::geo_utils::{track_bounds, track_length};
use crate::{Bounds, GpsPoint, SampleSeries};

/// Totals for one activity. All values SI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ActivitySummary {
    pub sample_count: u32,
    /// Seconds between first and last sample
    pub total_duration: f64,
    /// Meters. Largest recorded distance, else the length of the position track
    pub total_distance: Option<f64>,
    /// Sum of altitude increases between consecutive altitude readings
    pub elevation_gain: f64,
    /// Sum of altitude decreases, as a positive number
    pub elevation_loss: f64,
    pub min_altitude: Option<f64>,
    pub max_altitude: Option<f64>,
    pub avg_heart_rate: Option<f64>,
    pub max_heart_rate: Option<u8>,
    pub start_position: Option<GpsPoint>,
    pub bounds: Option<Bounds>,
}

/// Compute the activity totals.
pub fn summarize(series: &SampleSeries) -> ActivitySummary {
    let samples = series.samples();

    let mut elevation_gain = 0.0;
    let mut elevation_loss = 0.0;
    let mut min_altitude: Option<f64> = None;
    let mut max_altitude: Option<f64> = None;
    let mut last_altitude: Option<f64> = None;

    for alt in samples.iter().filter_map(|s| s.altitude) {
        min_altitude = Some(min_altitude.map_or(alt, |m| m.min(alt)));
        max_altitude = Some(max_altitude.map_or(alt, |m| m.max(alt)));
        if let Some(last) = last_altitude {
            let delta = alt - last;
            if delta > 0.0 {
                elevation_gain += delta;
            } else {
                elevation_loss -= delta;
            }
        }
        last_altitude = Some(alt);
    }

    let heart_rates: Vec<u8> = samples.iter().filter_map(|s| s.heart_rate).collect();
    let avg_heart_rate = if heart_rates.is_empty() {
        None
    } else {
        Some(heart_rates.iter().map(|&hr| f64::from(hr)).sum::<f64>() / heart_rates.len() as f64)
    };

    let positions: Vec<GpsPoint> = samples.iter().filter_map(|s| s.position).collect();

    let recorded_distance = samples
        .iter()
        .filter_map(|s| s.distance)
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |m| m.max(d))));
    let total_distance = recorded_distance.or_else(|| {
        if positions.iter().filter(|p| p.is_valid()).count() >= 2 {
            Some(track_length(&positions))
        } else {
            None
        }
    });

    ActivitySummary {
        sample_count: samples.len() as u32,
        total_duration: series.duration(),
        total_distance,
        elevation_gain,
        elevation_loss,
        min_altitude,
        max_altitude,
        avg_heart_rate,
        max_heart_rate: heart_rates.iter().copied().max(),
        start_position: positions.iter().copied().find(GpsPoint::is_valid),
        bounds: track_bounds(&positions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;

    #[test]
    fn test_elevation_totals() {
        let series = SampleSeries::new(vec![
            Sample::new(0.0).with_altitude(100.0),
            Sample::new(1.0).with_altitude(110.0),
            Sample::new(2.0),
            Sample::new(3.0).with_altitude(104.0),
            Sample::new(4.0).with_altitude(120.0),
        ])
        .unwrap();

        let summary = summarize(&series);
        assert_eq!(summary.elevation_gain, 26.0);
        assert_eq!(summary.elevation_loss, 6.0);
        assert_eq!(summary.min_altitude, Some(100.0));
        assert_eq!(summary.max_altitude, Some(120.0));
        assert_eq!(summary.total_duration, 4.0);
        assert_eq!(summary.sample_count, 5);
    }

    #[test]
    fn test_heart_rate_stats() {
        let series = SampleSeries::new(vec![
            Sample::new(0.0).with_heart_rate(120),
            Sample::new(1.0),
            Sample::new(2.0).with_heart_rate(150),
        ])
        .unwrap();

        let summary = summarize(&series);
        assert_eq!(summary.avg_heart_rate, Some(135.0));
        assert_eq!(summary.max_heart_rate, Some(150));
    }

    #[test]
    fn test_recorded_distance_wins_over_positions() {
        let series = SampleSeries::new(vec![
            Sample::new(0.0).with_distance(0.0).with_position(GpsPoint::new(46.5, 7.9)),
            Sample::new(1.0).with_distance(812.5).with_position(GpsPoint::new(46.6, 7.9)),
        ])
        .unwrap();
        assert_eq!(summarize(&series).total_distance, Some(812.5));
    }

    #[test]
    fn test_distance_from_positions() {
        let series = SampleSeries::new(vec![
            Sample::new(0.0).with_position(GpsPoint::new(46.500, 7.9)),
            Sample::new(1.0),
            Sample::new(2.0).with_position(GpsPoint::new(46.501, 7.9)),
        ])
        .unwrap();

        let summary = summarize(&series);
        let distance = summary.total_distance.unwrap();
        assert!((distance - 111.2).abs() < 0.5);
        assert_eq!(summary.start_position, Some(GpsPoint::new(46.500, 7.9)));
        assert_eq!(summary.bounds.unwrap().max_lat, 46.501);
    }

    #[test]
    fn test_empty_series() {
        let summary = summarize(&SampleSeries::default());
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.total_duration, 0.0);
        assert_eq!(summary.total_distance, None);
        assert_eq!(summary.min_altitude, None);
        assert_eq!(summary.avg_heart_rate, None);
        assert!(summary.bounds.is_none());
    }
}
