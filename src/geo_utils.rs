//! # Geographic Utilities
//!
//! Position helpers for the activity summary: track length when the device
//! recorded no cumulative distance, and the bounding box handed to the map.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance`] | Great-circle distance between two positions |
//! | [`track_length`] | Length of the valid positions of a track, in meters |
//! | [`track_bounds`] | Bounding box of the valid positions |
//!
//! All positions are WGS84 degrees. Points failing [`GpsPoint::is_valid`]
//! (NaN, out of range) are skipped rather than poisoning the totals.
//!
//! ## Example
//!
//! ```rust
//! use activity_analytics::{GpsPoint, geo_utils};
//!
//! let track = vec![
//!     GpsPoint::new(46.5000, 7.9000),
//!     GpsPoint::new(46.5010, 7.9000),
//!     GpsPoint::new(46.5020, 7.9000),
//! ];
//!
//! let length = geo_utils::track_length(&track);
//! assert!((length - 222.4).abs() < 1.0);
//! ```

use geo::{Distance, Haversine, Point};

use crate::{Bounds, GpsPoint};

/// Great-circle distance in meters (spherical Earth, radius 6,371 km).
#[inline]
pub fn haversine_distance(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Sum of haversine distances between consecutive valid positions.
/// Fewer than two valid positions give 0.
pub fn track_length(points: &[GpsPoint]) -> f64 {
    let mut length = 0.0;
    let mut previous: Option<&GpsPoint> = None;
    for p in points.iter().filter(|p| p.is_valid()) {
        if let Some(prev) = previous {
            length += haversine_distance(prev, p);
        }
        previous = Some(p);
    }
    length
}

/// Bounding box of the valid positions, `None` when there are none.
pub fn track_bounds(points: &[GpsPoint]) -> Option<Bounds> {
    let valid: Vec<GpsPoint> = points.iter().copied().filter(GpsPoint::is_valid).collect();
    Bounds::from_points(&valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_haversine_distance_same_point() {
        let p = GpsPoint::new(46.5, 7.9);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_distance_known_value() {
        // one degree of latitude is ~111.2 km
        let a = GpsPoint::new(45.0, 7.0);
        let b = GpsPoint::new(46.0, 7.0);
        assert!(approx_eq(haversine_distance(&a, &b), 111_195.0, 100.0));
    }

    #[test]
    fn test_track_length_short_tracks() {
        assert_eq!(track_length(&[]), 0.0);
        assert_eq!(track_length(&[GpsPoint::new(46.5, 7.9)]), 0.0);
    }

    #[test]
    fn test_track_length_skips_invalid_points() {
        let clean = vec![GpsPoint::new(46.500, 7.9), GpsPoint::new(46.501, 7.9)];
        let noisy = vec![
            GpsPoint::new(46.500, 7.9),
            GpsPoint::new(f64::NAN, 7.9),
            GpsPoint::new(95.0, 7.9),
            GpsPoint::new(46.501, 7.9),
        ];
        assert_eq!(track_length(&clean), track_length(&noisy));
        assert!(track_length(&noisy).is_finite());
    }

    #[test]
    fn test_track_bounds() {
        let track = vec![
            GpsPoint::new(46.50, 7.95),
            GpsPoint::new(46.52, 7.90),
            GpsPoint::new(f64::NAN, 0.0),
            GpsPoint::new(46.51, 7.92),
        ];
        let bounds = track_bounds(&track).unwrap();
        assert_eq!(bounds.min_lat, 46.50);
        assert_eq!(bounds.max_lat, 46.52);
        assert_eq!(bounds.min_lng, 7.90);
        assert_eq!(bounds.max_lng, 7.95);

        assert!(track_bounds(&[]).is_none());
    }
}
