//! Heart-rate zone labels and time-in-zone accumulation.
//!
//! Zone labels arrive on each [`Sample`](crate::Sample) already assigned; this
//! module only needs a classifier when the caller wants to (re)label a series
//! from raw heart rate, see [`SampleSeries::with_zones`](crate::SampleSeries::with_zones).
//!
//! ## Attribution
//!
//! The elapsed time between two consecutive samples is credited to the zone of
//! the earlier sample. The last sample closes no interval, so for a fully
//! labelled series the tally sums to `last.elapsed_time - first.elapsed_time`.
//! Intervals opened by an unlabelled sample are left out of every bucket.
//!
//! ## Example
//! ```rust
//! use activity_analytics::{Sample, SampleSeries, Zone, tally_zones};
//!
//! let series = SampleSeries::new(vec![
//!     Sample::new(0.0).with_zone(Zone::Zone2),
//!     Sample::new(30.0).with_zone(Zone::Zone3),
//!     Sample::new(45.0).with_zone(Zone::Zone3),
//! ]).unwrap();
//!
//! let tally = tally_zones(&series);
//! assert_eq!(tally.zone2, 30.0);
//! assert_eq!(tally.zone3, 15.0);
//! assert_eq!(tally.total(), 45.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::SampleSeries;

/// One of the five ordered heart-rate intensity zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum Zone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
}

impl Zone {
    /// All zones, lowest intensity first.
    pub const ALL: [Zone; 5] = [Zone::Zone1, Zone::Zone2, Zone::Zone3, Zone::Zone4, Zone::Zone5];

    /// Stable identifier used by the importer and the stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Zone1 => "zone1",
            Zone::Zone2 => "zone2",
            Zone::Zone3 => "zone3",
            Zone::Zone4 => "zone4",
            Zone::Zone5 => "zone5",
        }
    }

    /// Parse a stored zone identifier (`"zone1"`..`"zone5"`).
    pub fn from_id(id: &str) -> Option<Self> {
        Zone::ALL.iter().copied().find(|z| z.as_str() == id)
    }

    /// Zero-based position in [`Zone::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Assigns a zone to a heart-rate reading.
///
/// Implemented by [`HrZoneThresholds`] and by any `Fn(u8) -> Zone`, so tests and
/// callers can inject their own labelling without touching the analytics.
pub trait ZoneClassifier {
    fn classify(&self, heart_rate: u8) -> Zone;
}

impl<F> ZoneClassifier for F
where
    F: Fn(u8) -> Zone,
{
    fn classify(&self, heart_rate: u8) -> Zone {
        self(heart_rate)
    }
}

/// Inclusive upper bounds (bpm) for zones 1-4. Zone 5 is everything above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct HrZoneThresholds {
    /// Recovery. Default: 116
    pub zone1_max: u8,
    /// Aerobic. Default: 136
    pub zone2_max: u8,
    /// Tempo. Default: 155
    pub zone3_max: u8,
    /// Threshold. Default: 175
    pub zone4_max: u8,
}

impl HrZoneThresholds {
    /// Build thresholds, rejecting bounds that are not strictly ascending.
    pub fn new(zone1_max: u8, zone2_max: u8, zone3_max: u8, zone4_max: u8) -> Result<Self> {
        if !(zone1_max < zone2_max && zone2_max < zone3_max && zone3_max < zone4_max) {
            return Err(AnalyticsError::InvalidZoneThresholds {
                reason: format!(
                    "upper bounds must ascend, got {}/{}/{}/{}",
                    zone1_max, zone2_max, zone3_max, zone4_max
                ),
            });
        }
        Ok(Self { zone1_max, zone2_max, zone3_max, zone4_max })
    }
}

impl Default for HrZoneThresholds {
    fn default() -> Self {
        Self {
            zone1_max: 116,
            zone2_max: 136,
            zone3_max: 155,
            zone4_max: 175,
        }
    }
}

impl ZoneClassifier for HrZoneThresholds {
    fn classify(&self, heart_rate: u8) -> Zone {
        if heart_rate <= self.zone1_max {
            Zone::Zone1
        } else if heart_rate <= self.zone2_max {
            Zone::Zone2
        } else if heart_rate <= self.zone3_max {
            Zone::Zone3
        } else if heart_rate <= self.zone4_max {
            Zone::Zone4
        } else {
            Zone::Zone5
        }
    }
}

/// Accumulated seconds per zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ZoneTally {
    pub zone1: f64,
    pub zone2: f64,
    pub zone3: f64,
    pub zone4: f64,
    pub zone5: f64,
}

impl ZoneTally {
    /// Seconds accumulated in `zone`.
    pub fn get(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Zone1 => self.zone1,
            Zone::Zone2 => self.zone2,
            Zone::Zone3 => self.zone3,
            Zone::Zone4 => self.zone4,
            Zone::Zone5 => self.zone5,
        }
    }

    /// Credit `seconds` to `zone`.
    pub fn add(&mut self, zone: Zone, seconds: f64) {
        match zone {
            Zone::Zone1 => self.zone1 += seconds,
            Zone::Zone2 => self.zone2 += seconds,
            Zone::Zone3 => self.zone3 += seconds,
            Zone::Zone4 => self.zone4 += seconds,
            Zone::Zone5 => self.zone5 += seconds,
        }
    }

    /// Add every bucket of `other` into this tally.
    pub fn merge(&mut self, other: &ZoneTally) {
        for zone in Zone::ALL {
            self.add(zone, other.get(zone));
        }
    }

    /// Sum over all zones.
    pub fn total(&self) -> f64 {
        Zone::ALL.iter().map(|z| self.get(*z)).sum()
    }

    /// Share of the total per zone, in percent (0-100), ordered zone 1 to 5.
    /// All zeros when nothing has been tallied.
    pub fn percentages(&self) -> [f64; 5] {
        let total = self.total();
        let mut out = [0.0; 5];
        if total <= 0.0 {
            return out;
        }
        for zone in Zone::ALL {
            out[zone.index()] = self.get(zone) / total * 100.0;
        }
        out
    }
}

/// Zone time rolled up over several activities (e.g. one week or month).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ZoneSummary {
    pub activity_count: u32,
    pub zones: ZoneTally,
}

impl ZoneSummary {
    /// Combine per-activity tallies. The caller decides which activities
    /// belong to the period.
    pub fn from_tallies<'a, I>(tallies: I) -> Self
    where
        I: IntoIterator<Item = &'a ZoneTally>,
    {
        let mut summary = ZoneSummary::default();
        for tally in tallies {
            summary.activity_count += 1;
            summary.zones.merge(tally);
        }
        summary
    }
}

/// Accumulate time-in-zone for a series.
///
/// Each gap between consecutive samples goes to the zone of the earlier sample;
/// gaps that start on an unlabelled sample are dropped. Empty and single-sample
/// series produce an all-zero tally.
pub fn tally_zones(series: &SampleSeries) -> ZoneTally {
    let mut tally = ZoneTally::default();
    for pair in series.samples().windows(2) {
        if let Some(zone) = pair[0].zone {
            tally.add(zone, pair[1].elapsed_time - pair[0].elapsed_time);
        }
    }
    tally
}
