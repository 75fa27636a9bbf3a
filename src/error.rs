//! Errors raised at the input boundary.
//!
//! The analytics themselves never fail: sparse or degenerate input produces
//! empty or sentinel results. Only constructors that accept data from the
//! importer (or user-supplied zone thresholds) validate and can reject.

use thiserror::Error;

/// Input contract violations detected when building a series or classifier.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "ffi", derive(uniffi::Error))]
pub enum AnalyticsError {
    /// A sample carries a NaN or infinite elapsed time.
    #[error("sample {index} has a non-finite elapsed time")]
    NonFiniteTime { index: u32 },

    /// Elapsed time went backwards between two consecutive samples.
    #[error("elapsed time decreases at sample {index}: {previous}s -> {current}s")]
    NonMonotonicTime { index: u32, previous: f64, current: f64 },

    /// Altitude, speed or distance is present but NaN or infinite.
    #[error("sample {index} has a non-finite {field}")]
    NonFiniteMeasurement { index: u32, field: String },

    /// Zone upper bounds are not strictly ascending.
    #[error("invalid zone thresholds: {reason}")]
    InvalidZoneThresholds { reason: String },
}

/// Result alias used by the fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
