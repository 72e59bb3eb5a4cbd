//! Error Types for Contract Violations
//!
//! ## Design Philosophy
//!
//! AirGauge separates two kinds of trouble:
//!
//! 1. **Contract violations** are the caller's fault: an empty sample set, a
//!    non-positive grid resolution, bounds with no area, a forecast horizon
//!    outside the configured range. These are rejected up front with an
//!    [`AnalysisError`] and no partial result.
//!
//! 2. **Numeric degeneracies** are properties of the data: every sample at the
//!    same instant, no sample with a location, weights summing to zero. These
//!    never surface as errors. Each has a deterministic fallback (sentinel
//!    RSSI, zero slope, a baseline-centred low-confidence forecast) and the
//!    confidence tier of the result is how the degradation is reported.
//!
//! Errors stay small and `Copy`: only inline numbers and `&'static str`
//! reasons, so they can be returned from hot loops and compared in tests.
//!
//! ## Error Handling Strategy
//!
//! ```
//! use airgauge_core::{AnalysisError, AreaBounds};
//!
//! match AreaBounds::new(0.0, 0.0, 0.0, 10.0) {
//!     Ok(_) => unreachable!(),
//!     Err(AnalysisError::DegenerateBounds { .. }) => {
//!         // Survey area has no width - ask the caller for a real floor plan
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Contract violations reported by the mapper and the predictor
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// An operation that needs samples was handed none
    #[error("Sample collection is empty")]
    EmptySamples,

    /// Grid cell size must be positive, finite, and give a grid whose cell
    /// count fits in `usize`
    #[error("Grid resolution {resolution} must be positive, finite and coarse enough for the area")]
    InvalidResolution {
        /// The rejected resolution
        resolution: f64,
    },

    /// Area bounds must enclose a non-empty rectangle
    #[error("Bounds ({min_x}, {min_y})-({max_x}, {max_y}) do not enclose an area")]
    DegenerateBounds {
        /// Left edge
        min_x: f64,
        /// Bottom edge
        min_y: f64,
        /// Right edge
        max_x: f64,
        /// Top edge
        max_y: f64,
    },

    /// Forecast horizon is zero or longer than the configured maximum
    #[error("Horizon {horizon_ms}ms outside (0, {max_ms}]ms")]
    InvalidHorizon {
        /// Requested horizon in milliseconds
        horizon_ms: u64,
        /// Configured maximum horizon in milliseconds
        max_ms: u64,
    },

    /// Look-ahead window for timing recommendations must be at least one hour
    #[error("Look-ahead of {hours}h must be at least one hour")]
    InvalidLookAhead {
        /// Requested look-ahead in hours
        hours: u32,
    },

    /// A numeric input lies outside its documented domain
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected value
        value: f64,
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },

    /// A configuration parameter violates its invariant
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: &'static str,
    },
}
