//! Core vocabulary for the AirGauge analytics engine
//!
//! Holds everything the coverage mapper and the trend predictor share:
//! sample and bounds types, the quality and confidence tiers, the error type,
//! documented constants, summary statistics and the linear-regression core.
//!
//! Key constraints:
//! - Pure functions only, no I/O and no interior mutability
//! - RSSI is always integer dBm in [-120, 0] once it leaves this crate
//! - Numeric degeneracies resolve to documented fallbacks, never to errors
//!
//! ```
//! use airgauge_core::{LinearFit, SignalQuality};
//!
//! let fit = LinearFit::fit(&[(1_000, -70.0), (2_000, -68.0), (3_000, -66.0)]);
//! assert!(fit.slope > 0.0);
//!
//! assert_eq!(SignalQuality::from_rssi(-55), SignalQuality::Good);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod quality;
pub mod regression;
pub mod stats;
pub mod time;
pub mod types;
pub mod validation;

#[cfg(feature = "log")]
#[doc(hidden)]
pub use log as __log;

// Public API
pub use errors::{AnalysisError, AnalysisResult};
pub use quality::{ConfidenceLevel, CoverageGrade, SignalQuality};
pub use regression::LinearFit;
pub use stats::SampleStats;
pub use time::Timestamp;
pub use types::{
    ApObservation, AreaBounds, Dbm, Location, NormalizedPoint, SpatialSample, TemporalSample,
};

/// Crate version, for embedding in reports
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
