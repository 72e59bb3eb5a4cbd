//! Constants for AirGauge
//!
//! Centralized, documented constants used by the mapper and the predictor.
//! Every threshold that shapes a classification lives here with its unit in
//! the name, so the tiers can be audited in one place.
//!
//! ## Organization
//!
//! - **RSSI**: signal domain, sentinels and quality-tier boundaries
//! - **Coverage**: grid, interpolation and dead-zone parameters
//! - **Forecast**: regression windows, confidence tiers and risk weights
//! - **Time**: unit conversions in milliseconds

/// Signal domain, sentinel values and quality-tier boundaries.
pub mod rssi;

/// Grid construction, interpolation and dead-zone parameters.
pub mod coverage;

/// Forecast windows, confidence tiers and risk weights.
pub mod forecast;

/// Time unit conversions.
pub mod time;

// Re-export commonly used constants for convenience
pub use rssi::{
    RSSI_MIN_DBM, RSSI_MAX_DBM, RSSI_SENTINEL_DBM,
    EXCELLENT_THRESHOLD_DBM, GOOD_THRESHOLD_DBM, FAIR_THRESHOLD_DBM, POOR_THRESHOLD_DBM,
};

pub use coverage::{
    DEFAULT_GRID_RESOLUTION, DEFAULT_IDW_POWER, COINCIDENT_DISTANCE, MIN_DEAD_ZONE_CELLS,
};

pub use forecast::{
    DEFAULT_MIN_SAMPLES, DEFAULT_MAX_HORIZON_MS, DEFAULT_CONFIDENCE_INTERVAL, RECENT_WINDOW_MS,
};

pub use time::{MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY};
