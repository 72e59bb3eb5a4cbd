//! Time-Related Constants
//!
//! All timestamps in AirGauge are milliseconds since the Unix epoch, so every
//! conversion factor here is expressed in milliseconds.

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: u64 = 24;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per day.
pub const MS_PER_DAY: u64 = MS_PER_HOUR * HOURS_PER_DAY;
