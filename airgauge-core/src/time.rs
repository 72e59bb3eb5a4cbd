//! Time handling for sample histories
//!
//! Timestamps are wall-clock milliseconds since the Unix epoch, supplied by
//! the scan collaborator. The engine never reads a clock itself: every
//! forecast takes `now` explicitly so identical inputs give identical outputs.

use crate::constants::time::MS_PER_HOUR;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Convert whole hours to milliseconds
pub const fn hours_to_ms(hours: u64) -> u64 {
    hours * MS_PER_HOUR
}

/// Convert a millisecond span to fractional hours
pub fn ms_to_hours(ms: u64) -> f64 {
    ms as f64 / MS_PER_HOUR as f64
}

/// Start of a trailing window ending at `now`
///
/// Saturates at zero for windows reaching back before the epoch.
pub fn window_start(now: Timestamp, window_ms: u64) -> Timestamp {
    now.saturating_sub(window_ms)
}

/// Whether `timestamp` falls inside the trailing window `[now - window_ms, now]`
pub fn in_trailing_window(timestamp: Timestamp, now: Timestamp, window_ms: u64) -> bool {
    timestamp >= window_start(now, window_ms) && timestamp <= now
}

/// Convert an event count over a span to a rate per millisecond
pub fn rate_per_ms(count: usize, span_ms: u64) -> f64 {
    if span_ms == 0 {
        return 0.0;
    }

    count as f64 / span_ms as f64
}
