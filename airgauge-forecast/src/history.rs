//! Per-AP Signal History
//!
//! ## Overview
//!
//! An [`ApHistory`] is everything the predictor knows about one access point:
//! its time-ordered RSSI readings plus how often the client connected to it
//! and dropped off again. Histories are supplied by the topology layer and
//! treated as read-only.
//!
//! ## Windows
//!
//! ```text
//! full history ─────────────────────────────────────────► now
//!   mean, σ, min, max, stability            │◄─ 1 hour ─►│
//!                                           recent window
//!                                           (regression input)
//! ```
//!
//! Long-run statistics come from the full history. Regression only looks at
//! the trailing window, so old behaviour does not drag the trend line.
//!
//! ## Stability
//!
//! | σ (dB)   | Category      |
//! |----------|---------------|
//! | < 2      | VeryStable    |
//! | < 4      | Stable        |
//! | < 7      | Moderate      |
//! | < 10     | Unstable      |
//! | ≥ 10     | VeryUnstable  |

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use airgauge_core::{
    constants::forecast::{
        MODERATE_STD_DEV_DB, STABLE_STD_DEV_DB, UNSTABLE_STD_DEV_DB, VERY_STABLE_STD_DEV_DB,
    },
    time::window_start,
    SampleStats, TemporalSample, Timestamp,
};

/// How much an AP's signal wanders over its history
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalStability {
    /// σ under 2 dB
    VeryStable,
    /// σ under 4 dB
    Stable,
    /// σ under 7 dB
    Moderate,
    /// σ under 10 dB
    Unstable,
    /// σ of 10 dB or more
    VeryUnstable,
}

impl SignalStability {
    /// Classify a standard deviation in dB
    pub fn from_std_dev(std_dev_db: f64) -> Self {
        if std_dev_db < VERY_STABLE_STD_DEV_DB {
            SignalStability::VeryStable
        } else if std_dev_db < STABLE_STD_DEV_DB {
            SignalStability::Stable
        } else if std_dev_db < MODERATE_STD_DEV_DB {
            SignalStability::Moderate
        } else if std_dev_db < UNSTABLE_STD_DEV_DB {
            SignalStability::Unstable
        } else {
            SignalStability::VeryUnstable
        }
    }

    /// Whether the signal swings enough to disturb a connection
    pub fn is_unstable(&self) -> bool {
        *self >= SignalStability::Unstable
    }
}

impl fmt::Display for SignalStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignalStability::VeryStable => "very stable",
            SignalStability::Stable => "stable",
            SignalStability::Moderate => "moderate",
            SignalStability::Unstable => "unstable",
            SignalStability::VeryUnstable => "very unstable",
        })
    }
}

/// Time-ordered RSSI readings and connection counters for one AP
///
/// Decoded histories are sorted the same way constructed ones are.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "ApHistoryFields")
)]
pub struct ApHistory {
    station_id: String,
    samples: Vec<TemporalSample>,
    connections: u32,
    disconnections: u32,
}

/// Wire form of [`ApHistory`], samples in any order
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ApHistoryFields {
    station_id: String,
    samples: Vec<TemporalSample>,
    connections: u32,
    disconnections: u32,
}

#[cfg(feature = "serde")]
impl From<ApHistoryFields> for ApHistory {
    fn from(fields: ApHistoryFields) -> Self {
        ApHistory::new(fields.station_id, fields.samples)
            .with_connection_counts(fields.connections, fields.disconnections)
    }
}

impl ApHistory {
    /// Build a history, sorting samples by timestamp
    ///
    /// The sort is stable, so readings sharing a timestamp keep their order.
    pub fn new(station_id: impl Into<String>, mut samples: Vec<TemporalSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self {
            station_id: station_id.into(),
            samples,
            connections: 0,
            disconnections: 0,
        }
    }

    /// Same history with connection counters attached
    pub fn with_connection_counts(mut self, connections: u32, disconnections: u32) -> Self {
        self.connections = connections;
        self.disconnections = disconnections;
        self
    }

    /// Station identifier (BSSID)
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Every reading, oldest first
    pub fn samples(&self) -> &[TemporalSample] {
        &self.samples
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the history holds no readings
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent reading
    pub fn latest(&self) -> Option<&TemporalSample> {
        self.samples.last()
    }

    /// Successful connections to this AP
    pub fn connections(&self) -> u32 {
        self.connections
    }

    /// Disconnections from this AP
    pub fn disconnections(&self) -> u32 {
        self.disconnections
    }

    /// Disconnections per connection; zero when never connected
    pub fn disconnect_ratio(&self) -> f64 {
        if self.connections == 0 {
            return 0.0;
        }
        self.disconnections as f64 / self.connections as f64
    }

    /// Statistics over the full history
    pub fn stats(&self) -> Option<SampleStats> {
        SampleStats::from_samples(&self.samples)
    }

    /// Readings in the trailing window `[now - window_ms, now]`
    pub fn recent(&self, now: Timestamp, window_ms: u64) -> &[TemporalSample] {
        let start = window_start(now, window_ms);
        let lo = self.samples.partition_point(|s| s.timestamp < start);
        let hi = self.samples.partition_point(|s| s.timestamp <= now);
        &self.samples[lo..hi.max(lo)]
    }

    /// Stability of the full history; an empty history counts as very stable
    pub fn stability(&self) -> SignalStability {
        let std_dev = self.stats().map_or(0.0, |s| s.std_dev);
        SignalStability::from_std_dev(std_dev)
    }
}
