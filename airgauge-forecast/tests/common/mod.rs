//! Shared history generators for forecast integration tests
//!
//! Provides:
//! - A deterministic xorshift RNG so failures reproduce
//! - Evenly spaced AP histories ending at a chosen instant
//! - Networks assembled from steady APs

#![allow(dead_code)]

use airgauge_core::{constants::time::MS_PER_MINUTE, Dbm, TemporalSample, Timestamp};
use airgauge_forecast::ApHistory;

/// 2024-01-01T00:00:00Z
pub const EPOCH: Timestamp = 1_704_067_200_000;

/// Deterministic xorshift generator
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform integer in `[min, max]`
    pub fn gen_range(&mut self, min: i32, max: i32) -> i32 {
        let span = (max - min + 1) as u32;
        min + (self.next_u32() % span) as i32
    }
}

/// `count` readings one minute apart, the last one at `end`
///
/// Reading `i` is `rssi(i)`.
pub fn minute_history(
    id: &str,
    end: Timestamp,
    count: u64,
    rssi: impl Fn(u64) -> Dbm,
) -> ApHistory {
    let samples = (0..count)
        .map(|i| TemporalSample::new(end - (count - 1 - i) * MS_PER_MINUTE, rssi(i)))
        .collect();
    ApHistory::new(id, samples)
}

/// Flat history of 30 one-minute readings ending at `end`
pub fn steady(id: &str, end: Timestamp, rssi: Dbm) -> ApHistory {
    minute_history(id, end, 30, |_| rssi)
}

/// History jittering by up to `jitter` dB around `centre`
pub fn jittery(id: &str, end: Timestamp, count: u64, centre: Dbm, jitter: i32, seed: u32) -> ApHistory {
    let mut rng = TestRng::new(seed);
    let offsets: Vec<i32> = (0..count).map(|_| rng.gen_range(-jitter, jitter)).collect();
    minute_history(id, end, count, |i| centre + offsets[i as usize])
}
