//! Network-level trend summary
//!
//! A [`NetworkTrend`] is the predictor's view of a whole network: a discrete
//! trend direction, the current health score, how much evidence backs them,
//! the per-AP histories and when APs were last seen disappearing.
//!
//! The direction is normally supplied by the topology layer. When it is not,
//! [`NetworkTrend::analyze`] derives it from the recent regression slopes of
//! the member APs:
//!
//! ```text
//! slope (dB/hour)   direction
//! ≥ +5              StronglyImproving
//! ≥ +1              Improving
//! > -1              Stable
//! > -5              Degrading
//! otherwise         StronglyDegrading
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use airgauge_core::{
    constants::forecast::{
        HEALTH_DELTA_MILD_PER_HOUR, HEALTH_DELTA_STRONG_PER_HOUR, MILD_TREND_DB_PER_HOUR,
        RECENT_WINDOW_MS, STRONG_TREND_DB_PER_HOUR,
    },
    log_debug, LinearFit, Timestamp,
};

use crate::history::ApHistory;

/// Discrete direction of recent signal movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrendDirection {
    /// Rising by 5 dB/hour or more
    StronglyImproving,
    /// Rising by at least 1 dB/hour
    Improving,
    /// Within ±1 dB/hour
    Stable,
    /// Falling by up to 5 dB/hour
    Degrading,
    /// Falling by 5 dB/hour or more
    StronglyDegrading,
    /// Not enough recent samples to tell
    InsufficientData,
}

impl TrendDirection {
    /// Classify a slope in dB per hour
    pub fn from_slope(db_per_hour: f64) -> Self {
        if !db_per_hour.is_finite() {
            return TrendDirection::InsufficientData;
        }

        if db_per_hour >= STRONG_TREND_DB_PER_HOUR {
            TrendDirection::StronglyImproving
        } else if db_per_hour >= MILD_TREND_DB_PER_HOUR {
            TrendDirection::Improving
        } else if db_per_hour > -MILD_TREND_DB_PER_HOUR {
            TrendDirection::Stable
        } else if db_per_hour > -STRONG_TREND_DB_PER_HOUR {
            TrendDirection::Degrading
        } else {
            TrendDirection::StronglyDegrading
        }
    }

    /// Health score change per hour implied by this direction
    pub fn health_delta_per_hour(&self) -> f64 {
        match self {
            TrendDirection::StronglyImproving => HEALTH_DELTA_STRONG_PER_HOUR,
            TrendDirection::Improving => HEALTH_DELTA_MILD_PER_HOUR,
            TrendDirection::Stable | TrendDirection::InsufficientData => 0.0,
            TrendDirection::Degrading => -HEALTH_DELTA_MILD_PER_HOUR,
            TrendDirection::StronglyDegrading => -HEALTH_DELTA_STRONG_PER_HOUR,
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrendDirection::StronglyImproving => "strongly improving",
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Degrading => "degrading",
            TrendDirection::StronglyDegrading => "strongly degrading",
            TrendDirection::InsufficientData => "insufficient data",
        })
    }
}

/// Trend summary of one network
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkTrend {
    /// Network identifier (usually the SSID)
    pub network_id: String,
    /// Direction of recent signal movement
    pub direction: TrendDirection,
    /// Current health score in [0, 100]
    pub health_score: f64,
    /// Total observations behind the summary
    pub observation_count: usize,
    /// Histories of the APs currently in the network
    pub ap_histories: Vec<ApHistory>,
    /// When APs were seen disappearing
    pub disappearances: Vec<Timestamp>,
}

impl NetworkTrend {
    /// Summary with a known direction and no per-AP detail
    pub fn new(
        network_id: impl Into<String>,
        direction: TrendDirection,
        health_score: f64,
        observation_count: usize,
    ) -> Self {
        Self {
            network_id: network_id.into(),
            direction,
            health_score,
            observation_count,
            ap_histories: Vec::new(),
            disappearances: Vec::new(),
        }
    }

    /// Same summary with per-AP histories attached
    pub fn with_ap_histories(mut self, histories: Vec<ApHistory>) -> Self {
        self.ap_histories = histories;
        self
    }

    /// Same summary with AP disappearance times attached
    pub fn with_disappearances(mut self, disappearances: Vec<Timestamp>) -> Self {
        self.disappearances = disappearances;
        self
    }

    /// Derive the direction from the APs' recent regression slopes
    ///
    /// Each AP with at least `min_samples` readings in the trailing hour
    /// contributes its slope, weighted by that reading count. Without any
    /// such AP the direction is [`TrendDirection::InsufficientData`]. The
    /// observation count is the total number of readings across histories.
    pub fn analyze(
        network_id: impl Into<String>,
        health_score: f64,
        ap_histories: Vec<ApHistory>,
        disappearances: Vec<Timestamp>,
        now: Timestamp,
        min_samples: usize,
    ) -> Self {
        let mut weighted_slope = 0.0;
        let mut weight = 0usize;
        for history in &ap_histories {
            let recent = history.recent(now, RECENT_WINDOW_MS);
            if recent.len() >= min_samples {
                weighted_slope += LinearFit::fit_samples(recent).slope_per_hour() * recent.len() as f64;
                weight += recent.len();
            }
        }

        let direction = if weight == 0 {
            TrendDirection::InsufficientData
        } else {
            TrendDirection::from_slope(weighted_slope / weight as f64)
        };

        let observation_count = ap_histories.iter().map(ApHistory::len).sum();
        let network_id = network_id.into();
        log_debug!(
            "network {}: {} over {} recent readings ({} total)",
            network_id,
            direction,
            weight,
            observation_count
        );

        Self {
            network_id,
            direction,
            health_score,
            observation_count,
            ap_histories,
            disappearances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airgauge_core::{constants::time::MS_PER_MINUTE, TemporalSample};
    use alloc::vec;

    const START: Timestamp = 1_704_067_200_000;

    /// `count` readings one minute apart changing by `step` dB per reading
    fn ramp(id: &str, count: u64, first: i32, step: i32) -> ApHistory {
        let samples = (0..count)
            .map(|i| TemporalSample::new(START + i * MS_PER_MINUTE, first + step * i as i32))
            .collect();
        ApHistory::new(id, samples)
    }

    #[test]
    fn slope_classification() {
        assert_eq!(TrendDirection::from_slope(6.0), TrendDirection::StronglyImproving);
        assert_eq!(TrendDirection::from_slope(5.0), TrendDirection::StronglyImproving);
        assert_eq!(TrendDirection::from_slope(1.0), TrendDirection::Improving);
        assert_eq!(TrendDirection::from_slope(0.5), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_slope(-1.0), TrendDirection::Degrading);
        assert_eq!(TrendDirection::from_slope(-5.0), TrendDirection::StronglyDegrading);
        assert_eq!(TrendDirection::from_slope(f64::NAN), TrendDirection::InsufficientData);
    }

    #[test]
    fn health_deltas() {
        assert_eq!(TrendDirection::StronglyImproving.health_delta_per_hour(), 5.0);
        assert_eq!(TrendDirection::Improving.health_delta_per_hour(), 2.0);
        assert_eq!(TrendDirection::Stable.health_delta_per_hour(), 0.0);
        assert_eq!(TrendDirection::Degrading.health_delta_per_hour(), -2.0);
        assert_eq!(TrendDirection::StronglyDegrading.health_delta_per_hour(), -5.0);
        assert_eq!(TrendDirection::InsufficientData.health_delta_per_hour(), 0.0);
    }

    #[test]
    fn analyze_rising_network() {
        // +1 dB per minute is +60 dB per hour
        let histories = vec![ramp("a", 30, -90, 1), ramp("b", 25, -80, 1)];
        let now = START + 30 * MS_PER_MINUTE;
        let trend = NetworkTrend::analyze("office", 70.0, histories, Vec::new(), now, 20);

        assert_eq!(trend.direction, TrendDirection::StronglyImproving);
        assert_eq!(trend.observation_count, 55);
        assert_eq!(trend.ap_histories.len(), 2);
    }

    #[test]
    fn analyze_without_enough_samples() {
        let histories = vec![ramp("a", 5, -70, -1), ramp("b", 10, -70, -1)];
        let now = START + 10 * MS_PER_MINUTE;
        let trend = NetworkTrend::analyze("cafe", 50.0, histories, Vec::new(), now, 20);
        assert_eq!(trend.direction, TrendDirection::InsufficientData);
        assert_eq!(trend.observation_count, 15);
    }

    #[test]
    fn flat_network_is_stable() {
        let histories = vec![ramp("a", 40, -65, 0)];
        let now = START + 40 * MS_PER_MINUTE;
        let trend = NetworkTrend::analyze("lab", 80.0, histories, Vec::new(), now, 20);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }
}
