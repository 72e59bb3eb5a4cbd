//! Connection Issue Risk
//!
//! ## Scoring
//!
//! The probability of connection trouble is a sum of three independent
//! factors, capped at 1.0:
//!
//! ```text
//! forecast RSSI   < -85 → 0.4    < -75 → 0.2    < -65 → 0.1
//! stability       VeryUnstable → 0.3   Unstable → 0.2   Moderate → 0.1
//! disconnects     disconnections / connections × 0.3
//! ```
//!
//! ## Tiers
//!
//! ```text
//! ≥ 0.7 High    ≥ 0.4 Medium    ≥ 0.2 Low    otherwise Minimal
//! ```
//!
//! Each factor that crosses its reporting threshold adds a reason: forecast
//! below -75 dBm, stability Unstable or worse, disconnect ratio above 0.2.

use alloc::string::String;
use core::fmt;

use airgauge_core::{
    constants::forecast::{
        DISCONNECT_RATIO_WEIGHT, FREQUENT_DISCONNECT_RATIO, MARGINAL_SIGNAL_DBM, RISK_HIGH,
        RISK_LOW, RISK_MEDIUM, RISK_WEIGHT_MARGINAL, RISK_WEIGHT_MODERATE, RISK_WEIGHT_UNSTABLE,
        RISK_WEIGHT_VERY_UNSTABLE, RISK_WEIGHT_VERY_WEAK, RISK_WEIGHT_WEAK,
        WEAK_SIGNAL_REASON_DBM,
    },
    constants::rssi::POOR_THRESHOLD_DBM,
    AnalysisResult, Dbm, Timestamp,
};
use heapless::Vec as HVec;

use crate::config::PredictorConfig;
use crate::history::{ApHistory, SignalStability};
use crate::signal::predict_ap_signal_strength;

/// Number of distinct issue reasons
pub const MAX_ISSUE_REASONS: usize = 3;

/// Issue probabilities are rounded to nine decimal places
const PROBABILITY_SCALE: f64 = 1e9;

/// Likelihood tier of connection trouble
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskLevel {
    /// Probability under 0.2
    Minimal,
    /// Probability from 0.2
    Low,
    /// Probability from 0.4
    Medium,
    /// Probability from 0.7
    High,
}

impl RiskLevel {
    /// Tier for an issue probability
    pub fn from_probability(probability: f64) -> Self {
        if probability >= RISK_HIGH {
            RiskLevel::High
        } else if probability >= RISK_MEDIUM {
            RiskLevel::Medium
        } else if probability >= RISK_LOW {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Minimal => "minimal",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

/// A factor that pushed the risk up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueReason {
    /// Forecast signal below -75 dBm
    WeakSignal,
    /// Signal history is unstable or very unstable
    UnstableSignal,
    /// More than one disconnect per five connections
    FrequentDisconnects,
}

impl IssueReason {
    /// Human-readable explanation
    pub fn description(&self) -> &'static str {
        match self {
            IssueReason::WeakSignal => "weak signal strength predicted",
            IssueReason::UnstableSignal => "signal has been unstable",
            IssueReason::FrequentDisconnects => "frequent disconnections in history",
        }
    }
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Risk of connection trouble with one AP
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IssuePrediction {
    /// Station the prediction is for
    pub station_id: String,
    /// Instant the prediction refers to
    pub target_time: Timestamp,
    /// Issue probability in [0, 1]
    pub probability: f64,
    /// Tier of `probability`
    pub risk: RiskLevel,
    /// Factors that crossed their reporting threshold
    pub reasons: HVec<IssueReason, MAX_ISSUE_REASONS>,
    /// Forecast RSSI the band factor was taken from (dBm)
    pub predicted_rssi: Dbm,
    /// Stability of the full history
    pub stability: SignalStability,
    /// Disconnections per connection
    pub disconnect_ratio: f64,
}

impl IssuePrediction {
    /// Whether `reason` contributed
    pub fn has_reason(&self, reason: IssueReason) -> bool {
        self.reasons.contains(&reason)
    }
}

fn signal_weight(rssi: Dbm) -> f64 {
    if rssi < POOR_THRESHOLD_DBM {
        RISK_WEIGHT_VERY_WEAK
    } else if rssi < WEAK_SIGNAL_REASON_DBM {
        RISK_WEIGHT_WEAK
    } else if rssi < MARGINAL_SIGNAL_DBM {
        RISK_WEIGHT_MARGINAL
    } else {
        0.0
    }
}

fn stability_weight(stability: SignalStability) -> f64 {
    match stability {
        SignalStability::VeryUnstable => RISK_WEIGHT_VERY_UNSTABLE,
        SignalStability::Unstable => RISK_WEIGHT_UNSTABLE,
        SignalStability::Moderate => RISK_WEIGHT_MODERATE,
        SignalStability::Stable | SignalStability::VeryStable => 0.0,
    }
}

/// Estimate the risk of connection trouble `horizon_ms` after `now`
///
/// Fails on an empty history or a horizon outside `(0, max_horizon_ms]`.
pub fn predict_connection_issues(
    history: &ApHistory,
    horizon_ms: u64,
    now: Timestamp,
    config: &PredictorConfig,
) -> AnalysisResult<IssuePrediction> {
    let prediction = predict_ap_signal_strength(history, horizon_ms, now, config)?;
    let stability = history.stability();
    let disconnect_ratio = history.disconnect_ratio();

    let raw = signal_weight(prediction.predicted_rssi)
        + stability_weight(stability)
        + disconnect_ratio * DISCONNECT_RATIO_WEIGHT;
    // Snap away summation error so sums like 0.1 + 0.1 land on their tier
    let probability = (libm::round(raw * PROBABILITY_SCALE) / PROBABILITY_SCALE).min(1.0);

    let mut reasons = HVec::new();
    if prediction.predicted_rssi < WEAK_SIGNAL_REASON_DBM {
        reasons.push(IssueReason::WeakSignal).ok();
    }
    if stability.is_unstable() {
        reasons.push(IssueReason::UnstableSignal).ok();
    }
    if disconnect_ratio > FREQUENT_DISCONNECT_RATIO {
        reasons.push(IssueReason::FrequentDisconnects).ok();
    }

    Ok(IssuePrediction {
        station_id: prediction.station_id,
        target_time: prediction.target_time,
        probability,
        risk: RiskLevel::from_probability(probability),
        reasons,
        predicted_rssi: prediction.predicted_rssi,
        stability,
        disconnect_ratio,
    })
}
