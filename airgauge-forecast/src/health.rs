//! Network health forecasting
//!
//! The health score moves by a fixed amount per hour for each trend
//! direction (+5, +2, 0, -2, -5) and is clamped to [0, 100]. Confidence
//! depends only on how many observations back the trend: 500 or more is
//! High, 100 or more Medium.

use alloc::string::String;

use airgauge_core::{
    constants::forecast::HEALTH_SCORE_MAX, time::ms_to_hours, validation, AnalysisResult,
    ConfidenceLevel, Timestamp,
};

use crate::config::PredictorConfig;
use crate::trend::{NetworkTrend, TrendDirection};

/// Forecast health score of a network
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthForecast {
    /// Network the forecast is for
    pub network_id: String,
    /// Instant the forecast refers to
    pub target_time: Timestamp,
    /// Score now, in [0, 100]
    pub current_score: f64,
    /// Forecast score, in [0, 100]
    pub predicted_score: f64,
    /// Direction that drove the forecast
    pub direction: TrendDirection,
    /// Discrete confidence tier
    pub confidence: ConfidenceLevel,
}

impl HealthForecast {
    /// Expected change in score
    pub fn change(&self) -> f64 {
        self.predicted_score - self.current_score
    }
}

/// Forecast a network's health score `horizon_ms` after `now`
///
/// Fails on a horizon outside `(0, max_horizon_ms]` or a current score
/// outside [0, 100].
pub fn predict_network_health(
    trend: &NetworkTrend,
    horizon_ms: u64,
    now: Timestamp,
    config: &PredictorConfig,
) -> AnalysisResult<HealthForecast> {
    validation::check_horizon(horizon_ms, config.max_horizon_ms)?;
    validation::check_range(trend.health_score, 0.0, HEALTH_SCORE_MAX)?;

    let delta = trend.direction.health_delta_per_hour() * ms_to_hours(horizon_ms);
    let predicted_score = (trend.health_score + delta).clamp(0.0, HEALTH_SCORE_MAX);

    Ok(HealthForecast {
        network_id: trend.network_id.clone(),
        target_time: now.saturating_add(horizon_ms),
        current_score: trend.health_score,
        predicted_score,
        direction: trend.direction,
        confidence: ConfidenceLevel::from_observation_count(trend.observation_count),
    })
}
