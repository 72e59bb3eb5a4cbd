//! Network Coverage Forecasting
//!
//! ## Overview
//!
//! Combines two extrapolations into one coverage grade:
//!
//! 1. **AP count**: APs that vanished in the trailing hour give a loss rate
//!    per millisecond, applied linearly over the horizon:
//!    ```text
//!    predicted = max(current - rate · horizon, 1)
//!    retention = predicted / current
//!    ```
//!    The extrapolation does not saturate, so long horizons on a network
//!    that is shedding APs bottom out at a single AP.
//!
//! 2. **Signal**: every AP with readings gets its own signal forecast; the
//!    mean of those estimates is the network's future average signal. If no
//!    AP can be forecast the average falls back to -70 dBm.
//!
//! ## Grading
//!
//! | Grade     | Signal    | Retention |
//! |-----------|-----------|-----------|
//! | Excellent | ≥ -60 dBm | ≥ 0.90    |
//! | Good      | ≥ -70 dBm | ≥ 0.75    |
//! | Fair      | ≥ -80 dBm | ≥ 0.50    |
//! | Poor      | otherwise |           |
//!
//! Confidence follows the same observation-count tiers as health forecasts.

use alloc::string::String;

use airgauge_core::{
    constants::forecast::RECENT_WINDOW_MS,
    constants::rssi::FALLBACK_AVERAGE_SIGNAL_DBM,
    log_debug,
    time::{in_trailing_window, rate_per_ms},
    validation, AnalysisResult, ConfidenceLevel, CoverageGrade, Timestamp,
};

use crate::config::PredictorConfig;
use crate::signal::predict_ap_signal_strength;
use crate::trend::NetworkTrend;

/// Forecast AP count and average signal of a network
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageForecast {
    /// Network the forecast is for
    pub network_id: String,
    /// Instant the forecast refers to
    pub target_time: Timestamp,
    /// APs currently in the network
    pub current_ap_count: usize,
    /// Expected APs at the target time, never below 1
    pub predicted_ap_count: f64,
    /// `predicted_ap_count / current_ap_count`, in [0, 1]
    pub retention: f64,
    /// Mean forecast RSSI across APs (dBm)
    pub average_signal: f64,
    /// Combined grade
    pub quality: CoverageGrade,
    /// Discrete confidence tier
    pub confidence: ConfidenceLevel,
}

/// Forecast a network's coverage `horizon_ms` after `now`
///
/// Fails on a horizon outside `(0, max_horizon_ms]`.
pub fn predict_coverage_quality(
    trend: &NetworkTrend,
    horizon_ms: u64,
    now: Timestamp,
    config: &PredictorConfig,
) -> AnalysisResult<CoverageForecast> {
    validation::check_horizon(horizon_ms, config.max_horizon_ms)?;

    let current_ap_count = trend.ap_histories.len();
    let recent_losses = trend
        .disappearances
        .iter()
        .filter(|&&t| in_trailing_window(t, now, RECENT_WINDOW_MS))
        .count();
    let loss_rate = rate_per_ms(recent_losses, RECENT_WINDOW_MS);
    let predicted_ap_count = (current_ap_count as f64 - loss_rate * horizon_ms as f64).max(1.0);

    let retention = if current_ap_count == 0 {
        0.0
    } else {
        (predicted_ap_count / current_ap_count as f64).min(1.0)
    };

    let mut signal_sum = 0.0;
    let mut forecasts = 0usize;
    for history in trend.ap_histories.iter().filter(|h| !h.is_empty()) {
        let prediction = predict_ap_signal_strength(history, horizon_ms, now, config)?;
        signal_sum += prediction.predicted_rssi as f64;
        forecasts += 1;
    }

    let mean = signal_sum / forecasts as f64;
    let average_signal = if mean.is_finite() {
        mean
    } else {
        log_debug!(
            "{}: no AP signal forecasts, using {} dBm",
            trend.network_id,
            FALLBACK_AVERAGE_SIGNAL_DBM
        );
        FALLBACK_AVERAGE_SIGNAL_DBM
    };

    Ok(CoverageForecast {
        network_id: trend.network_id.clone(),
        target_time: now.saturating_add(horizon_ms),
        current_ap_count,
        predicted_ap_count,
        retention,
        average_signal,
        quality: CoverageGrade::from_forecast(average_signal, retention),
        confidence: ConfidenceLevel::from_observation_count(trend.observation_count),
    })
}
