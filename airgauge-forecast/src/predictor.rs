//! Trend predictor
//!
//! [`TrendPredictor`] binds a validated [`PredictorConfig`] to the five
//! forecast operations. It holds no other state, so one instance can serve
//! any number of threads.

use alloc::vec::Vec;

use airgauge_core::{AnalysisResult, Timestamp};

use crate::config::PredictorConfig;
use crate::coverage::{self, CoverageForecast};
use crate::health::{self, HealthForecast};
use crate::history::ApHistory;
use crate::issues::{self, IssuePrediction};
use crate::signal::{self, SignalPrediction};
use crate::timing::{self, ConnectionTiming};
use crate::trend::NetworkTrend;

/// Regression-based forecaster for AP signal and network health
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrendPredictor {
    config: PredictorConfig,
}

impl TrendPredictor {
    /// Create a predictor, rejecting an invalid configuration
    pub fn new(config: PredictorConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Forecast an AP's RSSI `horizon_ms` after `now`
    pub fn predict_ap_signal_strength(
        &self,
        history: &ApHistory,
        horizon_ms: u64,
        now: Timestamp,
    ) -> AnalysisResult<SignalPrediction> {
        signal::predict_ap_signal_strength(history, horizon_ms, now, &self.config)
    }

    /// Forecast a network's health score `horizon_ms` after `now`
    pub fn predict_network_health(
        &self,
        trend: &NetworkTrend,
        horizon_ms: u64,
        now: Timestamp,
    ) -> AnalysisResult<HealthForecast> {
        health::predict_network_health(trend, horizon_ms, now, &self.config)
    }

    /// Forecast a network's AP count and average signal `horizon_ms` after `now`
    pub fn predict_coverage_quality(
        &self,
        trend: &NetworkTrend,
        horizon_ms: u64,
        now: Timestamp,
    ) -> AnalysisResult<CoverageForecast> {
        coverage::predict_coverage_quality(trend, horizon_ms, now, &self.config)
    }

    /// Recommend when to connect to an AP within the next `look_ahead_hours`
    pub fn recommend_optimal_connection_time(
        &self,
        history: &ApHistory,
        look_ahead_hours: u32,
        now: Timestamp,
    ) -> AnalysisResult<ConnectionTiming> {
        timing::recommend_optimal_connection_time(history, look_ahead_hours, now, &self.config)
    }

    /// Estimate the risk of connection trouble `horizon_ms` after `now`
    pub fn predict_connection_issues(
        &self,
        history: &ApHistory,
        horizon_ms: u64,
        now: Timestamp,
    ) -> AnalysisResult<IssuePrediction> {
        issues::predict_connection_issues(history, horizon_ms, now, &self.config)
    }

    /// Summarise a network, deriving its trend direction from the AP histories
    pub fn analyze_network(
        &self,
        network_id: &str,
        health_score: f64,
        ap_histories: Vec<ApHistory>,
        disappearances: Vec<Timestamp>,
        now: Timestamp,
    ) -> NetworkTrend {
        NetworkTrend::analyze(
            network_id,
            health_score,
            ap_histories,
            disappearances,
            now,
            self.config.min_samples,
        )
    }
}
