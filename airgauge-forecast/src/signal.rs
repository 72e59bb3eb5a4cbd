//! AP Signal Strength Forecasting
//!
//! ## Algorithm
//!
//! ```text
//! recent = samples in [now - 1h, now]
//!
//! |recent| < min_samples:
//!     estimate = round(mean of full history)
//!     bounds   = [min, max] of full history
//!     tier     = Low
//!
//! otherwise:
//!     line     = OLS fit through recent
//!     estimate = clamp(round(line(now + horizon)))
//!     margin   = round(z · σ_full)
//!     bounds   = clamp(estimate ± margin)
//!     tier     = High   if |recent| ≥ 100 and σ < 3
//!                Medium if |recent| ≥  50 and σ < 7
//!                Low    otherwise
//! ```
//!
//! All RSSI values are clamped to [-120, 0], so `lower ≤ estimate ≤ upper`
//! always holds.

use alloc::string::String;

use airgauge_core::{
    constants::forecast::RECENT_WINDOW_MS,
    log_debug,
    types::{clamp_rssi, round_rssi},
    validation, AnalysisError, AnalysisResult, ConfidenceLevel, Dbm, LinearFit, Timestamp,
};

use crate::config::PredictorConfig;
use crate::history::ApHistory;

/// Forecast RSSI for one AP at a future instant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalPrediction {
    /// Station the forecast is for
    pub station_id: String,
    /// Instant the forecast refers to
    pub target_time: Timestamp,
    /// Point estimate (dBm)
    pub predicted_rssi: Dbm,
    /// Lower edge of the confidence band (dBm)
    pub lower_bound: Dbm,
    /// Upper edge of the confidence band (dBm)
    pub upper_bound: Dbm,
    /// Discrete confidence tier
    pub confidence: ConfidenceLevel,
    /// Latest observed RSSI, as the baseline for change
    pub current_rssi: Dbm,
    /// Fitted trend in dB per hour; zero for baseline forecasts
    pub slope_db_per_hour: f64,
    /// Readings in the trailing window that fed the fit
    pub recent_sample_count: usize,
}

impl SignalPrediction {
    /// Expected change from the latest reading (dB)
    pub fn change(&self) -> Dbm {
        self.predicted_rssi - self.current_rssi
    }

    /// Width of the confidence band (dB)
    pub fn band_width(&self) -> Dbm {
        self.upper_bound - self.lower_bound
    }
}

/// Forecast an AP's RSSI `horizon_ms` after `now`
///
/// Fails on an empty history or a horizon outside `(0, max_horizon_ms]`.
pub fn predict_ap_signal_strength(
    history: &ApHistory,
    horizon_ms: u64,
    now: Timestamp,
    config: &PredictorConfig,
) -> AnalysisResult<SignalPrediction> {
    validation::check_horizon(horizon_ms, config.max_horizon_ms)?;
    let stats = history.stats().ok_or(AnalysisError::EmptySamples)?;
    let current_rssi = history.latest().map_or(round_rssi(stats.mean), |s| clamp_rssi(s.rssi));

    let target_time = now.saturating_add(horizon_ms);
    let recent = history.recent(now, RECENT_WINDOW_MS);

    if recent.len() < config.min_samples {
        log_debug!(
            "{}: {} recent samples below minimum {}, forecasting baseline",
            history.station_id(),
            recent.len(),
            config.min_samples
        );

        return Ok(SignalPrediction {
            station_id: history.station_id().into(),
            target_time,
            predicted_rssi: round_rssi(stats.mean),
            lower_bound: clamp_rssi(stats.min),
            upper_bound: clamp_rssi(stats.max),
            confidence: ConfidenceLevel::Low,
            current_rssi,
            slope_db_per_hour: 0.0,
            recent_sample_count: recent.len(),
        });
    }

    let fit = LinearFit::fit_samples(recent);
    let predicted_rssi = round_rssi(fit.project(target_time));
    let margin = libm::round(config.z_score() * stats.std_dev) as Dbm;

    Ok(SignalPrediction {
        station_id: history.station_id().into(),
        target_time,
        predicted_rssi,
        lower_bound: clamp_rssi(predicted_rssi - margin),
        upper_bound: clamp_rssi(predicted_rssi + margin),
        confidence: ConfidenceLevel::from_signal_evidence(recent.len(), stats.std_dev),
        current_rssi,
        slope_db_per_hour: fit.slope_per_hour(),
        recent_sample_count: recent.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use airgauge_core::{
        constants::time::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND},
        TemporalSample,
    };
    use alloc::vec::Vec;

    const START: Timestamp = 1_704_067_200_000;

    fn history_from(values: &[Dbm], step_ms: u64) -> ApHistory {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &v)| TemporalSample::new(START + i as u64 * step_ms, v))
            .collect();
        ApHistory::new("02:00:00:00:00:01", samples)
    }

    fn last_time(history: &ApHistory) -> Timestamp {
        history.latest().unwrap().timestamp
    }

    #[test]
    fn rising_history_projects_upward() {
        let values: Vec<Dbm> = (0..30).map(|i| -90 + i).collect();
        let history = history_from(&values, MS_PER_MINUTE);
        let now = last_time(&history);

        let p = predict_ap_signal_strength(&history, 10 * MS_PER_MINUTE, now, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.predicted_rssi, -51);
        assert!(p.predicted_rssi >= -61);
        assert_eq!(p.current_rssi, -61);
        assert_eq!(p.change(), 10);
        assert!((p.slope_db_per_hour - 60.0).abs() < 1e-9);
        assert_eq!(p.recent_sample_count, 30);
        assert!(p.lower_bound <= p.predicted_rssi && p.predicted_rssi <= p.upper_bound);
    }

    #[test]
    fn projection_clamped_to_domain() {
        let values: Vec<Dbm> = (0..30).map(|i| -30 + i).collect();
        let history = history_from(&values, MS_PER_MINUTE);
        let now = last_time(&history);

        let p = predict_ap_signal_strength(&history, 6 * MS_PER_HOUR, now, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.predicted_rssi, 0);
        assert_eq!(p.upper_bound, 0);
        assert!(p.lower_bound < 0);
    }

    #[test]
    fn few_samples_fall_back_to_baseline() {
        let history = history_from(&[-70, -60, -80, -66, -74], MS_PER_MINUTE);
        let now = last_time(&history);

        let p = predict_ap_signal_strength(&history, MS_PER_HOUR, now, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.confidence, ConfidenceLevel::Low);
        assert_eq!(p.predicted_rssi, -70);
        assert_eq!((p.lower_bound, p.upper_bound), (-80, -60));
        assert_eq!(p.slope_db_per_hour, 0.0);
        assert_eq!(p.current_rssi, -74);
    }

    #[test]
    fn stale_history_falls_back_to_baseline() {
        let values: Vec<Dbm> = (0..40).map(|i| -60 - (i % 3)).collect();
        let history = history_from(&values, MS_PER_MINUTE);
        let now = last_time(&history) + 2 * MS_PER_HOUR;

        let p = predict_ap_signal_strength(&history, MS_PER_HOUR, now, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.recent_sample_count, 0);
        assert_eq!(p.confidence, ConfidenceLevel::Low);
        assert_eq!((p.lower_bound, p.upper_bound), (-62, -60));
    }

    #[test]
    fn dense_steady_history_is_high_confidence() {
        // 120 readings every 30 s alternating -60/-61: σ = 0.5
        let values: Vec<Dbm> = (0..120).map(|i| -60 - (i % 2)).collect();
        let history = history_from(&values, 30 * MS_PER_SECOND);
        let now = last_time(&history);

        let p = predict_ap_signal_strength(&history, MS_PER_HOUR, now, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.recent_sample_count, 120);
        assert_eq!(p.confidence, ConfidenceLevel::High);
        // margin = round(1.96 × 0.5) = 1
        assert_eq!(p.band_width(), 2);
    }

    #[test]
    fn medium_confidence_band() {
        // 60 readings with σ = 5
        let values: Vec<Dbm> = (0..60).map(|i| if i % 2 == 0 { -65 } else { -75 }).collect();
        let history = history_from(&values, 30 * MS_PER_SECOND);
        let now = last_time(&history);

        let p = predict_ap_signal_strength(&history, MS_PER_HOUR, now, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.confidence, ConfidenceLevel::Medium);
        // margin = round(1.96 × 5) = 10
        assert_eq!(p.upper_bound - p.predicted_rssi, 10);
    }

    #[test]
    fn identical_timestamps_give_flat_forecast() {
        let samples = (0..25).map(|i| TemporalSample::new(START, -70 + (i % 5) as Dbm)).collect();
        let history = ApHistory::new("ap", samples);

        let p = predict_ap_signal_strength(&history, MS_PER_HOUR, START, &PredictorConfig::default())
            .unwrap();
        assert_eq!(p.slope_db_per_hour, 0.0);
        assert_eq!(p.predicted_rssi, -68);
    }

    #[test]
    fn contract_violations() {
        let history = history_from(&[-60; 5], MS_PER_MINUTE);
        let config = PredictorConfig::default();
        assert!(matches!(
            predict_ap_signal_strength(&history, 0, START, &config),
            Err(AnalysisError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            predict_ap_signal_strength(&history, 25 * MS_PER_HOUR, START, &config),
            Err(AnalysisError::InvalidHorizon { .. })
        ));

        let empty = ApHistory::new("ap", Vec::new());
        assert_eq!(
            predict_ap_signal_strength(&empty, MS_PER_HOUR, START, &config),
            Err(AnalysisError::EmptySamples)
        );
    }
}
