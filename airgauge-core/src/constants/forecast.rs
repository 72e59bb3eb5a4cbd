//! Forecast Parameters
//!
//! Windows, confidence tiers and risk weights used by the trend predictor.

use super::time::MS_PER_HOUR;

// ===== PREDICTOR CONFIGURATION =====

/// Default minimum number of recent samples for a regression forecast.
pub const DEFAULT_MIN_SAMPLES: usize = 20;

/// Smallest minimum-sample setting accepted by the predictor.
///
/// Two points always fit a line exactly; three is the least that says
/// anything about a trend.
pub const MIN_SAMPLES_FLOOR: usize = 3;

/// Default maximum forecast horizon (milliseconds, 24 hours).
pub const DEFAULT_MAX_HORIZON_MS: u64 = 24 * MS_PER_HOUR;

/// Default nominal confidence interval.
pub const DEFAULT_CONFIDENCE_INTERVAL: f64 = 0.95;

/// Trailing window used for "recent" samples and disappearance rates (ms).
pub const RECENT_WINDOW_MS: u64 = MS_PER_HOUR;

// ===== CONFIDENCE TIERS =====

/// Recent samples needed for High signal-forecast confidence.
pub const HIGH_CONFIDENCE_SAMPLES: usize = 100;

/// Largest history std-dev (dB) compatible with High confidence.
pub const HIGH_CONFIDENCE_STD_DEV_DB: f64 = 3.0;

/// Recent samples needed for Medium signal-forecast confidence.
pub const MEDIUM_CONFIDENCE_SAMPLES: usize = 50;

/// Largest history std-dev (dB) compatible with Medium confidence.
pub const MEDIUM_CONFIDENCE_STD_DEV_DB: f64 = 7.0;

/// Total observations needed for High network-level confidence.
pub const HIGH_CONFIDENCE_OBSERVATIONS: usize = 500;

/// Total observations needed for Medium network-level confidence.
pub const MEDIUM_CONFIDENCE_OBSERVATIONS: usize = 100;

// ===== HEALTH =====

/// Health score change per hour for a strongly improving trend.
pub const HEALTH_DELTA_STRONG_PER_HOUR: f64 = 5.0;

/// Health score change per hour for a mildly improving trend.
pub const HEALTH_DELTA_MILD_PER_HOUR: f64 = 2.0;

/// Upper bound of the health score.
pub const HEALTH_SCORE_MAX: f64 = 100.0;

// ===== COVERAGE FORECAST =====

/// Average signal (dBm) required for an Excellent coverage forecast.
pub const EXCELLENT_COVERAGE_SIGNAL_DBM: f64 = -60.0;

/// AP retention ratio required for an Excellent coverage forecast.
pub const EXCELLENT_COVERAGE_RETENTION: f64 = 0.9;

/// Average signal (dBm) required for a Good coverage forecast.
pub const GOOD_COVERAGE_SIGNAL_DBM: f64 = -70.0;

/// AP retention ratio required for a Good coverage forecast.
pub const GOOD_COVERAGE_RETENTION: f64 = 0.75;

/// Average signal (dBm) required for a Fair coverage forecast.
pub const FAIR_COVERAGE_SIGNAL_DBM: f64 = -80.0;

/// AP retention ratio required for a Fair coverage forecast.
pub const FAIR_COVERAGE_RETENTION: f64 = 0.5;

// ===== TREND & STABILITY =====

/// Slope (dB/hour) at or above which a trend is strongly improving.
pub const STRONG_TREND_DB_PER_HOUR: f64 = 5.0;

/// Slope (dB/hour) at or above which a trend is improving.
pub const MILD_TREND_DB_PER_HOUR: f64 = 1.0;

/// Std-dev (dB) below which a signal is very stable.
pub const VERY_STABLE_STD_DEV_DB: f64 = 2.0;

/// Std-dev (dB) below which a signal is stable.
pub const STABLE_STD_DEV_DB: f64 = 4.0;

/// Std-dev (dB) below which a signal is moderately stable.
pub const MODERATE_STD_DEV_DB: f64 = 7.0;

/// Std-dev (dB) below which a signal is unstable rather than very unstable.
pub const UNSTABLE_STD_DEV_DB: f64 = 10.0;

// ===== CONNECTION TIMING =====

/// Forecast improvement (dB) that justifies waiting to connect.
pub const WAIT_IMPROVEMENT_DB: i32 = 10;

/// Current RSSI (dBm) good enough to connect immediately.
pub const CONNECT_NOW_RSSI_DBM: i32 = -60;

/// Forecast degradation (dB) that makes connecting now urgent.
pub const URGENT_DEGRADATION_DB: i32 = -10;

// ===== CONNECTION ISSUES =====

/// Issue probability added for a predicted RSSI below -85 dBm.
pub const RISK_WEIGHT_VERY_WEAK: f64 = 0.4;

/// Issue probability added for a predicted RSSI below -75 dBm.
pub const RISK_WEIGHT_WEAK: f64 = 0.2;

/// Issue probability added for a predicted RSSI below -65 dBm.
pub const RISK_WEIGHT_MARGINAL: f64 = 0.1;

/// Predicted RSSI (dBm) below which the marginal-signal weight applies.
pub const MARGINAL_SIGNAL_DBM: i32 = -65;

/// Issue probability added for a very unstable history.
pub const RISK_WEIGHT_VERY_UNSTABLE: f64 = 0.3;

/// Issue probability added for an unstable history.
pub const RISK_WEIGHT_UNSTABLE: f64 = 0.2;

/// Issue probability added for a moderately stable history.
pub const RISK_WEIGHT_MODERATE: f64 = 0.1;

/// Predicted RSSI (dBm) below which the weak-signal reason is reported.
pub const WEAK_SIGNAL_REASON_DBM: i32 = -75;

/// Multiplier applied to the disconnect ratio.
pub const DISCONNECT_RATIO_WEIGHT: f64 = 0.3;

/// Disconnect ratio above which the frequent-disconnect reason is reported.
pub const FREQUENT_DISCONNECT_RATIO: f64 = 0.2;

/// Issue probability at or above which risk is High.
pub const RISK_HIGH: f64 = 0.7;

/// Issue probability at or above which risk is Medium.
pub const RISK_MEDIUM: f64 = 0.4;

/// Issue probability at or above which risk is Low.
pub const RISK_LOW: f64 = 0.2;
