//! Regression-Based WiFi Forecasting
//!
//! ## Overview
//!
//! Projects the recent behaviour of access points forward in time. Every
//! forecast starts from the same primitive: an ordinary least squares line
//! through the readings of the trailing hour, extended to the target time.
//!
//! ## Forecasts
//!
//! ```text
//! ApHistory ──► signal ──┬──► timing      (hour-by-hour, connect/wait)
//!                        ├──► issues      (risk score, reasons)
//!                        │
//! NetworkTrend ──────────┼──► coverage    (AP count, mean signal, grade)
//!                        └──► health      (score drift by direction)
//! ```
//!
//! ## Degraded Input
//!
//! Too few recent readings, identical timestamps and empty windows never
//! fail. They produce a baseline forecast with a Low confidence tier, so the
//! tier is the signal that an answer is weak. Only contract violations
//! (empty history, horizon out of range, zero look-ahead, bad configuration)
//! return errors.
//!
//! ## Example
//!
//! ```
//! use airgauge_core::TemporalSample;
//! use airgauge_forecast::{ApHistory, TrendPredictor};
//!
//! let start = 1_704_067_200_000u64;
//! let samples = (0..30)
//!     .map(|i| TemporalSample::new(start + i * 60_000, -90 + i as i32))
//!     .collect();
//! let history = ApHistory::new("02:00:00:00:00:01", samples);
//! let now = start + 29 * 60_000;
//!
//! let predictor = TrendPredictor::default();
//! let forecast = predictor.predict_ap_signal_strength(&history, 5 * 60_000, now)?;
//! assert!(forecast.predicted_rssi >= -61);
//! # Ok::<(), airgauge_core::AnalysisError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod coverage;
pub mod health;
pub mod history;
pub mod issues;
pub mod predictor;
pub mod signal;
pub mod timing;
pub mod trend;

pub use airgauge_core::{ConfidenceLevel, CoverageGrade};
pub use config::PredictorConfig;
pub use coverage::CoverageForecast;
pub use health::HealthForecast;
pub use history::{ApHistory, SignalStability};
pub use issues::{IssuePrediction, IssueReason, RiskLevel};
pub use predictor::TrendPredictor;
pub use signal::SignalPrediction;
pub use timing::{ConnectionAction, ConnectionTiming, HourlyForecast, TimingReason};
pub use trend::{NetworkTrend, TrendDirection};
