//! Predictor configuration
//!
//! ## Confidence Multiplier
//!
//! The signal forecast reports `projection ± z·σ`, where σ is the standard
//! deviation of the full history and `z` the two-sided normal quantile of
//! the configured interval:
//!
//! ```text
//! interval   z
//! 0.80       1.2816
//! 0.90       1.6449
//! 0.95       1.9600   (default)
//! 0.98       2.3263
//! 0.99       2.5758
//! ```
//!
//! Intervals between table rows are interpolated linearly; intervals outside
//! the table use the nearest row.

use airgauge_core::{
    constants::forecast::{
        DEFAULT_CONFIDENCE_INTERVAL, DEFAULT_MAX_HORIZON_MS, DEFAULT_MIN_SAMPLES,
        MIN_SAMPLES_FLOOR,
    },
    AnalysisError, AnalysisResult,
};

/// Two-sided normal quantiles, ascending by interval
const Z_TABLE: [(f64, f64); 5] = [
    (0.80, 1.2816),
    (0.90, 1.6449),
    (0.95, 1.96),
    (0.98, 2.3263),
    (0.99, 2.5758),
];

/// Configuration for [`TrendPredictor`](crate::TrendPredictor)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictorConfig {
    /// Recent samples needed before a regression is trusted
    pub min_samples: usize,

    /// Longest forecast horizon accepted (milliseconds)
    pub max_horizon_ms: u64,

    /// Nominal coverage of the reported signal bounds, in (0, 1)
    pub confidence_interval: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            // Twenty scans is about ten minutes at the usual 30 s scan cadence
            min_samples: DEFAULT_MIN_SAMPLES,
            max_horizon_ms: DEFAULT_MAX_HORIZON_MS,
            confidence_interval: DEFAULT_CONFIDENCE_INTERVAL,
        }
    }
}

impl PredictorConfig {
    /// Default configuration with a different minimum sample count
    pub fn with_min_samples(min_samples: usize) -> Self {
        Self { min_samples, ..Self::default() }
    }

    /// Check every parameter against its invariant
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.min_samples < MIN_SAMPLES_FLOOR {
            return Err(AnalysisError::InvalidConfig {
                reason: "min_samples must be at least 3",
            });
        }

        if self.max_horizon_ms == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "max_horizon_ms must be positive",
            });
        }

        if !(self.confidence_interval > 0.0 && self.confidence_interval < 1.0) {
            return Err(AnalysisError::InvalidConfig {
                reason: "confidence_interval must lie in (0, 1)",
            });
        }

        Ok(())
    }

    /// Bound multiplier for the configured confidence interval
    pub fn z_score(&self) -> f64 {
        let p = self.confidence_interval;
        let (first_p, first_z) = Z_TABLE[0];
        if p <= first_p {
            return first_z;
        }

        for pair in Z_TABLE.windows(2) {
            let (p0, z0) = pair[0];
            let (p1, z1) = pair[1];
            if p == p1 {
                return z1;
            }
            if p < p1 {
                return z0 + (z1 - z0) * (p - p0) / (p1 - p0);
            }
        }

        Z_TABLE[Z_TABLE.len() - 1].1
    }
}
