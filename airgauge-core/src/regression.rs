//! Ordinary Least Squares Trend Fitting
//!
//! ## Overview
//!
//! Every forecast in the predictor is a straight line through recent RSSI
//! samples, projected forward. This module is that line.
//!
//! ## Algorithm
//!
//! ```text
//! x_i   = t_i - t_0                      (translate to the first sample)
//! slope = Σ(x_i - x̄)(y_i - ȳ) / Σ(x_i - x̄)²
//! icept = ȳ - slope · x̄
//! ```
//!
//! ### Why translate timestamps?
//!
//! Epoch milliseconds are around 1.7e12. Squaring them for the denominator
//! lands near 1e24, where an f64 has a spacing of roughly 1e8 - larger than
//! the sum of squared deviations for an hour of samples. Subtracting the
//! first timestamp keeps every term small and the fit exact to the bit.
//!
//! ### Degenerate input
//!
//! When every sample shares one instant the denominator is zero. The slope
//! is then 0 and the line is flat through the mean, which is the only
//! defensible estimate from a single point in time.
//!
//! ## Determinism
//!
//! The fit is a fixed sequence of additions in input order, so the same
//! samples produce bit-identical slopes and projections on every call.

use crate::time::Timestamp;
use crate::types::TemporalSample;

/// Least-squares line through `(timestamp, value)` pairs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    /// Change in value per millisecond
    pub slope: f64,
    /// Value at `origin`
    pub intercept: f64,
    /// Timestamp the x-axis was translated to (first sample)
    pub origin: Timestamp,
    /// Number of points fitted
    pub count: usize,
}

impl LinearFit {
    /// Fit a line through `(timestamp, value)` pairs
    ///
    /// An empty input yields a flat line at zero; callers are expected to
    /// have checked for samples first.
    pub fn fit(points: &[(Timestamp, f64)]) -> Self {
        let Some(&(origin, _)) = points.first() else {
            return Self { slope: 0.0, intercept: 0.0, origin: 0, count: 0 };
        };

        let n = points.len() as f64;
        let x_of = |t: Timestamp| t as f64 - origin as f64;

        let mean_x = points.iter().map(|&(t, _)| x_of(t)).sum::<f64>() / n;
        let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for &(t, y) in points {
            let dx = x_of(t) - mean_x;
            numerator += dx * (y - mean_y);
            denominator += dx * dx;
        }

        let slope = if denominator == 0.0 {
            log_trace!("{} points share timestamp {}, slope forced to 0", points.len(), origin);
            0.0
        } else {
            numerator / denominator
        };
        let intercept = mean_y - slope * mean_x;

        Self { slope, intercept, origin, count: points.len() }
    }

    /// Fit a line through an RSSI history
    pub fn fit_samples(samples: &[TemporalSample]) -> Self {
        let points: alloc::vec::Vec<(Timestamp, f64)> =
            samples.iter().map(|s| (s.timestamp, s.rssi as f64)).collect();
        Self::fit(&points)
    }

    /// Value of the line at `timestamp`
    pub fn project(&self, timestamp: Timestamp) -> f64 {
        let x = timestamp as f64 - self.origin as f64;
        self.intercept + self.slope * x
    }

    /// Slope expressed per hour instead of per millisecond
    pub fn slope_per_hour(&self) -> f64 {
        self.slope * crate::constants::time::MS_PER_HOUR as f64
    }
}
