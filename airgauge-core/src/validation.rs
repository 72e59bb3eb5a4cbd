//! Common Precondition Checks
//!
//! ## Overview
//!
//! Shared guards used by the mapper and the predictor before any numeric
//! work starts. Every public operation runs its contract checks through these
//! helpers, so a violation is always reported the same way and never after a
//! partial result has been built.
//!
//! ## Design Principles
//!
//! - Pure functions, no side effects
//! - Reject contract violations with an [`AnalysisError`]
//! - Never reject numeric degeneracies; those have fallbacks downstream

use crate::errors::{AnalysisError, AnalysisResult};

/// Check that a value lies in `[min, max]`
pub fn check_range(value: f64, min: f64, max: f64) -> AnalysisResult<()> {
    if value.is_nan() || value < min || value > max {
        Err(AnalysisError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Check that a collection is non-empty
pub fn check_non_empty<T>(items: &[T]) -> AnalysisResult<()> {
    if items.is_empty() {
        Err(AnalysisError::EmptySamples)
    } else {
        Ok(())
    }
}

/// Check that a grid resolution is positive and finite
pub fn check_resolution(resolution: f64) -> AnalysisResult<()> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidResolution { resolution })
    }
}

/// Check that a forecast horizon lies in `(0, max_ms]`
pub fn check_horizon(horizon_ms: u64, max_ms: u64) -> AnalysisResult<()> {
    if horizon_ms == 0 || horizon_ms > max_ms {
        Err(AnalysisError::InvalidHorizon { horizon_ms, max_ms })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(0.5, 0.0, 1.0).is_ok());
        assert!(check_range(0.0, 0.0, 1.0).is_ok());
        assert!(check_range(1.0, 0.0, 1.0).is_ok());
        assert_eq!(
            check_range(1.5, 0.0, 1.0),
            Err(AnalysisError::OutOfRange { value: 1.5, min: 0.0, max: 1.0 })
        );
        assert!(check_range(f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn empty_collections_rejected() {
        let empty: [u8; 0] = [];
        assert_eq!(check_non_empty(&empty), Err(AnalysisError::EmptySamples));
        assert!(check_non_empty(&[1]).is_ok());
    }

    #[test]
    fn resolution_must_be_positive() {
        assert!(check_resolution(0.5).is_ok());
        assert!(check_resolution(0.0).is_err());
        assert!(check_resolution(-1.0).is_err());
        assert!(check_resolution(f64::INFINITY).is_err());
        assert!(check_resolution(f64::NAN).is_err());
    }

    #[test]
    fn horizon_bounds() {
        assert!(check_horizon(1, 10).is_ok());
        assert!(check_horizon(10, 10).is_ok());
        assert!(check_horizon(0, 10).is_err());
        assert!(check_horizon(11, 10).is_err());
    }
}
