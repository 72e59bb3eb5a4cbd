//! Quality and Confidence Tiers
//!
//! ## Overview
//!
//! Both halves of the engine report discrete tiers instead of raw numbers:
//! the mapper classifies every heatmap cell into a [`SignalQuality`], and the
//! predictor qualifies every forecast with a [`ConfidenceLevel`].
//!
//! Tiers are closed enums ordered from worst to best, so comparisons read
//! naturally (`quality >= SignalQuality::Fair`). Each has a single pure
//! classification function from the underlying numeric score.
//!
//! ## Signal Quality Boundaries
//!
//! ```text
//!   0 dBm ┬──────────── Excellent   (≥ -50)
//!         ├──────────── Good        (≥ -60)
//!         ├──────────── Fair        (≥ -70)
//!         ├──────────── Poor        (≥ -85)
//! -120 dBm┴──────────── None
//! ```
//!
//! ## Coverage Grades
//!
//! A [`CoverageGrade`] rates an area rather than a point. The mapper grades a
//! surveyed floor from the share of cells in each tier; the predictor grades
//! a forecast from expected average signal and how many APs remain visible.
//!
//! ## Confidence
//!
//! Confidence is a statement about the evidence behind a forecast, not a
//! probability. Signal forecasts earn High confidence from many recent
//! samples with low spread; network-level forecasts from sheer observation
//! count.

use core::fmt;

use crate::constants::coverage::{OVERALL_EXCELLENT_PCT, OVERALL_FAIR_PCT, OVERALL_GOOD_PCT};
use crate::constants::forecast::{
    HIGH_CONFIDENCE_OBSERVATIONS, HIGH_CONFIDENCE_SAMPLES, HIGH_CONFIDENCE_STD_DEV_DB,
    MEDIUM_CONFIDENCE_OBSERVATIONS, MEDIUM_CONFIDENCE_SAMPLES, MEDIUM_CONFIDENCE_STD_DEV_DB,
    EXCELLENT_COVERAGE_RETENTION, EXCELLENT_COVERAGE_SIGNAL_DBM, FAIR_COVERAGE_RETENTION,
    FAIR_COVERAGE_SIGNAL_DBM, GOOD_COVERAGE_RETENTION, GOOD_COVERAGE_SIGNAL_DBM,
};
use crate::constants::rssi::{
    EXCELLENT_THRESHOLD_DBM, FAIR_THRESHOLD_DBM, GOOD_THRESHOLD_DBM, POOR_THRESHOLD_DBM,
};
use crate::types::Dbm;

/// Signal quality tier of a single RSSI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalQuality {
    /// Below -85 dBm, effectively no service
    None,
    /// -85 to -71 dBm
    Poor,
    /// -70 to -61 dBm
    Fair,
    /// -60 to -51 dBm
    Good,
    /// -50 dBm and stronger
    Excellent,
}

impl SignalQuality {
    /// All tiers, worst first
    pub const ALL: [SignalQuality; 5] = [
        SignalQuality::None,
        SignalQuality::Poor,
        SignalQuality::Fair,
        SignalQuality::Good,
        SignalQuality::Excellent,
    ];

    /// Classify an RSSI value
    pub fn from_rssi(rssi: Dbm) -> Self {
        if rssi >= EXCELLENT_THRESHOLD_DBM {
            SignalQuality::Excellent
        } else if rssi >= GOOD_THRESHOLD_DBM {
            SignalQuality::Good
        } else if rssi >= FAIR_THRESHOLD_DBM {
            SignalQuality::Fair
        } else if rssi >= POOR_THRESHOLD_DBM {
            SignalQuality::Poor
        } else {
            SignalQuality::None
        }
    }

    /// Whether the tier counts toward coverage (better than Poor)
    pub fn is_covered(&self) -> bool {
        *self > SignalQuality::Poor
    }

    /// Position in [`SignalQuality::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SignalQuality::None => "none",
            SignalQuality::Poor => "poor",
            SignalQuality::Fair => "fair",
            SignalQuality::Good => "good",
            SignalQuality::Excellent => "excellent",
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall coverage rating of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverageGrade {
    /// Large parts of the area are unusable
    Poor,
    /// Usable, with noticeable weak spots
    Fair,
    /// Most of the area is well served
    Good,
    /// Strong signal almost everywhere
    Excellent,
}

impl CoverageGrade {
    /// Grade a mapped area from the share of its cells in each tier (percentages)
    pub fn from_cell_shares(excellent_pct: f64, good_or_better_pct: f64, coverage_pct: f64) -> Self {
        if excellent_pct >= OVERALL_EXCELLENT_PCT {
            CoverageGrade::Excellent
        } else if good_or_better_pct >= OVERALL_GOOD_PCT {
            CoverageGrade::Good
        } else if coverage_pct >= OVERALL_FAIR_PCT {
            CoverageGrade::Fair
        } else {
            CoverageGrade::Poor
        }
    }

    /// Grade a forecast from expected average signal and AP retention ratio
    ///
    /// `retention` is predicted AP count over current AP count.
    pub fn from_forecast(average_signal_dbm: f64, retention: f64) -> Self {
        if average_signal_dbm >= EXCELLENT_COVERAGE_SIGNAL_DBM
            && retention >= EXCELLENT_COVERAGE_RETENTION
        {
            CoverageGrade::Excellent
        } else if average_signal_dbm >= GOOD_COVERAGE_SIGNAL_DBM
            && retention >= GOOD_COVERAGE_RETENTION
        {
            CoverageGrade::Good
        } else if average_signal_dbm >= FAIR_COVERAGE_SIGNAL_DBM
            && retention >= FAIR_COVERAGE_RETENTION
        {
            CoverageGrade::Fair
        } else {
            CoverageGrade::Poor
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CoverageGrade::Poor => "poor",
            CoverageGrade::Fair => "fair",
            CoverageGrade::Good => "good",
            CoverageGrade::Excellent => "excellent",
        }
    }
}

impl fmt::Display for CoverageGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confidence tier attached to every forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfidenceLevel {
    /// Too little or too noisy evidence
    Low,
    /// Usable with some caution
    Medium,
    /// Plenty of consistent evidence
    High,
}

impl ConfidenceLevel {
    /// Confidence of a signal forecast from its recent sample count and history spread
    pub fn from_signal_evidence(recent_samples: usize, std_dev_db: f64) -> Self {
        if recent_samples >= HIGH_CONFIDENCE_SAMPLES && std_dev_db < HIGH_CONFIDENCE_STD_DEV_DB {
            ConfidenceLevel::High
        } else if recent_samples >= MEDIUM_CONFIDENCE_SAMPLES
            && std_dev_db < MEDIUM_CONFIDENCE_STD_DEV_DB
        {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Confidence of a network-level forecast from its total observation count
    pub fn from_observation_count(observations: usize) -> Self {
        if observations >= HIGH_CONFIDENCE_OBSERVATIONS {
            ConfidenceLevel::High
        } else if observations >= MEDIUM_CONFIDENCE_OBSERVATIONS {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
