//! Mapper configuration
//!
//! Fixed at construction time and read-only afterwards, so one mapper can be
//! shared across threads without coordination.

use core::fmt;

use airgauge_core::{
    constants::coverage::{DEFAULT_GRID_RESOLUTION, DEFAULT_IDW_POWER},
    constants::rssi::{DEFAULT_DEAD_ZONE_THRESHOLD_DBM, RSSI_MAX_DBM, RSSI_MIN_DBM},
    validation, AnalysisError, AnalysisResult, Dbm,
};

/// How grid cells are estimated from survey samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod {
    /// Value of the closest sample
    NearestNeighbor,
    /// Inverse-distance-weighted average of all samples
    #[default]
    InverseDistance,
    /// Accepted for compatibility; surveys are scattered points rather than a
    /// measurement lattice, so this is evaluated as inverse-distance weighting
    Bilinear,
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterpolationMethod::NearestNeighbor => "nearest-neighbor",
            InterpolationMethod::InverseDistance => "inverse-distance",
            InterpolationMethod::Bilinear => "bilinear",
        })
    }
}

/// Configuration for [`CoverageMapper`](crate::CoverageMapper)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapperConfig {
    /// Grid cell size, in the units of the area bounds
    pub resolution: f64,

    /// Interpolation used for every cell
    pub method: InterpolationMethod,

    /// Exponent of the inverse-distance weights
    pub idw_power: f64,

    /// Cells strictly below this RSSI belong to dead zones
    pub dead_zone_threshold: Dbm,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            // One metre cells suit typical floor plans
            resolution: DEFAULT_GRID_RESOLUTION,
            method: InterpolationMethod::InverseDistance,
            idw_power: DEFAULT_IDW_POWER,
            // Below -85 dBm most clients drop to the lowest rates or roam away
            dead_zone_threshold: DEFAULT_DEAD_ZONE_THRESHOLD_DBM,
        }
    }
}

impl MapperConfig {
    /// Default configuration with a different cell size
    pub fn with_resolution(resolution: f64) -> Self {
        Self { resolution, ..Self::default() }
    }

    /// Same configuration with a different interpolation method
    pub fn method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Check every parameter against its invariant
    pub fn validate(&self) -> AnalysisResult<()> {
        validation::check_resolution(self.resolution)?;

        if !self.idw_power.is_finite() || self.idw_power <= 0.0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "IDW power must be positive and finite",
            });
        }

        validation::check_range(
            self.dead_zone_threshold as f64,
            RSSI_MIN_DBM as f64,
            RSSI_MAX_DBM as f64,
        )
    }
}
