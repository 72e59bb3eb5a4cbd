//! Sample and area types shared by the mapper and the predictor
//!
//! Spatial samples come from site surveys: a position in the normalized unit
//! square plus every AP the device could hear there. Temporal samples come
//! from repeated scans of a single AP. Both are plain immutable values.

use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::rssi::{RSSI_MAX_DBM, RSSI_MIN_DBM};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::time::Timestamp;

/// Signal strength in integer dBm
pub type Dbm = i32;

/// Clamp a signal value into the reportable RSSI domain
pub fn clamp_rssi(rssi: Dbm) -> Dbm {
    rssi.clamp(RSSI_MIN_DBM, RSSI_MAX_DBM)
}

/// Round a fractional dBm estimate and clamp it into the RSSI domain
///
/// Non-finite input maps to the weakest reportable signal.
pub fn round_rssi(value: f64) -> Dbm {
    if !value.is_finite() {
        return RSSI_MIN_DBM;
    }

    let rounded = libm::round(value).clamp(RSSI_MIN_DBM as f64, RSSI_MAX_DBM as f64);
    rounded as Dbm
}

/// A point in the normalized [0,1]×[0,1] survey space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedPoint {
    /// Horizontal position, 0.0 = left edge
    pub x: f64,
    /// Vertical position, 0.0 = bottom edge
    pub y: f64,
}

impl NormalizedPoint {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &NormalizedPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrt(dx * dx + dy * dy)
    }
}

/// Where a survey sample was taken
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Horizontal position in [0, 1]
    pub x: f64,
    /// Vertical position in [0, 1]
    pub y: f64,
    /// Floor level, if the survey tracked floors
    pub floor: Option<i32>,
}

impl Location {
    /// Location on an untracked floor
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, floor: None }
    }

    /// Location on a specific floor
    pub const fn on_floor(x: f64, y: f64, floor: i32) -> Self {
        Self { x, y, floor: Some(floor) }
    }

    /// Planar position, ignoring the floor
    pub fn point(&self) -> NormalizedPoint {
        NormalizedPoint::new(self.x, self.y)
    }
}

/// One AP heard during a survey sample
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApObservation {
    /// Station identifier (BSSID)
    pub bssid: String,
    /// Received signal strength
    pub rssi: Dbm,
}

impl ApObservation {
    /// Create an observation
    pub fn new(bssid: impl Into<String>, rssi: Dbm) -> Self {
        Self { bssid: bssid.into(), rssi }
    }
}

/// A spatially located survey measurement
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialSample {
    /// Where the measurement was taken, if known
    pub location: Option<Location>,
    /// Every AP visible at this location
    pub observations: Vec<ApObservation>,
}

impl SpatialSample {
    /// Sample with a location and its visible APs
    pub fn new(location: Location, observations: Vec<ApObservation>) -> Self {
        Self { location: Some(location), observations }
    }

    /// Sample with a location and a single anonymous reading
    ///
    /// Convenient when only the strongest RSSI was recorded.
    pub fn single(location: Location, rssi: Dbm) -> Self {
        Self::new(location, alloc::vec![ApObservation::new(String::new(), rssi)])
    }

    /// Sample whose position was never recorded
    pub fn unlocated(observations: Vec<ApObservation>) -> Self {
        Self { location: None, observations }
    }

    /// Strongest RSSI across all visible APs
    pub fn strongest_rssi(&self) -> Option<Dbm> {
        self.observations.iter().map(|o| o.rssi).max()
    }

    /// Position and strongest RSSI, if the sample has both
    pub fn located_rssi(&self) -> Option<(NormalizedPoint, Dbm)> {
        let location = self.location?;
        let rssi = self.strongest_rssi()?;
        Some((location.point(), rssi))
    }

    /// Floor of the sample, if it has a location with a floor
    pub fn floor(&self) -> Option<i32> {
        self.location.and_then(|l| l.floor)
    }
}

/// Rectangle in the caller's coordinate space (usually metres)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaBounds {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub max_y: f64,
}

impl AreaBounds {
    /// Create bounds, rejecting rectangles without area
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> AnalysisResult<Self> {
        let bounds = Self { min_x, min_y, max_x, max_y };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check `max_x > min_x` and `max_y > min_y` with finite edges
    ///
    /// Fields are public, so anything built by struct literal is checked
    /// again before use.
    pub fn validate(&self) -> AnalysisResult<()> {
        let finite = self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite();

        if finite && self.max_x > self.min_x && self.max_y > self.min_y {
            Ok(())
        } else {
            Err(AnalysisError::DegenerateBounds {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: self.max_y,
            })
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Enclosed area
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// A single timestamped RSSI reading from one AP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporalSample {
    /// Milliseconds since epoch
    pub timestamp: Timestamp,
    /// Received signal strength
    pub rssi: Dbm,
}

impl TemporalSample {
    /// Create a sample
    pub const fn new(timestamp: Timestamp, rssi: Dbm) -> Self {
        Self { timestamp, rssi }
    }
}
