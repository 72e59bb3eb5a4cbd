//! Spatial Interpolation of Survey Samples
//!
//! ## Overview
//!
//! A survey visits a few dozen spots; a heatmap needs a value everywhere.
//! Interpolators fill the gaps from [`KnownPoint`]s - the located samples
//! reduced to position plus strongest RSSI.
//!
//! ## Methods
//!
//! ### Nearest Neighbor
//! Each query takes the value of the closest sample. Produces a Voronoi
//! patchwork with hard edges; honest about what was measured.
//!
//! ### Inverse Distance Weighting
//! ```text
//! w_i = 1 / d_i^p
//! v   = Σ w_i·v_i / Σ w_i
//! ```
//! With `p = 2` influence falls off like free-space path loss. When the
//! query sits within 0.01 of a sample the sample is returned as-is, both to
//! honour the measurement exactly and to avoid dividing by a vanishing
//! distance.
//!
//! ### Bilinear
//! A true bilinear fit needs samples on a regular lattice. Survey points are
//! scattered, so bilinear requests are answered with IDW.
//!
//! ## Fallbacks
//!
//! No located sample, or weights summing to zero, yields the -100 dBm
//! sentinel. Nothing in this module returns an error.

use alloc::vec::Vec;

use airgauge_core::{
    constants::coverage::COINCIDENT_DISTANCE,
    constants::rssi::RSSI_SENTINEL_DBM,
    log_trace,
    types::{clamp_rssi, round_rssi},
    Dbm, NormalizedPoint, SpatialSample,
};

use crate::config::InterpolationMethod;

/// A located sample reduced to what interpolation needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownPoint {
    /// Position in normalized space
    pub point: NormalizedPoint,
    /// Strongest RSSI observed there
    pub rssi: Dbm,
}

impl KnownPoint {
    /// Collect every sample that has both a location and at least one reading
    ///
    /// Input order is preserved; ties in distance resolve to the earlier sample.
    pub fn collect(samples: &[SpatialSample]) -> Vec<KnownPoint> {
        samples
            .iter()
            .filter_map(|s| s.located_rssi())
            .map(|(point, rssi)| KnownPoint { point, rssi: clamp_rssi(rssi) })
            .collect()
    }
}

/// Estimates signal strength at arbitrary points from known samples
pub trait Interpolator {
    /// Estimate RSSI at `point`
    ///
    /// Must be deterministic and always return a value in [-120, 0].
    fn estimate(&self, known: &[KnownPoint], point: NormalizedPoint) -> Dbm;
}

/// Value of the closest known sample
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl Interpolator for NearestNeighbor {
    fn estimate(&self, known: &[KnownPoint], point: NormalizedPoint) -> Dbm {
        let mut best: Option<(f64, Dbm)> = None;
        for k in known {
            let d = k.point.distance(&point);
            match best {
                Some((best_d, _)) if best_d <= d => {}
                _ => best = Some((d, k.rssi)),
            }
        }

        match best {
            Some((_, rssi)) => rssi,
            None => {
                log_trace!("no located samples, returning sentinel {} dBm", RSSI_SENTINEL_DBM);
                RSSI_SENTINEL_DBM
            }
        }
    }
}

/// Inverse-distance-weighted average of all known samples
#[derive(Debug, Clone, Copy)]
pub struct InverseDistance {
    /// Weight exponent
    pub power: f64,
}

impl InverseDistance {
    /// IDW with the given exponent
    pub fn new(power: f64) -> Self {
        Self { power }
    }
}

impl Default for InverseDistance {
    fn default() -> Self {
        Self::new(airgauge_core::constants::coverage::DEFAULT_IDW_POWER)
    }
}

impl Interpolator for InverseDistance {
    fn estimate(&self, known: &[KnownPoint], point: NormalizedPoint) -> Dbm {
        let mut weight_sum = 0.0;
        let mut weighted_value_sum = 0.0;

        for k in known {
            let d = k.point.distance(&point);
            if d < COINCIDENT_DISTANCE {
                return k.rssi;
            }

            let w = 1.0 / libm::pow(d, self.power);
            weight_sum += w;
            weighted_value_sum += w * k.rssi as f64;
        }

        if weight_sum == 0.0 || !weight_sum.is_finite() {
            log_trace!("IDW weight sum {} unusable, returning sentinel", weight_sum);
            return RSSI_SENTINEL_DBM;
        }

        round_rssi(weighted_value_sum / weight_sum)
    }
}

/// Estimate RSSI at `point` with the given method
///
/// `idw_power` is used by the inverse-distance and bilinear methods.
pub fn estimate(
    method: InterpolationMethod,
    idw_power: f64,
    known: &[KnownPoint],
    point: NormalizedPoint,
) -> Dbm {
    match method {
        InterpolationMethod::NearestNeighbor => NearestNeighbor.estimate(known, point),
        InterpolationMethod::InverseDistance | InterpolationMethod::Bilinear => {
            InverseDistance::new(idw_power).estimate(known, point)
        }
    }
}
