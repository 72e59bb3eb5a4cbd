//! Coverage mapper
//!
//! [`CoverageMapper`] holds a validated [`MapperConfig`] and exposes the
//! survey-level operations. Every call builds its results from scratch and
//! hands ownership to the caller; the mapper itself never changes after
//! construction.

use alloc::vec::Vec;

use airgauge_core::{
    log_debug, log_warn, validation, AnalysisResult, AreaBounds, Dbm, NormalizedPoint,
    SpatialSample,
};

use crate::config::{InterpolationMethod, MapperConfig};
use crate::coverage_map::CoverageMap;
use crate::dead_zone::{self, DeadZone};
use crate::heatmap::Heatmap;
use crate::interpolation::{self, KnownPoint};

/// Builds heatmaps, coverage summaries and dead-zone lists from surveys
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoverageMapper {
    config: MapperConfig,
}

impl CoverageMapper {
    /// Create a mapper, rejecting an invalid configuration
    pub fn new(config: MapperConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Heatmap at the configured resolution and method
    pub fn generate_heatmap(
        &self,
        samples: &[SpatialSample],
        bounds: &AreaBounds,
    ) -> AnalysisResult<Heatmap> {
        self.generate_heatmap_with(samples, bounds, self.config.resolution, self.config.method)
    }

    /// Heatmap with an explicit resolution and method
    ///
    /// Fails on an empty sample set, a non-positive resolution or bounds
    /// without area. Samples lacking a location or any reading are ignored;
    /// if none remain every cell holds the -100 dBm sentinel.
    pub fn generate_heatmap_with(
        &self,
        samples: &[SpatialSample],
        bounds: &AreaBounds,
        resolution: f64,
        method: InterpolationMethod,
    ) -> AnalysisResult<Heatmap> {
        validation::check_non_empty(samples)?;

        let known = KnownPoint::collect(samples);
        if known.is_empty() {
            log_warn!("none of {} samples is usable, heatmap will be all sentinel", samples.len());
        } else if known.len() < samples.len() {
            log_debug!(
                "{} of {} samples lack a location or reading",
                samples.len() - known.len(),
                samples.len()
            );
        }

        Heatmap::interpolate(&known, bounds, resolution, method, self.config.idw_power, samples.len())
    }

    /// Heatmap from the samples taken on `floor`
    ///
    /// Samples without a floor are kept, since they apply to every level.
    pub fn generate_heatmap_for_floor(
        &self,
        samples: &[SpatialSample],
        bounds: &AreaBounds,
        floor: i32,
    ) -> AnalysisResult<Heatmap> {
        let on_floor: Vec<SpatialSample> = samples
            .iter()
            .filter(|s| s.floor().map_or(true, |f| f == floor))
            .cloned()
            .collect();

        log_debug!("floor {}: {} of {} samples", floor, on_floor.len(), samples.len());
        self.generate_heatmap(&on_floor, bounds)
    }

    /// Estimate RSSI at a point in normalized survey space
    ///
    /// Never fails: without usable samples the -100 dBm sentinel is returned.
    pub fn predict_signal_strength(&self, samples: &[SpatialSample], point: NormalizedPoint) -> Dbm {
        let known = KnownPoint::collect(samples);
        interpolation::estimate(self.config.method, self.config.idw_power, &known, point)
    }

    /// Heatmap plus per-tier classification and overall grade
    pub fn generate_coverage_map(
        &self,
        samples: &[SpatialSample],
        bounds: &AreaBounds,
    ) -> AnalysisResult<CoverageMap> {
        let heatmap = self.generate_heatmap(samples, bounds)?;
        Ok(CoverageMap::from_heatmap(heatmap))
    }

    /// Dead zones below the configured threshold, largest first
    pub fn identify_dead_zones(
        &self,
        samples: &[SpatialSample],
        bounds: &AreaBounds,
    ) -> AnalysisResult<Vec<DeadZone>> {
        self.identify_dead_zones_below(samples, bounds, self.config.dead_zone_threshold)
    }

    /// Dead zones below an explicit threshold, largest first
    pub fn identify_dead_zones_below(
        &self,
        samples: &[SpatialSample],
        bounds: &AreaBounds,
        threshold: Dbm,
    ) -> AnalysisResult<Vec<DeadZone>> {
        let heatmap = self.generate_heatmap(samples, bounds)?;
        Ok(dead_zone::find_dead_zones(&heatmap, threshold))
    }
}
