//! Grid-Based Coverage Mapping for WiFi Site Surveys
//!
//! ## Overview
//!
//! Turns a handful of point measurements taken during a walk-through into a
//! continuous picture of signal strength across an area, then finds the
//! places where that picture says clients will struggle.
//!
//! ## Processing Stages
//!
//! ```text
//! survey samples ──► interpolation ──► heatmap grid ──┬──► coverage map
//!  (x, y, RSSI)       (NN / IDW)       (dBm per cell) │    (tier counts, grade)
//!                                                     └──► dead zones
//!                                                          (flood fill)
//! ```
//!
//! 1. **Interpolation**: every grid cell is mapped into the normalized
//!    [0,1]×[0,1] survey space and estimated from the samples, either by the
//!    nearest sample or by inverse-distance weighting.
//! 2. **Classification**: each cell gets a [`SignalQuality`] tier; the
//!    per-tier shares grade the whole area.
//! 3. **Region extraction**: cells below a threshold are grouped into
//!    4-connected regions by breadth-first flood fill. Regions smaller than
//!    four cells are dropped as interpolation noise.
//!
//! ## Contracts
//!
//! Only contract violations fail: an empty sample set, a non-positive
//! resolution or bounds without area. Missing locations or vanishing weights
//! produce the -100 dBm sentinel instead.
//!
//! Grid memory is `width × height` cells and is bounded only by the caller's
//! choice of bounds and resolution.
//!
//! ## Example
//!
//! ```
//! use airgauge_core::{AreaBounds, Location, SpatialSample};
//! use airgauge_coverage::{CoverageMapper, MapperConfig};
//!
//! let samples = vec![
//!     SpatialSample::single(Location::new(0.1, 0.1), -45),
//!     SpatialSample::single(Location::new(0.9, 0.9), -92),
//! ];
//! let bounds = AreaBounds::new(0.0, 0.0, 20.0, 20.0)?;
//!
//! let mapper = CoverageMapper::new(MapperConfig::default())?;
//! let heatmap = mapper.generate_heatmap(&samples, &bounds)?;
//! assert_eq!(heatmap.width(), 21);
//!
//! let zones = mapper.identify_dead_zones(&samples, &bounds)?;
//! assert!(zones.iter().all(|z| z.cell_count() >= 4));
//! # Ok::<(), airgauge_core::AnalysisError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod coverage_map;
pub mod dead_zone;
pub mod heatmap;
pub mod interpolation;
pub mod mapper;

pub use airgauge_core::SignalQuality;
pub use config::{InterpolationMethod, MapperConfig};
pub use coverage_map::{CoverageMap, TierCounts};
pub use dead_zone::{DeadZone, Severity};
pub use heatmap::{GridCell, Heatmap, HeatmapStats};
pub use interpolation::{InverseDistance, Interpolator, KnownPoint, NearestNeighbor};
pub use mapper::CoverageMapper;
