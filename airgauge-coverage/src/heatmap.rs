//! Interpolated RSSI Heatmap
//!
//! ## Grid Geometry
//!
//! Cells sit on lattice points spaced `resolution` apart, starting at the
//! bounds' lower-left corner:
//!
//! ```text
//! width  = floor((max_x - min_x) / resolution) + 1
//! height = floor((max_y - min_y) / resolution) + 1
//!
//! bounds (0,0)-(10,10), resolution 5:
//!
//!   y=10  ●───●───●
//!         │   │   │
//!   y=5   ●───●───●        3 × 3 cells
//!         │   │   │
//!   y=0   ●───●───●
//!         0   5   10
//! ```
//!
//! ## Normalized Sampling
//!
//! Survey samples live in the unit square, not in bounds space. Cell
//! `(gx, gy)` is evaluated at `(gx / (width - 1), gy / (height - 1))`, so the
//! first and last cells of each axis land on the survey's edges. An axis with
//! a single cell is sampled at its centre, 0.5.
//!
//! Values are stored row-major as `values[gy][gx]`.

use alloc::vec;
use alloc::vec::Vec;

use airgauge_core::{
    constants::coverage::CENTER_COORDINATE, log_debug, types::clamp_rssi, validation,
    AnalysisError, AnalysisResult, AreaBounds, Dbm, NormalizedPoint,
};

use crate::config::InterpolationMethod;
use crate::interpolation::{self, KnownPoint};

/// Integer coordinate of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Column, 0 = left
    pub x: usize,
    /// Row, 0 = bottom
    pub y: usize,
}

impl GridCell {
    /// Create a cell coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Summary of the values in a heatmap
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapStats {
    /// Weakest cell (dBm)
    pub min: Dbm,
    /// Strongest cell (dBm)
    pub max: Dbm,
    /// Mean over all cells (dBm)
    pub mean: f64,
}

/// Grid of interpolated RSSI values over an area
///
/// Deserialization re-checks that the grid matches its bounds and
/// resolution, so a decoded heatmap is as safe to index as a computed one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HeatmapFields")
)]
pub struct Heatmap {
    bounds: AreaBounds,
    resolution: f64,
    width: usize,
    height: usize,
    values: Vec<Vec<Dbm>>,
    method: InterpolationMethod,
    sample_count: usize,
}

/// Unchecked wire form of [`Heatmap`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HeatmapFields {
    bounds: AreaBounds,
    resolution: f64,
    width: usize,
    height: usize,
    values: Vec<Vec<Dbm>>,
    method: InterpolationMethod,
    sample_count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<HeatmapFields> for Heatmap {
    type Error = AnalysisError;

    fn try_from(fields: HeatmapFields) -> AnalysisResult<Self> {
        let (width, height) = Self::dimensions(&fields.bounds, fields.resolution)?;
        let rows_match = fields.values.len() == height
            && fields.values.iter().all(|row| row.len() == width);
        if fields.width != width || fields.height != height || !rows_match {
            return Err(AnalysisError::InvalidConfig {
                reason: "heatmap values do not match its bounds and resolution",
            });
        }

        Ok(Self {
            bounds: fields.bounds,
            resolution: fields.resolution,
            width,
            height,
            values: fields.values,
            method: fields.method,
            sample_count: fields.sample_count,
        })
    }
}

impl Heatmap {
    /// Grid dimensions `(width, height)` for an area and cell size
    ///
    /// Contract violations (degenerate bounds, bad resolution) are reported
    /// before any allocation happens.
    pub fn dimensions(bounds: &AreaBounds, resolution: f64) -> AnalysisResult<(usize, usize)> {
        bounds.validate()?;
        validation::check_resolution(resolution)?;

        let width = axis_cells(bounds.width(), resolution)?;
        let height = axis_cells(bounds.height(), resolution)?;
        width
            .checked_mul(height)
            .ok_or(AnalysisError::InvalidResolution { resolution })?;
        Ok((width, height))
    }

    /// Interpolate every cell of the grid from prepared known points
    ///
    /// `sample_count` is the number of survey samples the points came from,
    /// recorded for reporting.
    pub fn interpolate(
        known: &[KnownPoint],
        bounds: &AreaBounds,
        resolution: f64,
        method: InterpolationMethod,
        idw_power: f64,
        sample_count: usize,
    ) -> AnalysisResult<Self> {
        let (width, height) = Self::dimensions(bounds, resolution)?;
        log_debug!(
            "interpolating {}x{} grid from {} located samples ({})",
            width,
            height,
            known.len(),
            method
        );

        let mut values = vec![vec![0; width]; height];
        for (gy, row) in values.iter_mut().enumerate() {
            let ny = normalize(gy, height);
            for (gx, cell) in row.iter_mut().enumerate() {
                let point = NormalizedPoint::new(normalize(gx, width), ny);
                *cell = clamp_rssi(interpolation::estimate(method, idw_power, known, point));
            }
        }

        Ok(Self {
            bounds: *bounds,
            resolution,
            width,
            height,
            values,
            method,
            sample_count,
        })
    }

    /// Area the grid covers
    pub fn bounds(&self) -> &AreaBounds {
        &self.bounds
    }

    /// Cell size
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Interpolation method used to fill the grid
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Number of survey samples supplied
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Rows of values, `rows()[y][x]`
    pub fn rows(&self) -> &[Vec<Dbm>] {
        &self.values
    }

    /// Value of a cell, if it is inside the grid
    pub fn value_at(&self, cell: GridCell) -> Option<Dbm> {
        self.values.get(cell.y)?.get(cell.x).copied()
    }

    /// Iterate over every cell with its value, row by row
    pub fn cells(&self) -> impl Iterator<Item = (GridCell, Dbm)> + '_ {
        self.values.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &v)| (GridCell::new(x, y), v))
        })
    }

    /// Position of a cell in bounds space
    pub fn cell_center(&self, cell: GridCell) -> (f64, f64) {
        (
            self.bounds.min_x + cell.x as f64 * self.resolution,
            self.bounds.min_y + cell.y as f64 * self.resolution,
        )
    }

    /// Min, max and mean over all cells
    pub fn stats(&self) -> HeatmapStats {
        let mut min = Dbm::MAX;
        let mut max = Dbm::MIN;
        let mut sum = 0.0;
        for (_, v) in self.cells() {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
        }

        HeatmapStats {
            min,
            max,
            mean: sum / self.cell_count() as f64,
        }
    }
}

/// Cells along one axis: `floor(extent / resolution) + 1`
///
/// The extent of finite bounds can still overflow (`1e308 - -1e308`), and a
/// tiny resolution can ask for more cells than `usize` holds.
fn axis_cells(extent: f64, resolution: f64) -> AnalysisResult<usize> {
    let steps = libm::floor(extent / resolution);
    if !steps.is_finite() || steps >= usize::MAX as f64 {
        return Err(AnalysisError::InvalidResolution { resolution });
    }
    (steps as usize)
        .checked_add(1)
        .ok_or(AnalysisError::InvalidResolution { resolution })
}

/// Map a grid index onto [0, 1]; single-cell axes map to the centre
fn normalize(index: usize, cells: usize) -> f64 {
    if cells > 1 {
        index as f64 / (cells - 1) as f64
    } else {
        CENTER_COORDINATE
    }
}
