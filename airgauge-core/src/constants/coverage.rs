//! Coverage Mapping Parameters
//!
//! Grid, interpolation and dead-zone constants used by the coverage mapper.

// ===== GRID & INTERPOLATION =====

/// Default grid cell size, in the units of the area bounds (usually metres).
pub const DEFAULT_GRID_RESOLUTION: f64 = 1.0;

/// Default inverse-distance-weighting exponent.
///
/// Power 2 is the classic Shepard weighting: influence falls off with the
/// square of distance, matching free-space path loss.
pub const DEFAULT_IDW_POWER: f64 = 2.0;

/// Distance (normalized units) below which a sample counts as coincident.
///
/// Inside this radius IDW returns the sample value directly instead of
/// dividing by a vanishing distance.
pub const COINCIDENT_DISTANCE: f64 = 0.01;

/// Normalized coordinate used when a grid axis has a single cell.
pub const CENTER_COORDINATE: f64 = 0.5;

// ===== COVERAGE SUMMARY =====

/// Share of Excellent cells (%) for an overall Excellent rating.
pub const OVERALL_EXCELLENT_PCT: f64 = 80.0;

/// Share of Good-or-better cells (%) for an overall Good rating.
pub const OVERALL_GOOD_PCT: f64 = 70.0;

/// Coverage percentage needed for an overall Fair rating.
pub const OVERALL_FAIR_PCT: f64 = 60.0;

// ===== DEAD ZONES =====

/// Smallest region (in cells) reported as a dead zone.
///
/// Smaller pockets are interpolation noise rather than real coverage holes.
pub const MIN_DEAD_ZONE_CELLS: usize = 4;

/// Worst-RSSI bound for Critical severity (dBm).
pub const CRITICAL_WORST_RSSI_DBM: i32 = -95;

/// Area (square units) above which a very weak zone becomes Critical.
pub const CRITICAL_AREA: f64 = 10.0;

/// Worst-RSSI bound for High severity (dBm).
pub const HIGH_WORST_RSSI_DBM: i32 = -90;

/// Area above which any zone is High severity.
pub const HIGH_AREA: f64 = 20.0;

/// Area above which any zone is at least Medium severity.
pub const MEDIUM_AREA: f64 = 5.0;
