//! Dead-Zone Extraction by Flood Fill
//!
//! ## Overview
//!
//! A dead zone is a contiguous patch of the heatmap where the estimated
//! signal is too weak to use. Finding them is connected-component labelling
//! over the cells strictly below a threshold.
//!
//! ## Algorithm
//!
//! 1. **Scan**: visit cells row by row. An unvisited cell below the
//!    threshold seeds a new region.
//! 2. **Grow**: breadth-first search from the seed over the 4-neighbourhood
//!    (no diagonals), using an explicit queue and a visited mask shaped like
//!    the grid. No recursion, so grid size is limited only by memory.
//! 3. **Filter**: regions under four cells are dropped as interpolation
//!    noise.
//! 4. **Summarise**: mean and worst RSSI, physical area, bounding box,
//!    centroid and severity.
//! 5. **Order**: largest region first; equal sizes keep discovery order.
//!
//! Every below-threshold cell is visited exactly once, so regions are
//! disjoint and their union is every below-threshold cell that belongs to a
//! component of at least four cells.
//!
//! ## Severity
//!
//! ```text
//! worst < -95 dBm and area > 10  → Critical
//! worst < -90 dBm or  area > 20  → High
//! area > 5                       → Medium
//! otherwise                      → Low
//! ```

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use airgauge_core::{
    constants::coverage::{
        CRITICAL_AREA, CRITICAL_WORST_RSSI_DBM, HIGH_AREA, HIGH_WORST_RSSI_DBM, MEDIUM_AREA,
        MIN_DEAD_ZONE_CELLS,
    },
    log_debug, Dbm,
};

use crate::heatmap::{GridCell, Heatmap};

/// How badly a dead zone hurts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Small pocket of weak signal
    Low,
    /// Noticeable area of weak signal
    Medium,
    /// Large or very weak area
    High,
    /// Large and very weak, needs an extra AP
    Critical,
}

impl Severity {
    /// Classify from the worst RSSI in the zone and its area
    pub fn classify(worst_rssi: Dbm, area: f64) -> Self {
        if worst_rssi < CRITICAL_WORST_RSSI_DBM && area > CRITICAL_AREA {
            Severity::Critical
        } else if worst_rssi < HIGH_WORST_RSSI_DBM || area > HIGH_AREA {
            Severity::High
        } else if area > MEDIUM_AREA {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        })
    }
}

/// A connected region of cells below the dead-zone threshold
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadZone {
    /// Member cells in discovery (breadth-first) order
    pub cells: Vec<GridCell>,
    /// Mean RSSI over the member cells (dBm)
    pub average_rssi: f64,
    /// Weakest RSSI in the zone (dBm)
    pub worst_rssi: Dbm,
    /// Cell count × resolution²
    pub area: f64,
    /// Lower-left and upper-right member cells of the enclosing box
    pub bounding_box: (GridCell, GridCell),
    /// Mean position of the member cells, in bounds space
    pub centroid: (f64, f64),
    /// Severity derived from worst RSSI and area
    pub severity: Severity,
}

impl DeadZone {
    /// Number of member cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `cell` belongs to the zone
    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    fn summarise(cells: Vec<GridCell>, heatmap: &Heatmap) -> Self {
        let mut sum = 0.0;
        let mut worst = Dbm::MAX;
        let mut min_cell = GridCell::new(usize::MAX, usize::MAX);
        let mut max_cell = GridCell::new(0, 0);
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;

        for &cell in &cells {
            // Members come from the heatmap itself, so the lookup always succeeds
            let rssi = heatmap.value_at(cell).unwrap_or(Dbm::MIN);
            sum += rssi as f64;
            worst = worst.min(rssi);

            min_cell.x = min_cell.x.min(cell.x);
            min_cell.y = min_cell.y.min(cell.y);
            max_cell.x = max_cell.x.max(cell.x);
            max_cell.y = max_cell.y.max(cell.y);

            let (px, py) = heatmap.cell_center(cell);
            sum_x += px;
            sum_y += py;
        }

        let n = cells.len() as f64;
        let area = n * heatmap.resolution() * heatmap.resolution();

        Self {
            average_rssi: sum / n,
            worst_rssi: worst,
            area,
            bounding_box: (min_cell, max_cell),
            centroid: (sum_x / n, sum_y / n),
            severity: Severity::classify(worst, area),
            cells,
        }
    }
}

/// Extract every dead zone of at least four cells, largest first
///
/// Cells strictly below `threshold` are candidates.
pub fn find_dead_zones(heatmap: &Heatmap, threshold: Dbm) -> Vec<DeadZone> {
    let width = heatmap.width();
    let height = heatmap.height();
    let rows = heatmap.rows();

    let mut visited = vec![vec![false; width]; height];
    let mut zones: Vec<DeadZone> = Vec::new();
    let mut discarded = 0usize;
    let mut queue: VecDeque<GridCell> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if visited[y][x] || rows[y][x] >= threshold {
                continue;
            }

            // Grow a region from this seed
            let mut members = Vec::new();
            visited[y][x] = true;
            queue.push_back(GridCell::new(x, y));

            while let Some(cell) = queue.pop_front() {
                members.push(cell);

                for (nx, ny) in neighbours(cell, width, height) {
                    if !visited[ny][nx] && rows[ny][nx] < threshold {
                        visited[ny][nx] = true;
                        queue.push_back(GridCell::new(nx, ny));
                    }
                }
            }

            if members.len() >= MIN_DEAD_ZONE_CELLS {
                zones.push(DeadZone::summarise(members, heatmap));
            } else {
                discarded += 1;
            }
        }
    }

    // Stable sort keeps discovery order among equal sizes
    zones.sort_by(|a, b| b.cell_count().cmp(&a.cell_count()));

    log_debug!(
        "found {} dead zones below {} dBm ({} regions under {} cells discarded)",
        zones.len(),
        threshold,
        discarded,
        MIN_DEAD_ZONE_CELLS
    );

    zones
}

/// In-grid 4-neighbours of a cell
fn neighbours(cell: GridCell, width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    let GridCell { x, y } = cell;
    let left = x.checked_sub(1).map(|nx| (nx, y));
    let right = (x + 1 < width).then(|| (x + 1, y));
    let down = y.checked_sub(1).map(|ny| (x, ny));
    let up = (y + 1 < height).then(|| (x, y + 1));
    [left, right, down, up].into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterpolationMethod;
    use crate::interpolation::KnownPoint;
    use airgauge_core::{AreaBounds, NormalizedPoint};

    /// Build a heatmap whose cells equal the nearest of the given points,
    /// placing one known point at the centre of every grid cell
    fn grid_heatmap(rows: &[&[Dbm]], resolution: f64) -> Heatmap {
        let height = rows.len();
        let width = rows[0].len();
        let mut known = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let nx = if width > 1 { x as f64 / (width - 1) as f64 } else { 0.5 };
                let ny = if height > 1 { y as f64 / (height - 1) as f64 } else { 0.5 };
                known.push(KnownPoint { point: NormalizedPoint::new(nx, ny), rssi: v });
            }
        }
        let bounds = AreaBounds::new(
            0.0,
            0.0,
            (width - 1).max(1) as f64 * resolution,
            (height - 1).max(1) as f64 * resolution,
        )
        .unwrap();
        let map = Heatmap::interpolate(
            &known,
            &bounds,
            resolution,
            InterpolationMethod::NearestNeighbor,
            2.0,
            known.len(),
        )
        .unwrap();
        assert_eq!((map.width(), map.height()), (width, height));
        map
    }

    #[test]
    fn severity_classification() {
        assert_eq!(Severity::classify(-100, 12.0), Severity::Critical);
        assert_eq!(Severity::classify(-100, 8.0), Severity::High);
        assert_eq!(Severity::classify(-88, 25.0), Severity::High);
        assert_eq!(Severity::classify(-88, 6.0), Severity::Medium);
        assert_eq!(Severity::classify(-88, 5.0), Severity::Low);
        assert_eq!(Severity::classify(-95, 12.0), Severity::High);
    }

    #[test]
    fn single_region_summary() {
        let map = grid_heatmap(
            &[
                &[-60, -60, -60, -60],
                &[-60, -90, -92, -60],
                &[-60, -88, -96, -60],
                &[-60, -60, -60, -60],
            ],
            2.0,
        );

        let zones = find_dead_zones(&map, -85);
        assert_eq!(zones.len(), 1);

        let zone = &zones[0];
        assert_eq!(zone.cell_count(), 4);
        assert_eq!(zone.worst_rssi, -96);
        assert_eq!(zone.average_rssi, -91.5);
        assert_eq!(zone.area, 16.0);
        assert_eq!(zone.bounding_box, (GridCell::new(1, 1), GridCell::new(2, 2)));
        assert_eq!(zone.centroid, (3.0, 3.0));
        assert_eq!(zone.severity, Severity::Critical);
        assert!(zone.contains(GridCell::new(2, 2)));
        assert!(!zone.contains(GridCell::new(0, 0)));
    }

    #[test]
    fn small_regions_are_discarded() {
        let map = grid_heatmap(
            &[
                &[-90, -90, -60, -60, -60],
                &[-60, -90, -60, -95, -60],
                &[-60, -60, -60, -60, -60],
            ],
            1.0,
        );
        assert!(find_dead_zones(&map, -85).is_empty());
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let map = grid_heatmap(
            &[
                &[-90, -60, -90, -60],
                &[-60, -90, -60, -90],
                &[-90, -60, -90, -60],
                &[-60, -90, -60, -90],
            ],
            1.0,
        );
        assert!(find_dead_zones(&map, -85).is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        let map = grid_heatmap(&[&[-85, -85], &[-85, -85]], 1.0);
        assert!(find_dead_zones(&map, -85).is_empty());
        assert_eq!(find_dead_zones(&map, -84).len(), 1);
    }

    #[test]
    fn zones_ordered_largest_first() {
        let map = grid_heatmap(
            &[
                &[-90, -90, -60, -99, -99, -99],
                &[-90, -90, -60, -99, -99, -99],
                &[-60, -60, -60, -60, -60, -60],
                &[-91, -91, -91, -91, -91, -60],
            ],
            1.0,
        );

        let zones = find_dead_zones(&map, -85);
        let sizes: Vec<usize> = zones.iter().map(|z| z.cell_count()).collect();
        assert_eq!(sizes, vec![6, 5, 4]);
        assert_eq!(zones[0].worst_rssi, -99);
        assert_eq!(zones[1].worst_rssi, -91);
        assert_eq!(zones[2].worst_rssi, -90);
    }

    #[test]
    fn snake_region_is_one_zone() {
        let map = grid_heatmap(
            &[
                &[-90, -90, -90, -90],
                &[-60, -60, -60, -90],
                &[-90, -90, -90, -90],
            ],
            1.0,
        );
        let zones = find_dead_zones(&map, -85);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].cell_count(), 9);
    }
}
