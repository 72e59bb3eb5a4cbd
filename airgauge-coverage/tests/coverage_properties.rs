//! Property tests for coverage mapping
//!
//! - Every heatmap cell is integer dBm in [-120, 0]
//! - Identical input gives identical output
//! - A single sample paints the whole grid with its value
//! - Dead zones are disjoint and together cover exactly the below-threshold
//!   cells that sit in components of four or more

use std::collections::BTreeSet;

use airgauge_core::{AreaBounds, Location, SpatialSample};
use airgauge_coverage::{CoverageMapper, GridCell, Heatmap, InterpolationMethod, MapperConfig};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = SpatialSample> {
    (0.0f64..=1.0, 0.0f64..=1.0, -120i32..=0)
        .prop_map(|(x, y, rssi)| SpatialSample::single(Location::new(x, y), rssi))
}

fn method_strategy() -> impl Strategy<Value = InterpolationMethod> {
    prop_oneof![
        Just(InterpolationMethod::NearestNeighbor),
        Just(InterpolationMethod::InverseDistance),
        Just(InterpolationMethod::Bilinear),
    ]
}

/// Cells below `threshold` grouped into 4-connected components, by
/// depth-first search with an explicit stack
fn reference_components(heatmap: &Heatmap, threshold: i32) -> Vec<BTreeSet<GridCell>> {
    let rows = heatmap.rows();
    let (w, h) = (heatmap.width(), heatmap.height());
    let mut seen = BTreeSet::new();
    let mut components = Vec::new();

    for (cell, value) in heatmap.cells() {
        if value >= threshold || seen.contains(&cell) {
            continue;
        }
        let mut component = BTreeSet::new();
        let mut stack = vec![cell];
        seen.insert(cell);
        while let Some(c) = stack.pop() {
            component.insert(c);
            let mut next = Vec::new();
            if c.x > 0 {
                next.push(GridCell::new(c.x - 1, c.y));
            }
            if c.x + 1 < w {
                next.push(GridCell::new(c.x + 1, c.y));
            }
            if c.y > 0 {
                next.push(GridCell::new(c.x, c.y - 1));
            }
            if c.y + 1 < h {
                next.push(GridCell::new(c.x, c.y + 1));
            }
            for n in next {
                if rows[n.y][n.x] < threshold && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        components.push(component);
    }
    components
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn heatmap_values_in_domain(
        samples in prop::collection::vec(sample_strategy(), 1..20),
        method in method_strategy(),
        resolution in 0.5f64..4.0,
    ) {
        let bounds = AreaBounds::new(0.0, 0.0, 12.0, 8.0).unwrap();
        let mapper = CoverageMapper::new(MapperConfig::with_resolution(resolution).method(method)).unwrap();
        let map = mapper.generate_heatmap(&samples, &bounds).unwrap();

        prop_assert_eq!(map.rows().len(), map.height());
        for (_, v) in map.cells() {
            prop_assert!((-120..=0).contains(&v));
        }

        let again = mapper.generate_heatmap(&samples, &bounds).unwrap();
        prop_assert_eq!(map, again);
    }

    #[test]
    fn single_sample_fills_grid(
        sample in sample_strategy(),
        method in method_strategy(),
    ) {
        let bounds = AreaBounds::new(-3.0, -3.0, 3.0, 3.0).unwrap();
        let mapper = CoverageMapper::new(MapperConfig::default().method(method)).unwrap();
        let expected = sample.strongest_rssi().unwrap();
        let map = mapper.generate_heatmap(&[sample], &bounds).unwrap();
        prop_assert!(map.cells().all(|(_, v)| v == expected));
    }

    #[test]
    fn dead_zones_partition_large_components(
        samples in prop::collection::vec(sample_strategy(), 1..12),
        threshold in -110i32..=-40,
    ) {
        let bounds = AreaBounds::new(0.0, 0.0, 15.0, 15.0).unwrap();
        let mapper = CoverageMapper::default();
        let map = mapper.generate_heatmap(&samples, &bounds).unwrap();
        let zones = mapper.identify_dead_zones_below(&samples, &bounds, threshold).unwrap();

        let mut union = BTreeSet::new();
        let mut total = 0;
        for zone in &zones {
            prop_assert!(zone.cell_count() >= 4);
            for &cell in &zone.cells {
                prop_assert!(map.value_at(cell).unwrap() < threshold);
                union.insert(cell);
            }
            total += zone.cell_count();
        }
        // Disjoint: no cell counted twice
        prop_assert_eq!(union.len(), total);

        let expected: BTreeSet<GridCell> = reference_components(&map, threshold)
            .into_iter()
            .filter(|c| c.len() >= 4)
            .flatten()
            .collect();
        prop_assert_eq!(union, expected);

        for pair in zones.windows(2) {
            prop_assert!(pair[0].cell_count() >= pair[1].cell_count());
        }
    }
}
