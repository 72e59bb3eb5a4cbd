//! Coverage summary of a heatmap
//!
//! Classifies every cell into a [`SignalQuality`] tier and grades the area
//! from the tier shares:
//!
//! ```text
//! coverage %        = (excellent + good + fair) / total × 100
//! ≥ 80% excellent   → Excellent
//! ≥ 70% good+better → Good
//! ≥ 60% coverage    → Fair
//! otherwise         → Poor
//! ```

use airgauge_core::{CoverageGrade, SignalQuality};

use crate::heatmap::Heatmap;

/// Number of cells in each quality tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierCounts {
    /// Cells at -50 dBm or stronger
    pub excellent: usize,
    /// Cells from -60 to -51 dBm
    pub good: usize,
    /// Cells from -70 to -61 dBm
    pub fair: usize,
    /// Cells from -85 to -71 dBm
    pub poor: usize,
    /// Cells below -85 dBm
    pub none: usize,
}

impl TierCounts {
    /// Count one more cell in `tier`
    fn record(&mut self, tier: SignalQuality) {
        match tier {
            SignalQuality::Excellent => self.excellent += 1,
            SignalQuality::Good => self.good += 1,
            SignalQuality::Fair => self.fair += 1,
            SignalQuality::Poor => self.poor += 1,
            SignalQuality::None => self.none += 1,
        }
    }

    /// Cells in a given tier
    pub fn get(&self, tier: SignalQuality) -> usize {
        match tier {
            SignalQuality::Excellent => self.excellent,
            SignalQuality::Good => self.good,
            SignalQuality::Fair => self.fair,
            SignalQuality::Poor => self.poor,
            SignalQuality::None => self.none,
        }
    }

    /// All cells counted
    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor + self.none
    }

    /// Cells better than Poor
    pub fn covered(&self) -> usize {
        self.excellent + self.good + self.fair
    }
}

/// Quality classification of every cell of a heatmap
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageMap {
    /// The heatmap the classification was derived from
    pub heatmap: Heatmap,
    /// Cells per tier
    pub counts: TierCounts,
    /// Share of cells better than Poor, in [0, 100]
    pub coverage_percentage: f64,
    /// Overall grade of the area
    pub overall: CoverageGrade,
}

impl CoverageMap {
    /// Classify every cell of `heatmap`
    pub fn from_heatmap(heatmap: Heatmap) -> Self {
        let mut counts = TierCounts::default();
        for (_, rssi) in heatmap.cells() {
            counts.record(SignalQuality::from_rssi(rssi));
        }

        let coverage_percentage = percentage(counts.covered(), counts.total());
        let overall = CoverageGrade::from_cell_shares(
            percentage(counts.excellent, counts.total()),
            percentage(counts.excellent + counts.good, counts.total()),
            coverage_percentage,
        );

        Self { heatmap, counts, coverage_percentage, overall }
    }

    /// Share of cells in `tier`, in [0, 100]
    pub fn tier_percentage(&self, tier: SignalQuality) -> f64 {
        percentage(self.counts.get(tier), self.counts.total())
    }

    /// Total number of classified cells
    pub fn total_cells(&self) -> usize {
        self.counts.total()
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterpolationMethod;
    use crate::interpolation::KnownPoint;
    use airgauge_core::{AreaBounds, NormalizedPoint};

    fn uniform_map(rssi: i32) -> Heatmap {
        let bounds = AreaBounds::new(0.0, 0.0, 4.0, 4.0).unwrap();
        let points = [KnownPoint { point: NormalizedPoint::new(0.5, 0.5), rssi }];
        Heatmap::interpolate(&points, &bounds, 1.0, InterpolationMethod::InverseDistance, 2.0, 1)
            .unwrap()
    }

    #[test]
    fn uniform_excellent_area() {
        let map = CoverageMap::from_heatmap(uniform_map(-45));
        assert_eq!(map.total_cells(), 25);
        assert_eq!(map.counts.excellent, 25);
        assert_eq!(map.coverage_percentage, 100.0);
        assert_eq!(map.overall, CoverageGrade::Excellent);
        assert_eq!(map.tier_percentage(SignalQuality::Excellent), 100.0);
    }

    #[test]
    fn uniform_poor_area_is_uncovered() {
        let map = CoverageMap::from_heatmap(uniform_map(-80));
        assert_eq!(map.counts.poor, 25);
        assert_eq!(map.coverage_percentage, 0.0);
        assert_eq!(map.overall, CoverageGrade::Poor);
    }

    #[test]
    fn fair_area_grades_fair() {
        let map = CoverageMap::from_heatmap(uniform_map(-65));
        assert_eq!(map.counts.fair, 25);
        assert_eq!(map.coverage_percentage, 100.0);
        assert_eq!(map.overall, CoverageGrade::Fair);
    }

    #[test]
    fn counts_add_up() {
        let mut counts = TierCounts::default();
        for rssi in [-40, -55, -65, -80, -100, -101] {
            counts.record(SignalQuality::from_rssi(rssi));
        }
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.covered(), 3);
        assert_eq!(counts.get(SignalQuality::None), 2);
    }
}
