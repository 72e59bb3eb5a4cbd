//! Summary statistics over RSSI histories
//!
//! Population statistics (divide by `n`), matching how scan histories are
//! treated as the complete record of what was observed rather than a sample
//! drawn from a larger population.

use crate::types::{Dbm, TemporalSample};

/// Statistics for a sequence of RSSI readings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStats {
    /// Number of readings
    pub count: usize,
    /// Mean RSSI (dBm)
    pub mean: f64,
    /// Population standard deviation (dB)
    pub std_dev: f64,
    /// Weakest reading (dBm)
    pub min: Dbm,
    /// Strongest reading (dBm)
    pub max: Dbm,
}

impl SampleStats {
    /// Compute statistics over raw RSSI values
    ///
    /// Returns `None` for an empty input.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Dbm>,
        I::IntoIter: Clone,
    {
        let iter = values.into_iter();

        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = Dbm::MAX;
        let mut max = Dbm::MIN;
        for v in iter.clone() {
            count += 1;
            sum += v as f64;
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return None;
        }

        let mean = sum / count as f64;
        let variance = iter
            .map(|v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            mean,
            std_dev: libm::sqrt(variance),
            min,
            max,
        })
    }

    /// Compute statistics over a temporal history
    pub fn from_samples(samples: &[TemporalSample]) -> Option<Self> {
        Self::from_values(samples.iter().map(|s| s.rssi))
    }
}
