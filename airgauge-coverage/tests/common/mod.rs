//! Shared survey generators for coverage integration tests
//!
//! Provides:
//! - A deterministic xorshift RNG so failures reproduce
//! - Synthetic surveys of free-space propagation from one or more APs
//! - Helpers to count cells below a threshold for cross-checking

#![allow(dead_code)]

use airgauge_core::{ApObservation, AreaBounds, Dbm, Location, SpatialSample};
use airgauge_coverage::Heatmap;

/// Deterministic xorshift generator
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / 16_777_216.0
    }

    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// An access point placed in normalized survey space
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAp {
    pub x: f64,
    pub y: f64,
    /// RSSI at the reference distance
    pub tx_rssi: f64,
}

impl SimulatedAp {
    pub fn new(x: f64, y: f64, tx_rssi: f64) -> Self {
        Self { x, y, tx_rssi }
    }

    /// Log-distance path loss, exponent 3 (indoor), reference 0.05 units
    pub fn rssi_at(&self, x: f64, y: f64) -> Dbm {
        let d = ((x - self.x).powi(2) + (y - self.y).powi(2)).sqrt().max(0.05);
        let rssi = self.tx_rssi - 30.0 * (d / 0.05).log10();
        rssi.round().clamp(-120.0, 0.0) as Dbm
    }
}

/// Survey generator walking a floor plan
pub struct SurveyGenerator {
    rng: TestRng,
    aps: Vec<SimulatedAp>,
    noise_db: f64,
}

impl SurveyGenerator {
    pub fn new(seed: u32, aps: Vec<SimulatedAp>) -> Self {
        Self { rng: TestRng::new(seed), aps, noise_db: 2.0 }
    }

    /// Noise-free readings
    pub fn without_noise(mut self) -> Self {
        self.noise_db = 0.0;
        self
    }

    /// Sample at a fixed position, one observation per audible AP
    pub fn sample_at(&mut self, x: f64, y: f64) -> SpatialSample {
        let mut observations = Vec::with_capacity(self.aps.len());
        for (i, ap) in self.aps.clone().iter().enumerate() {
            let noise = if self.noise_db > 0.0 {
                self.rng.gen_range(-self.noise_db, self.noise_db)
            } else {
                0.0
            };
            let rssi = (ap.rssi_at(x, y) as f64 + noise).round().clamp(-120.0, 0.0) as Dbm;
            observations.push(ApObservation::new(format!("02:00:00:00:00:{:02x}", i), rssi));
        }
        SpatialSample::new(Location::new(x, y), observations)
    }

    /// Regular walk over an `n × n` lattice
    pub fn lattice(&mut self, n: usize) -> Vec<SpatialSample> {
        let mut samples = Vec::with_capacity(n * n);
        for iy in 0..n {
            for ix in 0..n {
                let x = ix as f64 / (n - 1).max(1) as f64;
                let y = iy as f64 / (n - 1).max(1) as f64;
                samples.push(self.sample_at(x, y));
            }
        }
        samples
    }

    /// Random walk of `count` positions
    pub fn scattered(&mut self, count: usize) -> Vec<SpatialSample> {
        (0..count)
            .map(|_| {
                let x = self.rng.next_f64();
                let y = self.rng.next_f64();
                self.sample_at(x, y)
            })
            .collect()
    }
}

/// 20 m × 20 m office floor
pub fn office_bounds() -> AreaBounds {
    AreaBounds::new(0.0, 0.0, 20.0, 20.0).unwrap()
}

/// Cells strictly below `threshold`
pub fn cells_below(heatmap: &Heatmap, threshold: Dbm) -> usize {
    heatmap.cells().filter(|&(_, v)| v < threshold).count()
}
