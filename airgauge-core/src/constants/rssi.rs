//! RSSI Domain and Quality Boundaries
//!
//! Received signal strength is reported by WiFi chipsets as integer dBm.
//! Values outside [-120, 0] are either driver artifacts or unit mix-ups.

// ===== SIGNAL DOMAIN =====

/// Weakest RSSI the engine will ever report (dBm).
///
/// Below the noise floor of every consumer WiFi radio; used as the lower
/// clamp for projections and confidence bounds.
pub const RSSI_MIN_DBM: i32 = -120;

/// Strongest RSSI the engine will ever report (dBm).
pub const RSSI_MAX_DBM: i32 = 0;

/// Sentinel RSSI returned when no estimate can be formed (dBm).
///
/// Returned by interpolation when no sample carries a location or the
/// inverse-distance weights sum to zero. Chosen inside the domain so that
/// heatmap range invariants still hold.
pub const RSSI_SENTINEL_DBM: i32 = -100;

// ===== QUALITY TIERS =====

/// Lower bound of the Excellent tier (dBm).
///
/// Comfortable for high-MCS 802.11ac/ax rates.
pub const EXCELLENT_THRESHOLD_DBM: i32 = -50;

/// Lower bound of the Good tier (dBm).
pub const GOOD_THRESHOLD_DBM: i32 = -60;

/// Lower bound of the Fair tier (dBm).
///
/// Roughly the floor for reliable VoIP and video calls.
pub const FAIR_THRESHOLD_DBM: i32 = -70;

/// Lower bound of the Poor tier (dBm). Anything weaker counts as no coverage.
pub const POOR_THRESHOLD_DBM: i32 = -85;

/// Default dead-zone threshold (dBm). Cells strictly below it are unusable.
pub const DEFAULT_DEAD_ZONE_THRESHOLD_DBM: i32 = -85;

/// Average signal assumed when a coverage forecast has no usable AP projection (dBm).
pub const FALLBACK_AVERAGE_SIGNAL_DBM: f64 = -70.0;
