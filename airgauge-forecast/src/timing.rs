//! Connection timing recommendation
//!
//! Forecasts the AP's signal for every whole hour of the look-ahead window,
//! then applies a fixed policy, first match wins:
//!
//! 1. best hour beats the current signal by 10 dB or more: wait for it
//! 2. current signal is -60 dBm or better: connect now
//! 3. worst hour is 10 dB or more below the current signal: connect now,
//!    before the window closes
//! 4. otherwise timing does not matter
//!
//! The current signal is the latest reading in the history.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use airgauge_core::{
    constants::forecast::{CONNECT_NOW_RSSI_DBM, URGENT_DEGRADATION_DB, WAIT_IMPROVEMENT_DB},
    time::hours_to_ms,
    types::clamp_rssi,
    validation, AnalysisError, AnalysisResult, Dbm, Timestamp,
};

use crate::config::PredictorConfig;
use crate::history::ApHistory;
use crate::signal::predict_ap_signal_strength;

/// What the client should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionAction {
    /// Connect immediately
    ConnectNow,
    /// Hold off until the best hour
    Wait,
    /// No strong reason either way
    Flexible,
}

/// Why the action was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimingReason {
    /// Signal is forecast to improve substantially
    SignalImproving,
    /// Signal is already strong
    StrongSignalNow,
    /// Signal is forecast to fall substantially
    SignalDegrading,
    /// No significant change forecast
    NoClearTrend,
}

impl TimingReason {
    /// Human-readable explanation
    pub fn description(&self) -> &'static str {
        match self {
            TimingReason::SignalImproving => "signal expected to improve by 10 dB or more",
            TimingReason::StrongSignalNow => "current signal is already strong",
            TimingReason::SignalDegrading => "signal expected to degrade, connect while it lasts",
            TimingReason::NoClearTrend => "no significant change expected",
        }
    }
}

impl fmt::Display for TimingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Forecast for one hour of the look-ahead window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourlyForecast {
    /// Hours after `now`, starting at 1
    pub hour: u32,
    /// Instant of the forecast
    pub target_time: Timestamp,
    /// Forecast RSSI (dBm)
    pub predicted_rssi: Dbm,
}

/// Recommended time to connect to an AP
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionTiming {
    /// Station the recommendation is for
    pub station_id: String,
    /// Latest observed RSSI (dBm)
    pub current_rssi: Dbm,
    /// One forecast per hour of the look-ahead window
    pub hourly: Vec<HourlyForecast>,
    /// Hour with the strongest forecast (earliest on ties)
    pub best: HourlyForecast,
    /// Hour with the weakest forecast (earliest on ties)
    pub worst: HourlyForecast,
    /// Recommended action
    pub action: ConnectionAction,
    /// Why
    pub reason: TimingReason,
    /// When to connect
    pub recommended_time: Timestamp,
}

/// Recommend when to connect to an AP within the next `look_ahead_hours`
///
/// Fails on an empty history, a zero look-ahead, or a look-ahead longer than
/// the configured maximum horizon.
pub fn recommend_optimal_connection_time(
    history: &ApHistory,
    look_ahead_hours: u32,
    now: Timestamp,
    config: &PredictorConfig,
) -> AnalysisResult<ConnectionTiming> {
    if look_ahead_hours == 0 {
        return Err(AnalysisError::InvalidLookAhead { hours: look_ahead_hours });
    }
    validation::check_horizon(hours_to_ms(look_ahead_hours as u64), config.max_horizon_ms)?;
    let current_rssi = history
        .latest()
        .map(|s| clamp_rssi(s.rssi))
        .ok_or(AnalysisError::EmptySamples)?;

    let mut hourly = Vec::with_capacity(look_ahead_hours as usize);
    for hour in 1..=look_ahead_hours {
        let prediction = predict_ap_signal_strength(history, hours_to_ms(hour as u64), now, config)?;
        hourly.push(HourlyForecast {
            hour,
            target_time: prediction.target_time,
            predicted_rssi: prediction.predicted_rssi,
        });
    }

    // Strict comparisons keep the earliest hour on ties
    let mut best = hourly[0];
    let mut worst = hourly[0];
    for forecast in &hourly[1..] {
        if forecast.predicted_rssi > best.predicted_rssi {
            best = *forecast;
        }
        if forecast.predicted_rssi < worst.predicted_rssi {
            worst = *forecast;
        }
    }

    let (action, reason) = if best.predicted_rssi - current_rssi >= WAIT_IMPROVEMENT_DB {
        (ConnectionAction::Wait, TimingReason::SignalImproving)
    } else if current_rssi >= CONNECT_NOW_RSSI_DBM {
        (ConnectionAction::ConnectNow, TimingReason::StrongSignalNow)
    } else if worst.predicted_rssi - current_rssi <= URGENT_DEGRADATION_DB {
        (ConnectionAction::ConnectNow, TimingReason::SignalDegrading)
    } else {
        (ConnectionAction::Flexible, TimingReason::NoClearTrend)
    };

    let recommended_time = match action {
        ConnectionAction::Wait => best.target_time,
        ConnectionAction::ConnectNow | ConnectionAction::Flexible => now,
    };

    Ok(ConnectionTiming {
        station_id: history.station_id().into(),
        current_rssi,
        hourly,
        best,
        worst,
        action,
        reason,
        recommended_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use airgauge_core::{constants::time::MS_PER_MINUTE, TemporalSample};

    const START: Timestamp = 1_704_067_200_000;

    /// 30 readings one minute apart, starting at `first` and moving `step_tenths` / 10 dB each
    fn history(first: i32, step_tenths: i32) -> ApHistory {
        let samples = (0..30)
            .map(|i| TemporalSample::new(START + i as u64 * MS_PER_MINUTE, first + step_tenths * i / 10))
            .collect();
        ApHistory::new("ap", samples)
    }

    fn now_of(h: &ApHistory) -> Timestamp {
        h.latest().unwrap().timestamp
    }

    #[test]
    fn improving_signal_waits() {
        // ~+6 dB/hour from -80
        let h = history(-80, 1);
        let t = recommend_optimal_connection_time(&h, 3, now_of(&h), &PredictorConfig::default())
            .unwrap();
        assert_eq!(t.hourly.len(), 3);
        assert_eq!(t.best.hour, 3);
        assert_eq!(t.worst.hour, 1);
        assert_eq!(t.action, ConnectionAction::Wait);
        assert_eq!(t.reason, TimingReason::SignalImproving);
        assert_eq!(t.recommended_time, now_of(&h) + 3 * 3_600_000);
    }

    #[test]
    fn strong_steady_signal_connects_now() {
        let h = history(-55, 0);
        let now = now_of(&h);
        let t = recommend_optimal_connection_time(&h, 6, now, &PredictorConfig::default()).unwrap();
        assert_eq!(t.action, ConnectionAction::ConnectNow);
        assert_eq!(t.reason, TimingReason::StrongSignalNow);
        assert_eq!(t.recommended_time, now);
        // Flat forecast: ties resolve to the first hour
        assert_eq!(t.best.hour, 1);
        assert_eq!(t.worst.hour, 1);
    }

    #[test]
    fn degrading_signal_connects_now() {
        // ~-6 dB/hour from -65
        let h = history(-65, -1);
        let t = recommend_optimal_connection_time(&h, 3, now_of(&h), &PredictorConfig::default())
            .unwrap();
        assert_eq!(t.action, ConnectionAction::ConnectNow);
        assert_eq!(t.reason, TimingReason::SignalDegrading);
        assert_eq!(t.worst.hour, 3);
    }

    #[test]
    fn mediocre_steady_signal_is_flexible() {
        let h = history(-72, 0);
        let t = recommend_optimal_connection_time(&h, 12, now_of(&h), &PredictorConfig::default())
            .unwrap();
        assert_eq!(t.action, ConnectionAction::Flexible);
        assert_eq!(t.reason, TimingReason::NoClearTrend);
        assert_eq!(t.current_rssi, -72);
    }

    #[test]
    fn contract_violations() {
        let h = history(-60, 0);
        let config = PredictorConfig::default();
        assert_eq!(
            recommend_optimal_connection_time(&h, 0, START, &config),
            Err(AnalysisError::InvalidLookAhead { hours: 0 })
        );
        assert!(matches!(
            recommend_optimal_connection_time(&h, 25, START, &config),
            Err(AnalysisError::InvalidHorizon { .. })
        ));

        let empty = ApHistory::new("ap", alloc::vec::Vec::new());
        assert_eq!(
            recommend_optimal_connection_time(&empty, 2, START, &config),
            Err(AnalysisError::EmptySamples)
        );
    }
}
