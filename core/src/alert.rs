//! Phase alert gate.
//!
//! The runner polls the gate once per tick with both clocks' night flags.
//! The gate decides whether to ring; how it rings is up to the caller.
//!
//! RULES:
//!   - At most one of Day/Night is armed at a time.
//!   - Day fires while either clock is in daytime.
//!   - Night fires while either clock is at night.
//!   - Consecutive firings are at least `interval_ms` apart.

use crate::types::RealMillis;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALERT_INTERVAL_MS: i64 = 1_500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertMode {
    #[default]
    Off,
    Day,
    Night,
}

#[derive(Debug, Clone)]
pub struct AlertGate {
    pub mode:        AlertMode,
    pub interval_ms: i64,
    last_fired:      Option<RealMillis>,
}

impl Default for AlertGate {
    fn default() -> Self {
        Self::new(AlertMode::Off, DEFAULT_ALERT_INTERVAL_MS)
    }
}

impl AlertGate {
    pub fn new(mode: AlertMode, interval_ms: i64) -> Self {
        Self { mode, interval_ms, last_fired: None }
    }

    /// Arm Day, or disarm it if already armed. Disarms Night.
    pub fn toggle_day(&mut self) {
        self.mode = match self.mode {
            AlertMode::Day => AlertMode::Off,
            _              => AlertMode::Day,
        };
    }

    /// Arm Night, or disarm it if already armed. Disarms Day.
    pub fn toggle_night(&mut self) {
        self.mode = match self.mode {
            AlertMode::Night => AlertMode::Off,
            _                => AlertMode::Night,
        };
    }

    pub fn stop(&mut self) {
        self.mode = AlertMode::Off;
    }

    pub fn last_fired(&self) -> Option<RealMillis> {
        self.last_fired
    }

    /// Returns true if the alert should ring now. Records the firing.
    pub fn poll(&mut self, now_ms: RealMillis, left_is_night: bool, right_is_night: bool) -> bool {
        if let Some(last) = self.last_fired {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }

        let fire = match self.mode {
            AlertMode::Off   => false,
            AlertMode::Day   => !left_is_night || !right_is_night,
            AlertMode::Night => left_is_night || right_is_night,
        };

        if fire {
            log::info!(
                "alert: {:?} condition met (left night={left_is_night}, right night={right_is_night})",
                self.mode
            );
            self.last_fired = Some(now_ms);
        }
        fire
    }

    pub fn status_text(&self) -> &'static str {
        match self.mode {
            AlertMode::Off   => "No alert armed",
            AlertMode::Day   => "Alert armed: day",
            AlertMode::Night => "Alert armed: night",
        }
    }
}
