//! Machine-readable snapshot of both in-game clocks.
//!
//! Shape (stable, consumed by scripts):
//!   {"left":  {"time", "is_night", "next_phase", "countdown"},
//!    "right": {...}}

use crate::{
    clock::ClockSource,
    error::ClockResult,
    game_time::{convert_to_game_time, GameTimeOfDay, GameVariant},
    night::{get_phase_countdown, Countdown},
    types::RealMillis,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextPhase {
    Light,
    Night,
}

impl NextPhase {
    pub fn after(is_night: bool) -> Self {
        if is_night { NextPhase::Light } else { NextPhase::Night }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantReport {
    pub time:       GameTimeOfDay,
    pub is_night:   bool,
    pub next_phase: NextPhase,
    pub countdown:  Option<Countdown>,
}

impl VariantReport {
    pub fn for_time(time: GameTimeOfDay) -> Self {
        // A converted time is always in [00:00:00, 23:59:59], so it
        // parses and lands in exactly one phase window.
        let phase = get_phase_countdown(&time.to_string());
        let is_night = phase.map(|p| p.is_night).unwrap_or(false);
        Self {
            time,
            is_night,
            next_phase: NextPhase::after(is_night),
            countdown: phase.and_then(|p| p.countdown),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockReport {
    pub left:  VariantReport,
    pub right: VariantReport,
}

impl ClockReport {
    /// Both variants from a single reading of `clock`.
    pub fn capture(clock: &dyn ClockSource) -> Self {
        Self::at(clock.now_millis())
    }

    pub fn at(instant: RealMillis) -> Self {
        Self {
            left:  VariantReport::for_time(convert_to_game_time(instant, GameVariant::Primary)),
            right: VariantReport::for_time(convert_to_game_time(instant, GameVariant::Secondary)),
        }
    }

    pub fn variant(&self, variant: GameVariant) -> &VariantReport {
        match variant {
            GameVariant::Primary   => &self.left,
            GameVariant::Secondary => &self.right,
        }
    }

    pub fn to_json(&self) -> ClockResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn next_phase_flips_with_night() {
        assert_eq!(NextPhase::after(true), NextPhase::Light);
        assert_eq!(NextPhase::after(false), NextPhase::Night);
    }

    #[test]
    fn report_reads_clock_once_for_both_sides() {
        let report = ClockReport::capture(&FixedClock(1_735_905_600_000));
        assert_eq!(report.left.time.to_string(), "15:00:00");
        assert_eq!(report.right.time.to_string(), "03:00:00");
        assert!(!report.left.is_night);
        assert!(report.right.is_night);
        assert_eq!(report.variant(GameVariant::Secondary), &report.right);
    }
}
