//! Day/night classification and phase countdowns.
//!
//! Night is minute-of-day [1380, 1440) plus [0, 240), i.e. 23:00 to 04:00.
//! Every window check goes through `MinuteInterval::contains`.
//!
//! The three windows do not share edge rules:
//!   - NIGHT_WINDOWS are half-open, so 04:00:00 is day.
//!   - DAY_WINDOW is closed at both ends, so 04:00:00 and 23:00:00 both
//!     have a "time until night starts" (the latter is 00:00).
//!   - NIGHT_CARRY_WINDOW is closed at 24:00, which only a literal
//!     "24:00:00" input can reach.
//!
//! Countdowns are in real time: remaining in-game minutes / RATIO.

use crate::types::RATIO;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteInterval {
    pub start:         f64,
    pub end:           f64,
    pub end_inclusive: bool,
}

impl MinuteInterval {
    pub const fn half_open(start: f64, end: f64) -> Self {
        Self { start, end, end_inclusive: false }
    }

    pub const fn closed(start: f64, end: f64) -> Self {
        Self { start, end, end_inclusive: true }
    }

    pub fn contains(&self, minute: f64) -> bool {
        minute >= self.start && (minute < self.end || (self.end_inclusive && minute == self.end))
    }
}

pub const NIGHT_START: f64 = 1380.0;
pub const NIGHT_END: f64 = 240.0;

pub const NIGHT_WINDOWS: [MinuteInterval; 2] = [
    MinuteInterval::half_open(NIGHT_START, 1440.0),
    MinuteInterval::half_open(0.0, NIGHT_END),
];

pub const DAY_WINDOW: MinuteInterval = MinuteInterval::closed(NIGHT_END, NIGHT_START);

/// Positions counted as "minute 0 plus a carried hour" when counting
/// down to dawn.
pub const NIGHT_CARRY_WINDOW: MinuteInterval = MinuteInterval::closed(NIGHT_START, 1440.0);

const CARRY_MINUTES: f64 = 60.0;

/// Fractional minute of day from an `HH:MM:SS` string.
///
/// Requires exactly three colon-separated integers. Field ranges are not
/// checked, so "24:00:00" yields 1440.
pub fn parse_minute_of_day(t: &str) -> Option<f64> {
    let mut fields = t.split(':').map(|f| f.trim().parse::<i64>());
    let hours = fields.next()?.ok()?;
    let minutes = fields.next()?.ok()?;
    let seconds = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(hours as f64 * 60.0 + minutes as f64 + seconds as f64 / 60.0)
}

pub fn in_night_window(minute: f64) -> bool {
    NIGHT_WINDOWS.iter().any(|w| w.contains(minute))
}

/// None if `t` is not a valid time string.
pub fn is_night_time(t: &str) -> Option<bool> {
    parse_minute_of_day(t).map(in_night_window)
}

/// Real-world time left until the next phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours:   i64,
    pub minutes: i64,
}

impl Countdown {
    /// Floor-decompose in-game minutes into real hours and minutes.
    /// Negative inputs keep a non-negative minutes field ("-2:51").
    pub fn from_game_minutes(game_minutes: f64) -> Self {
        let real = game_minutes / RATIO as f64;
        Self {
            hours:   real.div_euclid(60.0) as i64,
            minutes: real.rem_euclid(60.0) as i64,
        }
    }

    pub fn total_minutes(self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl Serialize for Countdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn game_minutes_until_dawn(minute: f64) -> f64 {
    let (position, carry) = if NIGHT_CARRY_WINDOW.contains(minute) {
        (0.0, CARRY_MINUTES)
    } else {
        (minute, 0.0)
    };
    NIGHT_END - position + carry
}

/// Time until 04:00. Not restricted to night: during the day the result
/// is negative.
pub fn time_until_night_ends(t: &str) -> Option<Countdown> {
    parse_minute_of_day(t).map(|m| Countdown::from_game_minutes(game_minutes_until_dawn(m)))
}

/// Time until 23:00, or None outside DAY_WINDOW.
pub fn time_until_night_starts(t: &str) -> Option<Countdown> {
    let minute = parse_minute_of_day(t)?;
    DAY_WINDOW
        .contains(minute)
        .then(|| Countdown::from_game_minutes(NIGHT_START - minute))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCountdown {
    pub is_night:  bool,
    /// None when the time sits outside both windows ("24:00:00", "25:00:00").
    pub countdown: Option<Countdown>,
}

pub fn get_phase_countdown(t: &str) -> Option<PhaseCountdown> {
    let is_night = is_night_time(t)?;
    let countdown = if is_night {
        time_until_night_ends(t)
    } else {
        time_until_night_starts(t)
    };
    Some(PhaseCountdown { is_night, countdown })
}
