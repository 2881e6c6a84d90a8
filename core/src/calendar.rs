//! Reverse conversion: a real calendar date/time to in-game time.
//!
//! Calendar fields are read as UTC. Any of year/month/day left as None
//! falls back to the corresponding field of the clock's current date.

use crate::{
    clock::ClockSource,
    error::{ClockError, ClockResult},
    game_time::{convert_to_game_time, GameTimeOfDay, GameVariant},
    types::RealMillis,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealDateTime {
    pub year:   Option<i32>,
    pub month:  Option<u32>,
    pub day:    Option<u32>,
    #[serde(default)]
    pub hour:   u32,
    #[serde(default)]
    pub minute: u32,
}

impl RealDateTime {
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year:  Some(year),
            month: Some(month),
            day:   Some(day),
            ..Self::default()
        }
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    /// Milliseconds since the epoch for this date/time, filling absent
    /// fields from `clock`.
    ///
    /// Month and day are range-checked (1-12, 1-31) before the calendar
    /// is consulted, so `InvalidDate` only reports out-of-range fields.
    /// Combinations such as February 31 pass that check and fail later
    /// as `NonexistentDateTime`.
    pub fn resolve(&self, clock: &dyn ClockSource) -> ClockResult<RealMillis> {
        let today = clock.today();
        let year = self.year.unwrap_or_else(|| today.year());
        let month = self.month.unwrap_or_else(|| today.month());
        let day = self.day.unwrap_or_else(|| today.day());

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(ClockError::InvalidDate { month, day });
        }

        let nonexistent = || ClockError::NonexistentDateTime {
            year,
            month,
            day,
            hour: self.hour,
            minute: self.minute,
        };
        let dt = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(nonexistent)?
            .and_hms_opt(self.hour, self.minute, 0)
            .ok_or_else(nonexistent)?;

        Ok(dt.and_utc().timestamp_millis())
    }
}

pub fn real_time_to_game_time(
    when: &RealDateTime,
    variant: GameVariant,
    clock: &dyn ClockSource,
) -> ClockResult<GameTimeOfDay> {
    let instant = when.resolve(clock)?;
    let game_time = convert_to_game_time(instant, variant);
    log::debug!("real {when:?} -> instant {instant} -> {} {game_time}", variant.side());
    Ok(game_time)
}
