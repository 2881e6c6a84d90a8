//! Real-time to in-game time conversion.
//!
//! The game clock runs at RATIO x real time, shifted by the world's base
//! timezone. Two clocks ("left" and "right") are derived from every real
//! instant; the right one is a further 12 in-game hours ahead.

use crate::{
    clock::ClockSource,
    types::{GameMillis, RealMillis, DAY_MS, RATIO, TIMEZONE_OFFSET_MS, VARIANT_OFFSET_MS},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVariant {
    /// The "left" clock.
    Primary,
    /// The "right" clock, 12 in-game hours out of phase with Primary.
    Secondary,
}

impl GameVariant {
    pub const ALL: [GameVariant; 2] = [GameVariant::Primary, GameVariant::Secondary];

    pub fn offset_ms(self) -> i64 {
        match self {
            GameVariant::Primary   => TIMEZONE_OFFSET_MS,
            GameVariant::Secondary => TIMEZONE_OFFSET_MS + VARIANT_OFFSET_MS,
        }
    }

    pub fn side(self) -> &'static str {
        match self {
            GameVariant::Primary   => "left",
            GameVariant::Secondary => "right",
        }
    }
}

/// A time of day on the in-game clock, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameTimeOfDay {
    millis: GameMillis,
}

impl GameTimeOfDay {
    /// Build from in-game milliseconds. Values outside one day wrap;
    /// sub-second precision is dropped.
    pub fn from_millis(millis: GameMillis) -> Self {
        let wrapped = millis.rem_euclid(DAY_MS);
        Self { millis: wrapped - wrapped % 1000 }
    }

    pub fn millis_of_day(self) -> GameMillis {
        self.millis
    }

    fn total_seconds(self) -> i64 {
        self.millis / 1000
    }

    pub fn hours(self) -> i64 {
        self.total_seconds() / 3600
    }

    pub fn minutes(self) -> i64 {
        (self.total_seconds() / 60) % 60
    }

    pub fn seconds(self) -> i64 {
        self.total_seconds() % 60
    }

    /// Fractional minute of day in `[0, 1440)`.
    pub fn minute_of_day(self) -> f64 {
        self.total_seconds() as f64 / 60.0
    }
}

impl fmt::Display for GameTimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
    }
}

impl Serialize for GameTimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Untruncated in-game milliseconds for a real instant.
/// Computed in i128 so every i64 instant is accepted.
pub fn game_millis(instant: RealMillis, variant: GameVariant) -> GameMillis {
    let scaled = variant.offset_ms() as i128 + instant as i128 * RATIO as i128;
    scaled.rem_euclid(DAY_MS as i128) as GameMillis
}

pub fn convert_to_game_time(instant: RealMillis, variant: GameVariant) -> GameTimeOfDay {
    GameTimeOfDay::from_millis(game_millis(instant, variant))
}

/// In-game time for the clock's current instant.
pub fn current_game_time(clock: &dyn ClockSource, variant: GameVariant) -> GameTimeOfDay {
    convert_to_game_time(clock.now_millis(), variant)
}
