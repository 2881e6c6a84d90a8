//! Real-world clock sources.
//!
//! RULE: Nothing outside this module reads the system clock.
//! Every operation that needs "now" takes a `&dyn ClockSource`, so the
//! conversion arithmetic stays deterministic under test.

use crate::types::RealMillis;
use chrono::{DateTime, NaiveDate, Utc};

/// Where the current real-world instant comes from.
pub trait ClockSource {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> RealMillis;

    /// The current UTC calendar date.
    fn today(&self) -> NaiveDate {
        DateTime::<Utc>::from_timestamp_millis(self.now_millis())
            .map(|dt| dt.date_naive())
            .unwrap_or_default()
    }
}

/// The host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_millis(&self) -> RealMillis {
        Utc::now().timestamp_millis()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub RealMillis);

impl FixedClock {
    /// Pin the clock to a UTC calendar instant.
    /// Returns None if the fields do not name a real instant.
    pub fn at_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        let dt = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Some(Self(dt.and_utc().timestamp_millis()))
    }

    pub fn advance(&mut self, millis: RealMillis) {
        self.0 += millis;
    }
}

impl ClockSource for FixedClock {
    fn now_millis(&self) -> RealMillis {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_instant() {
        let clock = FixedClock(1_735_905_600_000);
        assert_eq!(clock.now_millis(), 1_735_905_600_000);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
    }

    #[test]
    fn at_utc_matches_epoch_arithmetic() {
        let clock = FixedClock::at_utc(2025, 1, 3, 12, 0, 0).unwrap();
        assert_eq!(clock.0, 1_735_905_600_000);
        assert!(FixedClock::at_utc(2025, 2, 30, 0, 0, 0).is_none());
    }

    #[test]
    fn advance_moves_forward() {
        let mut clock = FixedClock(0);
        clock.advance(1_500);
        assert_eq!(clock.now_millis(), 1_500);
    }

    #[test]
    fn today_before_epoch_is_previous_day() {
        let clock = FixedClock(-1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(1969, 12, 31).unwrap());
    }
}
