//! Shared primitive types and fixed constants of the in-game clock.

/// Real-world milliseconds since 1970-01-01T00:00:00Z.
pub type RealMillis = i64;

/// In-game milliseconds into the current 24-hour cycle. Always in `[0, DAY_MS)`.
pub type GameMillis = i64;

/// In-game milliseconds advanced per real millisecond.
pub const RATIO: i64 = 7;

/// One 24-hour cycle in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Base timezone of the game world (UTC+3).
pub const TIMEZONE_OFFSET_MS: i64 = 10_800_000;

/// Extra phase shift applied to the right-hand clock.
pub const VARIANT_OFFSET_MS: i64 = 43_200_000;

pub const MINUTES_PER_DAY: f64 = 1440.0;
