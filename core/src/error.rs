use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Invalid date values: month must be in 1-12, day must be in 1-31 (got month {month}, day {day})")]
    InvalidDate { month: u32, day: u32 },

    #[error("No such calendar instant: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    NonexistentDateTime {
        year:   i32,
        month:  u32,
        day:    u32,
        hour:   u32,
        minute: u32,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot load config {path}: {reason}")]
    Config { path: String, reason: String },
}

pub type ClockResult<T> = Result<T, ClockError>;
