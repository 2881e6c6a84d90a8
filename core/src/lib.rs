//! In-game clock for a world that runs at 7x real time.
//!
//! Converts real instants to the two in-game clocks, classifies
//! day/night, and counts down (in real time) to the next phase change.

pub mod alert;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod game_time;
pub mod night;
pub mod report;
pub mod types;
