//! Real time -> in-game time conversion properties.
//!
//! Sampled instants come from a fixed-seed PCG stream so any failure
//! reproduces exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use tarkov_clock_core::{
    calendar::{real_time_to_game_time, RealDateTime},
    clock::FixedClock,
    error::ClockError,
    game_time::{convert_to_game_time, game_millis, GameVariant},
    types::{DAY_MS, VARIANT_OFFSET_MS},
};

const SEED: u64 = 0x7A4C_0FF5_E7;
const SAMPLES: usize = 10_000;

fn sample_instants() -> Vec<i64> {
    let mut rng = Pcg64Mcg::seed_from_u64(SEED);
    let mut instants: Vec<i64> = (0..SAMPLES)
        .map(|_| rng.gen_range(-4_000_000_000_000i64..=4_000_000_000_000))
        .collect();
    instants.extend([0, 1, -1, i64::MIN, i64::MAX, 1_735_905_600_000]);
    instants
}

fn assert_clock_shape(s: &str) {
    let bytes = s.as_bytes();
    assert_eq!(bytes.len(), 8, "{s:?} is not HH:MM:SS");
    assert_eq!((bytes[2], bytes[5]), (b':', b':'), "{s:?} is not HH:MM:SS");
    let field = |i: usize| s[i..i + 2].parse::<u32>().expect("two digits");
    assert!(field(0) <= 23, "hours out of range in {s}");
    assert!(field(3) <= 59, "minutes out of range in {s}");
    assert!(field(6) <= 59, "seconds out of range in {s}");
}

#[test]
fn every_instant_formats_as_a_valid_clock() {
    for instant in sample_instants() {
        for variant in GameVariant::ALL {
            assert_clock_shape(&convert_to_game_time(instant, variant).to_string());
        }
    }
}

#[test]
fn right_clock_is_twelve_hours_ahead() {
    for instant in sample_instants() {
        let left = game_millis(instant, GameVariant::Primary);
        let right = game_millis(instant, GameVariant::Secondary);
        assert_eq!(
            (right - left).rem_euclid(DAY_MS),
            VARIANT_OFFSET_MS,
            "variants not 12h apart at instant {instant}"
        );
    }
}

#[test]
fn clocks_advance_seven_times_real_speed() {
    let start = 1_735_905_600_000;
    let a = game_millis(start, GameVariant::Primary);
    let b = game_millis(start + 60_000, GameVariant::Primary);
    assert_eq!((b - a).rem_euclid(DAY_MS), 7 * 60_000);
}

#[test]
fn calendar_conversion_matches_epoch_conversion() {
    let clock = FixedClock(0);
    // (fields, epoch ms computed independently)
    let cases = [
        ((2025, 1, 3, 12, 0), 1_735_905_600_000i64),
        ((2024, 2, 29, 23, 59), 1_709_251_140_000),
        ((1970, 1, 1, 0, 0), 0),
        ((2000, 12, 31, 6, 30), 978_244_200_000),
    ];
    for ((y, m, d, h, min), epoch_ms) in cases {
        let when = RealDateTime::ymd(y, m, d).at(h, min);
        let via_calendar = real_time_to_game_time(&when, GameVariant::Primary, &clock).unwrap();
        assert_eq!(via_calendar, convert_to_game_time(epoch_ms, GameVariant::Primary));
    }
}

#[test]
fn known_calendar_values() {
    let clock = FixedClock(0);
    let leap = RealDateTime::ymd(2024, 2, 29).at(23, 59);
    assert_eq!(
        real_time_to_game_time(&leap, GameVariant::Primary, &clock).unwrap().to_string(),
        "02:53:00"
    );
}

#[test]
fn out_of_range_month_or_day_is_invalid_date() {
    let clock = FixedClock(0);
    for when in [RealDateTime::ymd(2025, 13, 1), RealDateTime::ymd(2025, 1, 32)] {
        let err = real_time_to_game_time(&when, GameVariant::Primary, &clock).unwrap_err();
        assert!(matches!(err, ClockError::InvalidDate { .. }), "got {err:?}");
    }
}

#[test]
fn unspecified_fields_follow_the_clock() {
    let clock = FixedClock::at_utc(2025, 1, 3, 17, 45, 12).unwrap();
    let when = RealDateTime { hour: 12, ..RealDateTime::default() };
    let got = real_time_to_game_time(&when, GameVariant::Secondary, &clock).unwrap();
    assert_eq!(got.to_string(), "03:00:00");
}
