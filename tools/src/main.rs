//! tarkov-clock: headless runner for the in-game clocks.
//!
//! Usage:
//!   tarkov-clock                              poll and print both clocks every second
//!   tarkov-clock -u 5 --wait-night            poll every 5s, ring when night falls
//!   tarkov-clock --api                        print one JSON report and exit
//!   tarkov-clock --year 2025 --month 1 --day 3 --hour 12
//!                                             convert a real UTC date/time

use anyhow::{bail, Context, Result};
use std::env;
use std::io::{self, Write};
use std::str::FromStr;
use tarkov_clock_core::{
    alert::{AlertGate, AlertMode},
    calendar::{real_time_to_game_time, RealDateTime},
    clock::{ClockSource, SystemClock},
    config::RunnerConfig,
    game_time::GameVariant,
    report::{ClockReport, VariantReport},
};

#[derive(serde::Serialize)]
struct ConversionOutput {
    query: RealDateTime,
    left:  String,
    right: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let clock = SystemClock;

    let api_mode = has_flag(&args, &["--api", "-a"]);
    let wait_sun = has_flag(&args, &["--wait-sun", "-l"]);
    let wait_night = has_flag(&args, &["--wait-night", "-n"]);
    if wait_sun && wait_night {
        bail!("--wait-sun and --wait-night are mutually exclusive");
    }

    let mut config = match flag_value(&args, &["--config"]) {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    if let Some(secs) = parse_opt(&args, &["--update-time", "-u"])? {
        config.update_interval_secs = secs;
    }
    if let Some(polls) = parse_opt(&args, &["--polls"])? {
        config.max_polls = Some(polls);
    }
    if wait_sun {
        config.alert = AlertMode::Day;
    } else if wait_night {
        config.alert = AlertMode::Night;
    }

    if let Some(query) = parse_real_date_time(&args)? {
        return run_conversion(&query, &clock, api_mode);
    }

    if api_mode {
        println!("{}", ClockReport::capture(&clock).to_json()?);
        return Ok(());
    }

    run_poll_loop(&config, &clock)
}

fn run_conversion(query: &RealDateTime, clock: &dyn ClockSource, json: bool) -> Result<()> {
    let left = real_time_to_game_time(query, GameVariant::Primary, clock)?;
    let right = real_time_to_game_time(query, GameVariant::Secondary, clock)?;

    if json {
        let output = ConversionOutput {
            query: *query,
            left:  left.to_string(),
            right: right.to_string(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("left:  {left}");
        println!("right: {right}");
    }
    Ok(())
}

/// One poll at a time: sample, print, maybe ring, sleep.
fn run_poll_loop(config: &RunnerConfig, clock: &dyn ClockSource) -> Result<()> {
    let mut gate: AlertGate = config.alert_gate();
    let interval = config.poll_interval();
    let mut stdout = io::stdout();

    log::info!(
        "polling every {}s; {}",
        interval.as_secs(),
        gate.status_text()
    );

    let mut polls: u64 = 0;
    loop {
        let now_ms = clock.now_millis();
        let report = ClockReport::at(now_ms);

        let wall = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            stdout,
            "[{wall}]  {}  |  {}",
            render_side("left", &report.left),
            render_side("right", &report.right)
        )?;

        if gate.poll(now_ms, report.left.is_night, report.right.is_night) {
            write!(stdout, "\x07")?;
        }
        stdout.flush()?;

        polls += 1;
        if config.max_polls.is_some_and(|max| polls >= max) {
            break;
        }
        std::thread::sleep(interval);
    }
    Ok(())
}

fn render_side(side: &str, v: &VariantReport) -> String {
    let phase = if v.is_night { "night" } else { "day" };
    let next = if v.is_night { "light" } else { "night" };
    match v.countdown {
        Some(c) => format!("{side:<5} {} {phase:<5} ({next} in {c})", v.time),
        None => format!("{side:<5} {} {phase:<5}", v.time),
    }
}

/// Some if any calendar flag is present.
fn parse_real_date_time(args: &[String]) -> Result<Option<RealDateTime>> {
    let year = parse_opt(args, &["--year"])?;
    let month = parse_opt(args, &["--month"])?;
    let day = parse_opt(args, &["--day"])?;
    let hour = parse_opt(args, &["--hour"])?;
    let minute = parse_opt(args, &["--minute"])?;

    if year.is_none() && month.is_none() && day.is_none() && hour.is_none() && minute.is_none() {
        return Ok(None);
    }
    Ok(Some(RealDateTime {
        year,
        month,
        day,
        hour: hour.unwrap_or(0),
        minute: minute.unwrap_or(0),
    }))
}

fn has_flag(args: &[String], names: &[&str]) -> bool {
    args.iter().any(|a| names.contains(&a.as_str()))
}

fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.windows(2)
        .find(|w| names.contains(&w[0].as_str()))
        .map(|w| w[1].as_str())
}

fn parse_opt<T>(args: &[String], names: &[&str]) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, names)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid value {raw:?} for {}", names[0]))
        })
        .transpose()
}
