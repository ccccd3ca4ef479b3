//! Tracing every intermediate value of a calculation.
//!
//! Run with `cargo run --example diagnostics --features tracing`; `RUST_LOG` overrides the
//! default `sunriseset=debug` filter.

use chrono::NaiveDate;
use sunriseset::{ConsoleLogger, SunCalculator, TracingLogger, Zenith};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sunriseset=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let date = NaiveDate::from_ymd_opt(2020, 8, 5).ok_or("invalid date")?;
    let (latitude, longitude) = (70.662941, 23.684380);

    println!("Hammerfest sunrise on {date}, traced:");
    let traced = SunCalculator::with_logger(TracingLogger);
    let sunrise = traced.sunrise_instant(date, Zenith::Official, latitude, longitude);
    println!("=> {sunrise:?}");

    println!();
    println!("Hammerfest sunset on {date}, printed:");
    let printed = SunCalculator::with_logger(ConsoleLogger);
    let sunset = printed.sunset_instant(date, Zenith::Official, latitude, longitude);
    println!("=> {sunset:?}");

    Ok(())
}
