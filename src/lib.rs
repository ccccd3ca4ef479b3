//! # Sunrise/Sunset Library
//!
//! Sunrise and sunset times in UTC for any date and place, using the closed-form algorithm from
//! the *Almanac for Computers* (Nautical Almanac Office, 1990).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation is a single pass of trigonometry from (date, location, zenith) to a time of
//! day. It is fast and deterministic, accurate to about a minute at moderate latitudes and a few
//! minutes near the polar circles. When the sun does not cross the chosen zenith on a given day
//! (polar day or polar night) the result is `None`.
//!
//! ## Features
//!
//! - Four zenith conventions: official sunrise/sunset, civil, nautical and astronomical twilight
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Pluggable diagnostics: every intermediate value can be sent to a [`Logger`]
//! - Thread-safe: stateless functions over immutable values
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions, enables [`ConsoleLogger`]
//! - `chrono` (default): Enable the `NaiveDate`/`DateTime<Utc>` based API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `tracing`: Enable [`TracingLogger`], forwarding diagnostics to `tracing`
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sunriseset = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sunriseset = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunriseset = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use sunriseset::{Location, Zenith};
//!
//! let london = Location::new(51.623556, 0.010213);
//! let date = NaiveDate::from_ymd_opt(2019, 12, 29).unwrap();
//!
//! let sunrise = sunriseset::sunrise_instant_at(date, Zenith::Official, &london);
//! let sunset = sunriseset::sunset_at(date, Zenith::Official, &london);
//!
//! println!("Sunrise: {}", sunrise.unwrap());
//! println!("Sunset:  {}", sunset.unwrap());
//!
//! // Hammerfest has midnight sun in June
//! let june = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
//! assert!(sunriseset::sunrise_instant(june, Zenith::Official, 70.662941, 23.684380).is_none());
//! # }
//! ```
//!
//! ### Sunrise and Sunset (numeric API, no chrono)
//! ```rust
//! use sunriseset::{sunrise_utc, Zenith};
//!
//! let sunrise = sunrise_utc(2019, 12, 29, Zenith::Civil, 51.623556, 0.010213).unwrap();
//! if let Some(time) = sunrise {
//!     println!("Civil dawn: {time} UTC ({:.4} hours)", time.hours());
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north (not validated)
//! - **Longitude**: degrees, positive east of Greenwich (not validated)
//! - **Results**: UTC; the event keeps the input calendar date before the longitude offset is
//!   applied, so it may fall on the previous or next UTC day

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of fixed angles in tests
)]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::calculator::{
    calculate, sunrise, sunrise_at, sunrise_instant, sunrise_instant_at, sunset, sunset_at,
    sunset_instant, sunset_instant_at,
};
pub use crate::calculator::{SunCalculator, event_utc, sunrise_utc, sunset_utc};
pub use crate::error::{Error, Result};
#[cfg(feature = "std")]
pub use crate::logger::ConsoleLogger;
#[cfg(feature = "tracing")]
pub use crate::logger::TracingLogger;
pub use crate::logger::{FnLogger, Logger, NullLogger};
pub use crate::types::{HoursUtc, Location, SolarEvent, Zenith};

// Algorithm module
pub mod calculator;

// Core modules
pub mod error;
pub mod logger;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_location_and_coordinate_overloads_agree() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 18).unwrap();
        let port_stanley = Location::new(-51.699665, -57.852222);

        for zenith in Zenith::ALL {
            assert_eq!(
                sunrise_instant_at(date, zenith, &port_stanley),
                sunrise_instant(date, zenith, -51.699665, -57.852222)
            );
            assert_eq!(
                sunset_instant_at(date, zenith, &port_stanley),
                sunset_instant(date, zenith, -51.699665, -57.852222)
            );
            assert_eq!(
                sunrise_at(date, zenith, &port_stanley),
                sunrise(date, zenith, -51.699665, -57.852222)
            );
            assert_eq!(
                sunset_at(date, zenith, &port_stanley),
                sunset(date, zenith, -51.699665, -57.852222)
            );
        }
    }

    #[test]
    fn test_time_of_day_discards_date() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 18).unwrap();

        let instant = sunset_instant(date, Zenith::Official, -51.699665, -57.852222).unwrap();
        let time = sunset(date, Zenith::Official, -51.699665, -57.852222).unwrap();

        assert_eq!(instant.date_naive(), date.succ_opt().unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(0, 1, 20).unwrap());
    }

    #[test]
    fn test_calculate_matches_wrappers() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 29).unwrap();

        assert_eq!(
            calculate(
                SolarEvent::Sunrise,
                date,
                Zenith::Nautical,
                51.623556,
                0.010213,
                &NullLogger
            ),
            sunrise_instant(date, Zenith::Nautical, 51.623556, 0.010213)
        );
        assert_eq!(
            SunCalculator::new().sunset_instant(date, Zenith::Nautical, 51.623556, 0.010213),
            sunset_instant(date, Zenith::Nautical, 51.623556, 0.010213)
        );
    }
}
