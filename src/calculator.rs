//! Sunrise/sunset calculation.
//!
//! Implements the sunrise/sunset algorithm published in the *Almanac for Computers* (Nautical
//! Almanac Office, United States Naval Observatory, 1990). It is a one-pass approximation:
//! accuracy is in the order of a minute at moderate latitudes and degrades to several minutes
//! close to the polar circles.
//!
//! Reference: <http://edwilliams.org/sunrise_sunset_algorithm.htm>
//!
//! All results are in UTC. The local mean time of the event is placed on the *input* calendar
//! date and then shifted by the longitude offset, so an event can land on the day before or
//! after that date. For Port Stanley (57.85°W) on 2020-01-18, for example, sunset is returned as
//! 2020-01-19T00:01:20Z.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::logger::{Logger, NullLogger};
use crate::math::{
    acos_deg, asin_deg, atan_deg, constrain, cos_deg, floor, round_half_up, sin_deg, tan_deg,
};
use crate::time::day_of_year;
use crate::{HoursUtc, Result, SolarEvent, Zenith};

#[cfg(feature = "chrono")]
use crate::Location;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Upper bound for angles in degrees.
const DEGREES_PER_TURN: f64 = 360.0;

/// Upper bound for the local mean time in hours.
const HOURS_PER_DAY: f64 = 24.0;

/// Degrees of longitude (and of hour angle) per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculates the event as whole seconds from 00:00 UTC of the calculation date.
///
/// Returns `None` when the sun does not reach `zenith` on that day (polar day or polar night),
/// or when the inputs are not finite.
fn event_seconds<L: Logger + ?Sized>(
    event: SolarEvent,
    day_of_year: u32,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
    logger: &L,
) -> Option<i64> {
    let rising = event.is_rising();
    logger.log(format_args!("Day of year = {day_of_year}"));

    // Longitude hour and approximate time
    let lng_hour = longitude / DEGREES_PER_HOUR;
    let t = f64::from(day_of_year) + ((event.base_hour() - lng_hour) / 24.0);
    logger.log(format_args!("Longitude hour = {lng_hour:.6}"));
    logger.log(format_args!("Approximate time = {t:.6}"));

    let m = (0.9856 * t) - 3.289;
    logger.log(format_args!("Sun's mean anomaly = {m:.6}"));

    let l = constrain(
        DEGREES_PER_TURN,
        m + (1.916 * sin_deg(m)) + (0.020 * sin_deg(2.0 * m)) + 282.634,
    );
    logger.log(format_args!("Sun's true longitude = {l:.6}"));

    let ra = constrain(DEGREES_PER_TURN, atan_deg(0.91764 * tan_deg(l)));
    logger.log(format_args!("Sun's right ascension = {ra:.6}"));

    // Right ascension has to be in the same quadrant as the true longitude
    let l_quadrant = floor(l / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    let ra = ra + (l_quadrant - ra_quadrant);
    logger.log(format_args!(
        "Sun's right ascension quadrant adjusted = {ra:.6}"
    ));

    let ra_hours = ra / DEGREES_PER_HOUR;
    logger.log(format_args!("Sun's right ascension in hours = {ra_hours:.6}"));

    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));
    logger.log(format_args!(
        "Sun's declination (sin, cos) ({sin_dec:.6}, {cos_dec:.6})"
    ));

    let zenith_degrees = zenith.decimal_degrees();
    logger.log(format_args!("Zenith decimal deg = {zenith_degrees:.6}"));
    let cos_h =
        (cos_deg(zenith_degrees) - (sin_dec * sin_deg(latitude))) / (cos_dec * cos_deg(latitude));
    logger.log(format_args!("Sun's local hour angle {cos_h:.6}"));

    if cos_h > 1.0 {
        logger.log(format_args!("There's no {event} on this day (polar night)"));
        return None;
    }
    if cos_h < -1.0 {
        logger.log(format_args!("There's no {event} on this day (midnight sun)"));
        return None;
    }
    if cos_h.is_nan() {
        logger.log(format_args!("There's no {event} on this day (undefined hour angle)"));
        return None;
    }

    let hour_angle = acos_deg(cos_h);
    let h = (if rising {
        DEGREES_PER_TURN - hour_angle
    } else {
        hour_angle
    }) / DEGREES_PER_HOUR;
    logger.log(format_args!("acos(cosH) = {hour_angle:.6}"));
    logger.log(format_args!("H = {h:.6}"));

    // Local mean time, not yet constrained to a day
    let local_mean_time = h + ra_hours - (0.06571 * t) - 6.622;
    let local_seconds = to_whole_seconds(constrain(HOURS_PER_DAY, local_mean_time))?;
    logger.log(format_args!(
        "Local mean time of {event} = {}",
        HoursUtc::from_seconds(local_seconds)
    ));

    // Back to UTC; the calendar date stays fixed, only the clock time moves
    let longitude_seconds = to_whole_seconds(lng_hour)?;
    Some(local_seconds.saturating_sub(longitude_seconds))
}

/// Converts hours to whole seconds, rounding half-way cases up.
#[allow(clippy::cast_possible_truncation)]
fn to_whole_seconds(hours: f64) -> Option<i64> {
    let seconds = round_half_up(hours * 60.0 * 60.0);
    // i64 bounds as f64; anything outside saturates to no result
    if !(-9.2e18..=9.2e18).contains(&seconds) {
        return None;
    }
    Some(seconds as i64)
}

/// Per-call configuration of a sunrise/sunset calculation.
///
/// Holds the diagnostic sink that receives every intermediate value of the algorithm. The
/// calculator itself carries no mutable state; sharing it between threads only requires the
/// logger to be `Sync`.
///
/// # Example
/// ```
/// # #[cfg(feature = "std")] {
/// use sunriseset::{ConsoleLogger, SunCalculator, Zenith};
///
/// let quiet = SunCalculator::new();
/// let verbose = SunCalculator::with_logger(ConsoleLogger);
///
/// let a = quiet.sunrise_utc(2019, 12, 29, Zenith::Official, 51.623556, 0.010213).unwrap();
/// let b = verbose.sunrise_utc(2019, 12, 29, Zenith::Official, 51.623556, 0.010213).unwrap();
/// assert_eq!(a, b);
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SunCalculator<L = NullLogger> {
    logger: L,
}

impl SunCalculator {
    /// Creates a calculator that discards diagnostics.
    #[must_use]
    pub const fn new() -> Self {
        Self { logger: NullLogger }
    }
}

impl<L: Logger> SunCalculator<L> {
    /// Creates a calculator that reports intermediate values to `logger`.
    pub const fn with_logger(logger: L) -> Self {
        Self { logger }
    }

    /// Gets the diagnostic sink.
    pub const fn logger(&self) -> &L {
        &self.logger
    }

    /// Calculates an event from numeric date components.
    ///
    /// # Arguments
    /// * `event` - Sunrise or sunset
    /// * `year` - Year (proleptic Gregorian, can be negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `zenith` - Zenith convention defining the event
    /// * `latitude` - Observer latitude in degrees, not validated
    /// * `longitude` - Observer longitude in degrees, not validated
    ///
    /// # Returns
    /// Time relative to 00:00 UTC of the given date, or `None` if the event does not occur
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the date components do not form a valid date.
    #[allow(clippy::too_many_arguments)]
    pub fn event_utc(
        &self,
        event: SolarEvent,
        year: i32,
        month: u32,
        day: u32,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<HoursUtc>> {
        let n = day_of_year(year, month, day)?;
        let result = event_seconds(event, n, zenith, latitude, longitude, &self.logger)
            .map(HoursUtc::from_seconds);

        if let Some(time) = result {
            self.logger.log(format_args!("{event:?} = {time} UTC"));
            self.logger.blank();
        }
        Ok(result)
    }

    /// Calculates sunrise from numeric date components. See [`SunCalculator::event_utc`].
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the date components do not form a valid date.
    pub fn sunrise_utc(
        &self,
        year: i32,
        month: u32,
        day: u32,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<HoursUtc>> {
        self.event_utc(
            SolarEvent::Sunrise,
            year,
            month,
            day,
            zenith,
            latitude,
            longitude,
        )
    }

    /// Calculates sunset from numeric date components. See [`SunCalculator::event_utc`].
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the date components do not form a valid date.
    pub fn sunset_utc(
        &self,
        year: i32,
        month: u32,
        day: u32,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<HoursUtc>> {
        self.event_utc(
            SolarEvent::Sunset,
            year,
            month,
            day,
            zenith,
            latitude,
            longitude,
        )
    }
}

#[cfg(feature = "chrono")]
impl<L: Logger> SunCalculator<L> {
    /// Calculates the instant of `event` on `date`. See [`calculate`].
    #[must_use]
    pub fn calculate(
        &self,
        event: SolarEvent,
        date: NaiveDate,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Option<DateTime<Utc>> {
        calculate(event, date, zenith, latitude, longitude, &self.logger)
    }

    /// Calculates the sunrise instant for the given coordinates.
    #[must_use]
    pub fn sunrise_instant(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Option<DateTime<Utc>> {
        self.calculate(SolarEvent::Sunrise, date, zenith, latitude, longitude)
    }

    /// Calculates the sunrise instant for a [`Location`].
    #[must_use]
    pub fn sunrise_instant_at(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        location: &Location,
    ) -> Option<DateTime<Utc>> {
        self.sunrise_instant(date, zenith, location.latitude(), location.longitude())
    }

    /// Calculates the sunset instant for the given coordinates.
    #[must_use]
    pub fn sunset_instant(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Option<DateTime<Utc>> {
        self.calculate(SolarEvent::Sunset, date, zenith, latitude, longitude)
    }

    /// Calculates the sunset instant for a [`Location`].
    #[must_use]
    pub fn sunset_instant_at(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        location: &Location,
    ) -> Option<DateTime<Utc>> {
        self.sunset_instant(date, zenith, location.latitude(), location.longitude())
    }

    /// Calculates the UTC time of day of sunrise for the given coordinates.
    #[must_use]
    pub fn sunrise(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Option<NaiveTime> {
        self.sunrise_instant(date, zenith, latitude, longitude)
            .map(|instant| instant.time())
    }

    /// Calculates the UTC time of day of sunrise for a [`Location`].
    #[must_use]
    pub fn sunrise_at(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        location: &Location,
    ) -> Option<NaiveTime> {
        self.sunrise(date, zenith, location.latitude(), location.longitude())
    }

    /// Calculates the UTC time of day of sunset for the given coordinates.
    #[must_use]
    pub fn sunset(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        latitude: f64,
        longitude: f64,
    ) -> Option<NaiveTime> {
        self.sunset_instant(date, zenith, latitude, longitude)
            .map(|instant| instant.time())
    }

    /// Calculates the UTC time of day of sunset for a [`Location`].
    #[must_use]
    pub fn sunset_at(
        &self,
        date: NaiveDate,
        zenith: Zenith,
        location: &Location,
    ) -> Option<NaiveTime> {
        self.sunset(date, zenith, location.latitude(), location.longitude())
    }
}

/// Calculates the instant of a sunrise or sunset in UTC.
///
/// # Arguments
/// * `event` - Sunrise or sunset
/// * `date` - Calendar date the event belongs to
/// * `zenith` - Zenith convention defining the event
/// * `latitude` - Observer latitude in degrees, not validated
/// * `longitude` - Observer longitude in degrees, not validated
/// * `logger` - Sink for the intermediate values
///
/// # Returns
/// The event instant, or `None` if the sun does not cross `zenith` on that day (polar day and
/// polar night are not distinguished)
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sunriseset::{calculate, NullLogger, SolarEvent, Zenith};
///
/// let date = NaiveDate::from_ymd_opt(2020, 1, 18).unwrap();
/// let sunset = calculate(SolarEvent::Sunset, date, Zenith::Official, -51.699665, -57.852222, &NullLogger);
/// assert_eq!(sunset.unwrap().to_rfc3339(), "2020-01-19T00:01:20+00:00");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn calculate<L: Logger + ?Sized>(
    event: SolarEvent,
    date: NaiveDate,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
    logger: &L,
) -> Option<DateTime<Utc>> {
    let seconds = event_seconds(event, date.ordinal(), zenith, latitude, longitude, logger)?;
    let instant = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(TimeDelta::try_seconds(seconds)?)?;

    logger.log(format_args!("{event:?} = {instant:?}"));
    logger.blank();
    Some(instant)
}

/// Calculates the sunrise instant in UTC.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sunriseset::{sunrise_instant, Zenith};
///
/// let date = NaiveDate::from_ymd_opt(2019, 12, 29).unwrap();
/// let sunrise = sunrise_instant(date, Zenith::Official, 51.623556, 0.010213).unwrap();
/// assert_eq!(sunrise.to_rfc3339(), "2019-12-29T08:06:18+00:00");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunrise_instant(
    date: NaiveDate,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Utc>> {
    SunCalculator::new().sunrise_instant(date, zenith, latitude, longitude)
}

/// Calculates the sunrise instant in UTC for a [`Location`].
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunrise_instant_at(
    date: NaiveDate,
    zenith: Zenith,
    location: &Location,
) -> Option<DateTime<Utc>> {
    SunCalculator::new().sunrise_instant_at(date, zenith, location)
}

/// Calculates the sunset instant in UTC.
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunset_instant(
    date: NaiveDate,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Utc>> {
    SunCalculator::new().sunset_instant(date, zenith, latitude, longitude)
}

/// Calculates the sunset instant in UTC for a [`Location`].
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunset_instant_at(
    date: NaiveDate,
    zenith: Zenith,
    location: &Location,
) -> Option<DateTime<Utc>> {
    SunCalculator::new().sunset_instant_at(date, zenith, location)
}

/// Calculates the UTC time of day of sunrise, discarding the date.
///
/// # Example
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use sunriseset::{sunrise, Zenith};
///
/// let date = NaiveDate::from_ymd_opt(2019, 12, 29).unwrap();
/// let time = sunrise(date, Zenith::Civil, 51.623556, 0.010213);
/// assert_eq!(time, NaiveTime::from_hms_opt(7, 25, 59));
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunrise(
    date: NaiveDate,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Option<NaiveTime> {
    SunCalculator::new().sunrise(date, zenith, latitude, longitude)
}

/// Calculates the UTC time of day of sunrise for a [`Location`], discarding the date.
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunrise_at(date: NaiveDate, zenith: Zenith, location: &Location) -> Option<NaiveTime> {
    SunCalculator::new().sunrise_at(date, zenith, location)
}

/// Calculates the UTC time of day of sunset, discarding the date.
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunset(
    date: NaiveDate,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Option<NaiveTime> {
    SunCalculator::new().sunset(date, zenith, latitude, longitude)
}

/// Calculates the UTC time of day of sunset for a [`Location`], discarding the date.
#[cfg(feature = "chrono")]
#[must_use]
pub fn sunset_at(date: NaiveDate, zenith: Zenith, location: &Location) -> Option<NaiveTime> {
    SunCalculator::new().sunset_at(date, zenith, location)
}

/// Calculates sunrise from numeric date components without chrono.
///
/// # Errors
/// Returns `InvalidDateTime` if the date components do not form a valid date.
///
/// # Example
/// ```
/// use sunriseset::{sunrise_utc, Zenith};
///
/// // Tokyo: sunrise falls on the previous UTC day
/// let time = sunrise_utc(2019, 12, 29, Zenith::Official, 35.689487, 139.691706)
///     .unwrap()
///     .unwrap();
/// assert_eq!(time.day_and_seconds(), (-1, 78_609));
/// ```
pub fn sunrise_utc(
    year: i32,
    month: u32,
    day: u32,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Result<Option<HoursUtc>> {
    SunCalculator::new().sunrise_utc(year, month, day, zenith, latitude, longitude)
}

/// Calculates sunset from numeric date components without chrono.
///
/// # Errors
/// Returns `InvalidDateTime` if the date components do not form a valid date.
pub fn sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Result<Option<HoursUtc>> {
    SunCalculator::new().sunset_utc(year, month, day, zenith, latitude, longitude)
}

/// Calculates either event from numeric date components without chrono.
///
/// # Errors
/// Returns `InvalidDateTime` if the date components do not form a valid date.
#[allow(clippy::too_many_arguments)]
pub fn event_utc(
    event: SolarEvent,
    year: i32,
    month: u32,
    day: u32,
    zenith: Zenith,
    latitude: f64,
    longitude: f64,
) -> Result<Option<HoursUtc>> {
    SunCalculator::new().event_utc(event, year, month, day, zenith, latitude, longitude)
}
