//! Core data types for sunrise/sunset calculations.

use crate::error::check_coordinates;
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds per hour (3,600)
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Geographic position of an observer in decimal degrees.
///
/// `Location::new` accepts any value: the calculation is defined for every finite input and
/// callers that need range checks use [`Location::try_new`].
///
/// # Example
/// ```
/// # use sunriseset::Location;
/// let london = Location::new(51.623556, 0.010213);
/// assert_eq!(london.latitude(), 51.623556);
/// assert_eq!(london.to_string(), "{latitude:51.623556, longitude:0.010213}");
///
/// assert!(Location::try_new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, positive north of the equator
    latitude: f64,
    /// Longitude in degrees, positive east of Greenwich
    longitude: f64,
}

impl Location {
    /// Creates a location without validating the coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a location, rejecting coordinates outside ±90° latitude and ±180° longitude.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or NaN coordinates.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{latitude:{:.6}, longitude:{:.6}}}",
            self.latitude, self.longitude
        )
    }
}

impl Eq for Location {}

impl core::hash::Hash for Location {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
        let normalize = |value: f64| if value == 0.0 { 0.0 } else { value };
        normalize(self.latitude).to_bits().hash(state);
        normalize(self.longitude).to_bits().hash(state);
    }
}

/// Solar zenith angle at which the sun is considered to rise or set.
///
/// The zenith is measured from the point straight overhead, so 90° is the geometric horizon.
/// Each variant carries a fixed angle; custom angles are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zenith {
    /// Sunrise/sunset proper: 90°50', allowing for refraction and the sun's radius
    Official,
    /// Civil twilight: 96°, sun 6° below the horizon
    Civil,
    /// Nautical twilight: 102°, sun 12° below the horizon
    Nautical,
    /// Astronomical twilight: 108°, sun 18° below the horizon
    Astronomical,
}

impl Zenith {
    /// All zenith conventions, from the horizon downwards.
    pub const ALL: [Self; 4] = [
        Self::Official,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
    ];

    /// Gets the zenith angle in decimal degrees.
    ///
    /// # Example
    /// ```
    /// # use sunriseset::Zenith;
    /// assert!((Zenith::Official.decimal_degrees() - 90.833_333).abs() < 1e-6);
    /// assert_eq!(Zenith::Civil.decimal_degrees(), 96.0);
    /// ```
    #[must_use]
    pub const fn decimal_degrees(&self) -> f64 {
        match self {
            Self::Official => degrees_minutes(90, 50),
            Self::Civil => degrees_minutes(96, 0),
            Self::Nautical => degrees_minutes(102, 0),
            Self::Astronomical => degrees_minutes(108, 0),
        }
    }

    /// Lowercase name of the convention, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }
}

const fn degrees_minutes(degrees: u32, minutes: u32) -> f64 {
    degrees as f64 + minutes as f64 / 60.0
}

impl fmt::Display for Zenith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Zenith {
    type Err = Error;

    /// Parses a zenith name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|zenith| zenith.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::UnknownZenith)
    }
}

/// The solar event to calculate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// The sun crosses the zenith angle on its way up
    Sunrise,
    /// The sun crosses the zenith angle on its way down
    Sunset,
}

impl SolarEvent {
    /// Checks if this is the rising event.
    #[must_use]
    pub const fn is_rising(&self) -> bool {
        matches!(self, Self::Sunrise)
    }

    /// Local hour around which the event is first approximated (6h for sunrise, 18h for sunset).
    #[must_use]
    pub const fn base_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        })
    }
}

/// Time of a solar event relative to midnight UTC of the calculation date.
///
/// Used for sunrise/sunset times without the chrono dependency. The value is kept in whole
/// seconds and can fall outside a single day:
/// - Negative values indicate the previous day
/// - 0 to < 24 hours indicates the current day
/// - ≥ 24 hours indicates the next day
///
/// # Example
/// ```
/// # use sunriseset::HoursUtc;
/// let after_midnight = HoursUtc::from_seconds(24 * 3600 + 80); // 00:01:20 next day
/// assert_eq!(after_midnight.day_and_seconds(), (1, 80));
///
/// let before_midnight = HoursUtc::from_seconds(-1800); // 23:30 previous day
/// let (day_offset, hours) = before_midnight.day_and_hours();
/// assert_eq!(day_offset, -1);
/// assert!((hours - 23.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoursUtc(i64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from seconds since midnight UTC.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Gets the raw offset in seconds. Can be negative or ≥ 86,400.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.0
    }

    /// Gets the offset in hours. Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.0 as f64 / SECONDS_PER_HOUR
    }

    /// Gets the day offset and the second of that day (0 to 86,399).
    #[must_use]
    pub const fn day_and_seconds(&self) -> (i64, u32) {
        let day_offset = self.0.div_euclid(SECONDS_PER_DAY);
        let second_of_day = self.0.rem_euclid(SECONDS_PER_DAY) as u32;
        (day_offset, second_of_day)
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Example
    /// ```
    /// # use sunriseset::HoursUtc;
    /// let time = HoursUtc::from_seconds(91_800);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i64, f64) {
        let (day_offset, second_of_day) = self.day_and_seconds();
        (day_offset, f64::from(second_of_day) / SECONDS_PER_HOUR)
    }
}

impl fmt::Display for HoursUtc {
    /// Formats as `HH:MM:SS`, with a `+Nd`/`-Nd` suffix when the event falls on another day.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (day_offset, second_of_day) = self.day_and_seconds();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            second_of_day / 3600,
            second_of_day / 60 % 60,
            second_of_day % 60
        )?;
        if day_offset != 0 {
            write!(f, "{day_offset:+}d")?;
        }
        Ok(())
    }
}
