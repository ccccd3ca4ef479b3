//! Calendar helpers for the numeric (chrono-free) API.
//!
//! Dates follow the proleptic Gregorian calendar, the same calendar `chrono::NaiveDate` uses,
//! so both APIs agree on the day of year for any date.

use crate::{Error, Result};

/// Cumulative day counts before the first day of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Checks whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use sunriseset::time::is_leap_year;
/// assert!(is_leap_year(2020));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month.
///
/// # Errors
/// Returns `InvalidDateTime` if `month` is not between 1 and 12.
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_datetime("month must be between 1 and 12")),
    };
    Ok(days)
}

/// Calculates the 1-based ordinal day of the year (January 1st is day 1).
///
/// # Errors
/// Returns `InvalidDateTime` if the month is outside 1-12 or the day does not exist in that month.
///
/// # Example
/// ```
/// # use sunriseset::time::day_of_year;
/// assert_eq!(day_of_year(2019, 12, 29).unwrap(), 363);
/// assert_eq!(day_of_year(2020, 12, 31).unwrap(), 366);
/// assert!(day_of_year(2019, 2, 29).is_err());
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    let month_length = days_in_month(year, month)?;
    if !(1..=month_length).contains(&day) {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    let leap_day = u32::from(month > 2 && is_leap_year(year));
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_day + day)
}
