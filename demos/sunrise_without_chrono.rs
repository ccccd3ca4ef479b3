//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! This example shows how to use the numeric API when you don't want to depend on chrono.

use sunriseset::{Zenith, sunrise_utc, sunset_utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tokyo, December 29, 2019
    let (latitude, longitude) = (35.689487, 139.691706);

    println!("Tokyo, December 29, 2019 (UTC):");
    for zenith in Zenith::ALL {
        let sunrise = sunrise_utc(2019, 12, 29, zenith, latitude, longitude)?;
        let sunset = sunset_utc(2019, 12, 29, zenith, latitude, longitude)?;

        match (sunrise, sunset) {
            (Some(sunrise), Some(sunset)) => {
                println!("  {zenith:<12} rise {sunrise}  set {sunset}");
            }
            _ => println!("  {zenith:<12} no event"),
        }
    }

    // Show how to convert to day offset and hours
    if let Some(sunrise) = sunrise_utc(2019, 12, 29, Zenith::Official, latitude, longitude)? {
        let (day_offset, hours) = sunrise.day_and_hours();
        println!();
        println!("Sunrise breakdown:");
        println!("  Raw hours: {:.4}", sunrise.hours());
        println!("  Day offset: {day_offset}");
        println!("  Hours in day: {hours:.4}");
    }

    Ok(())
}
