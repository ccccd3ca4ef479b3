//! Basic sunrise and sunset calculation with chrono.

use chrono::NaiveDate;
use sunriseset::{Location, Zenith};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let london = Location::try_new(51.623556, 0.010213)?;
    let date = NaiveDate::from_ymd_opt(2019, 12, 29).ok_or("invalid date")?;

    println!("London {london}, {date}");
    match sunriseset::sunrise_instant_at(date, Zenith::Official, &london) {
        Some(sunrise) => println!("  Sunrise: {sunrise}"),
        None => println!("  No sunrise"),
    }
    match sunriseset::sunset_instant_at(date, Zenith::Official, &london) {
        Some(sunset) => println!("  Sunset:  {sunset}"),
        None => println!("  No sunset"),
    }

    // Events can fall on a different UTC day than the requested date
    let date = NaiveDate::from_ymd_opt(2020, 1, 18).ok_or("invalid date")?;
    if let Some(sunset) = sunriseset::sunset_instant(date, Zenith::Official, -51.699665, -57.852222)
    {
        println!("Port Stanley sunset for {date}: {sunset}");
    }

    // Midnight sun
    let date = NaiveDate::from_ymd_opt(2020, 6, 1).ok_or("invalid date")?;
    let sunrise = sunriseset::sunrise(date, Zenith::Official, 70.662941, 23.684380);
    println!("Hammerfest sunrise for {date}: {sunrise:?}");

    Ok(())
}
