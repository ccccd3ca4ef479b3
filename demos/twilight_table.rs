//! Sunrise, sunset and twilight times across diverse global locations.

use chrono::NaiveDate;
use sunriseset::{Location, SunCalculator, Zenith};

#[derive(Debug)]
struct City {
    name: &'static str,
    location: Location,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            location: Location::new(78.22, 15.65),
        },
        City {
            name: "Reykjavik, Iceland",
            location: Location::new(64.146582, -21.942635),
        },
        City {
            name: "Auckland, New Zealand",
            location: Location::new(-36.848460, 174.763332),
        },
        City {
            name: "Quito, Ecuador",
            location: Location::new(-0.180653, -78.467834),
        },
    ];

    let calculator = SunCalculator::new();

    for (month, day) in [(3, 20), (6, 21), (12, 21)] {
        let date = NaiveDate::from_ymd_opt(2023, month, day).ok_or("invalid date")?;
        println!("=== {date} ===");

        for city in &cities {
            println!("{} {}", city.name, city.location);
            for zenith in Zenith::ALL {
                let format = |time: Option<chrono::NaiveTime>| {
                    time.map_or_else(|| "--:--:--".to_string(), |t| t.to_string())
                };
                println!(
                    "  {zenith:<12} {}  {}",
                    format(calculator.sunrise_at(date, zenith, &city.location)),
                    format(calculator.sunset_at(date, zenith, &city.location)),
                );
            }
        }
        println!();
    }

    Ok(())
}
