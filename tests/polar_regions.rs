//! Presence and absence of events depending on latitude and season.

use proptest::prelude::*;
use sunriseset::{SolarEvent, Zenith, event_utc, sunrise_utc, sunset_utc};

const HAMMERFEST: (f64, f64) = (70.662941, 23.684380);
const MCMURDO: (f64, f64) = (-77.846323, 166.668235);

#[test]
fn polar_night_has_neither_sunrise_nor_sunset() {
    let (latitude, longitude) = HAMMERFEST;
    for day in [1, 10, 21, 31] {
        assert_eq!(
            sunrise_utc(2020, 12, day, Zenith::Official, latitude, longitude),
            Ok(None),
            "December {day}"
        );
        assert_eq!(
            sunset_utc(2020, 12, day, Zenith::Official, latitude, longitude),
            Ok(None),
            "December {day}"
        );
    }
}

#[test]
fn midnight_sun_has_neither_sunrise_nor_sunset() {
    let (latitude, longitude) = HAMMERFEST;
    for (month, day) in [(6, 1), (6, 21), (7, 10)] {
        for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
            assert_eq!(
                event_utc(event, 2020, month, day, Zenith::Official, latitude, longitude),
                Ok(None),
                "{event} on {month}-{day}"
            );
        }
    }
}

#[test]
fn southern_hemisphere_seasons_are_reversed() {
    let (latitude, longitude) = MCMURDO;

    // Austral winter: polar night
    assert_eq!(
        sunrise_utc(2020, 6, 21, Zenith::Official, latitude, longitude),
        Ok(None)
    );
    // Austral summer: midnight sun
    assert_eq!(
        sunset_utc(2020, 12, 21, Zenith::Official, latitude, longitude),
        Ok(None)
    );
    // Around the equinox both events happen
    assert!(matches!(
        sunrise_utc(2020, 3, 20, Zenith::Official, latitude, longitude),
        Ok(Some(_))
    ));
    assert!(matches!(
        sunset_utc(2020, 3, 20, Zenith::Official, latitude, longitude),
        Ok(Some(_))
    ));
}

#[test]
fn twilight_can_last_all_night_below_the_polar_circle() {
    // At 55°N the sun stays less than 18° below the horizon around the June solstice
    assert_eq!(
        sunrise_utc(2020, 6, 21, Zenith::Astronomical, 55.0, 0.0),
        Ok(None)
    );
    assert!(matches!(
        sunrise_utc(2020, 6, 21, Zenith::Official, 55.0, 0.0),
        Ok(Some(_))
    ));
}

#[test]
fn results_stay_finite_across_the_polar_boundary() {
    for latitude in (0..=500).map(|i| 60.0 + f64::from(i) * 0.05) {
        for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
            if let Ok(Some(time)) = event_utc(event, 2023, 6, 21, Zenith::Official, latitude, 0.0) {
                assert!(time.hours().is_finite(), "latitude {latitude}");
                assert!(
                    (-24.0..48.0).contains(&time.hours()),
                    "latitude {latitude}: {time}"
                );
            }
        }
    }
}

fn valid_date() -> impl Strategy<Value = (i32, u32, u32)> {
    (1900_i32..2100, 1_u32..=12, 1_u32..=28)
}

proptest! {
    #[test]
    fn events_exist_between_the_polar_circles(
        (year, month, day) in valid_date(),
        latitude in -65.0_f64..=65.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let sunrise = sunrise_utc(year, month, day, Zenith::Official, latitude, longitude).unwrap();
        let sunset = sunset_utc(year, month, day, Zenith::Official, latitude, longitude).unwrap();

        prop_assert!(sunrise.is_some());
        prop_assert!(sunset.is_some());
    }

    #[test]
    fn wider_zenith_never_shortens_the_event_window(
        (year, month, day) in valid_date(),
        latitude in -60.0_f64..=60.0,
        longitude in -180.0_f64..=180.0,
    ) {
        // When civil twilight exists at all, dawn comes before sunrise of the same date
        let official = sunrise_utc(year, month, day, Zenith::Official, latitude, longitude).unwrap();
        let civil = sunrise_utc(year, month, day, Zenith::Civil, latitude, longitude).unwrap();

        if let (Some(official), Some(civil)) = (official, civil) {
            let gap = official.seconds() - civil.seconds();
            // The local mean time wraps at midnight, so compare modulo one day
            prop_assert!(gap.rem_euclid(86_400) < 6 * 3_600, "gap {gap}");
        }
    }

    #[test]
    fn any_finite_coordinate_is_accepted(
        (year, month, day) in valid_date(),
        latitude in -1.0e6_f64..1.0e6,
        longitude in -1.0e6_f64..1.0e6,
    ) {
        for zenith in Zenith::ALL {
            prop_assert!(sunrise_utc(year, month, day, zenith, latitude, longitude).is_ok());
            prop_assert!(sunset_utc(year, month, day, zenith, latitude, longitude).is_ok());
        }
    }
}
