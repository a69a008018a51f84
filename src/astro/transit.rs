//! Meridian transit search (solar noon and solar midnight).

use anyhow::Result;

use super::GeoPosition;
use super::angle::{rect_to_polar, rev180};
use super::ephemeris::equatorial_position;
use super::epoch::EpochTime;
use super::sidereal::local_sidereal_time;

/// Hour-angle residual, in degrees, at which the transit is considered found.
const TRANSIT_TOLERANCE: f64 = 0.0001;

/// Find the transit closest to `time`.
///
/// With `at_noon` the Sun's right ascension is matched against the observer's
/// local sidereal time (upper transit, solar noon); otherwise against the
/// sidereal time of the opposite meridian (lower transit, solar midnight).
///
/// The residual shrinks geometrically, so the fixed-point iteration has no
/// cap. Non-finite input (a NaN longitude) is reported as an error.
pub fn find_transit_time(
    time: EpochTime,
    observer: GeoPosition,
    at_noon: bool,
) -> Result<EpochTime> {
    let offset = if at_noon { 0.0 } else { 180.0 };
    let mut time = time;
    let mut delta = 0.0;

    loop {
        time += delta / 360.0;
        let sun = rect_to_polar(equatorial_position(time)?);
        delta = rev180(sun.lon - local_sidereal_time(time, observer.lon + offset));
        if delta.abs() <= TRANSIT_TOLERANCE {
            return Ok(time);
        }
        if !delta.is_finite() {
            anyhow::bail!("transit search diverged for observer {observer:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::epoch::{epoch_to_millis, to_epoch};
    use chrono::{TimeZone, Utc};

    const GREENWICH: GeoPosition = GeoPosition {
        lat: 51.4769,
        lon: 0.0,
    };

    #[test]
    fn test_greenwich_noon_includes_equation_of_time() {
        let guess = to_epoch(Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap());
        let noon = find_transit_time(guess, GREENWICH, true).unwrap();
        let millis = epoch_to_millis(noon);
        let expected = Utc
            .with_ymd_and_hms(2024, 6, 21, 12, 1, 57)
            .unwrap()
            .timestamp_millis() as f64;
        assert!((millis - expected).abs() < 1000.0, "noon off by {} ms", millis - expected);
    }

    #[test]
    fn test_transit_is_a_fixed_point() {
        let observer = GeoPosition {
            lat: -33.87,
            lon: 151.21,
        };
        let first = find_transit_time(9000.3, observer, true).unwrap();
        let second = find_transit_time(first, observer, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_midnight_is_half_a_day_from_noon() {
        let observer = GeoPosition {
            lat: 40.71,
            lon: -74.01,
        };
        let noon = find_transit_time(8846.7, observer, true).unwrap();
        let midnight = find_transit_time(noon + 0.5, observer, false).unwrap();
        let half_day = midnight - noon;
        // Within a minute of 12 hours
        assert!((half_day - 0.5).abs() < 1.0 / 1440.0, "half day was {half_day}");
    }

    #[test]
    fn test_noon_depends_on_longitude_not_latitude() {
        let north = GeoPosition { lat: 60.0, lon: 30.0 };
        let south = GeoPosition { lat: -60.0, lon: 30.0 };
        let a = find_transit_time(9100.4, north, true).unwrap();
        let b = find_transit_time(9100.4, south, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_nan_longitude_is_an_error() {
        let observer = GeoPosition {
            lat: 10.0,
            lon: f64::NAN,
        };
        assert!(find_transit_time(9100.4, observer, true).is_err());
    }
}
