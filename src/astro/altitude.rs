//! Search for the moment the Sun crosses a given altitude.
//!
//! The search is anchored on the nearest solar noon. Rising crossings are
//! looked for between the previous solar midnight and noon, setting crossings
//! between noon and the following solar midnight.

use anyhow::Result;

use super::GeoPosition;
use super::angle::{acosd, asind, cosd, rect_to_polar, rev, sind};
use super::ephemeris::equatorial_position;
use super::epoch::EpochTime;
use super::sidereal::local_sidereal_time;
use super::transit::find_transit_time;

/// Altitude residual, in degrees, at which the crossing is considered found.
const ALTITUDE_TOLERANCE: f64 = 1e-6;

/// Refinement steps allowed before the current estimate is returned as is.
const ALTITUDE_MAX_ITERATIONS: usize = 2000;

/// Sun altitude at the observer for the given time, in degrees.
pub fn solar_altitude(time: EpochTime, observer: GeoPosition) -> Result<f64> {
    let sun = rect_to_polar(equatorial_position(time)?);
    let h = rev(local_sidereal_time(time, observer.lon) - sun.lon);
    Ok(asind(
        sind(observer.lat) * sind(sun.lat) + cosd(observer.lat) * cosd(sun.lat) * cosd(h),
    ))
}

/// Find when the Sun's altitude equals `altitude` degrees on the rising or
/// setting side of the solar noon nearest to `time`.
///
/// When the Sun stays below `altitude` all day the noon anchor is returned;
/// when it stays above, the solar midnight on the requested side is returned.
/// A refined time that escapes the midnight..noon bracket is clamped to it.
pub fn find_altitude_time(
    time: EpochTime,
    observer: GeoPosition,
    rising: bool,
    altitude: f64,
) -> Result<EpochTime> {
    let crossing = search_crossing(time, observer, rising, altitude, ALTITUDE_MAX_ITERATIONS)?;
    if crossing.capped && crate::logger::Log::is_debug() {
        log_debug!(
            "Altitude search for {altitude}° stopped after {ALTITUDE_MAX_ITERATIONS} steps (residual {:.3e}°)",
            crossing.residual
        );
    }
    Ok(crossing.time)
}

/// Outcome of one altitude search.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    time: EpochTime,
    /// Altitude error at `time` before clamping, zero for the polar anchors
    residual: f64,
    /// Whether the refinement ran out of steps before meeting the tolerance
    capped: bool,
}

fn search_crossing(
    time: EpochTime,
    observer: GeoPosition,
    rising: bool,
    altitude: f64,
    max_iterations: usize,
) -> Result<Crossing> {
    let noon = find_transit_time(time, observer, true)?;
    let sun = rect_to_polar(equatorial_position(time)?);
    let cosh0 = (sind(altitude) - sind(observer.lat) * sind(sun.lat))
        / (cosd(observer.lat) * cosd(sun.lat));

    let anchor = |time| Crossing {
        time,
        residual: 0.0,
        capped: false,
    };

    if cosh0 > 1.0 {
        return Ok(anchor(noon));
    }

    let direction = if rising { -1.0 } else { 1.0 };
    let midnight = find_transit_time(noon + direction * 0.5, observer, false)?;

    if cosh0 < -1.0 {
        return Ok(anchor(midnight));
    }

    let mut time = noon + direction * acosd(cosh0) / 360.0;
    let mut delta = 0.0;
    let mut iterations = 0;
    let mut capped = false;

    loop {
        time += direction * delta / 360.0;
        delta = solar_altitude(time, observer)? - altitude;
        iterations += 1;
        if delta.abs() <= ALTITUDE_TOLERANCE {
            break;
        }
        if iterations > max_iterations {
            capped = true;
            break;
        }
    }

    let time = if rising {
        clamp_to_bracket(time, midnight, noon)
    } else {
        clamp_to_bracket(time, noon, midnight)
    };

    Ok(Crossing {
        time,
        residual: delta,
        capped,
    })
}

fn clamp_to_bracket(time: EpochTime, earliest: EpochTime, latest: EpochTime) -> EpochTime {
    if time < earliest {
        earliest
    } else if time <= latest {
        time
    } else {
        latest
    }
}
