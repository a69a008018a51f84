//! Low-precision position of the Sun.
//!
//! The orbital elements describe the Sun moving around the Earth on a slowly
//! changing ellipse that lies in the ecliptic plane. The constants are the
//! usual low-precision set for `time` measured in days from 1999-12-31 0h UT.

use anyhow::Result;

use super::angle::{DEGREES_PER_RADIAN, RectangularVector, atan2d, cosd, rev, sind};
use super::epoch::EpochTime;

/// Convergence threshold of the eccentric anomaly, in degrees.
const KEPLER_TOLERANCE: f64 = 0.0002;

/// Newton iterations allowed before the solve is declared broken.
const KEPLER_MAX_ITERATIONS: usize = 100;

pub fn arg_of_perihelion(time: EpochTime) -> f64 {
    rev(282.9404 + 4.70935e-5 * time)
}

pub fn eccentricity(time: EpochTime) -> f64 {
    0.016709 - 1.151e-9 * time
}

pub fn mean_anomaly(time: EpochTime) -> f64 {
    rev(356.0470 + 0.9856002585 * time)
}

pub fn obliquity_of_ecliptic(time: EpochTime) -> f64 {
    23.4393 - 3.563e-7 * time
}

/// Solve Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly, in degrees.
///
/// Failing to converge within the iteration cap is an invariant violation for
/// any physical orbit and is reported as an error.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Result<f64> {
    let m = mean_anomaly;
    let e = eccentricity;

    let mut ea = m + e * DEGREES_PER_RADIAN * sind(m) * (1.0 + e * cosd(m));

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let previous = ea;
        ea = previous
            - (previous - e * DEGREES_PER_RADIAN * sind(previous) - m) / (1.0 - e * cosd(previous));
        if (previous - ea).abs() <= KEPLER_TOLERANCE {
            return Ok(ea);
        }
    }

    anyhow::bail!(
        "Kepler's equation did not converge after {KEPLER_MAX_ITERATIONS} iterations (M={m}, e={e})"
    )
}

/// Position of the Sun in the ecliptic frame, in astronomical units.
///
/// The z component is always zero since the orbit lies in the ecliptic.
pub fn ecliptic_position(time: EpochTime) -> Result<RectangularVector> {
    let w = arg_of_perihelion(time);
    let e = eccentricity(time);
    let ea = solve_kepler(mean_anomaly(time), e)?;

    let xv = cosd(ea) - e;
    let yv = (1.0 - e * e).sqrt() * sind(ea);
    let v = atan2d(xv, yv);
    let r = (xv * xv + yv * yv).sqrt();

    Ok(RectangularVector {
        x: r * cosd(v + w),
        y: r * sind(v + w),
        z: 0.0,
    })
}

/// Rotate an ecliptic vector about the x axis by the obliquity at `time`.
pub fn ecliptic_to_equatorial(time: EpochTime, r: RectangularVector) -> RectangularVector {
    let o = obliquity_of_ecliptic(time);
    RectangularVector {
        x: r.x,
        y: r.y * cosd(o) - r.z * sind(o),
        z: r.y * sind(o) + r.z * cosd(o),
    }
}

pub fn equatorial_position(time: EpochTime) -> Result<RectangularVector> {
    Ok(ecliptic_to_equatorial(time, ecliptic_position(time)?))
}
