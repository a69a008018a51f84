//! Degree-based trigonometry, angle reduction and rectangular/polar conversion.
//!
//! Every angle that flows between the astronomical components is expressed in
//! degrees. Radians only appear inside the helpers below.

const RADIANS_PER_DEGREE: f64 = std::f64::consts::PI / 180.0;
pub(crate) const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;

pub fn cosd(x: f64) -> f64 {
    (x * RADIANS_PER_DEGREE).cos()
}

pub fn sind(x: f64) -> f64 {
    (x * RADIANS_PER_DEGREE).sin()
}

pub fn acosd(x: f64) -> f64 {
    x.acos() * DEGREES_PER_RADIAN
}

pub fn asind(x: f64) -> f64 {
    x.asin() * DEGREES_PER_RADIAN
}

/// Four-quadrant arctangent in degrees of `y / x`.
///
/// Note the argument order: the first argument is the denominator term, so
/// `atan2d(x, y)` equals `atan2(y, x)` in the usual convention.
pub fn atan2d(x: f64, y: f64) -> f64 {
    y.atan2(x) * DEGREES_PER_RADIAN
}

/// Reduce an angle to `[0, 360)`.
pub fn rev(x: f64) -> f64 {
    let x = x.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if x == 360.0 { 0.0 } else { x }
}

/// Reduce an angle to `(-180, 180]`.
pub fn rev180(x: f64) -> f64 {
    let x = rev(x);
    if x <= 180.0 { x } else { x - 360.0 }
}

/// A point in a 3-D Cartesian frame (ecliptic or equatorial).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Polar form of a [`RectangularVector`].
///
/// `lon` lies in `[0, 360)` and `lat` in `[-90, 90]`, measured from the x/y
/// plane towards +z. For an equatorial vector these are the right ascension
/// and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPosition {
    pub lon: f64,
    pub lat: f64,
}

pub fn rect_to_polar(r: RectangularVector) -> SphericalPosition {
    SphericalPosition {
        lon: rev(atan2d(r.x, r.y)),
        lat: atan2d((r.x * r.x + r.y * r.y).sqrt(), r.z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_rev_handles_negative_values() {
        assert!((rev(-30.0) - 330.0).abs() < EPS);
        assert!((rev(-360.0) - 0.0).abs() < EPS);
        assert!((rev(-725.0) - 355.0).abs() < EPS);
        assert!((rev(725.0) - 5.0).abs() < EPS);
        assert_eq!(rev(0.0), 0.0);
        assert_eq!(rev(-1e-17), 0.0);
        assert!(rev(f64::NAN).is_nan());
    }

    #[test]
    fn test_rev180_boundaries() {
        assert_eq!(rev180(180.0), 180.0);
        assert_eq!(rev180(-180.0), 180.0);
        assert!((rev180(190.0) + 170.0).abs() < EPS);
        assert!((rev180(-190.0) - 170.0).abs() < EPS);
        assert!((rev180(359.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_atan2d_takes_denominator_first() {
        // Vector pointing along +y: atan2(y=1, x=0) = 90°
        assert!((atan2d(0.0, 1.0) - 90.0).abs() < EPS);
        // Vector pointing along -x
        assert!((atan2d(-1.0, 0.0) - 180.0).abs() < EPS);
        assert!((atan2d(1.0, -1.0) + 45.0).abs() < EPS);
    }

    #[test]
    fn test_inverse_trig_in_degrees() {
        assert!((acosd(0.5) - 60.0).abs() < 1e-9);
        assert!((asind(0.5) - 30.0).abs() < 1e-9);
        assert!((cosd(60.0) - 0.5).abs() < 1e-12);
        assert!((sind(30.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rect_to_polar() {
        let pole = rect_to_polar(RectangularVector { x: 0.0, y: 0.0, z: 1.0 });
        assert!((pole.lat - 90.0).abs() < EPS);

        let plane = rect_to_polar(RectangularVector { x: 0.0, y: -2.0, z: 0.0 });
        assert!(plane.lat.abs() < EPS);
        assert!((plane.lon - 270.0).abs() < EPS);

        let south = rect_to_polar(RectangularVector { x: 1.0, y: 0.0, z: -1.0 });
        assert!((south.lat + 45.0).abs() < 1e-9);
        assert!(south.lon.abs() < EPS);
    }
}
