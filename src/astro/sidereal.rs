//! Local sidereal time.

use super::angle::rev;
use super::epoch::EpochTime;

/// Local sidereal time in degrees, `[0, 360)`, for an observer at `lon` degrees east.
///
/// The polynomial is expressed in days and Julian centuries from J2000.0,
/// which is 1.5 days after the epoch of [`EpochTime`].
pub fn local_sidereal_time(time: EpochTime, lon: f64) -> f64 {
    let days = time - 1.5;
    let t = days / 36525.0;
    let st = 280.46061837 + 360.98564736629 * days + 0.000387933 * t.powi(2)
        - t.powi(3) / 38710000.0;
    rev(st + lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greenwich_sidereal_time_at_j2000() {
        let st = local_sidereal_time(1.5, 0.0);
        assert!((st - 280.46061837).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_shifts_sidereal_time() {
        let greenwich = local_sidereal_time(8900.25, 0.0);
        let east = local_sidereal_time(8900.25, 45.0);
        let west = local_sidereal_time(8900.25, -120.0);
        assert!((rev(east - greenwich) - 45.0).abs() < 1e-7);
        assert!((rev(greenwich - west) - 120.0).abs() < 1e-7);
    }

    #[test]
    fn test_sidereal_day_is_shorter_than_solar_day() {
        // After one solar day the sidereal clock has advanced ~0.9856° past a full turn
        let advance = rev(local_sidereal_time(9001.0, 10.0) - local_sidereal_time(9000.0, 10.0));
        assert!((advance - 0.98564736629).abs() < 1e-6);
    }

    #[test]
    fn test_result_is_reduced() {
        for time in [-50000.0, -1.0, 0.0, 1e5] {
            let st = local_sidereal_time(time, 179.9);
            assert!((0.0..360.0).contains(&st));
        }
    }
}
