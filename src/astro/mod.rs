//! Low-precision solar ephemeris and solar event search.
//!
//! This module computes the apparent position of the Sun for a moment in time
//! and derives the clock times of the day's solar events for an observer.
//!
//! ## Module Structure
//!
//! - [`angle`]: Degree trigonometry, angle reduction and rectangular/polar conversion
//! - [`epoch`]: Conversion between civil instants and the day-count epoch
//! - [`ephemeris`]: Orbital elements, Kepler solve and ecliptic→equatorial transform
//! - [`sidereal`]: Local sidereal time
//! - [`transit`]: Solar noon / solar midnight search
//! - [`altitude`]: Altitude crossing search (sunrise, sunset, twilight)
//! - [`events`]: The day's events and durations for one observer
//!
//! Everything here is a pure function of `(time, observer)`: no caching and no
//! shared state, so days can be computed independently from any thread.
//!
//! The accuracy class is everyday sunrise/sunset display (sub-minute). There
//! is no nutation, parallax or refraction model beyond the fixed -0.833°
//! horizon altitude.

pub mod altitude;
pub mod angle;
pub mod ephemeris;
pub mod epoch;
pub mod events;
pub mod sidereal;
pub mod transit;

pub use altitude::{find_altitude_time, solar_altitude};
pub use epoch::{EpochTime, from_epoch, to_epoch};
pub use events::{DayEvents, DurationEvent, TimeEvent, find_times};
pub use transit::find_transit_time;

/// Observer location in degrees.
///
/// `lat` is positive north in `[-90, 90]`, `lon` positive east in `(-180, 180]`.
/// The astronomical functions do not validate the ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
