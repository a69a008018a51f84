//! # suntable
//!
//! Sunrise, sunset and civil twilight times for any location on Earth,
//! computed from a low-precision solar ephemeris.
//!
//! ## Architecture
//!
//! - **Astronomy**: `astro` holds the pure solar computations, from degree
//!   trigonometry up to [`astro::find_times`], which yields one day's events
//! - **Calendar**: `calendar` maps the day computation over a date range, finds
//!   the significant days and renders the table
//! - **Configuration**: `config` for the TOML file with location, timezone and range
//! - **Commands**: `args` and `commands` for the command-line surface
//! - **Infrastructure**: logging macros and shared constants
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use suntable::astro::{GeoPosition, find_times};
//!
//! let greenwich = GeoPosition::new(51.4769, 0.0);
//! let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
//! let events = find_times(noon, greenwich).unwrap();
//! println!("sunrise {} sunset {}", events.sunrise, events.sunset);
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod astro;
pub mod calendar;
pub mod commands;
pub mod common;
pub mod config;
