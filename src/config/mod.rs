//! Configuration system for suntable.
//!
//! The configuration lives in a single TOML file, `suntable.toml`, found in
//! `$XDG_CONFIG_HOME/suntable/` unless a directory is given with `--config`.
//! A commented default file is generated on first run.
//!
//! ```toml
//! #[Location]
//! latitude = 51.4769          # Geographic latitude (-90 to 90)
//! longitude = 0.0             # Geographic longitude (-180 to 180)
//! timezone = "Europe/London"  # IANA timezone for displayed times (default: system)
//!
//! #[Calendar]
//! days_before = 182           # Days shown before today (0-366)
//! days_after = 183            # Days shown after today (0-366)
//! ```
//!
//! Values are validated on load; out-of-range coordinates and unknown
//! timezone names are rejected with a message naming the offending value.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::astro::GeoPosition;
use crate::common::constants::*;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Settings loaded from `suntable.toml`.
///
/// Every field is optional in the file. Coordinates are required by
/// validation; the remaining fields fall back to the defaults in
/// [`crate::common::constants`].
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Latitude in degrees, positive north
    pub latitude: Option<f64>,
    /// Longitude in degrees, positive east
    pub longitude: Option<f64>,
    /// IANA timezone name used for display, e.g. "America/New_York"
    pub timezone: Option<String>,
    /// Days before the center date included in the calendar
    pub days_before: Option<u32>,
    /// Days after the center date included in the calendar
    pub days_after: Option<u32>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        load()
    }

    /// Observer position from the configured coordinates.
    pub fn observer(&self) -> Result<GeoPosition> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(GeoPosition::new(lat, lon)),
            _ => anyhow::bail!("latitude and longitude must both be set"),
        }
    }

    /// The configured display timezone, or `None` for the system timezone.
    pub fn timezone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|e| anyhow::anyhow!("{e}"))
                    .with_context(|| format!("Unknown timezone '{name}'"))
            })
            .transpose()
    }

    pub fn days_before(&self) -> u32 {
        self.days_before.unwrap_or(DEFAULT_DAYS_BEFORE)
    }

    pub fn days_after(&self) -> u32 {
        self.days_after.unwrap_or(DEFAULT_DAYS_AFTER)
    }

    /// Log the effective configuration as an indented block.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            log_indented!("Location: {lat:.4}°, {lon:.4}°");
        }
        log_indented!(
            "Timezone: {}",
            self.timezone.as_deref().unwrap_or("system default")
        );
        log_indented!(
            "Range: {} days before, {} days after",
            self.days_before(),
            self.days_after()
        );
    }
}
