//! Command handlers for suntable.
//!
//! Each command loads the configuration, resolves the observer and display
//! timezone, and prints its output through the logger. Commands are generic
//! over the display timezone so the system zone and named IANA zones share one
//! code path.

pub mod day;
pub mod table;

use anyhow::Result;

use crate::astro::GeoPosition;
use crate::config::Config;

/// Load the configuration and announce it.
pub(crate) fn load_config(debug_enabled: bool) -> Result<(Config, GeoPosition)> {
    let config = Config::load()?;
    let observer = config.observer()?;

    if debug_enabled {
        config.log_config();
    } else {
        log_block_start!(
            "Location {:.4}°, {:.4}° ({})",
            observer.lat,
            observer.lon,
            config.timezone.as_deref().unwrap_or("system timezone")
        );
    }

    Ok((config, observer))
}
