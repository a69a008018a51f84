//! Configuration validation functionality.

use anyhow::Result;

use super::Config;
use crate::common::constants::*;

/// Reject configurations the calendar cannot work with.
pub fn validate_config(config: &Config) -> Result<()> {
    let (lat, lon) = match (config.latitude, config.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => anyhow::bail!("latitude and longitude are required"),
        (None, Some(_)) => anyhow::bail!("latitude is required when longitude is set"),
        (Some(_), None) => anyhow::bail!("longitude is required when latitude is set"),
    };

    if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat) {
        anyhow::bail!(
            "latitude must be between {} and {} degrees (got {})",
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE,
            lat
        );
    }

    if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon) {
        anyhow::bail!(
            "longitude must be between {} and {} degrees (got {})",
            MINIMUM_LONGITUDE,
            MAXIMUM_LONGITUDE,
            lon
        );
    }

    config.timezone()?;

    if let Some(days) = config.days_before
        && days > MAXIMUM_DAYS_RANGE
    {
        anyhow::bail!(
            "days_before ({}) must be between 0 and {}",
            days,
            MAXIMUM_DAYS_RANGE
        );
    }

    if let Some(days) = config.days_after
        && days > MAXIMUM_DAYS_RANGE
    {
        anyhow::bail!(
            "days_after ({}) must be between 0 and {}",
            days,
            MAXIMUM_DAYS_RANGE
        );
    }

    Ok(())
}
