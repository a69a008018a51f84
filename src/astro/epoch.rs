//! Conversion between civil instants and the continuous day-count used by the
//! orbital formulas.
//!
//! The epoch is 1999-12-31T00:00:00 UTC. One unit is one day of 86 400 000
//! milliseconds, with no timezone or leap-second component.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Fractional days since 1999-12-31T00:00:00 UTC.
pub type EpochTime = f64;

/// Milliseconds between the Unix epoch and 1999-12-31T00:00:00 UTC.
pub const EPOCH_UNIX_MILLIS: i64 = 946_598_400_000;

pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Unix milliseconds to epoch days.
pub fn millis_to_epoch(unix_millis: f64) -> EpochTime {
    (unix_millis - EPOCH_UNIX_MILLIS as f64) / MILLIS_PER_DAY
}

/// Epoch days to Unix milliseconds. Exact inverse of [`millis_to_epoch`] up to
/// floating-point rounding.
pub fn epoch_to_millis(time: EpochTime) -> f64 {
    time * MILLIS_PER_DAY + EPOCH_UNIX_MILLIS as f64
}

pub fn to_epoch(instant: DateTime<Utc>) -> EpochTime {
    millis_to_epoch(instant.timestamp_millis() as f64)
}

/// Convert an epoch time back to a civil instant, rounded to the nearest millisecond.
pub fn from_epoch(time: EpochTime) -> Result<DateTime<Utc>> {
    let millis = epoch_to_millis(time).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        anyhow::bail!("epoch time {time} is not a representable instant");
    }
    DateTime::from_timestamp_millis(millis as i64)
        .with_context(|| format!("epoch time {time} is outside the supported date range"))
}
