//! The default command: a table of solar events around today.

use anyhow::Result;
use chrono::{Local, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

use super::load_config;
use crate::astro::GeoPosition;
use crate::calendar::{build_calendar, display, find_extremes};

/// Print the calendar from `days_before` days before today to `days_after`
/// days after it, as configured.
pub fn handle_table_command(debug_enabled: bool) -> Result<()> {
    log_version!();
    if debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled");
    }

    let (config, observer) = load_config(debug_enabled)?;
    let (days_before, days_after) = (config.days_before(), config.days_after());

    match config.timezone()? {
        Some(tz) => show_table(observer, days_before, days_after, &tz, debug_enabled)?,
        None => show_table(observer, days_before, days_after, &Local, debug_enabled)?,
    }

    log_end!();
    Ok(())
}

fn show_table<Z>(
    observer: GeoPosition,
    days_before: u32,
    days_after: u32,
    tz: &Z,
    debug_enabled: bool,
) -> Result<()>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let today = today_in(tz);
    let days = build_calendar(today, days_before, days_after, observer, tz)?;
    let extremes = find_extremes(&days);

    if debug_enabled {
        log_pipe!();
        log_debug!(
            "Computed {} days from {} to {}",
            days.len(),
            days.first().map_or(today, |d| d.date),
            days.last().map_or(today, |d| d.date)
        );
    }

    display::print_calendar(&days, extremes.as_ref(), today, tz);
    if let Some(extremes) = &extremes {
        display::print_extremes(extremes, tz);
    }

    Ok(())
}

/// Today's date on the clock of `tz`.
pub(crate) fn today_in<Z: TimeZone>(tz: &Z) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::test_constants::*;
    use chrono::FixedOffset;
    use serial_test::serial;

    #[test]
    fn test_today_in_follows_timezone() {
        let east = FixedOffset::east_opt(14 * 3600).unwrap();
        let west = FixedOffset::west_opt(12 * 3600).unwrap();
        let difference = today_in(&east) - today_in(&west);
        // 26 hours apart: one or two calendar days, never zero
        assert!((1..=2).contains(&difference.num_days()));
    }

    #[test]
    #[serial]
    fn test_show_table_with_empty_range_renders() {
        crate::logger::Log::set_enabled(false);
        let result = show_table(GeoPosition::new(TEST_GREENWICH_LATITUDE, TEST_GREENWICH_LONGITUDE), 0, 0, &Utc, true);
        crate::logger::Log::set_enabled(true);
        assert!(result.is_ok());
    }
}
