//! The `day` command: every solar event of a single day in detail.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};
use std::fmt::Display;

use super::load_config;
use super::table::today_in;
use crate::astro::{DurationEvent, GeoPosition, TimeEvent, solar_altitude, to_epoch};
use crate::calendar::CalendarDay;
use crate::calendar::display::format_duration;

/// Print the solar events of `date` (`YYYY-MM-DD`), or of today when `None`.
pub fn handle_day_command(debug_enabled: bool, date: Option<String>) -> Result<()> {
    log_version!();

    let date = date.as_deref().map(parse_date).transpose()?;
    let (config, observer) = load_config(debug_enabled)?;

    match config.timezone()? {
        Some(tz) => show_day(observer, date, &tz, debug_enabled)?,
        None => show_day(observer, date, &Local, debug_enabled)?,
    }

    log_end!();
    Ok(())
}

/// Parse a calendar date given on the command line.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{input}', expected YYYY-MM-DD"))
}

fn show_day<Z>(
    observer: GeoPosition,
    date: Option<NaiveDate>,
    tz: &Z,
    debug_enabled: bool,
) -> Result<()>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let date = date.unwrap_or_else(|| today_in(tz));
    let day = CalendarDay::compute(date, observer, tz)?;

    log_block_start!("{}", date.format("%A %-d %B %Y"));
    for (event, instant) in day.events.time_events() {
        log_indented!(
            "{:<9} {}",
            event.label(),
            instant.with_timezone(tz).format("%H:%M:%S %Z")
        );
    }

    log_block_start!("Durations");
    for (event, duration) in day.events.duration_events() {
        log_indented!("{:<9} {}", event.label(), format_duration(duration));
    }

    if debug_enabled {
        log_debug_block(&day, observer)?;
    }

    Ok(())
}

fn log_debug_block(day: &CalendarDay, observer: GeoPosition) -> Result<()> {
    log_pipe!();
    log_debug!("Clock noon epoch: {:.6}", to_epoch(day.clock_noon));
    for event in TimeEvent::ALL {
        let time = to_epoch(day.events.time(event));
        log_indented!(
            "{:<9} epoch {:.6}  offset {:>+9.3}s  altitude {:>+8.4}°",
            event.label(),
            time,
            day.offset_millis(event) as f64 / 1000.0,
            solar_altitude(time, observer)?
        );
    }
    for event in DurationEvent::ALL {
        log_indented!(
            "{:<9} {} ms",
            event.label(),
            day.duration_millis(event)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::test_constants::*;
    use chrono::Utc;
    use serial_test::serial;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-21").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
        );
        assert_eq!(
            parse_date(" 2024-12-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("21/06/2024").is_err());
        assert!(parse_date("").is_err());
        let err = parse_date("tomorrow").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    #[serial]
    fn test_show_day_with_debug_block() {
        crate::logger::Log::set_enabled(false);
        let result = show_day(
            GeoPosition::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE),
            NaiveDate::from_ymd_opt(2024, 3, 20),
            &chrono_tz::America::New_York,
            true,
        );
        let polar = show_day(
            GeoPosition::new(70.0, 19.0),
            NaiveDate::from_ymd_opt(2024, 6, 21),
            &Utc,
            true,
        );
        crate::logger::Log::set_enabled(true);
        assert!(result.is_ok());
        assert!(polar.is_ok());
    }
}
