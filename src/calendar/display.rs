//! Terminal rendering of the solar calendar.
//!
//! Times are rounded to the nearest minute and shown as `H:MM` on the local
//! clock of the display timezone; durations are shown as `H:MM` too. Cells
//! holding the earliest/shortest value of their column are marked `▼`, the
//! latest/longest `▲`. Weekend rows carry a `*` and today's row a `▶`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use std::fmt::Display;

use super::{CalendarDay, Extremes, Significance};
use crate::astro::{DurationEvent, TimeEvent};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Width of one value column, marker included.
const CELL_WIDTH: usize = 9;

/// Round a millisecond count to the nearest whole minute, halves rounding up.
pub fn round_to_minute(millis: i64) -> i64 {
    (millis + MILLIS_PER_MINUTE / 2).div_euclid(MILLIS_PER_MINUTE) * MILLIS_PER_MINUTE
}

/// Local clock time of `instant` in `tz`, rounded to the minute.
pub fn format_time<Z>(instant: DateTime<Utc>, tz: &Z) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let rounded = round_to_minute(instant.timestamp_millis());
    match DateTime::from_timestamp_millis(rounded) {
        Some(utc) => utc.with_timezone(tz).format("%-H:%M").to_string(),
        None => "-:--".to_string(),
    }
}

/// A duration as hours and minutes, rounded to the minute.
pub fn format_duration(duration: Duration) -> String {
    let minutes = round_to_minute(duration.num_milliseconds()) / MILLIS_PER_MINUTE;
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

fn marker(significance: Option<Significance>) -> char {
    match significance {
        Some(Significance::Earliest | Significance::Shortest) => '▼',
        Some(Significance::Latest | Significance::Longest) => '▲',
        None => ' ',
    }
}

fn cell(text: &str, significance: Option<Significance>) -> String {
    format!("{text:>width$}{}", marker(significance), width = CELL_WIDTH - 1)
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Column headings aligned with [`format_row`].
pub fn format_header() -> String {
    let mut line = format!("{:<17}", "");
    for event in TimeEvent::ALL {
        line.push_str(&cell(event.label(), None));
    }
    for event in DurationEvent::ALL {
        line.push_str(&cell(event.label(), None));
    }
    line.trim_end().to_string()
}

/// One calendar row.
pub fn format_row<Z>(
    day: &CalendarDay,
    extremes: Option<&Extremes>,
    today: NaiveDate,
    tz: &Z,
) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let today_mark = if day.date == today { '▶' } else { ' ' };
    let weekend_mark = if is_weekend(day.date) { '*' } else { ' ' };
    let mut line = format!(
        "{today_mark}{} {weekend_mark}",
        day.date.format("%a %Y-%m-%d")
    );

    for event in TimeEvent::ALL {
        let significance = extremes.and_then(|e| e.time_significance(day.date, event));
        let text = format_time(day.events.time(event), tz);
        line.push_str(&cell(&text, significance));
    }
    for event in DurationEvent::ALL {
        let significance = extremes.and_then(|e| e.duration_significance(day.date, event));
        let text = format_duration(day.events.duration(event));
        line.push_str(&cell(&text, significance));
    }

    line.trim_end().to_string()
}

/// Print the calendar as a table inside a log block.
pub fn print_calendar<Z>(
    days: &[CalendarDay],
    extremes: Option<&Extremes>,
    today: NaiveDate,
    tz: &Z,
) where
    Z: TimeZone,
    Z::Offset: Display,
{
    log_block_start!("Solar calendar, {} days", days.len());
    log_indented!("{}", format_header());
    for day in days {
        log_indented!("{}", format_row(day, extremes, today, tz));
    }
    log_pipe!();
    log_decorated!("▼ earliest/shortest  ▲ latest/longest  * weekend  ▶ today");
}

/// Print the significant days of the calendar.
pub fn print_extremes<Z>(extremes: &Extremes, tz: &Z)
where
    Z: TimeZone,
    Z::Offset: Display,
{
    log_block_start!("Significant days");
    for event in TimeEvent::ALL {
        let range = extremes.time(event);
        log_indented!(
            "{:<9} earliest {} ({}), latest {} ({})",
            event.label(),
            range.min.date,
            format_offset(range.min.value, range.min.date, tz),
            range.max.date,
            format_offset(range.max.value, range.max.date, tz)
        );
    }
    for event in DurationEvent::ALL {
        let range = extremes.duration(event);
        log_indented!(
            "{:<9} shortest {} ({}), longest {} ({})",
            event.label(),
            range.min.date,
            format_duration(Duration::milliseconds(range.min.value)),
            range.max.date,
            format_duration(Duration::milliseconds(range.max.value))
        );
    }
}

// Offsets are stored relative to clock noon; rebuild the instant to show it
// on the local clock of that day.
fn format_offset<Z>(offset_millis: i64, date: NaiveDate, tz: &Z) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    match super::clock_noon(date, tz) {
        Ok(noon) => format_time(noon + Duration::milliseconds(offset_millis), tz),
        Err(_) => "-:--".to_string(),
    }
}
