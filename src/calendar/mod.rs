//! Solar calendar covering a range of days around a center date.
//!
//! Each day is computed independently from its local clock noon, so a
//! calendar is just the day computation mapped over a date range. After the
//! days are built, [`find_extremes`] picks the significant days of the range:
//! the earliest and latest occurrence of every time event and the shortest and
//! longest of every duration.
//!
//! Time events are compared as offsets from their day's clock noon, which makes
//! days comparable as times of day even across DST changes.

pub mod display;

use anyhow::{Context, Result};
use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::astro::{DayEvents, DurationEvent, GeoPosition, TimeEvent, find_times};
use crate::common::constants::CLOCK_NOON_HOUR;

/// One row of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Local calendar date in the display timezone
    pub date: NaiveDate,
    /// The instant used to seed the day's search
    pub clock_noon: DateTime<Utc>,
    pub events: DayEvents,
    /// Milliseconds from `clock_noon` to each time event, in [`TimeEvent::ALL`] order
    offsets: [i64; 5],
}

impl CalendarDay {
    /// Compute the solar events of `date` as seen from `observer` in `tz`.
    pub fn compute<Z: TimeZone>(date: NaiveDate, observer: GeoPosition, tz: &Z) -> Result<Self> {
        let clock_noon = clock_noon(date, tz)?;
        let events = find_times(clock_noon, observer)
            .with_context(|| format!("Failed to compute solar events for {date}"))?;

        let offsets = TimeEvent::ALL
            .map(|event| (events.time(event) - clock_noon).num_milliseconds());

        Ok(Self {
            date,
            clock_noon,
            events,
            offsets,
        })
    }

    /// Offset of `event` from the day's clock noon, in milliseconds.
    pub fn offset_millis(&self, event: TimeEvent) -> i64 {
        self.offsets[event as usize]
    }

    /// Length of `event` in milliseconds.
    pub fn duration_millis(&self, event: DurationEvent) -> i64 {
        self.events.duration(event).num_milliseconds()
    }
}

/// The instant of 12:00 local time on `date` in `tz`.
///
/// An ambiguous local noon resolves to the earlier instant. A local noon that
/// falls in a gap resolves to the first valid local time after it on the same
/// date, and a date with no valid local time at all to 12:00 UTC.
pub fn clock_noon<Z: TimeZone>(date: NaiveDate, tz: &Z) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(CLOCK_NOON_HOUR, 0, 0)
        .with_context(|| format!("Invalid clock noon for {date}"))?;

    Ok(match first_valid_local(tz, naive) {
        Some(local) => local.with_timezone(&Utc),
        None => naive.and_utc(),
    })
}

// Gaps start and end on whole minutes, so stepping by one minute finds the
// end of any gap without skipping a valid time.
fn first_valid_local<Z: TimeZone>(tz: &Z, naive: NaiveDateTime) -> Option<DateTime<Z>> {
    let date = naive.date();
    std::iter::successors(Some(naive), |t| t.checked_add_signed(Duration::minutes(1)))
        .take_while(|t| t.date() == date)
        .find_map(|t| tz.from_local_datetime(&t).earliest())
}

/// Build the calendar from `days_before` days before `center` to `days_after`
/// days after it, inclusive.
pub fn build_calendar<Z: TimeZone>(
    center: NaiveDate,
    days_before: u32,
    days_after: u32,
    observer: GeoPosition,
    tz: &Z,
) -> Result<Vec<CalendarDay>> {
    let start = center
        .checked_sub_days(Days::new(u64::from(days_before)))
        .with_context(|| format!("{days_before} days before {center} is out of range"))?;
    center
        .checked_add_days(Days::new(u64::from(days_after)))
        .with_context(|| format!("{days_after} days after {center} is out of range"))?;

    let count = days_before as usize + days_after as usize + 1;
    start
        .iter_days()
        .take(count)
        .map(|date| CalendarDay::compute(date, observer, tz))
        .collect()
}

/// A day holding an extreme value and that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extreme {
    pub date: NaiveDate,
    pub value: i64,
}

/// Lowest and highest values of one event over the calendar.
///
/// For time events these are the earliest and latest days, for durations the
/// shortest and longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: Extreme,
    pub max: Extreme,
}

impl Range {
    fn new(date: NaiveDate, value: i64) -> Self {
        let seed = Extreme { date, value };
        Self {
            min: seed,
            max: seed,
        }
    }

    // Strict comparisons: on ties the first day keeps the mark.
    fn update(&mut self, date: NaiveDate, value: i64) {
        if value < self.min.value {
            self.min = Extreme { date, value };
        }
        if value > self.max.value {
            self.max = Extreme { date, value };
        }
    }
}

/// How a calendar cell stands out from the rest of its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    Earliest,
    Latest,
    Shortest,
    Longest,
}

/// Significant days of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    times: [Range; 5],
    durations: [Range; 3],
}

impl Extremes {
    pub fn time(&self, event: TimeEvent) -> Range {
        self.times[event as usize]
    }

    pub fn duration(&self, event: DurationEvent) -> Range {
        self.durations[event as usize]
    }

    /// Mark for the `event` cell on `date`, earliest taking precedence over latest.
    pub fn time_significance(&self, date: NaiveDate, event: TimeEvent) -> Option<Significance> {
        let range = self.time(event);
        if range.min.date == date {
            Some(Significance::Earliest)
        } else if range.max.date == date {
            Some(Significance::Latest)
        } else {
            None
        }
    }

    /// Mark for the `event` cell on `date`, shortest taking precedence over longest.
    pub fn duration_significance(
        &self,
        date: NaiveDate,
        event: DurationEvent,
    ) -> Option<Significance> {
        let range = self.duration(event);
        if range.min.date == date {
            Some(Significance::Shortest)
        } else if range.max.date == date {
            Some(Significance::Longest)
        } else {
            None
        }
    }
}

/// Find the significant days of `days`, or `None` for an empty calendar.
pub fn find_extremes(days: &[CalendarDay]) -> Option<Extremes> {
    let first = days.first()?;

    let mut extremes = Extremes {
        times: TimeEvent::ALL.map(|e| Range::new(first.date, first.offset_millis(e))),
        durations: DurationEvent::ALL.map(|e| Range::new(first.date, first.duration_millis(e))),
    };

    for day in days {
        for event in TimeEvent::ALL {
            extremes.times[event as usize].update(day.date, day.offset_millis(event));
        }
        for event in DurationEvent::ALL {
            extremes.durations[event as usize].update(day.date, day.duration_millis(event));
        }
    }

    Some(extremes)
}
