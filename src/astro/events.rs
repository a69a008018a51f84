//! Solar events of one calendar day for one observer.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};

use super::GeoPosition;
use super::altitude::find_altitude_time;
use super::epoch::{from_epoch, to_epoch};
use super::transit::find_transit_time;

/// Sun altitude at sunrise and sunset: apparent radius plus standard refraction.
pub const SUNRISE_ALTITUDE: f64 = -0.833;

/// Sun altitude bounding civil twilight.
pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;

/// Offset, in days, from solar noon used to seed the morning and evening searches.
const SEARCH_OFFSET: f64 = 0.25;

/// Instants of the day, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeEvent {
    StartCivilTwilight,
    Sunrise,
    Noon,
    Sunset,
    EndCivilTwilight,
}

impl TimeEvent {
    pub const ALL: [TimeEvent; 5] = [
        TimeEvent::StartCivilTwilight,
        TimeEvent::Sunrise,
        TimeEvent::Noon,
        TimeEvent::Sunset,
        TimeEvent::EndCivilTwilight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeEvent::StartCivilTwilight => "Dawn",
            TimeEvent::Sunrise => "Sunrise",
            TimeEvent::Noon => "Noon",
            TimeEvent::Sunset => "Sunset",
            TimeEvent::EndCivilTwilight => "Dusk",
        }
    }
}

/// Lengths of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationEvent {
    /// Sunrise to sunset
    Sunlight,
    /// Start to end of civil twilight
    Daylight,
    /// The rest of the 24 hours
    Night,
}

impl DurationEvent {
    pub const ALL: [DurationEvent; 3] = [
        DurationEvent::Sunlight,
        DurationEvent::Daylight,
        DurationEvent::Night,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DurationEvent::Sunlight => "Sunlight",
            DurationEvent::Daylight => "Daylight",
            DurationEvent::Night => "Night",
        }
    }
}

/// The solar events of one day.
///
/// Built fresh by [`find_times`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEvents {
    pub start_civil_twilight: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub noon: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub end_civil_twilight: DateTime<Utc>,
    pub sunlight: Duration,
    pub daylight: Duration,
    pub night: Duration,
}

impl DayEvents {
    pub fn time(&self, event: TimeEvent) -> DateTime<Utc> {
        match event {
            TimeEvent::StartCivilTwilight => self.start_civil_twilight,
            TimeEvent::Sunrise => self.sunrise,
            TimeEvent::Noon => self.noon,
            TimeEvent::Sunset => self.sunset,
            TimeEvent::EndCivilTwilight => self.end_civil_twilight,
        }
    }

    pub fn duration(&self, event: DurationEvent) -> Duration {
        match event {
            DurationEvent::Sunlight => self.sunlight,
            DurationEvent::Daylight => self.daylight,
            DurationEvent::Night => self.night,
        }
    }

    pub fn time_events(&self) -> impl Iterator<Item = (TimeEvent, DateTime<Utc>)> + '_ {
        TimeEvent::ALL.into_iter().map(|e| (e, self.time(e)))
    }

    pub fn duration_events(&self) -> impl Iterator<Item = (DurationEvent, Duration)> + '_ {
        DurationEvent::ALL.into_iter().map(|e| (e, self.duration(e)))
    }
}

/// Compute the solar events of the day containing `clock_noon` for `observer`.
///
/// `clock_noon` only seeds the search; any instant near the middle of the
/// desired local day works. Where the Sun never crosses an altitude the event
/// collapses onto solar noon (always below) or solar midnight (always above).
///
/// `sunlight` and `daylight` are limited to one day, so that during polar day
/// `night` is zero rather than a few seconds negative.
pub fn find_times(clock_noon: DateTime<Utc>, observer: GeoPosition) -> Result<DayEvents> {
    let solar_noon = find_transit_time(to_epoch(clock_noon), observer, true)
        .context("Failed to locate solar noon")?;
    let morning = solar_noon - SEARCH_OFFSET;
    let evening = solar_noon + SEARCH_OFFSET;

    let start_civil_twilight = from_epoch(find_altitude_time(
        morning,
        observer,
        true,
        CIVIL_TWILIGHT_ALTITUDE,
    )?)?;
    let sunrise = from_epoch(find_altitude_time(morning, observer, true, SUNRISE_ALTITUDE)?)?;
    let noon = from_epoch(solar_noon)?;
    let sunset = from_epoch(find_altitude_time(evening, observer, false, SUNRISE_ALTITUDE)?)?;
    let end_civil_twilight = from_epoch(find_altitude_time(
        evening,
        observer,
        false,
        CIVIL_TWILIGHT_ALTITUDE,
    )?)?;

    let one_day = Duration::days(1);
    let sunlight = (sunset - sunrise).clamp(Duration::zero(), one_day);
    let daylight = (end_civil_twilight - start_civil_twilight).clamp(Duration::zero(), one_day);

    Ok(DayEvents {
        start_civil_twilight,
        sunrise,
        noon,
        sunset,
        end_civil_twilight,
        sunlight,
        daylight,
        night: one_day - daylight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::test_constants::*;
    use chrono::TimeZone;

    fn assert_close(actual: DateTime<Utc>, expected: DateTime<Utc>, seconds: i64) {
        let diff = (actual - expected).num_seconds().abs();
        assert!(diff <= seconds, "{actual} differs from {expected} by {diff}s");
    }

    #[test]
    fn test_greenwich_midsummer() {
        let observer = GeoPosition::new(51.4769, 0.0);
        let clock_noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let events = find_times(clock_noon, observer).unwrap();

        let at = |h, m, s| Utc.with_ymd_and_hms(2024, 6, 21, h, m, s).unwrap();

        assert_close(events.start_civil_twilight, at(2, 55, 11), 2);
        assert_close(events.sunrise, at(3, 42, 53), 2);
        assert_close(events.noon, at(12, 1, 57), 2);
        assert_close(events.sunset, at(20, 20, 59), 2);
        assert_close(events.end_civil_twilight, at(21, 8, 41), 2);
    }

    #[test]
    fn test_durations_partition_the_day() {
        let observer = GeoPosition::new(-33.8688, 151.2093);
        let clock_noon = Utc.with_ymd_and_hms(2024, 12, 21, 2, 0, 0).unwrap();
        let events = find_times(clock_noon, observer).unwrap();

        assert_eq!(events.daylight + events.night, Duration::days(1));
        assert!(events.sunlight <= events.daylight);
        assert_eq!(events.sunlight, events.sunset - events.sunrise);
        assert_eq!(events.daylight, events.end_civil_twilight - events.start_civil_twilight);
    }

    #[test]
    fn test_events_are_chronological() {
        let observer = GeoPosition::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE);
        let clock_noon = Utc.with_ymd_and_hms(2024, 3, 20, 17, 0, 0).unwrap();
        let events = find_times(clock_noon, observer).unwrap();

        let times: Vec<_> = events.time_events().map(|(_, t)| t).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]), "{times:?}");
    }

    #[test]
    fn test_polar_day_has_no_night() {
        let observer = GeoPosition::new(70.0, 19.0);
        let clock_noon = Utc.with_ymd_and_hms(2024, 6, 21, 11, 0, 0).unwrap();
        let events = find_times(clock_noon, observer).unwrap();

        assert_eq!(events.daylight, Duration::days(1));
        assert_eq!(events.sunlight, Duration::days(1));
        assert_eq!(events.night, Duration::zero());
        assert_eq!(events.sunrise, events.start_civil_twilight);
        assert_eq!(events.sunset, events.end_civil_twilight);
    }

    #[test]
    fn test_polar_night_has_no_sunlight() {
        let observer = GeoPosition::new(70.0, 19.0);
        let clock_noon = Utc.with_ymd_and_hms(2024, 12, 21, 11, 0, 0).unwrap();
        let events = find_times(clock_noon, observer).unwrap();

        assert!(events.sunlight < Duration::seconds(1));
        assert!(events.daylight > Duration::hours(4));
        assert!(events.night < Duration::hours(20));
        assert_close(events.sunrise, events.noon, 1);
        assert_close(events.sunset, events.noon, 1);
    }

    #[test]
    fn test_labels_follow_event_order() {
        let labels: Vec<_> = TimeEvent::ALL.iter().map(TimeEvent::label).collect();
        assert_eq!(labels, ["Dawn", "Sunrise", "Noon", "Sunset", "Dusk"]);
        let labels: Vec<_> = DurationEvent::ALL.iter().map(DurationEvent::label).collect();
        assert_eq!(labels, ["Sunlight", "Daylight", "Night"]);
    }

    #[test]
    fn test_days_computed_in_parallel_match_sequential() {
        let observer = GeoPosition::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE);
        let seeds: Vec<_> = (0..8)
            .map(|d| Utc.with_ymd_and_hms(2024, 3, 20, 17, 0, 0).unwrap() + Duration::days(d))
            .collect();
        let sequential: Vec<_> = seeds
            .iter()
            .map(|seed| find_times(*seed, observer).unwrap())
            .collect();

        let parallel: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = seeds
                .iter()
                .map(|seed| scope.spawn(move || find_times(*seed, observer).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, parallel);
    }
}
