// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%A, %B %-d";
const LABEL_FORMAT: &str = "%Z";

/// What a clock in a given time zone shows at a given instant.
///
/// A reading evaluates the zone's tz rules exactly once. The time, date, offset
/// and label it reports therefore always agree on which calendar day and which
/// standard or daylight-saving variant apply.
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use jiff::tz::TimeZone;
/// use tzbridge::ZoneReading;
///
/// let instant: Timestamp = "2024-07-15T16:00:00Z".parse()?;
/// let reading = ZoneReading::new(instant, &TimeZone::get("America/Toronto")?);
///
/// assert_eq!(reading.time(), "12:00");
/// assert_eq!(reading.date(), "Monday, July 15");
/// assert_eq!(reading.label(), "EDT");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneReading(Zoned);

impl ZoneReading {
    /// Evaluates the tz rules of `tz` at `instant`.
    #[must_use]
    pub fn new(instant: Timestamp, tz: &TimeZone) -> Self {
        Self(instant.to_zoned(tz.clone()))
    }

    /// The time of day in 24-hour `HH:MM` form.
    #[must_use]
    pub fn time(&self) -> String {
        self.0.strftime(TIME_FORMAT).to_string()
    }

    /// The date as `Weekday, Month Day`, e.g. `Monday, July 15`.
    #[must_use]
    pub fn date(&self) -> String {
        self.0.strftime(DATE_FORMAT).to_string()
    }

    /// The short zone abbreviation in effect, e.g. `EST` or `AEDT`.
    ///
    /// Empty if the tz database carries no abbreviation for the zone.
    #[must_use]
    pub fn label(&self) -> String {
        self.0.strftime(LABEL_FORMAT).to_string()
    }

    /// The offset from UTC in effect.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.0.offset()
    }
}

/// Formats `instant` as `HH:MM` on a wall clock in `tz`.
#[must_use]
pub fn format_time(instant: Timestamp, tz: &TimeZone) -> String {
    ZoneReading::new(instant, tz).time()
}

/// Formats `instant` as `Weekday, Month Day` on a calendar in `tz`.
#[must_use]
pub fn format_date(instant: Timestamp, tz: &TimeZone) -> String {
    ZoneReading::new(instant, tz).date()
}

/// Resolves the short label (`EST`, `EDT`, `AEST`, `AEDT`, ...) of `tz` at `instant`.
#[must_use]
pub fn resolve_offset_label(instant: Timestamp, tz: &TimeZone) -> String {
    ZoneReading::new(instant, tz).label()
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use chrono::{DateTime, Offset as _, Utc};
    use rstest::rstest;

    use super::*;
    use crate::{Zone, Zones};

    fn instant(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn tz(zone: Zone) -> TimeZone {
        Zones::load().unwrap().get(zone).clone()
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(ZoneReading: Send, Sync, Clone, std::fmt::Debug);
    }

    #[rstest]
    #[case::ontario_winter(Zone::Ontario, "2024-01-15T17:00:00Z", "EST")]
    #[case::ontario_summer(Zone::Ontario, "2024-07-15T16:00:00Z", "EDT")]
    #[case::sydney_summer(Zone::Sydney, "2024-01-15T01:00:00Z", "AEDT")]
    #[case::sydney_winter(Zone::Sydney, "2024-07-15T02:00:00Z", "AEST")]
    fn label_follows_daylight_saving(#[case] zone: Zone, #[case] at: &str, #[case] expected: &str) {
        assert_eq!(resolve_offset_label(instant(at), &tz(zone)), expected);
    }

    #[test]
    fn labels_differ_between_seasons() {
        for zone in Zone::ALL {
            let tz = tz(zone);
            let january = resolve_offset_label(instant("2024-01-15T12:00:00Z"), &tz);
            let july = resolve_offset_label(instant("2024-07-15T12:00:00Z"), &tz);

            assert_ne!(january, july, "{zone} should change label between January and July");
        }
    }

    #[test]
    fn format_time_is_zero_padded_24_hour() {
        let tz = tz(Zone::Ontario);

        assert_eq!(format_time(instant("2024-07-15T11:05:00Z"), &tz), "07:05");
        assert_eq!(format_time(instant("2024-07-15T22:30:00Z"), &tz), "18:30");
        assert_eq!(format_time(instant("2024-07-16T04:00:00Z"), &tz), "00:00");
    }

    #[test]
    fn format_date_uses_long_names_and_unpadded_day() {
        let tz = tz(Zone::Sydney);

        assert_eq!(format_date(instant("2024-07-04T12:00:00Z"), &tz), "Thursday, July 4");
        assert_eq!(format_date(instant("2024-12-24T14:00:00Z"), &tz), "Wednesday, December 25");
    }

    #[test]
    fn date_rolls_over_at_local_midnight() {
        let tz = tz(Zone::Ontario);

        // 23:59 and 00:00 EDT on either side of midnight, July 15 to 16.
        let before = ZoneReading::new(instant("2024-07-16T03:59:00Z"), &tz);
        let after = ZoneReading::new(instant("2024-07-16T04:00:00Z"), &tz);

        assert_eq!((before.time().as_str(), before.date().as_str()), ("23:59", "Monday, July 15"));
        assert_eq!((after.time().as_str(), after.date().as_str()), ("00:00", "Tuesday, July 16"));
    }

    #[test]
    fn same_instant_has_different_dates_per_zone() {
        let at = instant("2024-07-15T16:00:00Z");

        assert_eq!(format_date(at, &tz(Zone::Ontario)), "Monday, July 15");
        assert_eq!(format_date(at, &tz(Zone::Sydney)), "Tuesday, July 16");
    }

    #[test]
    fn label_changes_exactly_at_transition() {
        // Ontario springs forward at 2024-03-10 02:00 EST (07:00 UTC).
        let tz = tz(Zone::Ontario);

        let before = ZoneReading::new(instant("2024-03-10T06:59:00Z"), &tz);
        let after = ZoneReading::new(instant("2024-03-10T07:00:00Z"), &tz);

        assert_eq!((before.time().as_str(), before.label().as_str()), ("01:59", "EST"));
        assert_eq!((after.time().as_str(), after.label().as_str()), ("03:00", "EDT"));
    }

    #[rstest]
    #[case(Zone::Ontario, chrono_tz::America::Toronto)]
    #[case(Zone::Sydney, chrono_tz::Australia::Sydney)]
    fn offsets_agree_with_chrono_tz(#[case] zone: Zone, #[case] oracle: chrono_tz::Tz) {
        let tz = tz(zone);

        // Samples every 11 days across 2024 and 2025, covering both seasons in each zone.
        for day in (0..730).step_by(11) {
            let seconds = 1_704_067_200 + day * 86_400 + 37_000;
            let reading = ZoneReading::new(Timestamp::from_second(seconds).unwrap(), &tz);

            let expected = DateTime::<Utc>::from_timestamp(seconds, 0)
                .unwrap()
                .with_timezone(&oracle)
                .offset()
                .fix()
                .local_minus_utc();

            assert_eq!(reading.offset().seconds(), expected, "{zone} at {seconds}");
        }
    }
}
