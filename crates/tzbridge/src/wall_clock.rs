// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use jiff::civil::Time;

use crate::Error;

/// A time of day as read from a wall clock, with no date or zone attached.
///
/// The only accepted textual form is exactly two ASCII digits, a colon and two
/// ASCII digits, for example `07:45`. Anything else, including partial input
/// such as `7:45` or `07:`, fails to parse. Values that have the right shape
/// but name a nonexistent time of day (`24:00`, `12:60`) are rejected too.
///
/// # Examples
///
/// ```
/// use tzbridge::WallClockTime;
///
/// let time: WallClockTime = "07:45".parse()?;
/// assert_eq!(time.hour(), 7);
/// assert_eq!(time.minute(), 45);
/// assert_eq!(time.to_string(), "07:45");
///
/// assert!("7:45".parse::<WallClockTime>().is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClockTime {
    hour: i8,
    minute: i8,
}

impl WallClockTime {
    /// Creates a time of day from its parts.
    ///
    /// Returns `None` unless `hour` is in `0..=23` and `minute` in `0..=59`.
    #[must_use]
    pub fn new(hour: i8, minute: i8) -> Option<Self> {
        ((0..=23).contains(&hour) && (0..=59).contains(&minute)).then_some(Self { hour, minute })
    }

    /// The hour, in `0..=23`.
    #[must_use]
    pub const fn hour(self) -> i8 {
        self.hour
    }

    /// The minute, in `0..=59`.
    #[must_use]
    pub const fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the civil time with seconds zeroed.
    #[must_use]
    pub fn to_civil(self) -> Time {
        Time::constant(self.hour, self.minute, 0, 0)
    }
}

impl FromStr for WallClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[h1, h2, b':', m1, m2] = s.as_bytes() else {
            return Err(Error::invalid_time(s));
        };

        let (Some(hour), Some(minute)) = (two_digits(h1, h2), two_digits(m1, m2)) else {
            return Err(Error::invalid_time(s));
        };

        Self::new(hour, minute).ok_or_else(|| Error::invalid_time(s))
    }
}

impl Display for WallClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[expect(clippy::cast_possible_wrap, reason = "two decimal digits always fit in an i8")]
fn two_digits(tens: u8, ones: u8) -> Option<i8> {
    (tens.is_ascii_digit() && ones.is_ascii_digit()).then(|| ((tens - b'0') * 10 + (ones - b'0')) as i8)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(WallClockTime: Send, Sync, Copy, FromStr, Display);
    }

    #[rstest]
    #[case("00:00", 0, 0)]
    #[case("07:05", 7, 5)]
    #[case("12:30", 12, 30)]
    #[case("23:59", 23, 59)]
    fn parse_ok(#[case] input: &str, #[case] hour: i8, #[case] minute: i8) {
        let time: WallClockTime = input.parse().unwrap();

        assert_eq!(time.hour(), hour);
        assert_eq!(time.minute(), minute);
        assert_eq!(time.to_string(), input);
    }

    #[rstest]
    #[case::empty("")]
    #[case::one_digit("1")]
    #[case::missing_minutes("12:")]
    #[case::letters("ab:cd")]
    #[case::short_hour("1:30")]
    #[case::long_minutes("12:300")]
    #[case::leading_space(" 12:30")]
    #[case::trailing_newline("12:30\n")]
    #[case::wrong_separator("12.30")]
    #[case::seconds("12:30:00")]
    #[case::non_ascii_digits("١٢:٣٠")]
    #[case::hour_out_of_range("24:00")]
    #[case::minute_out_of_range("12:60")]
    fn parse_rejects(#[case] input: &str) {
        input.parse::<WallClockTime>().unwrap_err();
    }

    #[test]
    fn new_bounds() {
        assert!(WallClockTime::new(23, 59).is_some());
        assert!(WallClockTime::new(24, 0).is_none());
        assert!(WallClockTime::new(0, 60).is_none());
        assert!(WallClockTime::new(-1, 0).is_none());
    }

    #[test]
    fn to_civil_zeroes_seconds() {
        let time = WallClockTime::new(6, 15).unwrap().to_civil();

        assert_eq!(time, jiff::civil::time(6, 15, 0, 0));
    }
}
