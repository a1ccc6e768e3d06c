// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::{Result, WallClockTime};

/// Returns the instant at which a wall clock in `tz` shows `time` on the
/// calendar day that `reference` falls on in `tz`.
///
/// "Today" is the reference's date as seen in `tz`, not in UTC and not in the
/// host's local zone. The result always falls on a whole minute.
///
/// # Daylight-saving transitions
///
/// The UTC offset in effect at `reference` is applied to the target time as
/// is. When a transition lies between the reference and the target, the
/// result is off by the size of the transition, and local times inside a
/// spring-forward gap or a fall-back overlap get no special treatment. This is
/// an accepted approximation.
///
/// # Errors
///
/// Returns an error only if the resulting instant is outside the supported range.
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use jiff::tz::TimeZone;
/// use tzbridge::{WallClockTime, to_instant};
///
/// let sydney = TimeZone::get("Australia/Sydney")?;
/// let reference: Timestamp = "2024-07-15T16:00:00Z".parse()?;
///
/// // July 16 in Sydney at the reference, AEST (UTC+10).
/// let instant = to_instant("20:00".parse::<WallClockTime>()?, &sydney, reference)?;
/// assert_eq!(instant.to_string(), "2024-07-16T10:00:00Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_instant(time: WallClockTime, tz: &TimeZone, reference: Timestamp) -> Result<Timestamp> {
    let now = reference.to_zoned(tz.clone());
    let target = now.date().to_datetime(time.to_civil());

    Ok(now.offset().to_timestamp(target)?)
}

/// Parses `text` as `HH:MM` and converts it with [`to_instant`].
///
/// # Errors
///
/// Returns an error if `text` is not a complete `HH:MM` time of day, or if the
/// resulting instant is outside the supported range.
pub fn parse_to_instant(text: &str, tz: &TimeZone, reference: Timestamp) -> Result<Timestamp> {
    to_instant(text.parse()?, tz, reference)
}
