// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::Clock;

/// Controls the flow of wall time in tests.
///
/// A controlled clock stays frozen at its current instant until it is moved
/// with [`advance`][Self::advance] or [`advance_to`][Self::advance_to]. This is
/// what makes "now" samples taken by the live clock and by reset predictable.
///
/// `ClockControl` is available when the `test-util` feature is enabled. Never
/// enable that feature for production code; use it from `dev-dependencies` only.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use jiff::Timestamp;
/// use tzbridge::ClockControl;
///
/// let start: Timestamp = "2024-07-15T16:00:00Z".parse()?;
/// let control = ClockControl::new_at(start);
/// let clock = control.to_clock();
///
/// control.advance(Duration::from_secs(60));
///
/// assert_eq!(clock.timestamp().to_string(), "2024-07-15T16:01:00Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClockControl {
    /// Shared with every clock created from this control.
    now: Arc<Mutex<SystemTime>>,
}

impl ClockControl {
    /// Creates a control frozen at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::new_at(SystemTime::UNIX_EPOCH)
    }

    /// Creates a control frozen at `time`.
    ///
    /// Accepts anything convertible to [`SystemTime`], including [`jiff::Timestamp`].
    #[must_use]
    pub fn new_at(time: impl Into<SystemTime>) -> Self {
        Self {
            now: Arc::new(Mutex::new(time.into())),
        }
    }

    /// Creates a clock that reads its time from this control.
    #[must_use]
    pub fn to_clock(&self) -> Clock {
        Clock::with_control(self)
    }

    /// Moves the time forward by `duration`.
    ///
    /// # Panics
    ///
    /// Panics if the resulting time overflows [`SystemTime`].
    pub fn advance(&self, duration: Duration) {
        self.with_now(|now| {
            *now = now
                .checked_add(duration)
                .expect("advancing the clock control overflowed SystemTime");
        });
    }

    /// Sets the time to `time`, which may also lie in the past.
    pub fn advance_to(&self, time: impl Into<SystemTime>) {
        let time = time.into();
        self.with_now(|now| *now = time);
    }

    /// Returns the time the control is frozen at.
    #[must_use]
    pub fn system_time(&self) -> SystemTime {
        self.with_now(|now| *now)
    }

    fn with_now<R>(&self, f: impl FnOnce(&mut SystemTime) -> R) -> R {
        let mut now = self.now.lock().expect("clock control lock poisoned");
        f(&mut now)
    }
}

impl Default for ClockControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(ClockControl: Send, Sync, Clone, Default, std::fmt::Debug);
    }

    #[test]
    fn new_starts_at_epoch() {
        assert_eq!(ClockControl::new().system_time(), SystemTime::UNIX_EPOCH);
        assert_eq!(ClockControl::default().system_time(), SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn new_at_accepts_timestamp() {
        let start: jiff::Timestamp = "2024-07-15T16:00:00Z".parse().unwrap();
        let control = ClockControl::new_at(start);

        assert_eq!(control.to_clock().timestamp(), start);
    }

    #[test]
    fn advance_moves_every_clock() {
        let control = ClockControl::new();
        let first = control.to_clock();
        let second = control.to_clock();

        control.advance(Duration::from_secs(90));

        assert_eq!(first.system_time(), SystemTime::UNIX_EPOCH + Duration::from_secs(90));
        assert_eq!(second.system_time(), first.system_time());
    }

    #[test]
    fn advance_to_can_go_backwards() {
        let control = ClockControl::new_at(SystemTime::UNIX_EPOCH + Duration::from_secs(100));

        control.advance_to(SystemTime::UNIX_EPOCH + Duration::from_secs(10));

        assert_eq!(control.system_time(), SystemTime::UNIX_EPOCH + Duration::from_secs(10));
    }
}
