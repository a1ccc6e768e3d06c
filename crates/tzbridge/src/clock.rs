// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::SystemTime;

use jiff::Timestamp;

/// Provides the current instant to the converter.
///
/// The converter never reads the system time directly. Every "now" sample goes
/// through a clock, which makes the live behavior reproducible in tests: when
/// the `test-util` feature is enabled, a clock can be frozen at a chosen
/// instant and moved forward explicitly through a [`ClockControl`][crate::ClockControl].
///
/// # Cloning and shared state
///
/// Cloning a clock is inexpensive and every clone observes the same time. For a
/// controlled clock, adjustments made through the control are visible to all clones.
///
/// # Examples
///
/// ```
/// use tzbridge::Clock;
///
/// let clock = Clock::new_system();
/// let now = clock.timestamp();
///
/// assert!(now.as_second() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct Clock(ClockState);

#[derive(Debug, Clone)]
enum ClockState {
    #[cfg(any(feature = "test-util", test))]
    ClockControl(crate::ClockControl),
    System,
}

impl Clock {
    /// Creates a clock that reads the operating system's wall time.
    #[must_use]
    pub fn new_system() -> Self {
        Self(ClockState::System)
    }

    /// Creates a clock frozen at `time`.
    ///
    /// This is a convenience method equivalent to calling `ClockControl::new_at(time).to_clock()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, SystemTime};
    ///
    /// use tzbridge::Clock;
    ///
    /// let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_721_059_200);
    /// let clock = Clock::new_frozen_at(time);
    ///
    /// assert_eq!(clock.system_time(), time);
    /// assert_eq!(clock.timestamp().as_second(), 1_721_059_200);
    /// ```
    #[cfg(any(feature = "test-util", test))]
    #[must_use]
    pub fn new_frozen_at(time: impl Into<SystemTime>) -> Self {
        crate::ClockControl::new_at(time).to_clock()
    }

    #[cfg(any(feature = "test-util", test))]
    pub(crate) fn with_control(control: &crate::ClockControl) -> Self {
        Self(ClockState::ClockControl(control.clone()))
    }

    /// Retrieves the current wall time as [`SystemTime`].
    ///
    /// > **Note**: The system time is not monotonic and can be affected by system clock changes.
    #[must_use]
    pub fn system_time(&self) -> SystemTime {
        match &self.0 {
            #[cfg(any(feature = "test-util", test))]
            ClockState::ClockControl(control) => control.system_time(),
            ClockState::System => SystemTime::now(),
        }
    }

    /// Retrieves the current wall time as a [`Timestamp`].
    ///
    /// # Panics
    ///
    /// Panics if the current time is outside the range `Timestamp` can represent
    /// (years -9999 to 9999). Real system clocks never get there; only a
    /// controlled clock moved excessively far can.
    #[expect(
        clippy::panic,
        reason = "the panic might only occur when system time is outside of valid range which won't ever happen in real environments"
    )]
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        match Timestamp::try_from(self.system_time()) {
            Ok(timestamp) => timestamp,
            Err(err) => panic!("the clock's system time is outside the supported timestamp range: {err}"),
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new_system()
    }
}
