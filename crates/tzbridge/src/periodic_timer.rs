// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_core::Stream;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// The minimum period of a [`PeriodicTimer`].
const TIMER_RESOLUTION: Duration = Duration::from_millis(1);

/// A timer that periodically ticks.
///
/// The first tick arrives one full period after the timer is created; there is
/// no immediate tick at creation. The timer is driven by the Tokio time driver,
/// so it must be created and polled inside a Tokio runtime with time enabled.
///
/// # Stream Behavior
///
/// `PeriodicTimer` implements [`Stream`] and will never complete. Dropping the
/// timer cancels it; no tick is delivered after the drop.
///
/// # Missed ticks
///
/// When the consumer falls behind by more than a period, the missed ticks are
/// not replayed in a burst. The next tick is scheduled one period after the
/// late one was observed.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use futures::StreamExt;
/// use tzbridge::PeriodicTimer;
///
/// # async fn periodic_timer_example() {
/// let timer = PeriodicTimer::new(Duration::from_secs(60));
///
/// timer
///     .take(3)
///     .for_each(async |()| {
///         // Do something every minute
///     })
///     .await;
/// # }
/// ```
#[derive(Debug)]
pub struct PeriodicTimer {
    interval: Interval,
}

impl PeriodicTimer {
    /// Creates a timer that fires every `period`.
    ///
    /// > **Note**: The minimum precision of the timer is 1ms. If a smaller period is specified,
    /// > it will be adjusted to 1ms.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime context.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(TIMER_RESOLUTION);

        // A period so long that the first deadline overflows never fires.
        let start = Instant::now().checked_add(period).unwrap_or_else(far_future);

        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { interval }
    }

    /// The period between two ticks.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Stream for PeriodicTimer {
    type Item = ();

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().interval.poll_tick(cx).map(|_| Some(()))
    }
}

// Roughly 30 years; matches the horizon Tokio uses for "never" deadlines.
fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(86_400 * 365 * 30)
}
