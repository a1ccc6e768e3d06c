// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Duration;

use futures_core::Stream;
use futures_util::StreamExt;
use tracing::Level;

use crate::{Clock, DisplayState, PeriodicTimer, Result, Zone, Zones};

/// How often the live clock re-samples "now".
pub const RESYNC_PERIOD: Duration = Duration::from_secs(60);

/// Input from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The text of `zone`'s time field changed.
    Edit {
        /// The edited side.
        zone: Zone,
        /// The full field text after the change.
        text: String,
    },
    /// The user asked to go back to the current time.
    Reset,
}

impl Event {
    /// Creates an [`Event::Edit`].
    #[must_use]
    pub fn edit(zone: Zone, text: impl Into<String>) -> Self {
        Self::Edit { zone, text: text.into() }
    }
}

/// The live converter: a [`DisplayState`] kept current by a [`Clock`].
///
/// A session is the engine side of the contract with a presentation layer.
/// The presentation layer supplies the clock and a stream of [`Event`]s, and
/// renders the state it is handed after every change. The session drives the
/// once-a-minute resync itself.
///
/// # Examples
///
/// ```
/// use futures::stream;
/// use tzbridge::{Clock, Event, Session, Zone};
///
/// # async fn render_loop() -> tzbridge::Result<()> {
/// let session = Session::new(Clock::new_system())?;
/// let events = stream::iter([Event::edit(Zone::Ontario, "09:00"), Event::Reset]);
///
/// session
///     .run(events, |state| {
///         for zone in Zone::ALL {
///             println!("{zone}: {}", state.display(zone));
///         }
///     })
///     .await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session {
    clock: Clock,
    state: DisplayState,
}

impl Session {
    /// Starts a session synced to the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the tz rules for the two zones cannot be loaded.
    pub fn new(clock: Clock) -> Result<Self> {
        let state = DisplayState::new(Zones::load()?, clock.timestamp());

        Ok(Self { clock, state })
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Applies a single event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Edit { zone, text } => {
                self.state.edit(zone, &text);
            }
            Event::Reset => self.state.reset(self.clock.timestamp()),
        }
    }

    /// Re-samples the clock; what a periodic tick does.
    pub fn tick(&mut self) {
        self.state.resync(self.clock.timestamp());
    }

    /// Runs the session until `events` ends.
    ///
    /// `render` is called with the initial state and again after every event
    /// and every tick. Events and ticks are processed one at a time, each to
    /// completion; when both are ready, the event goes first.
    ///
    /// The periodic timer lives only for the duration of this call. Once the
    /// event stream ends, which is how the presentation layer signals its
    /// teardown, the timer is dropped and no further tick reaches `render`.
    /// The final state is returned.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime context.
    pub async fn run<E, R>(mut self, events: E, mut render: R) -> DisplayState
    where
        E: Stream<Item = Event>,
        R: FnMut(&DisplayState),
    {
        let mut timer = PeriodicTimer::new(RESYNC_PERIOD);
        let events = events.fuse();
        futures_util::pin_mut!(events);

        tracing::event!(name: "tzbridge.session", Level::INFO, reference = %self.state.reference(), "session started");
        render(&self.state);

        loop {
            tokio::select! {
                biased;

                event = events.next() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                Some(()) = timer.next() => self.tick(),
            }

            render(&self.state);
        }

        drop(timer);
        tracing::event!(name: "tzbridge.session", Level::INFO, "session stopped");

        self.state
    }
}
