// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Converts wall-clock time between Ontario, Canada and Sydney, Australia and
//! keeps a live display of both, refreshed once a minute.
//!
//! # Quick Start
//!
//! ```
//! use jiff::Timestamp;
//! use tzbridge::{DisplayState, Zone, Zones};
//!
//! let now: Timestamp = "2024-07-15T16:00:00Z".parse()?;
//! let mut state = DisplayState::new(Zones::load()?, now);
//!
//! // What time is it in Ontario when it is 20:00 in Sydney today?
//! state.edit(Zone::Sydney, "20:00");
//!
//! let ontario = state.display(Zone::Ontario);
//! assert_eq!(ontario.time, "06:00");
//! assert_eq!(ontario.date, "Tuesday, July 16");
//! assert_eq!(ontario.label, "EDT");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Overview
//!
//! - [`Zone`] and [`Zones`] - The two fixed time zones and their resolved tz rules.
//! - [`ZoneReading`] - What a clock in one zone shows at one instant: time, date
//!   and offset label, all from a single evaluation of the tz rules. The free
//!   functions [`format_time`], [`format_date`] and [`resolve_offset_label`] are
//!   shorthands for it.
//! - [`WallClockTime`] and [`to_instant`] - Parse `HH:MM` input and turn it into
//!   an absolute instant on "today" in the zone it was typed in.
//! - [`DisplayState`] - Both sides of the converter plus the reference instant they
//!   are derived from, with the handlers for ticks, edits and reset.
//! - [`Session`] - Runs a [`DisplayState`] against a [`Clock`] and a stream of
//!   [`Event`]s, resyncing every [`RESYNC_PERIOD`].
//! - [`Clock`] - The source of "now". With the `test-util` feature, [`ClockControl`]
//!   freezes and moves it in tests.
//! - [`PeriodicTimer`] - A cancellable stream of periodic ticks.
//!
//! # Daylight saving time
//!
//! Labels, times and dates always follow the tz database, so `EST`/`EDT` and
//! `AEST`/`AEDT` switch on their real transition dates. Converting typed input
//! applies the offset in effect at the reference instant, see [`to_instant`].
//!
//! # Features
//!
//! - **`test-util`** - Enables [`ClockControl`] and [`Clock::new_frozen_at`] for
//!   controlling "now" in tests. **Only enable this in `dev-dependencies`.**

mod clock;
#[cfg(any(feature = "test-util", test))]
mod clock_control;
mod convert;
mod display;
mod error;
mod periodic_timer;
mod reading;
mod session;
mod wall_clock;
mod zone;

pub use clock::Clock;
#[cfg(any(feature = "test-util", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub use clock_control::ClockControl;
pub use convert::{parse_to_instant, to_instant};
pub use display::{DisplayState, EditOutcome, SyncMode, ZoneDisplay};
pub use error::{Error, Result};
pub use periodic_timer::PeriodicTimer;
pub use reading::{ZoneReading, format_date, format_time, resolve_offset_label};
pub use session::{Event, RESYNC_PERIOD, Session};
pub use wall_clock::WallClockTime;
pub use zone::{Zone, Zones};
