// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use jiff::Timestamp;
use tracing::Level;

use crate::{WallClockTime, Zone, ZoneReading, Zones, to_instant};

/// What one side of the converter currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDisplay {
    /// The time field. Normally `HH:MM`, but after an edit it holds the raw
    /// text exactly as typed, even if incomplete.
    pub time: String,
    /// `Weekday, Month Day`.
    pub date: String,
    /// Short zone abbreviation, e.g. `EDT`.
    pub label: String,
}

impl ZoneDisplay {
    fn from_reading(reading: &ZoneReading) -> Self {
        Self {
            time: reading.time(),
            date: reading.date(),
            label: reading.label(),
        }
    }
}

impl Display for ZoneDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.time, self.label, self.date)
    }
}

/// Whether both sides show the current time or a user-entered one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyncMode {
    /// Both sides reflect the last "now" sample.
    Synced,
    /// Both sides reflect the last committed edit.
    Manual,
}

/// Result of [`DisplayState::edit`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text was a complete time; both sides were recomputed from the new reference.
    Committed(Timestamp),
    /// The text was not a complete time; only the raw field text changed.
    Ignored,
}

/// The state behind both sides of the converter.
///
/// Every handler mutates the state in place and leaves both sides consistent
/// with the single [`reference`][Self::reference] instant. The one exception
/// is the raw text of an edited time field, which is shown exactly as typed.
///
/// | Event | Reference | Displays | Mode |
/// |---|---|---|---|
/// | [`resync`][Self::resync] | the new "now" | both recomputed | `Synced` |
/// | [`edit`][Self::edit], complete `HH:MM` | converted instant | other side and edited date recomputed | `Manual` |
/// | [`edit`][Self::edit], anything else | unchanged | edited time text only | unchanged |
/// | [`reset`][Self::reset] | the new "now" | both recomputed | `Synced` |
///
/// A resync overrides a manual edit. Edits are transient and last until the
/// next minute boundary.
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use tzbridge::{DisplayState, SyncMode, Zone, Zones};
///
/// let now: Timestamp = "2024-07-15T16:00:00Z".parse()?;
/// let mut state = DisplayState::new(Zones::load()?, now);
///
/// state.edit(Zone::Sydney, "20:00");
///
/// assert_eq!(state.mode(), SyncMode::Manual);
/// assert_eq!(state.display(Zone::Ontario).time, "06:00");
/// assert_eq!(state.display(Zone::Sydney).time, "20:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisplayState {
    zones: Zones,
    reference: Timestamp,
    ontario: ZoneDisplay,
    sydney: ZoneDisplay,
    mode: SyncMode,
}

impl DisplayState {
    /// Creates a synced state showing `now` in both zones.
    #[must_use]
    pub fn new(zones: Zones, now: Timestamp) -> Self {
        let ontario = ZoneDisplay::from_reading(&ZoneReading::new(now, zones.get(Zone::Ontario)));
        let sydney = ZoneDisplay::from_reading(&ZoneReading::new(now, zones.get(Zone::Sydney)));

        Self {
            zones,
            reference: now,
            ontario,
            sydney,
            mode: SyncMode::Synced,
        }
    }

    /// The instant both sides are derived from.
    #[must_use]
    pub fn reference(&self) -> Timestamp {
        self.reference
    }

    /// Whether the state shows "now" or a committed edit.
    #[must_use]
    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// What `zone`'s side currently shows.
    #[must_use]
    pub fn display(&self, zone: Zone) -> &ZoneDisplay {
        match zone {
            Zone::Ontario => &self.ontario,
            Zone::Sydney => &self.sydney,
        }
    }

    /// The resolved tz rules the state converts with.
    #[must_use]
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    /// Handles a periodic tick: both sides now show `now`.
    ///
    /// This fires in both modes and discards any manual edit.
    pub fn resync(&mut self, now: Timestamp) {
        let overrode_manual = self.mode == SyncMode::Manual;
        self.sync_to(now);

        tracing::event!(name: "tzbridge.resync", Level::DEBUG, reference = %now, overrode_manual);
    }

    /// Handles the reset action: both sides now show `now`.
    pub fn reset(&mut self, now: Timestamp) {
        self.sync_to(now);

        tracing::event!(name: "tzbridge.reset", Level::DEBUG, reference = %now);
    }

    /// Handles new text in `zone`'s time field.
    ///
    /// The field always takes `text` verbatim. When `text` is a complete `HH:MM`
    /// time, it is read as that time on the reference's calendar day in `zone`;
    /// the resulting instant becomes the new reference, the other side's time
    /// and date and this side's date are recomputed from it, and the state
    /// turns [`Manual`][SyncMode::Manual]. Any other text is treated as still
    /// being typed and changes nothing else.
    pub fn edit(&mut self, zone: Zone, text: &str) -> EditOutcome {
        self.display_mut(zone).time = text.to_owned();

        let Ok(time) = text.parse::<WallClockTime>() else {
            return EditOutcome::Ignored;
        };

        let reference = match to_instant(time, self.zones.get(zone), self.reference) {
            Ok(reference) => reference,
            Err(error) => {
                tracing::event!(
                    name: "tzbridge.edit",
                    Level::WARN,
                    zone = zone.iana_name(),
                    error = %error,
                    "edit could not be converted"
                );
                return EditOutcome::Ignored;
            }
        };

        self.reference = reference;
        self.mode = SyncMode::Manual;

        let edited = ZoneReading::new(reference, self.zones.get(zone));
        let display = self.display_mut(zone);
        display.date = edited.date();
        display.label = edited.label();

        let other = zone.other();
        *self.display_mut(other) = ZoneDisplay::from_reading(&ZoneReading::new(reference, self.zones.get(other)));

        tracing::event!(
            name: "tzbridge.edit",
            Level::DEBUG,
            zone = zone.iana_name(),
            time = %time,
            reference = %reference,
        );

        EditOutcome::Committed(reference)
    }

    fn sync_to(&mut self, now: Timestamp) {
        self.reference = now;
        self.mode = SyncMode::Synced;

        for zone in Zone::ALL {
            let display = ZoneDisplay::from_reading(&ZoneReading::new(now, self.zones.get(zone)));
            *self.display_mut(zone) = display;
        }
    }

    fn display_mut(&mut self, zone: Zone) -> &mut ZoneDisplay {
        match zone {
            Zone::Ontario => &mut self.ontario,
            Zone::Sydney => &mut self.sydney,
        }
    }
}
