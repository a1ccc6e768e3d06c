// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use jiff::tz::TimeZone;

use crate::Result;

/// One of the two time zones the converter works with.
///
/// The set of zones is fixed at compile time. Each zone maps to an IANA
/// identifier that is resolved against the tz database bundled with the crate.
///
/// # Examples
///
/// ```
/// use tzbridge::Zone;
///
/// assert_eq!(Zone::Ontario.iana_name(), "America/Toronto");
/// assert_eq!(Zone::Ontario.other(), Zone::Sydney);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Ontario, Canada (`America/Toronto`).
    Ontario,
    /// Sydney, Australia (`Australia/Sydney`).
    Sydney,
}

impl Zone {
    /// Both zones, in display order.
    pub const ALL: [Self; 2] = [Self::Ontario, Self::Sydney];

    /// Returns the IANA identifier of the zone.
    #[must_use]
    pub const fn iana_name(self) -> &'static str {
        match self {
            Self::Ontario => "America/Toronto",
            Self::Sydney => "Australia/Sydney",
        }
    }

    /// Returns the human readable name of the zone, e.g. `Ontario, Canada`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ontario => "Ontario, Canada",
            Self::Sydney => "Sydney, Australia",
        }
    }

    /// Returns the zone on the opposite side of the converter.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Ontario => Self::Sydney,
            Self::Sydney => Self::Ontario,
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The resolved tz rules for both zones.
///
/// Resolving a [`TimeZone`] walks the tz database, so it is done once up front
/// and the result is shared by every conversion. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Zones {
    ontario: TimeZone,
    sydney: TimeZone,
}

impl Zones {
    /// Loads the rules for both zones from the bundled tz database.
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is missing from the database.
    pub fn load() -> Result<Self> {
        Ok(Self {
            ontario: TimeZone::get(Zone::Ontario.iana_name())?,
            sydney: TimeZone::get(Zone::Sydney.iana_name())?,
        })
    }

    /// Returns the tz rules for `zone`.
    #[must_use]
    pub fn get(&self, zone: Zone) -> &TimeZone {
        match zone {
            Zone::Ontario => &self.ontario,
            Zone::Sydney => &self.sydney,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(Zone: Send, Sync, Copy);
        static_assertions::assert_impl_all!(Zones: Send, Sync, Clone);
    }

    #[test]
    fn other_is_an_involution() {
        for zone in Zone::ALL {
            assert_ne!(zone.other(), zone);
            assert_eq!(zone.other().other(), zone);
        }
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(Zone::Ontario.to_string(), "Ontario, Canada");
        assert_eq!(Zone::Sydney.to_string(), "Sydney, Australia");
    }

    #[test]
    fn load_resolves_both_zones() {
        let zones = Zones::load().unwrap();

        for zone in Zone::ALL {
            assert_eq!(zones.get(zone).iana_name(), Some(zone.iana_name()));
        }
    }
}
