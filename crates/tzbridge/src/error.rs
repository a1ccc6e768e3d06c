// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// The result type for fallible operations that use the [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while converting wall-clock time between zones.
///
/// There are only two sources of failure:
///
/// * Text that is not a complete `HH:MM` time of day.
/// * Time zone database lookups and civil-time arithmetic that fall outside
///   the supported range.
///
/// The state machine in [`DisplayState`][crate::DisplayState] never surfaces
/// malformed input as an error; it treats it as text that is still being typed.
///
/// # Limited introspection
///
/// Other than implementing the [`std::error::Error`] and [`core::fmt::Debug`] traits, this error type
/// currently provides no introspection capabilities.
///
/// # Examples
///
/// ```
/// use tzbridge::WallClockTime;
///
/// "12:".parse::<WallClockTime>().unwrap_err();
/// ```
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(ErrorKind);

#[derive(Debug, thiserror::Error)]
enum ErrorKind {
    #[error(transparent)]
    Jiff(jiff::Error),

    #[error("'{0}' is not a valid time of day, expected HH:MM")]
    InvalidTime(String),
}

impl Error {
    const fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub(crate) fn invalid_time(input: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::InvalidTime(input.into()))
    }

    #[cfg(test)]
    const fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl From<jiff::Error> for Error {
    fn from(error: jiff::Error) -> Self {
        Self::from_kind(ErrorKind::Jiff(error))
    }
}
