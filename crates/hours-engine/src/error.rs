//! Error types for hours-engine operations.

use thiserror::Error;

use crate::day::Day;

/// Coarse classification of a [`HoursError`], used by adapters to pick a
/// fallback policy (drop, log, pass the raw text through).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized day token or time text.
    Parse,
    /// Hour, minute or minute-offset outside its valid bounds.
    Range,
    /// Interval or day range that crosses midnight or wraps Sunday into Monday.
    Overnight,
    /// A weekly schedule was assembled without one entry per day.
    SignatureMismatch,
    /// Vocabulary configuration could not be loaded.
    Config,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("Unrecognized day token: '{0}'")]
    UnknownDay(String),

    #[error("Unrecognized time text: '{0}'")]
    InvalidTime(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// The end of the interval lies before its start. Same-day schedules only;
    /// this is reported instead of being guessed as closed or reversed.
    #[error("Interval {start}-{end} crosses midnight")]
    OvernightInterval { start: u32, end: u32 },

    #[error("Day range {from} - {to} wraps past the end of the week")]
    WrappingDayRange { from: Day, to: Day },

    #[error("Weekly schedule has no entry for {0}")]
    MissingDay(Day),

    #[error("Vocabulary configuration error: {0}")]
    Config(String),

    #[error("Malformed input records: {0}")]
    Decode(String),
}

impl HoursError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HoursError::UnknownDay(_) | HoursError::InvalidTime(_) | HoursError::Decode(_) => {
                ErrorKind::Parse
            }
            HoursError::OutOfRange(_) => ErrorKind::Range,
            HoursError::OvernightInterval { .. } | HoursError::WrappingDayRange { .. } => {
                ErrorKind::Overnight
            }
            HoursError::MissingDay(_) => ErrorKind::SignatureMismatch,
            HoursError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<serde_json::Error> for HoursError {
    fn from(err: serde_json::Error) -> Self {
        HoursError::Decode(err.to_string())
    }
}

/// Convenience alias used throughout hours-engine.
pub type Result<T> = std::result::Result<T, HoursError>;
