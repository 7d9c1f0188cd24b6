//! Error types for the ingestion and configuration boundary.
//!
//! The resolver, filter and layout functions never fail: missing or
//! malformed reference data degrades to empty results. Errors only exist
//! where upstream text is turned into typed values.

use thiserror::Error;

/// Errors raised while converting upstream data into timetable types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// A day name that maps to none of the seven weekdays.
    #[error("Unknown day of week: '{0}'")]
    InvalidDay(String),

    /// A recurrence code other than 0 (weekly), 1 (odd) or 2 (even).
    #[error("Unknown recurrence code: '{0}'")]
    InvalidRecurrence(String),

    /// A time-of-day string that is not `HH:MM` or `HH:MM:SS`.
    #[error("Invalid time of day: '{0}'")]
    InvalidTime(String),

    /// Configuration could not be parsed or holds an invalid value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for TimetableError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias for fallible boundary conversions.
pub type Result<T> = std::result::Result<T, TimetableError>;
