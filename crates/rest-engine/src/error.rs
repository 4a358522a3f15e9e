//! Error types for schedule parsing.

use thiserror::Error;

/// Errors raised while parsing a weekly schedule.
///
/// All variants carry the 1-based line number where parsing stopped. The
/// first error aborts the whole computation; there are no partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The line does not split into `<day> <start>-<end>`.
    #[error("malformed schedule line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// The day token is not one of the seven weekday abbreviations.
    #[error("unsupported day token {token:?} on line {line}")]
    UnsupportedDay { line: usize, token: String },

    /// A time token is not a valid `HH:MM` clock time.
    #[error("invalid time token {token:?} on line {line}")]
    InvalidTime { line: usize, token: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
