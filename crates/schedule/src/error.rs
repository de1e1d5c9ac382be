//! Error types for the audiosight-schedule crate.

/// Error type for all fallible operations in the audiosight-schedule crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when an hour or minute is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime {
        /// The invalid hour (valid range 0..=23).
        hour: u8,
        /// The invalid minute (valid range 0..=59).
        minute: u8,
    },

    /// Returned when an appointment would end at or before its start.
    #[error("appointment end {end} is not after start {start}")]
    EndNotAfterStart {
        /// The offending start time, formatted HH:MM.
        start: String,
        /// The offending end time, formatted HH:MM.
        end: String,
    },

    /// Returned when an appointment kind label has no known variant.
    #[error("unknown appointment kind: {value:?}")]
    UnknownKind {
        /// The unrecognised input.
        value: String,
    },
}
