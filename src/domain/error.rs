//! Error taxonomy for schedule loading, parsing and queries

use crate::domain::weekday::Weekday;
use std::path::PathBuf;

/// Classification of everything that can go wrong between a working
/// directory on disk and an answered time query.
///
/// Construction-time loads propagate these to the caller (fatal for
/// startup); reload-time failures are caught at the store boundary and
/// re-expressed as error events.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Working directory contains no candidate schedule files.
    #[error("could not load the working directory: {dir}")]
    EmptyWorkingDirectory { dir: String },

    /// Directory or file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File name does not match `<digits>_<label>`.
    #[error("bad file name {name}")]
    BadFileName { name: String },

    /// Minimum day index across all files is neither 0 nor 1.
    #[error("day numbers should start with either 0 or 1, found minimum {min}")]
    DayNumbering { min: u32 },

    /// A two-line slot block is malformed.
    #[error("bad time slot: {text:?}")]
    BadSlot { text: String },

    /// A slot inside a day file failed to parse, tagged with the weekday.
    #[error("bad schedule for {weekday:?}: {source}")]
    BadDay {
        weekday: Weekday,
        #[source]
        source: Box<ScheduleError>,
    },

    /// Day number outside the 0..=6 weekday range.
    #[error("unexpected day of week number: {number}")]
    UnknownDayNumber { number: u32 },

    /// Requested weekday is absent from the committed mapping.
    #[error("no schedule loaded for {weekday:?}")]
    MissingDay { weekday: Weekday },

    /// No slot in the day covers the requested hour.
    #[error("no entry found for {weekday:?} at {hour:02}:{minute:02}")]
    NoActiveSlot {
        weekday: Weekday,
        hour: u32,
        minute: u32,
    },
}
