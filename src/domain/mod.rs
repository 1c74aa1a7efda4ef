//! Domain models - the schedule timetable types
//!
//! This module contains the canonical data types used throughout the system:
//! - `TimeSlot` - a single task occupying an integer hour range
//! - `DaySchedule` - the ordered slots for one weekday
//! - `Weekday` - closed Monday..Sunday enumeration
//! - `ScheduleError` - classification of load, parse and lookup failures

pub mod day;
pub mod error;
pub mod slot;
pub mod weekday;

// Re-export commonly used types at module level
pub use day::DaySchedule;
pub use error::ScheduleError;
pub use slot::TimeSlot;
pub use weekday::Weekday;
