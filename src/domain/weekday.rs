//! Weekday enumeration with ordinal and short display code

use crate::domain::error::ScheduleError;
use chrono::{DateTime, Datelike, Local};

/// Day of the week, Monday-first.
///
/// Each variant carries a fixed ordinal (0..=6) and a two-letter display
/// code. Ordering follows the ordinal, so `Weekday` keys iterate
/// Monday..Sunday in a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All days, in ordinal order.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Zero-based ordinal, Monday = 0.
    pub fn ordinal(self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Two-letter display code.
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
            Weekday::Saturday => "Sa",
            Weekday::Sunday => "Su",
        }
    }

    /// Convert an ordinal back to a variant. Fails outside 0..=6, which
    /// happens when a schedule file carries a day number past Sunday.
    pub fn from_ordinal(number: u32) -> Result<Self, ScheduleError> {
        ALL_WEEKDAYS
            .into_iter()
            .find(|day| day.ordinal() == number)
            .ok_or(ScheduleError::UnknownDayNumber { number })
    }

    /// Weekday of a local timestamp. chrono's day-of-week is a closed
    /// 7-value type, so this mapping is total.
    pub fn from_datetime(datetime: &DateTime<Local>) -> Self {
        match datetime.weekday().num_days_from_monday() {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
