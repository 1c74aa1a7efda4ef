//! Day schedule - the ordered slots for one weekday

use crate::domain::error::ScheduleError;
use crate::domain::slot::TimeSlot;
use crate::domain::weekday::Weekday;
use std::path::PathBuf;

/// Separator between slot blocks in a schedule file.
pub const SLOT_SEPARATOR: &str = "\n\n";

/// All slots for one weekday, in file order.
///
/// Slots are kept exactly as they appear in the source text: no temporal
/// sorting, no overlap or gap validation. Queries take the first slot in
/// file order that covers the hour.
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub weekday: Weekday,
    pub slots: Vec<TimeSlot>,
    pub source_path: PathBuf,
}

impl DaySchedule {
    /// Parse a full day file: slot blocks separated by a blank line.
    ///
    /// The first malformed block fails the whole day, tagged with the
    /// weekday for diagnosis.
    pub fn parse(
        weekday: Weekday,
        text: &str,
        source_path: impl Into<PathBuf>,
    ) -> Result<Self, ScheduleError> {
        let slots = text
            .split(SLOT_SEPARATOR)
            .map(TimeSlot::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ScheduleError::BadDay {
                weekday,
                source: Box::new(e),
            })?;

        Ok(Self {
            weekday,
            slots,
            source_path: source_path.into(),
        })
    }
}

impl std::fmt::Display for DaySchedule {
    /// Canonical form for change detection: each slot's canonical block
    /// joined with the blank-line separator.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for slot in &self.slots {
            if !first {
                f.write_str(SLOT_SEPARATOR)?;
            }
            write!(f, "{}", slot)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_file_order() {
        let day = DaySchedule::parse(Weekday::Tuesday, "foo\n7:00\n\nbar\n8:00", "1_tu.txt")
            .unwrap();
        assert_eq!(day.weekday, Weekday::Tuesday);
        assert_eq!(day.slots.len(), 2);
        assert_eq!(day.slots[0].start_hour, 7);
        assert_eq!(day.slots[0].title, "foo");
        assert_eq!(day.slots[1].start_hour, 8);
        assert_eq!(day.slots[1].title, "bar");
    }

    #[test]
    fn test_parse_does_not_sort_slots() {
        let day = DaySchedule::parse(Weekday::Friday, "late\n15:00\n\nearly\n8:00", "4_fr.txt")
            .unwrap();
        assert_eq!(day.slots[0].title, "late");
        assert_eq!(day.slots[1].title, "early");
    }

    #[test]
    fn test_parse_wraps_slot_error_with_weekday() {
        let err = DaySchedule::parse(Weekday::Monday, "foon10:00", "0_mo.txt").unwrap_err();
        match err {
            ScheduleError::BadDay { weekday, source } => {
                assert_eq!(weekday, Weekday::Monday);
                assert!(matches!(*source, ScheduleError::BadSlot { .. }));
            }
            other => panic!("expected BadDay, got {other:?}"),
        }
    }

    #[test]
    fn test_canonical_form_joins_blocks() {
        let day = DaySchedule::parse(Weekday::Tuesday, "foo\n7:30\n\nbar\n8:00", "1_tu.txt")
            .unwrap();
        // Minutes collapse to :00 in the canonical form.
        assert_eq!(day.to_string(), "foo\n07:00\n\nbar\n08:00");
    }
}
