//! Time slot - a single task occupying an integer hour range

use crate::domain::error::ScheduleError;

/// One task in the timetable, covering `[start_hour, end_hour)`.
///
/// The parser always produces one-hour slots; `duration` exists so a
/// synthesized or merged slot can span more. The `Display` form is the
/// canonical two-line block used for change detection - it collapses the
/// duration back to a single hour and pins the minute to `:00`, so it is
/// never the source of truth for configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_hour: u32,
    pub duration: u32,
    pub title: String,
}

impl TimeSlot {
    /// One-hour slot starting at `start_hour`.
    ///
    /// The hour is not range-checked: a slot past 23 is representable and
    /// simply never matches a query.
    pub fn new(start_hour: u32, title: impl Into<String>) -> Self {
        Self {
            start_hour,
            duration: 1,
            title: title.into(),
        }
    }

    /// First hour no longer covered by this slot.
    pub fn end_hour(&self) -> u32 {
        self.start_hour + self.duration
    }

    /// Parse a two-line block: `<title>` then `<hour>:<minute>`.
    ///
    /// The time field must split on `:` into exactly two parts and the hour
    /// part must be an integer. The minute part is required syntactically
    /// but its value is discarded - the schedule runs on whole hours.
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let bad = || ScheduleError::BadSlot {
            text: text.to_string(),
        };

        let lines: Vec<&str> = text.split('\n').collect();
        if lines.len() != 2 {
            return Err(bad());
        }

        let title = lines[0];
        let time_parts: Vec<&str> = lines[1].split(':').collect();
        if time_parts.len() != 2 {
            return Err(bad());
        }

        let start_hour: u32 = time_parts[0].parse().map_err(|_| bad())?;

        Ok(TimeSlot::new(start_hour, title))
    }

    /// Whether `hour` falls inside the half-open `[start_hour, end_hour)`.
    pub fn is_active(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour()
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{:02}:00", self.title, self.start_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_line_block() {
        let slot = TimeSlot::parse("foo\n7:00").unwrap();
        assert_eq!(slot.start_hour, 7);
        assert_eq!(slot.duration, 1);
        assert_eq!(slot.title, "foo");
    }

    #[test]
    fn test_parse_discards_minute_value() {
        let slot = TimeSlot::parse("standup\n9:45").unwrap();
        assert_eq!(slot.start_hour, 9);
        assert_eq!(slot.to_string(), "standup\n09:00");
    }

    #[test]
    fn test_parse_rejects_single_line() {
        assert!(matches!(
            TimeSlot::parse("foo10:00"),
            Err(ScheduleError::BadSlot { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        assert!(matches!(
            TimeSlot::parse("foo\n1000"),
            Err(ScheduleError::BadSlot { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer_hour() {
        assert!(matches!(
            TimeSlot::parse("foo\nbar:00"),
            Err(ScheduleError::BadSlot { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_extra_colon() {
        assert!(TimeSlot::parse("foo\n7:00:00").is_err());
    }

    #[test]
    fn test_parse_accepts_out_of_range_hour() {
        // Not range-checked; such a slot just never becomes active.
        let slot = TimeSlot::parse("foo\n25:00").unwrap();
        assert_eq!(slot.start_hour, 25);
        assert!(!slot.is_active(23));
    }

    #[test]
    fn test_is_active_half_open_interval() {
        let slot = TimeSlot::new(7, "foo");
        assert!(!slot.is_active(6));
        assert!(slot.is_active(7));
        assert!(!slot.is_active(8));
    }

    #[test]
    fn test_display_roundtrip() {
        let slot = TimeSlot::new(8, "Deep Work");
        let parsed = TimeSlot::parse(&slot.to_string()).unwrap();
        assert_eq!(parsed.start_hour, slot.start_hour);
        assert_eq!(parsed.title, slot.title);
    }
}
