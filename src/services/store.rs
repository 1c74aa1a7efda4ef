//! Schedule store - loads weekday files, detects changes, answers queries
//!
//! The store is the single source of truth for the timetable. It is owned
//! by one logical owner (see `runner`): reloads and queries never
//! interleave, and a successful reload replaces the whole weekday mapping
//! in one assignment, so a query observes either the fully-old or the
//! fully-new timetable.

use crate::domain::{DaySchedule, ScheduleError, TimeSlot, Weekday};
use crate::infra::clock::Clock;
use crate::infra::config::Config;
use crate::io::files::{FileSource, ScheduleFile};
use crate::services::events::{SubscriberSet, SubscriptionId};
use chrono::{DateTime, Local, Timelike};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Minute used for the pending-task preview. Fixed low so the one-hour
/// lookahead never lands inside a pause window and previews a real task.
const PENDING_PREVIEW_MINUTE: u32 = 5;

/// Callback invoked with the store after a committed reload.
pub type ChangeCallback = Box<dyn Fn(&ScheduleStore) + Send>;
/// Callback invoked with a message when a reload fails.
pub type ErrorCallback = Box<dyn Fn(&str) + Send>;

pub struct ScheduleStore {
    working_directory: String,
    pause_duration_minutes: u32,
    pause_title: String,
    source: Box<dyn FileSource>,
    clock: Box<dyn Clock>,
    /// Committed weekday mapping. Replaced wholesale, never edited in place.
    days: BTreeMap<Weekday, DaySchedule>,
    change_subscribers: SubscriberSet<ChangeCallback>,
    error_subscribers: SubscriberSet<ErrorCallback>,
}

impl ScheduleStore {
    /// Create the store and perform the initial load.
    ///
    /// The initial load propagates any failure to the caller - the process
    /// cannot start without a valid schedule. Later reloads instead surface
    /// failures as error events.
    pub fn new(
        config: &Config,
        source: Box<dyn FileSource>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ScheduleError> {
        let mut store = Self {
            working_directory: config.working_directory().to_string(),
            pause_duration_minutes: config.pause_duration_minutes(),
            pause_title: config.pause_title().to_string(),
            source,
            clock,
            days: BTreeMap::new(),
            change_subscribers: SubscriberSet::new(),
            error_subscribers: SubscriberSet::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-entry point for the external change watcher.
    ///
    /// Any failure is caught here: the previously committed mapping stays
    /// untouched and the failure is delivered to error subscribers.
    pub fn notify_external_change(&mut self) {
        if let Err(e) = self.reload() {
            let message = e.to_string();
            warn!(error = %message, "schedule_reload_failed");
            self.emit_error(&message);
        }
    }

    /// Full rebuild from the file source, committed only on content change.
    pub fn reload(&mut self) -> Result<(), ScheduleError> {
        let candidate = self.build_candidate()?;

        // First load always commits; afterwards commit only when some
        // weekday's canonical form differs. This suppresses notification
        // storms from filesystem events that did not alter content.
        let changed = self.days.is_empty()
            || candidate.iter().any(|(weekday, day)| {
                self.days
                    .get(weekday)
                    .is_none_or(|current| current.to_string() != day.to_string())
            });

        if !changed {
            debug!("schedule_reload_unchanged");
            return Ok(());
        }

        // Single assignment swap
        self.days = candidate;
        info!(days = self.days.len(), "schedule_committed");
        self.emit_change();
        Ok(())
    }

    /// Enumerate, normalize and parse all weekday files into a candidate
    /// mapping without touching the committed state.
    fn build_candidate(&self) -> Result<BTreeMap<Weekday, DaySchedule>, ScheduleError> {
        let paths = self.source.list_files().map_err(|source| ScheduleError::Io {
            path: PathBuf::from(&self.working_directory),
            source,
        })?;

        if paths.is_empty() {
            return Err(ScheduleError::EmptyWorkingDirectory {
                dir: self.working_directory.clone(),
            });
        }

        let mut files = paths
            .into_iter()
            .map(|path| ScheduleFile::load(self.source.as_ref(), path))
            .collect::<Result<Vec<_>, _>>()?;

        // Day numbers may be 0-based or 1-based; shift 1-based sets down.
        let min_day_number = files.iter().map(|f| f.day_number).min().unwrap_or(0);
        match min_day_number {
            0 => {}
            1 => {
                for file in &mut files {
                    file.day_number -= 1;
                }
            }
            other => return Err(ScheduleError::DayNumbering { min: other }),
        }

        files.sort_by_key(|f| f.day_number);

        let mut days = BTreeMap::new();
        for file in files {
            let weekday = Weekday::from_ordinal(file.day_number)?;
            let day = DaySchedule::parse(weekday, &file.text, file.path)?;
            days.insert(weekday, day);
        }
        Ok(days)
    }

    /// Resolve a point in time to exactly one task.
    ///
    /// The trailing `pause_duration_minutes` of every hour belong to a
    /// synthesized pause slot regardless of the timetable; otherwise the
    /// first slot in file order covering the hour wins.
    pub fn query(
        &self,
        weekday: Weekday,
        hour: u32,
        minute: u32,
    ) -> Result<TimeSlot, ScheduleError> {
        if minute >= 60u32.saturating_sub(self.pause_duration_minutes) {
            return Ok(TimeSlot::new(hour, self.pause_title.clone()));
        }

        let day = self
            .days
            .get(&weekday)
            .ok_or(ScheduleError::MissingDay { weekday })?;

        day.slots
            .iter()
            .find(|slot| slot.is_active(hour))
            .cloned()
            .ok_or(ScheduleError::NoActiveSlot {
                weekday,
                hour,
                minute,
            })
    }

    /// Task active right now.
    pub fn current_task(&self) -> Result<TimeSlot, ScheduleError> {
        let now = self.clock.now();
        self.query(Weekday::from_datetime(&now), now.hour(), now.minute())
    }

    /// Task active one hour from now, previewing past any pause window.
    pub fn pending_task(&self) -> Result<TimeSlot, ScheduleError> {
        let ahead = self.clock.now() + chrono::Duration::hours(1);
        self.query(
            Weekday::from_datetime(&ahead),
            ahead.hour(),
            PENDING_PREVIEW_MINUTE,
        )
    }

    /// Task active at an arbitrary timestamp.
    pub fn task_at(&self, datetime: &DateTime<Local>) -> Result<TimeSlot, ScheduleError> {
        self.query(
            Weekday::from_datetime(datetime),
            datetime.hour(),
            datetime.minute(),
        )
    }

    /// Schedule of the clock's current weekday.
    pub fn current_day(&self) -> Result<&DaySchedule, ScheduleError> {
        let weekday = Weekday::from_datetime(&self.clock.now());
        self.days
            .get(&weekday)
            .ok_or(ScheduleError::MissingDay { weekday })
    }

    /// Committed weekday mapping, Monday-first.
    pub fn days(&self) -> &BTreeMap<Weekday, DaySchedule> {
        &self.days
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.get(&weekday)
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn pause_title(&self) -> &str {
        &self.pause_title
    }

    pub fn pause_duration_minutes(&self) -> u32 {
        self.pause_duration_minutes
    }

    pub fn subscribe_changes(
        &mut self,
        callback: impl Fn(&ScheduleStore) + Send + 'static,
    ) -> SubscriptionId {
        self.change_subscribers.subscribe(Box::new(callback))
    }

    pub fn unsubscribe_changes(&mut self, id: SubscriptionId) {
        self.change_subscribers.unsubscribe(id);
    }

    pub fn subscribe_errors(
        &mut self,
        callback: impl Fn(&str) + Send + 'static,
    ) -> SubscriptionId {
        self.error_subscribers.subscribe(Box::new(callback))
    }

    pub fn unsubscribe_errors(&mut self, id: SubscriptionId) {
        self.error_subscribers.unsubscribe(id);
    }

    fn emit_change(&self) {
        for callback in self.change_subscribers.iter() {
            callback(self);
        }
    }

    fn emit_error(&self, message: &str) {
        for callback in self.error_subscribers.iter() {
            callback(message);
        }
    }
}
