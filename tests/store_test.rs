//! Integration tests for schedule loading and reloading over real
//! directories

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use chrono::{Local, TimeZone};
use weekplan::domain::{ScheduleError, Weekday};
use weekplan::infra::{Config, FixedClock};
use weekplan::io::DirSource;
use weekplan::services::ScheduleStore;

const WEEK: [(&str, &str); 7] = [
    ("0_mo.txt", "mail\n8:00\n\ndeep work\n9:00"),
    ("1_tu.txt", "planning\n9:00\n\nwriting\n10:00"),
    ("2_we.txt", "calls\n10:00"),
    ("3_th.txt", "deep work\n9:00"),
    ("4_fr.txt", "retro\n14:00"),
    ("5_sa.txt", "errands\n11:00"),
    ("6_su.txt", "rest\n12:00"),
];

fn write_week(dir: &Path) {
    for (name, text) in WEEK {
        fs::write(dir.join(name), text).unwrap();
    }
}

fn new_store(dir: &Path) -> ScheduleStore {
    let config = Config::default().with_working_directory(dir.display().to_string());
    // 2024-01-02 was a Tuesday
    let clock = FixedClock(Local.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap());
    ScheduleStore::new(&config, Box::new(DirSource::new(dir)), Box::new(clock)).unwrap()
}

#[test]
fn test_load_full_week_from_directory() {
    let dir = TempDir::new().unwrap();
    write_week(dir.path());

    let store = new_store(dir.path());

    assert_eq!(store.days().len(), 7);
    assert_eq!(store.day(Weekday::Monday).unwrap().slots[0].title, "mail");
    assert_eq!(store.day(Weekday::Sunday).unwrap().slots[0].title, "rest");
    assert_eq!(store.current_task().unwrap().title, "writing");
    assert_eq!(
        store.day(Weekday::Monday).unwrap().source_path,
        dir.path().join("0_mo.txt")
    );
}

#[test]
fn test_non_schedule_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_week(dir.path());
    fs::write(dir.path().join("notes.md"), "not a schedule").unwrap();

    let store = new_store(dir.path());
    assert_eq!(store.days().len(), 7);
}

#[test]
fn test_one_based_file_names_map_onto_weekdays() {
    let dir = TempDir::new().unwrap();
    for (i, (_, text)) in WEEK.iter().enumerate() {
        fs::write(dir.path().join(format!("{}_day.txt", i + 1)), text).unwrap();
    }

    let store = new_store(dir.path());
    assert_eq!(store.day(Weekday::Monday).unwrap().slots[0].title, "mail");
    assert_eq!(store.day(Weekday::Sunday).unwrap().slots[0].title, "rest");
}

#[test]
fn test_day_numbering_starting_at_two_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2_we.txt"), "calls\n10:00").unwrap();

    let config = Config::default().with_working_directory(dir.path().display().to_string());
    let clock = FixedClock(Local.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap());
    let result = ScheduleStore::new(
        &config,
        Box::new(DirSource::new(dir.path())),
        Box::new(clock),
    );

    assert!(matches!(result, Err(ScheduleError::DayNumbering { min: 2 })));
}

#[test]
fn test_empty_directory_is_fatal_at_construction() {
    let dir = TempDir::new().unwrap();

    let config = Config::default().with_working_directory(dir.path().display().to_string());
    let clock = FixedClock(Local.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap());
    let result = ScheduleStore::new(
        &config,
        Box::new(DirSource::new(dir.path())),
        Box::new(clock),
    );

    assert!(matches!(
        result,
        Err(ScheduleError::EmptyWorkingDirectory { .. })
    ));
}

#[test]
fn test_rewrite_with_identical_bytes_emits_no_change() {
    let dir = TempDir::new().unwrap();
    write_week(dir.path());

    let mut store = new_store(dir.path());
    let changes = Arc::new(AtomicUsize::new(0));
    let counter = changes.clone();
    store.subscribe_changes(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Touch every file with identical content (mtimes change, bytes don't)
    write_week(dir.path());
    store.notify_external_change();

    assert_eq!(changes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_editing_one_file_emits_exactly_one_change() {
    let dir = TempDir::new().unwrap();
    write_week(dir.path());

    let mut store = new_store(dir.path());
    let before: Vec<String> = store.days().values().map(|d| d.to_string()).collect();

    let changes = Arc::new(AtomicUsize::new(0));
    let counter = changes.clone();
    store.subscribe_changes(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    fs::write(dir.path().join("2_we.txt"), "calls\n10:00\n\nreview\n11:00").unwrap();
    store.notify_external_change();

    assert_eq!(changes.load(Ordering::SeqCst), 1);

    // Only Wednesday's canonical form differs
    let after: Vec<String> = store.days().values().map(|d| d.to_string()).collect();
    let differing: Vec<usize> = before
        .iter()
        .zip(after.iter())
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(differing, vec![Weekday::Wednesday.ordinal() as usize]);
}

#[test]
fn test_broken_file_on_reload_keeps_last_good_mapping() {
    let dir = TempDir::new().unwrap();
    write_week(dir.path());

    let mut store = new_store(dir.path());
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = errors.clone();
    store.subscribe_errors(move |message| {
        sink.lock().unwrap().push(message.to_string());
    });

    fs::write(dir.path().join("3_th.txt"), "no time line at all").unwrap();
    store.notify_external_change();

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Thursday"));

    // The previously committed Thursday schedule survives
    assert_eq!(
        store.day(Weekday::Thursday).unwrap().slots[0].title,
        "deep work"
    );
}

#[test]
fn test_bad_file_name_on_reload_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_week(dir.path());

    let mut store = new_store(dir.path());
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = errors.clone();
    store.subscribe_errors(move |message| {
        sink.lock().unwrap().push(message.to_string());
    });

    fs::write(dir.path().join("stray.txt"), "task\n9:00").unwrap();
    store.notify_external_change();

    assert_eq!(errors.lock().unwrap().len(), 1);
    assert_eq!(store.days().len(), 7);
}
