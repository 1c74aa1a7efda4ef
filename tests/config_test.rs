//! Integration tests for configuration loading

use std::io::Write;
use tempfile::NamedTempFile;
use weekplan::infra::Config;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[schedule]
working_directory = "/srv/plans"
pause_duration_minutes = 10
pause_title = "BREAK"

[watch]
poll_interval_ms = 250
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.working_directory(), "/srv/plans");
    assert_eq!(config.pause_duration_minutes(), 10);
    assert_eq!(config.pause_title(), "BREAK");
    assert_eq!(config.poll_interval_ms(), 250);
}

#[test]
fn test_partial_config_fills_in_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[schedule]
working_directory = "/srv/plans"
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.working_directory(), "/srv/plans");
    assert_eq!(config.pause_duration_minutes(), 15);
    assert_eq!(config.pause_title(), "PAUSE");
    assert_eq!(config.poll_interval_ms(), 500);
}

#[test]
fn test_load_from_path_fallback() {
    // Missing file falls back to defaults rather than failing
    let config = Config::load_from_path("/nonexistent/weekplan.toml");
    assert_eq!(config.working_directory(), ".");
    assert_eq!(config.pause_duration_minutes(), 15);
    assert_eq!(config.pause_title(), "PAUSE");
}

#[test]
fn test_from_file_rejects_malformed_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[schedule\nbroken").unwrap();
    temp_file.flush().unwrap();

    assert!(Config::from_file(temp_file.path()).is_err());
}
