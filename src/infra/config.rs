//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. WEEKPLAN_CONFIG environment variable
//! 3. Default: config/weekplan.toml
//!
//! The loaded value is immutable and passed by value into the store and
//! its collaborators; there is no global instance.

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// Directory holding one `<index>_<label>.txt` file per weekday
    #[serde(default = "default_working_directory")]
    pub working_directory: String,
    /// Length of the synthesized break at the tail of every hour, minutes
    #[serde(default = "default_pause_duration_minutes")]
    pub pause_duration_minutes: u32,
    /// Title shown for the synthesized break
    #[serde(default = "default_pause_title")]
    pub pause_title: String,
}

fn default_working_directory() -> String {
    ".".to_string()
}

fn default_pause_duration_minutes() -> u32 {
    15
}

fn default_pause_title() -> String {
    "PAUSE".to_string()
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            working_directory: default_working_directory(),
            pause_duration_minutes: default_pause_duration_minutes(),
            pause_title: default_pause_title(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// How often the working directory is polled for changes
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    500
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub schedule: ScheduleSection,
    #[serde(default)]
    pub watch: WatchSection,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    working_directory: String,
    pause_duration_minutes: u32,
    pause_title: String,
    poll_interval_ms: u64,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_directory: default_working_directory(),
            pause_duration_minutes: default_pause_duration_minutes(),
            pause_title: default_pause_title(),
            poll_interval_ms: default_poll_interval_ms(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Determine config file path from the environment; the `--config`
    /// CLI flag takes precedence in main and bypasses this.
    pub fn resolve_config_path() -> String {
        if let Ok(path) = env::var("WEEKPLAN_CONFIG") {
            return path;
        }

        "config/weekplan.toml".to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            working_directory: toml_config.schedule.working_directory,
            pause_duration_minutes: toml_config.schedule.pause_duration_minutes,
            pause_title: toml_config.schedule.pause_title,
            poll_interval_ms: toml_config.watch.poll_interval_ms,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    // Getters for all config fields
    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn pause_duration_minutes(&self) -> u32 {
        self.pause_duration_minutes
    }

    pub fn pause_title(&self) -> &str {
        &self.pause_title
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder method to override the working directory (CLI flag)
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = dir.into();
        self
    }

    /// Builder method to override the pause duration (CLI flag)
    pub fn with_pause_duration_minutes(mut self, minutes: u32) -> Self {
        self.pause_duration_minutes = minutes;
        self
    }

    /// Builder method to override the pause title (CLI flag)
    pub fn with_pause_title(mut self, title: impl Into<String>) -> Self {
        self.pause_title = title.into();
        self
    }

    /// Builder method to override the poll interval (CLI flag)
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }
}
