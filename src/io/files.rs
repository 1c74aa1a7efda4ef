//! Schedule file enumeration and reading
//!
//! The store never touches the filesystem directly; it consumes the
//! `FileSource` trait so tests can run against an in-memory source.

use crate::domain::error::ScheduleError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension of schedule files inside the working directory.
pub const SCHEDULE_FILE_EXTENSION: &str = "txt";

/// Source of weekday schedule files.
pub trait FileSource: Send {
    /// All candidate schedule files (`*.txt`), unordered.
    fn list_files(&self) -> io::Result<Vec<PathBuf>>;

    /// Full text content of one file.
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Production source: a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSource for DirSource {
    fn list_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_schedule = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == SCHEDULE_FILE_EXTENSION);
            if is_schedule {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// One candidate file with its day number parsed out of the name.
///
/// File names must match `<digits>_<label>`; the label is arbitrary and
/// ignored. Day numbers may be 0-based or 1-based across the whole set -
/// normalization happens in the store once all files are known.
#[derive(Debug)]
pub struct ScheduleFile {
    pub path: PathBuf,
    pub day_number: u32,
    pub text: String,
}

impl ScheduleFile {
    /// Parse the file name and read the trimmed text content.
    pub fn load(source: &dyn FileSource, path: PathBuf) -> Result<Self, ScheduleError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        let bad_name = || ScheduleError::BadFileName {
            name: file_name.clone(),
        };

        let name_parts: Vec<&str> = file_name.split('_').collect();
        if name_parts.len() != 2 {
            return Err(bad_name());
        }

        let day_number: u32 = name_parts[0].parse().map_err(|_| bad_name())?;

        let text = source
            .read_text(&path)
            .map_err(|source| ScheduleError::Io {
                path: path.clone(),
                source,
            })?
            .trim()
            .to_string();

        Ok(Self {
            path,
            day_number,
            text,
        })
    }
}
