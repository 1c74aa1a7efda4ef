//! IO modules - filesystem interfaces
//!
//! This module contains all external IO operations:
//! - `files` - schedule file enumeration and reading
//! - `watch` - poll-based change monitor for the working directory

pub mod files;
pub mod watch;

// Re-export commonly used types
pub use files::{DirSource, FileSource, ScheduleFile};
pub use watch::{DirMonitor, ReloadSignal};
