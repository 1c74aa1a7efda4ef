//! Poll-based change monitor for the working directory
//!
//! Scans the schedule files on a fixed interval and posts a reload signal
//! onto the store owner's channel whenever the set of files or any
//! modification time differs from the previous scan. The store's
//! content-based change suppression absorbs false positives (touched but
//! unedited files), so the fingerprint here can stay coarse.

use crate::io::files::SCHEDULE_FILE_EXTENSION;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;
use tracing::{info, warn};

/// Signal posted to the store owner when the directory contents changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadSignal;

/// Fingerprint of one scan: sorted (path, mtime) pairs.
type DirFingerprint = Vec<(PathBuf, Option<SystemTime>)>;

pub struct DirMonitor {
    dir: PathBuf,
    poll_interval: Duration,
    signal_tx: mpsc::Sender<ReloadSignal>,
    last_fingerprint: Option<DirFingerprint>,
}

impl DirMonitor {
    pub fn new(
        dir: impl Into<PathBuf>,
        poll_interval_ms: u64,
        signal_tx: mpsc::Sender<ReloadSignal>,
    ) -> Self {
        Self {
            dir: dir.into(),
            poll_interval: Duration::from_millis(poll_interval_ms),
            signal_tx,
            last_fingerprint: None,
        }
    }

    /// Scan the directory for schedule files and their mtimes.
    fn scan(&self) -> std::io::Result<DirFingerprint> {
        let mut fingerprint = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_schedule = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == SCHEDULE_FILE_EXTENSION);
            if is_schedule {
                let mtime = entry.metadata().and_then(|m| m.modified()).ok();
                fingerprint.push((path, mtime));
            }
        }
        fingerprint.sort();
        Ok(fingerprint)
    }

    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            dir = %self.dir.display(),
            poll_interval_ms = %self.poll_interval.as_millis(),
            "dir_monitor_started"
        );

        let mut poll_timer = interval(self.poll_interval);

        loop {
            // Check for shutdown signal
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("dir_monitor_shutdown");
                        return;
                    }
                }
                _ = poll_timer.tick() => {}
            }

            let fingerprint = match self.scan() {
                Ok(f) => f,
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "dir_scan_failed");
                    continue;
                }
            };

            let changed = self
                .last_fingerprint
                .as_ref()
                .is_some_and(|last| *last != fingerprint);
            self.last_fingerprint = Some(fingerprint);

            if changed && self.signal_tx.send(ReloadSignal).await.is_err() {
                // Receiver gone, owner has shut down
                return;
            }
        }
    }
}
