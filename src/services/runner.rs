//! Store runner - the single logical owner of the schedule store
//!
//! All mutation (reloads) and all queries run on this loop, so the
//! whole-mapping swap never interleaves with a read. The filesystem
//! watcher only posts signals onto the channel; it never touches the
//! store directly.

use crate::io::watch::ReloadSignal;
use crate::services::store::ScheduleStore;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Duration};
use tracing::{info, warn};

pub struct StoreRunner {
    store: ScheduleStore,
    /// Title of the task last reported, to log transitions only.
    last_title: Option<String>,
}

impl StoreRunner {
    pub fn new(store: ScheduleStore) -> Self {
        Self {
            store,
            last_title: None,
        }
    }

    pub fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ScheduleStore {
        &mut self.store
    }

    /// Drive the store until shutdown: reload on watcher signals, sample
    /// the clock once a second and log task transitions.
    pub async fn run(
        &mut self,
        mut signal_rx: mpsc::Receiver<ReloadSignal>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut display_tick = interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("store_runner_shutdown");
                        return;
                    }
                }
                signal = signal_rx.recv() => {
                    match signal {
                        Some(ReloadSignal) => self.store.notify_external_change(),
                        None => return, // Watcher gone, channel closed
                    }
                }
                _ = display_tick.tick() => {
                    self.tick_display();
                }
            }
        }
    }

    /// Sample current and pending tasks; log only when the active task
    /// changed since the previous tick.
    fn tick_display(&mut self) {
        match self.store.current_task() {
            Ok(task) => {
                if self.last_title.as_deref() != Some(task.title.as_str()) {
                    let pending = match self.store.pending_task() {
                        Ok(slot) => slot.title,
                        Err(e) => format!("({e})"),
                    };
                    info!(current = %task.title, pending = %pending, "task_changed");
                    self.last_title = Some(task.title);
                }
            }
            Err(e) => {
                if self.last_title.take().is_some() {
                    warn!(error = %e, "current_task_unavailable");
                }
            }
        }
    }
}
