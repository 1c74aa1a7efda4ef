//! weekplan - Pomodoro weekly schedule core
//!
//! Loads one text file per weekday from a working directory, keeps the
//! timetable current while the files change on disk, and logs the active
//! and upcoming task.
//!
//! Module structure:
//! - `domain/` - Core schedule types (TimeSlot, DaySchedule, Weekday)
//! - `io/` - Filesystem interfaces (file source, change monitor)
//! - `services/` - Schedule store, subscriptions and owning runner
//! - `infra/` - Infrastructure (Config, Clock)

use clap::Parser;
use weekplan::infra::{Config, SystemClock};
use weekplan::io::{DirMonitor, DirSource};
use weekplan::services::{ScheduleStore, StoreRunner};

use tokio::sync::{mpsc, watch};
use tracing::{error, info};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// weekplan - Pomodoro weekly schedule core
#[derive(Parser, Debug)]
#[command(name = "weekplan", version, about)]
struct Args {
    /// Path to TOML configuration file (default: WEEKPLAN_CONFIG env var
    /// or config/weekplan.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Working directory, containing one schedule text file per weekday
    /// (e.g. 0_mo.txt)
    #[arg(short = 'w', long)]
    working_directory: Option<String>,

    /// Pause duration in minutes, at the tail of every hour
    #[arg(short = 'p', long)]
    pause_duration: Option<u32>,

    /// Title for the synthesized pause entries
    #[arg(short = 't', long)]
    pause_text: Option<String>,

    /// Directory poll interval in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("weekplan starting");

    let args = Args::parse();

    // Load configuration from TOML file, then apply CLI overrides
    let config_path = args.config.unwrap_or_else(Config::resolve_config_path);
    let mut config = Config::load_from_path(&config_path);
    if let Some(dir) = args.working_directory {
        config = config.with_working_directory(dir);
    }
    if let Some(minutes) = args.pause_duration {
        config = config.with_pause_duration_minutes(minutes);
    }
    if let Some(text) = args.pause_text {
        config = config.with_pause_title(text);
    }
    if let Some(ms) = args.poll_interval_ms {
        config = config.with_poll_interval_ms(ms);
    }

    info!(
        config_file = %config.config_file(),
        working_directory = %config.working_directory(),
        pause_duration_minutes = %config.pause_duration_minutes(),
        pause_title = %config.pause_title(),
        poll_interval_ms = %config.poll_interval_ms(),
        "config_loaded"
    );

    // Initial load must succeed; without a valid schedule there is nothing
    // to display.
    let source = DirSource::new(config.working_directory());
    let mut store = match ScheduleStore::new(&config, Box::new(source), Box::new(SystemClock)) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "schedule_load_failed");
            return Err(e.into());
        }
    };

    // Presentation substitute: log committed reloads and reload errors
    store.subscribe_changes(|store| {
        info!(days = store.days().len(), "schedule_changed");
    });
    store.subscribe_errors(|message| {
        error!(error = %message, "schedule_error");
    });

    // Create shutdown signal
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Reload signal channel (bounded; the monitor only ever has one
    // outstanding signal worth of information)
    let (signal_tx, signal_rx) = mpsc::channel(16);

    // Start the directory monitor
    let monitor = DirMonitor::new(
        config.working_directory(),
        config.poll_interval_ms(),
        signal_tx,
    );
    let monitor_shutdown = shutdown_rx.clone();
    tokio::spawn(async move {
        monitor.run(monitor_shutdown).await;
    });

    // Handle shutdown on Ctrl+C
    let shutdown_signal = shutdown_tx;
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("shutdown_signal_received");
        let _ = shutdown_signal.send(true);
    });

    // Run the store owner - consumes reload signals until shutdown
    let mut runner = StoreRunner::new(store);
    info!("store_runner_started");
    runner.run(signal_rx, shutdown_rx).await;

    info!("weekplan shutdown complete");
    Ok(())
}
