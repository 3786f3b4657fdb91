//! Continuous unit watching.

use std::thread;
use std::time::Duration;

use tracing::info;
use unitwatch::logging;
use unitwatch::monitor::{MonitorConfig, UnitMonitor};

use crate::error::CliError;

/// Watch the unit, printing every state transition until interrupted.
pub fn run(unit: &str, interval_ms: u64, verbose: bool) -> Result<(), CliError> {
    let _guard = logging::init_logging(
        logging::default_log_dir(),
        logging::default_log_file(),
        if verbose { "debug" } else { "info" },
    )
    .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    let config =
        MonitorConfig::default().with_poll_interval(Duration::from_millis(interval_ms));
    let monitor = UnitMonitor::with_config(unit, config);

    {
        let unit = unit.to_string();
        monitor.on_state_change(move |active| {
            println!("{}: {}", unit, if active { "active" } else { "not active" });
        });
    }
    {
        let unit = unit.to_string();
        monitor.on_fail(move || println!("{}: FAILED", unit));
    }

    println!(
        "Watching {} every {}ms. Press Ctrl+C to stop.",
        unit, interval_ms
    );
    println!("Current state: {}", monitor.state().as_str());

    info!(unit, interval_ms, "watch started");

    loop {
        thread::sleep(Duration::from_secs(1));
        // Touching an accessor keeps the worker supervised: if the poll
        // thread ever dies, this respawns it.
        let _ = monitor.is_active();
    }
}
