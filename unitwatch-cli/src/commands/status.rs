//! One-shot unit status query.

use std::process;

use unitwatch::monitor::UnitMonitor;

use crate::error::CliError;

/// Print the unit's current state.
///
/// Exits non-zero when the unit is not active, mirroring
/// `systemctl is-active` so the command composes in shell conditionals.
pub fn run(unit: &str) -> Result<(), CliError> {
    let monitor = UnitMonitor::new(unit);
    let status = monitor.status();
    monitor.close();

    println!("{}", status.state.as_str());

    if !status.is_active {
        process::exit(1);
    }
    Ok(())
}
