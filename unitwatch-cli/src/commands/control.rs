//! Unit control commands (start, stop, restart).

use unitwatch::systemctl::SystemctlControl;
use unitwatch::traits::ControlChannel;
use unitwatch::unit::UnitCommand;

use crate::error::CliError;

/// Apply a control command to the unit.
pub fn run(unit: &str, command: UnitCommand, no_sudo: bool) -> Result<(), CliError> {
    let control = SystemctlControl::new().with_sudo(!no_sudo);

    if control.apply(unit, command) {
        println!("{} {}: ok", command.as_str(), unit);
        Ok(())
    } else {
        Err(CliError::ControlFailed {
            verb: command.as_str(),
            unit: unit.to_string(),
        })
    }
}
