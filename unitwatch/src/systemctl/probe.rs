//! State probe backed by the `systemctl` binary.

use std::process::Command;

use tracing::debug;

use crate::traits::StateProbe;
use crate::unit::UnitState;

/// Probe that shells out to `systemctl is-active <unit>`.
///
/// `systemctl is-active` prints the state word and exits non-zero for any
/// non-active state, so stdout is mapped regardless of exit status. A probe
/// that cannot run at all (missing binary, spawn failure) reports
/// [`UnitState::Unknown`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemctlProbe;

impl SystemctlProbe {
    /// Creates a new probe.
    pub fn new() -> Self {
        Self
    }
}

impl StateProbe for SystemctlProbe {
    fn query(&self, unit: &str) -> UnitState {
        let output = match Command::new("systemctl").args(["is-active", unit]).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(unit, error = %e, "systemctl is-active failed to run");
                return UnitState::Unknown;
            }
        };

        UnitState::from_systemctl(&String::from_utf8_lossy(&output.stdout))
    }
}
