//! Unit control backed by the `systemctl` binary.

use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::error::SystemctlError;
use crate::traits::ControlChannel;
use crate::unit::UnitCommand;

/// Default bound on waiting for a control command to complete (4 seconds).
pub const DEFAULT_CONTROL_TIMEOUT_SECS: u64 = 4;

/// Interval between child exit checks while waiting.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Control channel that shells out to `systemctl start|stop|restart`.
///
/// Commands run under `sudo` by default since unit control normally requires
/// elevated privileges; disable with [`with_sudo`](Self::with_sudo) when the
/// process already runs privileged or polkit rules grant access.
///
/// A command that does not exit within the timeout is killed and reaped
/// before `apply` returns `false`, so no unsupervised systemctl invocation
/// is left behind.
#[derive(Debug, Clone)]
pub struct SystemctlControl {
    /// Wrap commands in `sudo`.
    use_sudo: bool,
    /// Bound on waiting for command completion.
    timeout: Duration,
}

impl Default for SystemctlControl {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemctlControl {
    /// Creates a control channel with default settings.
    pub fn new() -> Self {
        Self {
            use_sudo: true,
            timeout: Duration::from_secs(DEFAULT_CONTROL_TIMEOUT_SECS),
        }
    }

    /// Sets whether commands are wrapped in `sudo`.
    pub fn with_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = use_sudo;
        self
    }

    /// Sets a custom completion timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the argument vector for `command` against `unit`.
    fn argv(&self, unit: &str, command: UnitCommand) -> Vec<String> {
        let mut argv = Vec::new();
        if self.use_sudo {
            argv.push("sudo".to_string());
        }
        argv.push("systemctl".to_string());
        argv.push(command.as_str().to_string());
        argv.push(unit.to_string());
        argv
    }

    fn run(&self, unit: &str, command: UnitCommand) -> Result<bool, SystemctlError> {
        let argv = self.argv(unit, command);
        let child = Command::new(&argv[0])
            .args(&argv[1..])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(SystemctlError::Spawn)?;

        wait_with_timeout(child, self.timeout)
    }
}

impl ControlChannel for SystemctlControl {
    fn apply(&self, unit: &str, command: UnitCommand) -> bool {
        match self.run(unit, command) {
            Ok(success) => {
                if !success {
                    debug!(unit, command = command.as_str(), "systemctl exited with failure");
                }
                success
            }
            Err(e) => {
                warn!(unit, command = command.as_str(), error = %e, "control command failed");
                false
            }
        }
    }
}

/// Waits for `child` to exit, polling up to `timeout`.
///
/// Returns whether the child exited successfully. On timeout the child is
/// killed and reaped before the error is returned.
fn wait_with_timeout(mut child: Child, timeout: Duration) -> Result<bool, SystemctlError> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait().map_err(SystemctlError::Wait)? {
            Some(status) => return Ok(status.success()),
            None => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SystemctlError::Timeout { timeout });
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_with_sudo() {
        let control = SystemctlControl::new();
        assert_eq!(
            control.argv("nginx.service", UnitCommand::Start),
            vec!["sudo", "systemctl", "start", "nginx.service"]
        );
    }

    #[test]
    fn test_argv_without_sudo() {
        let control = SystemctlControl::new().with_sudo(false);
        assert_eq!(
            control.argv("nginx.service", UnitCommand::Restart),
            vec!["systemctl", "restart", "nginx.service"]
        );
    }

    #[test]
    fn test_wait_success_exit() {
        let child = Command::new("true").spawn().unwrap();
        let result = wait_with_timeout(child, Duration::from_secs(2)).unwrap();
        assert!(result);
    }

    #[test]
    fn test_wait_failure_exit() {
        let child = Command::new("false").spawn().unwrap();
        let result = wait_with_timeout(child, Duration::from_secs(2)).unwrap();
        assert!(!result);
    }

    #[test]
    fn test_wait_times_out_and_reaps() {
        let child = Command::new("sleep").arg("10").spawn().unwrap();

        let started = Instant::now();
        let result = wait_with_timeout(child, Duration::from_millis(150));

        assert!(matches!(result, Err(SystemctlError::Timeout { .. })));
        // Should return close to the timeout, not after the full sleep
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
