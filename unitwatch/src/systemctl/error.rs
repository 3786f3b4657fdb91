//! Error types for systemctl invocations.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while invoking the `systemctl` binary.
///
/// These never cross the collaborator trait boundary: the probe maps them to
/// [`UnitState::Unknown`](crate::unit::UnitState) and the control channel
/// maps them to `false`.
#[derive(Debug, Error)]
pub enum SystemctlError {
    /// The systemctl process could not be spawned.
    #[error("Failed to spawn systemctl: {0}")]
    Spawn(#[source] io::Error),

    /// Checking the systemctl process for exit failed.
    #[error("Failed to wait on systemctl: {0}")]
    Wait(#[source] io::Error),

    /// The command did not exit within the bounded wait.
    #[error("systemctl did not exit within {timeout:?}")]
    Timeout {
        /// The wait bound that was exceeded.
        timeout: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_spawn_error() {
        let err = SystemctlError::Spawn(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file",
        ));
        assert!(err.to_string().contains("spawn"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_display_timeout() {
        let err = SystemctlError::Timeout {
            timeout: Duration::from_secs(4),
        };
        assert!(err.to_string().contains("4s"));
    }

    #[test]
    fn test_error_trait() {
        let err = SystemctlError::Timeout {
            timeout: Duration::from_secs(1),
        };
        let _: &dyn std::error::Error = &err;
    }
}
