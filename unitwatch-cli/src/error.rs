//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// A control command did not complete successfully
    ControlFailed { verb: &'static str, unit: String },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::ControlFailed { .. } = self {
            eprintln!();
            eprintln!("Common issues:");
            eprintln!("  1. The command needs elevated privileges (try without --no-sudo)");
            eprintln!("  2. The unit name is wrong (check: systemctl list-units)");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::ControlFailed { verb, unit } => {
                write!(f, "Failed to {} {}", verb, unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_control_failed() {
        let err = CliError::ControlFailed {
            verb: "start",
            unit: "nginx.service".to_string(),
        };
        assert!(err.to_string().contains("start"));
        assert!(err.to_string().contains("nginx.service"));
    }

    #[test]
    fn test_display_logging_init() {
        let err = CliError::LoggingInit("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }
}
