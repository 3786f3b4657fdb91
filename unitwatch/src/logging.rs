//! Logging infrastructure for unitwatch.
//!
//! Provides structured logging with file output and console output:
//! - Writes to a log file under the given directory (cleared on session start)
//! - Also prints to stdout for CLI tailing
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the log directory if needed, clears the previous log file, and
/// sets up dual output to both file and stdout. `default_directive` is used
/// when RUST_LOG is not set (e.g. `"info"` or `"debug"`).
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(
    log_dir: &str,
    log_file: &str,
    default_directive: &str,
) -> Result<LoggingGuard, io::Error> {
    // Create the log directory if it doesn't exist
    fs::create_dir_all(log_dir)?;

    // Clear the previous log file by writing empty content.
    // This handles both existing and non-existing files.
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    // Create file appender with non-blocking writer
    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false); // No ANSI colors in file

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true); // ANSI colors for terminal

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get the default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get the default log file name.
pub fn default_log_file() -> &'static str {
    "unitwatch.log"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_log_dir() -> PathBuf {
        // Use a unique directory for each test to avoid conflicts
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = PathBuf::from(format!("test_logs_{}", timestamp));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "unitwatch.log");
    }

    #[test]
    fn test_creates_directory_and_file() {
        let log_dir = test_log_dir();
        let log_dir_str = log_dir.to_str().unwrap();

        assert!(!log_dir.exists(), "Test directory should not exist yet");

        // Can't call init_logging here because of the global subscriber,
        // but the file operations it performs are testable.
        fs::create_dir_all(log_dir_str).expect("Failed to create directory");
        let log_path = Path::new(log_dir_str).join("test.log");
        fs::write(&log_path, "").expect("Failed to create log file");

        assert!(log_dir.exists(), "Log directory should be created");
        assert!(log_path.exists(), "Log file should be created");
        assert_eq!(
            fs::read_to_string(&log_path).unwrap(),
            "",
            "Log file should be empty"
        );

        fs::remove_dir_all(&log_dir).expect("Failed to cleanup");
    }
}
