//! Monitor tuning knobs.

use std::time::Duration;

/// Default interval between polls (500 milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default bound on waiting for a fresh worker's first sample (2 seconds).
pub const DEFAULT_HANDSHAKE_TIMEOUT_SECS: u64 = 2;

/// Default bound on acquiring the supervisor lock (4 seconds).
pub const DEFAULT_LOCK_TIMEOUT_SECS: u64 = 4;

/// Default bound on joining the worker during shutdown (2 seconds).
pub const DEFAULT_JOIN_TIMEOUT_SECS: u64 = 2;

/// Tuning knobs for a [`UnitMonitor`](super::UnitMonitor).
///
/// Every wait in the monitor is bounded by one of these values. Callers can
/// shrink them for tests or stretch them for slow targets, but none can be
/// disabled: a timed-out wait degrades the affected call, it never blocks
/// forever.
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Sleep between poll iterations.
    poll_interval: Duration,
    /// Wait for a newly spawned worker's first committed sample.
    handshake_timeout: Duration,
    /// Wait for the supervisor lock.
    lock_timeout: Duration,
    /// Wait for the worker thread to exit during close.
    join_timeout: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            handshake_timeout: Duration::from_secs(DEFAULT_HANDSHAKE_TIMEOUT_SECS),
            lock_timeout: Duration::from_secs(DEFAULT_LOCK_TIMEOUT_SECS),
            join_timeout: Duration::from_secs(DEFAULT_JOIN_TIMEOUT_SECS),
        }
    }
}

impl MonitorConfig {
    /// Creates a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom poll interval.
    ///
    /// Shutdown latency is bounded by one poll interval, so very long
    /// intervals also delay [`close`](super::UnitMonitor::close).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets a custom first-sample handshake timeout.
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Sets a custom supervisor lock timeout.
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Sets a custom worker join timeout.
    pub fn with_join_timeout(mut self, timeout: Duration) -> Self {
        self.join_timeout = timeout;
        self
    }

    /// Sleep between poll iterations.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Wait for a newly spawned worker's first committed sample.
    pub fn handshake_timeout(&self) -> Duration {
        self.handshake_timeout
    }

    /// Wait for the supervisor lock.
    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Wait for the worker thread to exit during close.
    pub fn join_timeout(&self) -> Duration {
        self.join_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(
            config.poll_interval(),
            Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
        );
        assert_eq!(
            config.handshake_timeout(),
            Duration::from_secs(DEFAULT_HANDSHAKE_TIMEOUT_SECS)
        );
        assert_eq!(
            config.lock_timeout(),
            Duration::from_secs(DEFAULT_LOCK_TIMEOUT_SECS)
        );
        assert_eq!(
            config.join_timeout(),
            Duration::from_secs(DEFAULT_JOIN_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = MonitorConfig::new()
            .with_poll_interval(Duration::from_millis(20))
            .with_handshake_timeout(Duration::from_millis(200))
            .with_lock_timeout(Duration::from_secs(1))
            .with_join_timeout(Duration::from_millis(500));

        assert_eq!(config.poll_interval(), Duration::from_millis(20));
        assert_eq!(config.handshake_timeout(), Duration::from_millis(200));
        assert_eq!(config.lock_timeout(), Duration::from_secs(1));
        assert_eq!(config.join_timeout(), Duration::from_millis(500));
    }
}
