//! Unit monitor facade.

use std::sync::Arc;

use tracing::debug;

use super::config::MonitorConfig;
use super::poller::PollShared;
use super::snapshot::StatusSnapshot;
use super::supervisor::Supervisor;
use crate::systemctl::{SystemctlControl, SystemctlProbe};
use crate::traits::{ControlChannel, StateProbe};
use crate::unit::{UnitCommand, UnitState};

/// Cached observer and controller for one systemd unit.
///
/// Construction is cheap and starts nothing; the background poller is
/// spawned lazily by the first state accessor and transparently replaced if
/// it dies. Accessors never block beyond their configured bounds and never
/// panic: when freshness cannot be confirmed they return a degraded
/// default (`Unknown` / `false`) instead.
///
/// # Example
///
/// ```ignore
/// use unitwatch::monitor::UnitMonitor;
///
/// let monitor = UnitMonitor::new("nginx.service");
/// monitor.on_state_change(|active| println!("active: {}", active));
///
/// if !monitor.is_active() {
///     monitor.start();
/// }
/// ```
pub struct UnitMonitor {
    unit: String,
    control: Arc<dyn ControlChannel>,
    supervisor: Supervisor,
}

impl UnitMonitor {
    /// Creates a monitor for `unit` backed by the systemctl collaborators.
    pub fn new(unit: &str) -> Self {
        Self::with_config(unit, MonitorConfig::default())
    }

    /// Creates a systemctl-backed monitor with custom tuning.
    pub fn with_config(unit: &str, config: MonitorConfig) -> Self {
        Self::with_parts(
            unit,
            Arc::new(SystemctlProbe::new()),
            Arc::new(SystemctlControl::new()),
            config,
        )
    }

    /// Creates a monitor from explicit collaborators.
    ///
    /// This is the dependency-injection constructor used by tests and by
    /// hosts that talk to something other than a local systemctl binary.
    pub fn with_parts(
        unit: &str,
        probe: Arc<dyn StateProbe>,
        control: Arc<dyn ControlChannel>,
        config: MonitorConfig,
    ) -> Self {
        let shared = Arc::new(PollShared::new(unit));
        Self {
            unit: unit.to_string(),
            control,
            supervisor: Supervisor::new(probe, shared, config),
        }
    }

    /// Name of the watched unit.
    pub fn unit_name(&self) -> &str {
        &self.unit
    }

    /// Last observed unit state, or [`UnitState::Unknown`] when freshness
    /// cannot be confirmed.
    pub fn state(&self) -> UnitState {
        self.status().state
    }

    /// Whether the unit was active at the last poll. Degrades to `false`.
    pub fn is_active(&self) -> bool {
        self.status().is_active
    }

    /// Whether the unit was failed at the last poll. Degrades to `false`.
    pub fn is_failed(&self) -> bool {
        self.status().is_failed
    }

    /// Consistent snapshot of state and activity flags from one sample.
    ///
    /// Unlike three separate accessor calls, the returned triple always
    /// comes from a single committed poll. Degrades to the default
    /// (`Unknown` / `false` / `false`) snapshot.
    pub fn status(&self) -> StatusSnapshot {
        if self.supervisor.ensure_fresh() {
            self.supervisor.snapshot()
        } else {
            StatusSnapshot::default()
        }
    }

    /// Assigns the activity-transition callback.
    ///
    /// Fires on both edges (activation and deactivation), once per
    /// transition, from the poll thread. The body must be thread-safe and
    /// quick; a blocking callback stalls polling.
    pub fn on_state_change<F>(&self, callback: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.supervisor.shared().callbacks.lock().on_state_change = Some(Box::new(callback));
    }

    /// Assigns the failure callback.
    ///
    /// Fires once when the unit enters the failed state (rising edge only).
    /// Same threading obligations as [`on_state_change`](Self::on_state_change).
    pub fn on_fail<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.supervisor.shared().callbacks.lock().on_fail = Some(Box::new(callback));
    }

    /// Starts the unit. Returns whether the command succeeded.
    ///
    /// Talks directly to the control channel; the cached state catches up on
    /// the next poll.
    pub fn start(&self) -> bool {
        self.control.apply(&self.unit, UnitCommand::Start)
    }

    /// Stops the unit. Returns whether the command succeeded.
    pub fn stop(&self) -> bool {
        self.control.apply(&self.unit, UnitCommand::Stop)
    }

    /// Restarts the unit. Returns whether the command succeeded.
    pub fn restart(&self) -> bool {
        self.control.apply(&self.unit, UnitCommand::Restart)
    }

    /// Whether a live poll worker currently exists. Does not start one.
    pub fn is_polling(&self) -> bool {
        self.supervisor.is_worker_alive()
    }

    /// Shuts the monitor down.
    ///
    /// Idempotent and bounded: the worker is asked to stop and joined for at
    /// most the configured join timeout, then detached. After close,
    /// accessors permanently return degraded defaults; no worker is ever
    /// started again.
    pub fn close(&self) {
        debug!(unit = %self.unit, "closing monitor");
        self.supervisor.close();
    }
}

impl Drop for UnitMonitor {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StaticProbe {
        state: UnitState,
        queries: AtomicUsize,
    }

    impl StaticProbe {
        fn new(state: UnitState) -> Arc<Self> {
            Arc::new(Self {
                state,
                queries: AtomicUsize::new(0),
            })
        }
    }

    impl StateProbe for StaticProbe {
        fn query(&self, _unit: &str) -> UnitState {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.state
        }
    }

    struct RecordingControl {
        calls: parking_lot::Mutex<Vec<(String, UnitCommand)>>,
        result: bool,
    }

    impl ControlChannel for RecordingControl {
        fn apply(&self, unit: &str, command: UnitCommand) -> bool {
            self.calls.lock().push((unit.to_string(), command));
            self.result
        }
    }

    fn test_config() -> MonitorConfig {
        MonitorConfig::new()
            .with_poll_interval(Duration::from_millis(10))
            .with_handshake_timeout(Duration::from_millis(500))
            .with_join_timeout(Duration::from_millis(500))
    }

    #[test]
    fn test_construction_starts_no_worker() {
        let monitor = UnitMonitor::with_parts(
            "demo.service",
            StaticProbe::new(UnitState::Active),
            Arc::new(RecordingControl {
                calls: parking_lot::Mutex::new(Vec::new()),
                result: true,
            }),
            test_config(),
        );

        assert!(!monitor.is_polling());
    }

    #[test]
    fn test_first_accessor_starts_worker() {
        let probe = StaticProbe::new(UnitState::Active);
        let monitor = UnitMonitor::with_parts(
            "demo.service",
            probe.clone(),
            Arc::new(RecordingControl {
                calls: parking_lot::Mutex::new(Vec::new()),
                result: true,
            }),
            test_config(),
        );

        assert!(monitor.is_active());
        assert!(monitor.is_polling());
        assert!(probe.queries.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_control_ops_delegate_and_do_not_poll() {
        let control = Arc::new(RecordingControl {
            calls: parking_lot::Mutex::new(Vec::new()),
            result: true,
        });
        let monitor = UnitMonitor::with_parts(
            "demo.service",
            StaticProbe::new(UnitState::Inactive),
            control.clone(),
            test_config(),
        );

        assert!(monitor.start());
        assert!(monitor.stop());
        assert!(monitor.restart());

        let calls = control.calls.lock();
        assert_eq!(
            *calls,
            vec![
                ("demo.service".to_string(), UnitCommand::Start),
                ("demo.service".to_string(), UnitCommand::Stop),
                ("demo.service".to_string(), UnitCommand::Restart),
            ]
        );
        // Control operations bypass the poll loop entirely
        assert!(!monitor.is_polling());
    }

    #[test]
    fn test_close_is_idempotent() {
        let monitor = UnitMonitor::with_parts(
            "demo.service",
            StaticProbe::new(UnitState::Active),
            Arc::new(RecordingControl {
                calls: parking_lot::Mutex::new(Vec::new()),
                result: true,
            }),
            test_config(),
        );

        assert!(monitor.is_active());
        monitor.close();
        monitor.close();

        assert!(!monitor.is_polling());
        assert_eq!(monitor.state(), UnitState::Unknown);
        assert!(!monitor.is_active());
    }
}
