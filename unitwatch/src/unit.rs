//! Unit state and control command vocabulary.
//!
//! These types mirror the words `systemctl` itself uses: `is-active` output
//! maps onto [`UnitState`], and [`UnitCommand`] names the control verbs.

/// Run state of a systemd unit as reported by `systemctl is-active`.
///
/// Only the three stable states get their own variant. Everything else
/// systemd can report (including transitional states like `activating` or
/// `deactivating`) collapses to [`UnitState::Unknown`], which is also the
/// degraded value accessors fall back to when fresh state cannot be
/// confirmed within their bounded waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    /// Unit is running.
    Active,
    /// Unit is stopped.
    Inactive,
    /// Unit entered the failed state.
    Failed,
    /// State could not be determined.
    Unknown,
}

impl UnitState {
    /// Returns the systemd vocabulary string for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitState::Active => "active",
            UnitState::Inactive => "inactive",
            UnitState::Failed => "failed",
            UnitState::Unknown => "unknown",
        }
    }

    /// Maps raw `systemctl is-active` output onto a state.
    ///
    /// Output is trimmed and lowercased before matching. `systemctl` prints
    /// the state word even when exiting non-zero, so callers feed stdout
    /// through here regardless of exit status.
    pub fn from_systemctl(output: &str) -> Self {
        match output.trim().to_ascii_lowercase().as_str() {
            "active" => UnitState::Active,
            "inactive" => UnitState::Inactive,
            "failed" => UnitState::Failed,
            _ => UnitState::Unknown,
        }
    }
}

/// Control verbs accepted by [`ControlChannel`](crate::traits::ControlChannel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCommand {
    /// Start the unit.
    Start,
    /// Stop the unit.
    Stop,
    /// Restart the unit.
    Restart,
}

impl UnitCommand {
    /// Returns the systemctl verb for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCommand::Start => "start",
            UnitCommand::Stop => "stop",
            UnitCommand::Restart => "restart",
        }
    }
}
