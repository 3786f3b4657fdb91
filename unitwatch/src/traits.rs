//! Trait definitions for the external systemctl collaborators.
//!
//! These traits enable dependency injection and testing of the monitor
//! without a live systemd instance.

use crate::unit::{UnitCommand, UnitState};

/// Queries the instantaneous state of a unit.
///
/// This trait abstracts the external state query to enable testing without
/// systemd. Implementations must not panic: any internal failure (spawn
/// error, malformed output) maps to [`UnitState::Unknown`].
///
/// The probe is called from the background poll thread on every iteration.
/// A slow query delays subsequent polls but never blocks accessor callers
/// beyond their bounded waits.
pub trait StateProbe: Send + Sync {
    /// Query the current state of `unit`.
    fn query(&self, unit: &str) -> UnitState;
}

/// Issues start/stop/restart commands against a unit.
///
/// This trait abstracts unit control to enable testing without systemd.
/// Implementations are synchronous with a bounded wait; a timeout counts as
/// failure. Control operations are independent of the poll loop, so cached
/// state reflects a successful command only once the next poll observes it.
pub trait ControlChannel: Send + Sync {
    /// Apply `command` to `unit`.
    ///
    /// Returns `true` only when the command completed with an explicit
    /// success status within the bounded wait.
    fn apply(&self, unit: &str, command: UnitCommand) -> bool;
}
