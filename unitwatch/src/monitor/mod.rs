//! Cached unit-state monitoring.
//!
//! A background worker polls the state probe at a fixed interval, caches
//! the result, and fires edge-triggered callbacks on transitions. The
//! supervisor keeps the worker alive across failures and synchronizes
//! first access through a two-party rendezvous, so a caller asking for
//! fresh state either gets a real sample or a degraded default within a
//! bounded wait.

mod config;
mod handle;
mod poller;
mod rendezvous;
mod snapshot;
mod supervisor;

pub use config::{
    MonitorConfig, DEFAULT_HANDSHAKE_TIMEOUT_SECS, DEFAULT_JOIN_TIMEOUT_SECS,
    DEFAULT_LOCK_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_MS,
};
pub use handle::UnitMonitor;
pub use poller::{FailCallback, StateChangeCallback};
pub use snapshot::StatusSnapshot;
