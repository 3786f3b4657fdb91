//! Unitwatch - cached observation and control of a systemd unit.
//!
//! This library watches the run state of one externally managed service
//! through a background poller and exposes it as a cheap cached value with
//! edge-triggered callbacks on state transitions.
//!
//! # High-Level API
//!
//! For most use cases, the [`monitor`] module provides the facade:
//!
//! ```ignore
//! use unitwatch::monitor::UnitMonitor;
//!
//! let monitor = UnitMonitor::new("nginx.service");
//! monitor.on_fail(|| eprintln!("nginx failed!"));
//!
//! // First access lazily starts the background poller.
//! if monitor.is_active() {
//!     println!("nginx is up");
//! }
//! ```

pub mod logging;
pub mod monitor;
pub mod systemctl;
pub mod traits;
pub mod unit;

/// Version of the unitwatch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
