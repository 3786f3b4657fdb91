//! systemctl-backed collaborators.
//!
//! Implements the [`StateProbe`](crate::traits::StateProbe) and
//! [`ControlChannel`](crate::traits::ControlChannel) traits by shelling out
//! to the `systemctl` binary.

mod control;
mod error;
mod probe;

pub use control::{SystemctlControl, DEFAULT_CONTROL_TIMEOUT_SECS};
pub use error::SystemctlError;
pub use probe::SystemctlProbe;
