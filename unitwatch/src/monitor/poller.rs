//! Background poll loop.
//!
//! The worker thread repeatedly queries the state probe, detects
//! activation/failure edges, dispatches callbacks, and commits the fresh
//! snapshot for accessor threads to read. All state shared with the
//! supervisor travels in one [`PollShared`] handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::rendezvous::Rendezvous;
use super::snapshot::StatusSnapshot;
use crate::traits::StateProbe;

/// Callback invoked when the unit's activity flips, with the new value.
///
/// Runs on the poll thread: bodies must be thread-safe and quick, since a
/// blocking callback stalls subsequent polling. Reassigning a callback from
/// inside a callback is not supported.
pub type StateChangeCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Callback invoked when the unit enters the failed state.
///
/// Same threading obligations as [`StateChangeCallback`]. Fires on the
/// rising edge only; repeated failed samples do not re-fire.
pub type FailCallback = Box<dyn Fn() + Send + Sync>;

/// Callback slots, assignable at any time.
#[derive(Default)]
pub(crate) struct Callbacks {
    pub(crate) on_state_change: Option<StateChangeCallback>,
    pub(crate) on_fail: Option<FailCallback>,
}

/// State shared between the supervisor, accessors, and the worker closure.
pub(crate) struct PollShared {
    /// Name of the watched unit, for probe calls and log lines.
    pub(crate) unit: String,
    /// Last committed sample. Replaced as a whole under the lock.
    pub(crate) snapshot: Mutex<StatusSnapshot>,
    /// Edge-transition callback slots.
    pub(crate) callbacks: Mutex<Callbacks>,
    /// Cooperative shutdown flag, observed at the top of each iteration.
    pub(crate) shutdown: AtomicBool,
    /// True once any worker has committed at least one sample.
    pub(crate) primed: AtomicBool,
    /// First-sample handshake between worker and supervisor.
    pub(crate) rendezvous: Rendezvous,
}

impl PollShared {
    pub(crate) fn new(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            snapshot: Mutex::new(StatusSnapshot::default()),
            callbacks: Mutex::new(Callbacks::default()),
            shutdown: AtomicBool::new(false),
            primed: AtomicBool::new(false),
            rendezvous: Rendezvous::new(),
        }
    }
}

/// The worker thread body.
///
/// Runs until the shutdown flag is observed at an iteration boundary, so
/// termination latency is bounded by one poll interval plus one probe call.
/// Each iteration queries the probe, fires edge callbacks (state change
/// before fail), commits the snapshot atomically, then passes the
/// rendezvous to release a caller waiting on the first sample.
pub(crate) fn run_loop(probe: Arc<dyn StateProbe>, shared: Arc<PollShared>, interval: Duration) {
    debug!(unit = %shared.unit, "poll worker started");

    // A replacement worker inherits the last committed snapshot, so a
    // restart does not replay edges that already fired.
    let mut previous = *shared.snapshot.lock();

    while !shared.shutdown.load(Ordering::Relaxed) {
        let snapshot = StatusSnapshot::from_state(probe.query(&shared.unit));

        if snapshot.is_active != previous.is_active {
            debug!(unit = %shared.unit, active = snapshot.is_active, "activity changed");
            let callbacks = shared.callbacks.lock();
            if let Some(on_state_change) = callbacks.on_state_change.as_ref() {
                on_state_change(snapshot.is_active);
            }
        }
        if snapshot.is_failed && !previous.is_failed {
            warn!(unit = %shared.unit, "unit entered failed state");
            let callbacks = shared.callbacks.lock();
            if let Some(on_fail) = callbacks.on_fail.as_ref() {
                on_fail();
            }
        }

        *shared.snapshot.lock() = snapshot;
        previous = snapshot;
        shared.primed.store(true, Ordering::Release);

        // Release a caller blocked on the first sample. With nobody waiting
        // the zero-wait pass breaks the rendezvous; re-arm it for the next
        // ensure_fresh.
        if !shared.rendezvous.wait(Duration::ZERO) {
            shared.rendezvous.reset();
        }

        thread::sleep(interval);
    }

    // Release any caller still parked on the handshake rather than letting
    // it burn the full timeout.
    shared.rendezvous.abort();
    debug!(unit = %shared.unit, "poll worker stopped");
}
