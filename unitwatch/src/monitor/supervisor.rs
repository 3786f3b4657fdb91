//! Worker lifecycle supervision.
//!
//! The supervisor owns the poll worker thread: it spawns it lazily on first
//! access, detects when it has died, replaces it, and synchronizes with the
//! replacement through the rendezvous so callers know whether a fresh sample
//! exists. Every wait here is bounded; a timeout degrades the call instead
//! of blocking the caller.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::config::MonitorConfig;
use super::poller::{run_loop, PollShared};
use super::snapshot::StatusSnapshot;
use crate::traits::StateProbe;

/// Interval between exit checks while joining the worker.
const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Supervises the background poll worker.
///
/// Startup is lazy and idempotent: the worker is spawned on the first
/// [`ensure_fresh`](Self::ensure_fresh) call, and any later call that finds
/// it dead spawns a replacement. At most one worker is current at a time;
/// dead ones are abandoned, never reused.
pub(crate) struct Supervisor {
    probe: Arc<dyn StateProbe>,
    shared: Arc<PollShared>,
    config: MonitorConfig,
    /// Current worker thread, if one was ever started.
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Supervisor {
    pub(crate) fn new(
        probe: Arc<dyn StateProbe>,
        shared: Arc<PollShared>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            probe,
            shared,
            config,
            worker: Mutex::new(None),
        }
    }

    pub(crate) fn shared(&self) -> &Arc<PollShared> {
        &self.shared
    }

    /// Copy of the last committed snapshot.
    pub(crate) fn snapshot(&self) -> StatusSnapshot {
        *self.shared.snapshot.lock()
    }

    /// Whether a live worker thread currently exists. Does not start one.
    pub(crate) fn is_worker_alive(&self) -> bool {
        self.worker
            .lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Ensures a live worker exists and at least one sample was committed.
    ///
    /// Returns `true` when the cached snapshot is backed by a real sample.
    /// Returns `false` (the caller should degrade) when shutdown was
    /// requested, the supervisor lock could not be acquired in time, the
    /// worker could not be spawned, or a fresh worker missed its first
    /// handshake. In the last case the worker is left running and gets
    /// re-examined on the next call.
    pub(crate) fn ensure_fresh(&self) -> bool {
        // close() is final: no worker may start after it.
        if self.shared.shutdown.load(Ordering::Relaxed) {
            return false;
        }

        let Some(mut worker) = self.worker.try_lock_for(self.config.lock_timeout()) else {
            warn!(unit = %self.shared.unit, "timed out acquiring supervisor lock");
            return false;
        };

        let alive = worker
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false);

        if alive {
            // Healthy steady state: the sample exists once the worker has
            // committed its first snapshot. Before that (a previous
            // handshake timed out on a slow probe) callers keep degrading.
            return self.shared.primed.load(Ordering::Acquire);
        }

        if worker.is_some() {
            debug!(unit = %self.shared.unit, "poll worker died, starting replacement");
        }

        // A dead worker may have left the handshake broken (timed-out wait,
        // abort on exit); re-arm it for the replacement.
        if self.shared.rendezvous.is_broken() {
            self.shared.rendezvous.reset();
        }

        let spawned = {
            let probe = Arc::clone(&self.probe);
            let shared = Arc::clone(&self.shared);
            let interval = self.config.poll_interval();
            thread::Builder::new()
                .name(format!("unitwatch-{}", self.shared.unit))
                .spawn(move || run_loop(probe, shared, interval))
        };

        match spawned {
            Ok(handle) => *worker = Some(handle),
            Err(e) => {
                warn!(unit = %self.shared.unit, error = %e, "failed to spawn poll worker");
                return false;
            }
        }

        if self.shared.rendezvous.wait(self.config.handshake_timeout()) {
            true
        } else {
            debug!(unit = %self.shared.unit, "first-sample handshake timed out");
            false
        }
    }

    /// Stops the worker and waits a bounded time for it to exit.
    ///
    /// Idempotent. An unresponsive worker (e.g. stuck inside a hanging
    /// probe) is detached with a warning, never escalated.
    pub(crate) fn close(&self) {
        self.shared.shutdown.store(true, Ordering::Relaxed);
        self.shared.rendezvous.abort();

        let Some(mut worker) = self.worker.try_lock_for(self.config.lock_timeout()) else {
            warn!(unit = %self.shared.unit, "timed out acquiring supervisor lock during close");
            return;
        };

        if let Some(handle) = worker.take() {
            let deadline = Instant::now() + self.config.join_timeout();
            while !handle.is_finished() && Instant::now() < deadline {
                thread::sleep(JOIN_POLL_INTERVAL);
            }

            if handle.is_finished() {
                if handle.join().is_err() {
                    warn!(unit = %self.shared.unit, "poll worker panicked");
                }
            } else {
                warn!(
                    unit = %self.shared.unit,
                    timeout = ?self.config.join_timeout(),
                    "poll worker did not stop in time, detaching"
                );
            }
        }
    }
}
