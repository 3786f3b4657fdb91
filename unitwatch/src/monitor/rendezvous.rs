//! Two-party rendezvous handshake.
//!
//! The supervisor uses this to confirm a freshly spawned worker is alive and
//! has produced its first sample: the caller parks in [`Rendezvous::wait`]
//! and the worker releases it by passing the same point. Unlike a generic
//! N-party barrier, an abandoned wait leaves the primitive *broken* and it
//! must be explicitly [`reset`](Rendezvous::reset) before the next use, so a
//! timeout on one side is never silently absorbed by the other.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct Inner {
    /// A party is parked waiting for its peer.
    waiting: bool,
    /// Completed handshakes; a parked waiter is released when this advances.
    completions: u64,
    /// Set when a wait was abandoned; cleared only by `reset`.
    broken: bool,
}

/// A reusable two-party synchronization point.
///
/// The first party to arrive parks until the second arrives or the timeout
/// expires. A timed-out or aborted wait breaks the rendezvous; while broken,
/// every `wait` returns `false` immediately.
///
/// Locking discipline: `reset` must not race a parked waiter. The monitor
/// upholds this because consumers rendezvous one at a time (serialized by
/// the supervisor lock) and the worker only ever passes with a zero wait.
#[derive(Debug, Default)]
pub(crate) struct Rendezvous {
    inner: Mutex<Inner>,
    arrived: Condvar,
}

impl Rendezvous {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arrives at the rendezvous, waiting up to `timeout` for the peer.
    ///
    /// Returns `true` when both parties met. Returns `false` immediately if
    /// the rendezvous is broken, or after `timeout` if the peer never
    /// arrived, in which case the rendezvous is left broken.
    pub(crate) fn wait(&self, timeout: Duration) -> bool {
        let mut inner = self.inner.lock();
        if inner.broken {
            return false;
        }

        if inner.waiting {
            // Second arrival: complete the handshake and release the peer.
            inner.waiting = false;
            inner.completions += 1;
            self.arrived.notify_all();
            return true;
        }

        // First arrival: park until the peer shows up.
        inner.waiting = true;
        let target = inner.completions + 1;
        let deadline = Instant::now() + timeout;
        loop {
            if inner.completions >= target {
                return true;
            }
            if inner.broken {
                return false;
            }
            if Instant::now() >= deadline {
                inner.waiting = false;
                inner.broken = true;
                self.arrived.notify_all();
                return false;
            }
            let _ = self.arrived.wait_until(&mut inner, deadline);
        }
    }

    /// Whether a previous wait left the rendezvous broken.
    pub(crate) fn is_broken(&self) -> bool {
        self.inner.lock().broken
    }

    /// Re-arms the rendezvous after a break.
    pub(crate) fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.waiting = false;
        inner.broken = false;
    }

    /// Breaks the rendezvous, releasing a parked waiter with `false`.
    pub(crate) fn abort(&self) {
        let mut inner = self.inner.lock();
        inner.waiting = false;
        inner.broken = true;
        self.arrived.notify_all();
    }
}
