//! Debounced delivery of rapidly changing input
//!
//! Search text changes on every keystroke, but the table should only be
//! re-filtered once the text has been quiet for a fixed period. Two flavours of
//! the same cancellable timer are provided:
//!
//! - [`Debouncer`] - poll driven. The host passes the current time on every
//!   frame/tick; suited to immediate-mode UIs and deterministic tests.
//! - [`SearchDebouncer`] - runtime driven. Each schedule spawns a tokio timer task
//!   and aborts the previous one; the value arrives on a crossbeam channel the host
//!   thread drains.
//!
//! Both hold at most one pending value. Scheduling replaces it and restarts the
//! quiet period; cancelling with nothing pending is a no-op.

use crossbeam_channel::{Receiver, Sender};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Default quiet period before a search term is applied
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Poll-driven cancellable timer holding the latest scheduled value
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Schedule `value` to fire one quiet period after `now`.
    ///
    /// Returns true if a pending value was replaced.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet_period,
        });
        replaced
    }

    /// Return the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop the pending value, if any
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Fire the pending value now, ignoring its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will fire
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending value fires, for hosts that sleep between ticks
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|d| d.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

/// Runtime-driven debouncer for search terms
///
/// Owns a single timer task handle. Fired terms are delivered on the receiver
/// returned by [`SearchDebouncer::new`].
pub struct SearchDebouncer {
    runtime: Handle,
    quiet_period: Duration,
    timer: Option<JoinHandle<()>>,
    fired_tx: Sender<String>,
}

impl SearchDebouncer {
    /// Create a debouncer spawning its timers on `runtime`
    pub fn new(runtime: Handle, quiet_period: Duration) -> (Self, Receiver<String>) {
        let (fired_tx, fired_rx) = crossbeam_channel::unbounded();
        let debouncer = Self {
            runtime,
            quiet_period,
            timer: None,
            fired_tx,
        };
        (debouncer, fired_rx)
    }

    /// Replace any pending term with `term` and restart the quiet period
    pub fn schedule(&mut self, term: impl Into<String>) {
        self.cancel();

        let term = term.into();
        let quiet_period = self.quiet_period;
        let fired_tx = self.fired_tx.clone();
        self.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(quiet_period).await;
            tracing::trace!(term = %term, "Search term settled");
            // The host may have gone away; nothing to do then.
            let _ = fired_tx.send(term);
        }));
    }

    /// Abort the pending timer. Aborting a timer that already fired is a no-op.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Whether a timer is scheduled and has not yet fired
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
