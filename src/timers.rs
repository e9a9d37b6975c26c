//! Fixed-delay transitions as explicit, cancellable scheduled events.
//!
//! Time is whatever clock the caller passes in (the app uses egui's input
//! time in seconds), which keeps the set deterministic under test.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Pending<E> {
    due: f64,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Timers<E> {
    pending: Vec<Pending<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Timers { pending: Vec::new() }
    }
}

impl<E: std::fmt::Debug> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: f64, delay: Duration, event: E) {
        let due = now + delay.as_secs_f64();
        tracing::debug!(?event, due, "timer scheduled");
        self.pending.push(Pending { due, event });
    }

    /// Drops every pending event. Called when the owning view is torn down.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(count = self.pending.len(), "timers cancelled");
        }
        self.pending.clear();
    }

    /// Removes and returns the events due at `now`, earliest first.
    pub fn poll(&mut self, now: f64) -> Vec<E> {
        let mut due: Vec<Pending<E>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|p| p.event).collect()
    }

    /// Time until the next event, for scheduling a repaint.
    pub fn next_due_in(&self, now: f64) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due)
            .min_by(|a, b| a.total_cmp(b))
            .map(|due| Duration::from_secs_f64((due - now).max(0.0)))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
