//! Delay primitive for the engine.
//!
//! A `Timeline` holds continuations scheduled for a point on the engine
//! clock. Nothing here waits: the owner advances the clock and pops whatever
//! became due. Continuations due at the same instant come out in the order
//! they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<W> {
    due: Duration,
    seq: u64,
    wake: W,
}

impl<W> PartialEq for Entry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<W> Eq for Entry<W> {}

impl<W> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Pending continuations ordered by due time.
pub struct Timeline<W> {
    now: Duration,
    seq: u64,
    pending: BinaryHeap<Reverse<Entry<W>>>,
}

impl<W> Timeline<W> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: BinaryHeap::new(),
        }
    }

    /// Current position of the engine clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `wake` to become due `duration` after the current instant.
    pub fn sleep(&mut self, duration: Duration, wake: W) {
        let entry = Entry {
            due: self.now + duration,
            seq: self.seq,
            wake,
        };
        self.seq += 1;
        self.pending.push(Reverse(entry));
    }

    /// Instant at which the earliest continuation becomes due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pop the earliest continuation due at or before `target`.
    ///
    /// The clock moves to the popped entry's due time, so anything it
    /// schedules is measured from that instant rather than from `target`.
    /// Once nothing more is due the clock settles on `target`. The clock
    /// never moves backwards.
    pub fn pop_until(&mut self, target: Duration) -> Option<W> {
        match self.next_deadline() {
            Some(due) if due <= target => {
                let Reverse(entry) = self.pending.pop()?;
                self.now = self.now.max(entry.due);
                Some(entry.wake)
            }
            _ => {
                self.now = self.now.max(target);
                None
            }
        }
    }

    /// Drop every pending continuation, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<W> Default for Timeline<W> {
    fn default() -> Self {
        Self::new()
    }
}
