// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered job queue.
//!
//! Entries fire in `(due, insertion order)` order, so two jobs scheduled for
//! the same instant run in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle to a scheduled entry, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

struct Entry<T> {
    due: Duration,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Min-heap of jobs keyed by their due time.
pub struct Scheduler<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    cancelled: HashSet<u64>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            cancelled: HashSet::new(),
            next_seq: 0,
        }
    }
}

impl<T> std::fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.len())
            .field("next_due", &self.peek_due())
            .finish()
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `item` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, item: T) -> Ticket {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { due, seq, item }));
        Ticket(seq)
    }

    /// Cancels a pending entry.
    ///
    /// Returns `false` if the entry already fired or was cancelled before.
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        let pending = self.heap.iter().any(|Reverse(entry)| entry.seq == ticket.0);
        pending && self.cancelled.insert(ticket.0)
    }

    /// Removes and returns the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, T)> {
        self.discard_cancelled_head();
        match self.heap.peek() {
            Some(Reverse(entry)) if entry.due <= now => {
                let Reverse(entry) = self.heap.pop()?;
                Some((entry.due, entry.item))
            }
            _ => None,
        }
    }

    /// Returns the due time of the earliest live entry.
    pub fn next_due(&mut self) -> Option<Duration> {
        self.discard_cancelled_head();
        self.peek_due()
    }

    /// Number of live (not cancelled) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len() - self.cancelled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn peek_due(&self) -> Option<Duration> {
        self.heap
            .iter()
            .filter(|Reverse(entry)| !self.cancelled.contains(&entry.seq))
            .map(|Reverse(entry)| entry.due)
            .min()
    }

    fn discard_cancelled_head(&mut self) {
        while let Some(Reverse(entry)) = self.heap.peek() {
            if !self.cancelled.remove(&entry.seq) {
                break;
            }
            self.heap.pop();
        }
    }
}
