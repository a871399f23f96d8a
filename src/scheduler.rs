//! Deadline-based, cancelable one-shot timers.
//!
//! Nothing here sleeps or spawns. The event loop calls [`Scheduler::due`]
//! with the current [`Instant`] on every tick, and entries whose deadline has
//! passed are handed back in deadline order. Tests drive it with synthetic
//! instants.

use std::time::{Duration, Instant};

/// Handle for a scheduled entry, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    deadline: Instant,
    payload: E,
}

/// Fire-once timers carrying a payload of type `E`.
#[derive(Debug)]
pub struct Scheduler<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, payload: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            payload,
        });
        id
    }

    /// Schedule `payload` to fire `delay` after `now`.
    pub fn schedule_in(&mut self, now: Instant, delay: Duration, payload: E) -> TimerId {
        self.schedule(now + delay, payload)
    }

    /// Cancel a pending entry. Returns its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<E> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).payload)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return every entry whose deadline is at or before `now`.
    ///
    /// Entries come back ordered by deadline; ties keep scheduling order.
    pub fn due(&mut self, now: Instant) -> Vec<(TimerId, E)> {
        let (mut fired, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.deadline <= now);
        self.entries = pending;
        fired.sort_by_key(|e| (e.deadline, e.id));
        fired.into_iter().map(|e| (e.id, e.payload)).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
