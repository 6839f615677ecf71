//! Delayed-event queue keyed by timeline generation.
//!
//! Every entry records the [`TimelineToken`] of the timeline that scheduled
//! it. Cancelling a token removes its pending entries; consumers still
//! compare the token of anything that fires against the active timeline,
//! because an entry can be popped in the same tick its timeline is replaced.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

/// Generation identifier for one journey timeline instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimelineToken(u64);

impl TimelineToken {
    #[must_use]
    pub const fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for TimelineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// An event whose due time has been reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub token: TimelineToken,
    pub due: Duration,
    pub event: E,
}

#[derive(Debug)]
struct Entry<E> {
    due: Duration,
    seq: u64,
    token: TimelineToken,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the earliest due entry first; FIFO among equals.
impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<E> {
    queue: BinaryHeap<Entry<E>>,
    next_seq: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<E> Scheduler<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, token: TimelineToken, due: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.queue.push(Entry {
            due,
            seq,
            token,
            event,
        });
    }

    /// Drop every pending entry issued under `token`. Returns how many were removed.
    pub fn cancel(&mut self, token: TimelineToken) -> usize {
        let before = self.queue.len();
        self.queue.retain(|entry| entry.token != token);
        before - self.queue.len()
    }

    /// Pop the earliest entry if it is due at `now`.
    ///
    /// Callers loop until `None`: handling one event may schedule another
    /// that is already due.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<E>> {
        if self.queue.peek()?.due > now {
            return None;
        }
        self.queue.pop().map(|entry| Fired {
            token: entry.token,
            due: entry.due,
            event: entry.event,
        })
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|entry| entry.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Scheduler, TimelineToken};

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn pops_in_due_order_and_only_when_due() {
        let token = TimelineToken::new(1);
        let mut scheduler = Scheduler::new();
        scheduler.schedule(token, secs(20), "b");
        scheduler.schedule(token, secs(5), "a");
        scheduler.schedule(token, secs(35), "c");

        assert_eq!(scheduler.next_due(), Some(secs(5)));
        assert!(scheduler.pop_due(secs(4)).is_none());

        let fired = scheduler.pop_due(secs(30)).map(|f| f.event);
        assert_eq!(fired, Some("a"));
        let fired = scheduler.pop_due(secs(30)).map(|f| f.event);
        assert_eq!(fired, Some("b"));
        assert!(scheduler.pop_due(secs(30)).is_none());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn equal_due_times_fire_in_insertion_order() {
        let token = TimelineToken::new(7);
        let mut scheduler = Scheduler::new();
        for label in ["first", "second", "third"] {
            scheduler.schedule(token, secs(1), label);
        }
        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(secs(1)))
            .map(|f| f.event)
            .collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn cancel_removes_only_matching_token() {
        let old = TimelineToken::new(1);
        let new = old.next();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(old, secs(20), 'x');
        scheduler.schedule(old, secs(35), 'y');
        scheduler.schedule(new, secs(15), 'z');

        assert_eq!(scheduler.cancel(old), 2);
        assert_eq!(scheduler.cancel(old), 0);

        let fired = scheduler.pop_due(secs(100));
        assert_eq!(fired.as_ref().map(|f| f.token), Some(new));
        assert_eq!(fired.map(|f| f.event), Some('z'));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn fired_carries_due_time_not_observation_time() {
        let token = TimelineToken::new(3);
        let mut scheduler = Scheduler::new();
        scheduler.schedule(token, secs(5), ());
        let fired = scheduler.pop_due(secs(9));
        assert_eq!(fired.map(|f| f.due), Some(secs(5)));
    }

    #[test]
    fn token_display() {
        assert_eq!(TimelineToken::new(42).to_string(), "gen-42");
        assert_eq!(TimelineToken::new(42).generation(), 42);
    }
}
