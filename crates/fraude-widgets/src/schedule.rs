//! Virtual-time scheduling for delayed widget transitions.
//!
//! Widgets never sleep. A transition that should happen "after a second" is
//! placed on a [`Timeline`] and fires when the owner advances the clock with
//! [`Timeline::advance`]. Production code advances by real elapsed time;
//! tests advance by whatever amount they want to simulate.
//!
//! ```rust
//! use std::time::Duration;
//! use fraude_widgets::Timeline;
//!
//! let mut timeline = Timeline::new();
//! let handle = timeline.schedule(Duration::from_millis(1000), "next-question");
//!
//! assert!(timeline.advance(Duration::from_millis(999)).is_empty());
//! assert_eq!(timeline.advance(Duration::from_millis(1)), vec!["next-question"]);
//! assert!(!timeline.is_pending(handle));
//! ```

use std::time::Duration;

/// Identifies one scheduled event so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Scheduled<E> {
    handle: TimerHandle,
    due: Duration,
    event: E,
}

/// A virtual clock holding fire-once events.
#[derive(Debug)]
pub struct Timeline<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Timeline<E> {
    /// Creates an empty timeline at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `event` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            due: self.now + delay,
            event,
        });
        handle
    }

    /// Cancels a pending event. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Drops every pending event.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns every event that became due,
    /// ordered by due time and then by scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<E> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = waiting;

        // Handles are monotonic, so they double as the scheduling order.
        due.sort_by_key(|s| (s.due, s.handle.0));
        due.into_iter().map(|s| s.event).collect()
    }
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}
