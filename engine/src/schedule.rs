//! One-shot deferred actions advanced by the frame tick.
//!
//! Every scheduled action carries a [`TimerId`] handle so callers can cancel
//! it before it fires. The gate uses this for the post-rejection entry reset:
//! new input cancels the pending reset instead of letting it wipe digits
//! typed during the delay window.

use std::time::Duration;

/// Cancellation handle for a scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<A> {
    id: TimerId,
    remaining: Duration,
    action: A,
}

/// A set of pending one-shot actions. No recurrence, no threads: the owner
/// calls [`Scheduler::advance`] once per frame with the elapsed delta and
/// applies whatever fired.
#[derive(Debug)]
pub struct Scheduler<A> {
    pending: Vec<Pending<A>>,
    next_id: u64,
}

impl<A> Scheduler<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `action` to fire once `after` has elapsed.
    pub fn schedule(&mut self, after: Duration, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            remaining: after,
            action,
        });
        id
    }

    /// Cancel a pending action. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != id);
        self.pending.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|pending| pending.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance all pending actions by `delta` and return those that became
    /// due, earliest deadline first.
    pub fn advance(&mut self, delta: Duration) -> Vec<A> {
        let mut due: Vec<(Duration, A)> = Vec::new();
        let mut keep: Vec<Pending<A>> = Vec::new();
        for mut pending in self.pending.drain(..) {
            if pending.remaining <= delta {
                due.push((pending.remaining, pending.action));
            } else {
                pending.remaining -= delta;
                keep.push(pending);
            }
        }
        self.pending = keep;
        due.sort_by_key(|(remaining, _)| *remaining);
        due.into_iter().map(|(_, action)| action).collect()
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Scheduler;
    use std::time::Duration;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_after_delay() {
        let mut sched = Scheduler::new();
        sched.schedule(100 * MS, "reset");
        assert!(sched.advance(50 * MS).is_empty());
        assert_eq!(sched.advance(50 * MS), vec!["reset"]);
        assert!(sched.advance(1000 * MS).is_empty());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut sched = Scheduler::new();
        let id = sched.schedule(100 * MS, "reset");
        assert!(sched.is_pending(id));
        assert!(sched.cancel(id));
        assert!(!sched.is_pending(id));
        assert!(sched.advance(200 * MS).is_empty());
        // Second cancel is a no-op.
        assert!(!sched.cancel(id));
    }

    #[test]
    fn due_actions_fire_earliest_first() {
        let mut sched = Scheduler::new();
        sched.schedule(150 * MS, "hint");
        sched.schedule(100 * MS, "reset");
        assert_eq!(sched.advance(200 * MS), vec!["reset", "hint"]);
    }

    #[test]
    fn independent_timers_survive_each_other() {
        let mut sched = Scheduler::new();
        let reset = sched.schedule(100 * MS, "reset");
        sched.schedule(150 * MS, "hint");
        assert!(sched.cancel(reset));
        assert!(sched.advance(120 * MS).is_empty());
        assert_eq!(sched.advance(30 * MS), vec!["hint"]);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut sched = Scheduler::new();
        sched.schedule(Duration::ZERO, "now");
        assert_eq!(sched.advance(Duration::ZERO), vec!["now"]);
    }
}
