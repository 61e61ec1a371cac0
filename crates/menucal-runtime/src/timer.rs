#![forbid(unsafe_code)]

//! UI-affine timer queue with cancellable tokens.
//!
//! The only asynchrony in this system is timer-based deferral, and all of
//! it resumes on the single UI context. [`TimerQueue`] keeps scheduled
//! thunks in-process: the host pumps the queue from its run loop
//! ([`TimerQueue::pump`]) and tests drive it with an explicit clock
//! ([`TimerQueue::advance_to`]).
//!
//! Scheduling returns a [`TimerToken`]; cancelling by token before the
//! deadline drops the thunk outright — no partial execution, no merging.
//! Tokens are unique for the queue's lifetime, so a fired or cancelled
//! token can never alias a later entry.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;
use web_time::{Duration, Instant};

/// Identity of one scheduled deferral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

struct Entry {
    token: TimerToken,
    deadline: Instant,
    /// Insertion order; breaks deadline ties first-scheduled-first.
    seq: u64,
    thunk: Box<dyn FnOnce()>,
}

struct Inner {
    next: u64,
    entries: Vec<Entry>,
}

/// A cooperative, single-context timer queue.
///
/// Cloning yields another handle to the same queue. Entries fire only
/// from [`advance_to`](Self::advance_to) / [`pump`](Self::pump), on the
/// caller's context — never on a background thread.
#[derive(Clone)]
pub struct TimerQueue {
    inner: Rc<RefCell<Inner>>,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next: 1,
                entries: Vec::new(),
            })),
        }
    }

    /// Schedule `thunk` to run once `delay` has elapsed.
    pub fn schedule(&self, delay: Duration, thunk: impl FnOnce() + 'static) -> TimerToken {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next;
        inner.next += 1;
        let token = TimerToken(seq);
        inner.entries.push(Entry {
            token,
            deadline: Instant::now() + delay,
            seq,
            thunk: Box::new(thunk),
        });
        trace!(
            target: "menucal.timer",
            token = token.0,
            delay_ms = delay.as_millis() as u64,
            "scheduled"
        );
        token
    }

    /// Cancel a pending entry. Returns `true` if it was still pending.
    pub fn cancel(&self, token: TimerToken) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.token != token);
        let cancelled = inner.entries.len() != before;
        if cancelled {
            trace!(target: "menucal.timer", token = token.0, "cancelled");
        }
        cancelled
    }

    /// Number of pending entries.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Run every entry whose deadline is at or before `now`, in deadline
    /// order (insertion order for equal deadlines).
    ///
    /// Thunks run after the queue's borrow is released, so a thunk may
    /// schedule or cancel freely; an entry scheduled mid-pass fires within
    /// the same call when its deadline is already at or before `now`.
    pub fn advance_to(&self, now: Instant) {
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.deadline <= now)
                    .min_by_key(|(_, e)| (e.deadline, e.seq))
                    .map(|(i, _)| i);
                due.map(|i| inner.entries.remove(i))
            };
            match next {
                Some(entry) => {
                    trace!(target: "menucal.timer", token = entry.token.0, "fired");
                    (entry.thunk)();
                }
                None => break,
            }
        }
    }

    /// Run everything due as of the real clock.
    pub fn pump(&self) {
        self.advance_to(Instant::now());
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn far_future() -> Instant {
        Instant::now() + Duration::from_secs(3600)
    }

    #[test]
    fn scheduled_thunk_fires_after_deadline() {
        let queue = TimerQueue::new();
        let fired = Rc::new(RefCell::new(false));
        let f = Rc::clone(&fired);
        queue.schedule(Duration::from_millis(80), move || *f.borrow_mut() = true);

        queue.advance_to(Instant::now());
        assert!(!*fired.borrow(), "fired before the deadline");

        queue.advance_to(far_future());
        assert!(*fired.borrow());
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn cancel_drops_the_thunk() {
        let queue = TimerQueue::new();
        let fired = Rc::new(RefCell::new(false));
        let f = Rc::clone(&fired);
        let token = queue.schedule(Duration::from_millis(10), move || *f.borrow_mut() = true);

        assert!(queue.cancel(token));
        queue.advance_to(far_future());
        assert!(!*fired.borrow());
    }

    #[test]
    fn cancel_after_fire_reports_not_pending() {
        let queue = TimerQueue::new();
        let token = queue.schedule(Duration::from_millis(0), || {});
        queue.advance_to(far_future());
        assert!(!queue.cancel(token));
    }

    #[test]
    fn entries_fire_in_deadline_order() {
        let queue = TimerQueue::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&order);
        let b = Rc::clone(&order);
        queue.schedule(Duration::from_millis(50), move || a.borrow_mut().push("late"));
        queue.schedule(Duration::from_millis(10), move || b.borrow_mut().push("early"));

        queue.advance_to(far_future());
        assert_eq!(*order.borrow(), vec!["early", "late"]);
    }

    #[test]
    fn thunk_may_schedule_from_inside_fire() {
        let queue = TimerQueue::new();
        let fired = Rc::new(RefCell::new(0));
        let inner_fired = Rc::clone(&fired);
        let queue2 = queue.clone();
        queue.schedule(Duration::from_millis(0), move || {
            *inner_fired.borrow_mut() += 1;
            let f = Rc::clone(&inner_fired);
            queue2.schedule(Duration::from_millis(0), move || *f.borrow_mut() += 1);
        });

        // The nested entry was scheduled during this pass; it fires on the
        // same call because its deadline is already due.
        queue.advance_to(far_future());
        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn tokens_are_unique() {
        let queue = TimerQueue::new();
        let t1 = queue.schedule(Duration::from_millis(1), || {});
        let t2 = queue.schedule(Duration::from_millis(1), || {});
        assert_ne!(t1, t2);
    }
}
