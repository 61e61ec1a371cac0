#![forbid(unsafe_code)]

//! Observable value with change notification.
//!
//! # Design
//!
//! [`Observable<T>`] wraps a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). When the value changes (determined by `PartialEq`),
//! all live subscribers are notified in registration order, on the caller's
//! (UI-affine) context. Subscribing returns a [`Subscription`] guard;
//! dropping the guard unsubscribes, which scopes a subscription to its
//! owning controller's lifetime.
//!
//! The day-label source is an `Observable<String>`: the empty string is the
//! sentinel for "no numeric glyph".
//!
//! # Failure Modes
//!
//! - **Re-entrant set**: callbacks run after the interior borrow is
//!   released, so a subscriber may call `set()` again; the nested
//!   notification completes before the outer one resumes.
//! - **Subscriber leak**: a `Subscription` guard stored forever keeps its
//!   callback alive. Guards are meant to live exactly as long as the
//!   controller that owns them.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    /// Subscribers in registration order, keyed for removal by guard drop.
    subscribers: Vec<(u64, Callback<T>)>,
}

/// A shared value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** inner
/// state; both handles see the same value and share subscribers.
///
/// # Invariants
///
/// 1. `set(v)` where `v == current` is a no-op (no notification).
/// 2. Subscribers are notified in registration order.
/// 3. A dropped [`Subscription`] guard's callback is never invoked again.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable with the given initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set a new value, notifying subscribers if it differs from the
    /// current one (by `PartialEq`).
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
        }
        self.notify();
    }

    /// Subscribe to value changes.
    ///
    /// The callback is invoked with a reference to the new value after each
    /// change. Returns a [`Subscription`] guard; dropping it unsubscribes.
    /// The callback is **not** invoked with the current value at subscribe
    /// time — callers that need an initial application read `get()` once.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(callback)));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        // Snapshot callbacks so the borrow is released before user code
        // runs; subscribers registered during notification see the next
        // change, not this one.
        let (value, callbacks): (T, Vec<Callback<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.value.clone(),
                inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect(),
            )
        };
        trace!(
            target: "menucal.observable",
            subscribers = callbacks.len(),
            "value changed"
        );
        for cb in callbacks {
            cb(&value);
        }
    }
}

/// Guard for an active subscription. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_notifies_subscribers() {
        let obs = Observable::new(String::from("1"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        let _sub = obs.subscribe(move |v: &String| seen2.borrow_mut().push(v.clone()));

        obs.set("2".into());
        obs.set("3".into());
        assert_eq!(*seen.borrow(), vec!["2".to_string(), "3".to_string()]);
    }

    #[test]
    fn equal_value_does_not_notify() {
        let obs = Observable::new(7);
        let count = Rc::new(RefCell::new(0));
        let count2 = Rc::clone(&count);
        let _sub = obs.subscribe(move |_| *count2.borrow_mut() += 1);

        obs.set(7);
        assert_eq!(*count.borrow(), 0);
        obs.set(8);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let obs = Observable::new(0);
        let count = Rc::new(RefCell::new(0));
        let count2 = Rc::clone(&count);
        let sub = obs.subscribe(move |_| *count2.borrow_mut() += 1);
        obs.set(1);
        drop(sub);
        obs.set(2);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let obs = Observable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&order);
        let b = Rc::clone(&order);
        let _s1 = obs.subscribe(move |_| a.borrow_mut().push("a"));
        let _s2 = obs.subscribe(move |_| b.borrow_mut().push("b"));
        obs.set(1);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn clone_shares_state() {
        let obs = Observable::new(1);
        let other = obs.clone();
        other.set(5);
        assert_eq!(obs.get(), 5);
    }

    #[test]
    fn with_reads_without_clone() {
        let obs = Observable::new(String::from("31"));
        let len = obs.with(|v| v.len());
        assert_eq!(len, 2);
    }

    proptest::proptest! {
        #[test]
        fn notification_count_equals_distinct_transitions(values in proptest::collection::vec(0u8..4, 0..32)) {
            let obs = Observable::new(0u8);
            let count = Rc::new(RefCell::new(0u32));
            let count2 = Rc::clone(&count);
            let _sub = obs.subscribe(move |_| *count2.borrow_mut() += 1);

            let mut current = 0u8;
            let mut expected = 0u32;
            for v in values {
                if v != current {
                    expected += 1;
                    current = v;
                }
                obs.set(v);
            }
            proptest::prop_assert_eq!(*count.borrow(), expected);
        }
    }
}
