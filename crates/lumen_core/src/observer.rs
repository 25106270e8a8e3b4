//! Observer lists for synchronous change notification
//!
//! [`Observers`] replaces a single global redraw callback with an explicit
//! list of subscribers owned by whatever holds the state (for example a theme
//! provider). Notification runs every subscriber to completion before
//! returning. Subscribers may call back into the owner, subscribe or
//! unsubscribe while being notified; a subscriber that is already running is
//! skipped instead of being re-entered.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    /// Handle returned by [`Observers::subscribe`]
    pub struct SubscriptionId;
}

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// A list of callbacks notified with `&T`
pub struct Observers<T> {
    slots: RefCell<SlotMap<SubscriptionId, Callback<T>>>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        self.slots.borrow_mut().insert(callback)
    }

    /// Remove a callback; returns false if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.slots.borrow_mut().remove(id).is_some()
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.slots.borrow().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    /// Notify every subscriber, returning how many ran
    pub fn notify(&self, value: &T) -> usize {
        self.notify_while(value, || true)
    }

    /// Notify subscribers in order until `proceed` returns false.
    ///
    /// `proceed` is checked before each callback, so a callback can end the
    /// round for everyone after it.
    pub fn notify_while(&self, value: &T, mut proceed: impl FnMut() -> bool) -> usize {
        // Snapshot so callbacks can touch the list while we iterate.
        let snapshot: Vec<Callback<T>> = self.slots.borrow().values().cloned().collect();

        let mut delivered = 0;
        for callback in snapshot {
            if !proceed() {
                tracing::trace!("observer round stopped after {} callbacks", delivered);
                break;
            }
            match callback.try_borrow_mut() {
                Ok(mut callback) => {
                    callback(value);
                    delivered += 1;
                }
                Err(_) => tracing::trace!("observer skipped: already running"),
            }
        }
        delivered
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let observers = Observers::<i32>::new();
        let total = Rc::new(Cell::new(0));

        let total_in = total.clone();
        let id = observers.subscribe(move |v| total_in.set(total_in.get() + *v));
        assert_eq!(observers.len(), 1);

        assert_eq!(observers.notify(&5), 1);
        assert_eq!(total.get(), 5);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert_eq!(observers.notify(&5), 0);
        assert_eq!(total.get(), 5);
    }

    #[test]
    fn test_unsubscribe_during_notify() {
        let observers = Rc::new(Observers::<()>::new());
        let second_id = Rc::new(Cell::new(None));

        let list = observers.clone();
        let target = second_id.clone();
        observers.subscribe(move |_| {
            if let Some(id) = target.get() {
                list.unsubscribe(id);
            }
        });
        second_id.set(Some(observers.subscribe(|_| {})));

        // Both were in the snapshot, so both run this round.
        assert_eq!(observers.notify(&()), 2);
        assert_eq!(observers.len(), 1);
        assert_eq!(observers.notify(&()), 1);
    }

    #[test]
    fn test_reentrant_notify_skips_running_callback() {
        let observers = Rc::new(Observers::<u32>::new());
        let calls = Rc::new(Cell::new(0));

        let list = observers.clone();
        let calls_in = calls.clone();
        observers.subscribe(move |depth| {
            calls_in.set(calls_in.get() + 1);
            if *depth == 0 {
                // Re-entering must not recurse into this callback.
                list.notify(&1);
            }
        });

        observers.notify(&0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_notify_while_stops_round() {
        let observers = Observers::<()>::new();
        let calls = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let calls_in = calls.clone();
            observers.subscribe(move |_| calls_in.set(calls_in.get() + 1));
        }

        let seen = calls.clone();
        assert_eq!(observers.notify_while(&(), || seen.get() < 2), 2);
        assert_eq!(calls.get(), 2);
    }
}
