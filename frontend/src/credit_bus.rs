//! In-process pub-sub for credit balance invalidation.
//!
//! Every credit-consuming operation publishes here after a confirmed
//! success response, and so does payment verification; the sidebar's
//! balance card subscribes and refetches. Semantics are deliberately weak:
//! best-effort, synchronous fan-out, no acknowledgment, last fetch wins
//! when publishes overlap.
//!
//! The UI is single-threaded, so the registry is a thread-local.

use std::cell::RefCell;

use yew::Callback;

thread_local! {
    static SUBSCRIBERS: RefCell<Vec<(u64, Callback<()>)>> = RefCell::new(Vec::new());
    static NEXT_ID: RefCell<u64> = const { RefCell::new(0) };
}

/// Registration guard. Dropping it unsubscribes, so a component that holds
/// its `Subscription` in state stops receiving notifications on destroy.
pub struct Subscription {
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        SUBSCRIBERS.with(|subs| subs.borrow_mut().retain(|(id, _)| *id != self.id));
    }
}

pub fn subscribe(callback: Callback<()>) -> Subscription {
    let id = NEXT_ID.with(|next| {
        let mut next = next.borrow_mut();
        *next += 1;
        *next
    });
    SUBSCRIBERS.with(|subs| subs.borrow_mut().push((id, callback)));
    Subscription { id }
}

/// Notifies all current subscribers that the balance may have changed.
pub fn publish() {
    let snapshot: Vec<Callback<()>> =
        SUBSCRIBERS.with(|subs| subs.borrow().iter().map(|(_, cb)| cb.clone()).collect());
    for callback in snapshot {
        callback.emit(());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn publish_reaches_live_subscribers_only() {
        let hits = Rc::new(Cell::new(0u32));

        let first = {
            let hits = hits.clone();
            subscribe(Callback::from(move |_| hits.set(hits.get() + 1)))
        };
        let second = {
            let hits = hits.clone();
            subscribe(Callback::from(move |_| hits.set(hits.get() + 1)))
        };

        publish();
        assert_eq!(hits.get(), 2);

        drop(first);
        publish();
        assert_eq!(hits.get(), 3);

        drop(second);
        publish();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn publish_with_no_subscribers_is_a_no_op() {
        publish();
    }
}
