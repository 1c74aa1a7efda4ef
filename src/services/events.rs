//! Typed subscriber registry
//!
//! Subscribing hands back an opaque `SubscriptionId`; cancelling an id
//! that was never registered (or already cancelled) is a logged no-op,
//! never an error for the caller.

use tracing::debug;

/// Opaque handle for cancelling a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of subscriber callbacks of one event type.
pub struct SubscriberSet<F> {
    next_id: u64,
    entries: Vec<(SubscriptionId, F)>,
}

impl<F> SubscriberSet<F> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback and return its cancellation handle.
    pub fn subscribe(&mut self, callback: F) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        if self.entries.len() == before {
            debug!(id = ?id, "unsubscribe_unknown_handle");
        }
    }

    /// Callbacks in subscription order.
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.entries.iter().map(|(_, callback)| callback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F> Default for SubscriberSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
