//! "Scheme changed" broadcast channel
//!
//! There is exactly one channel and it carries no payload: listeners re-read
//! whatever they need from the store.

use crate::lock;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Listener invoked on every publish
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ChangeBroadcaster::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous publish/subscribe channel
pub struct ChangeBroadcaster {
    listeners: Mutex<IndexMap<SubscriptionId, Listener>>,
    next_id: AtomicU64,
    published: AtomicU64,
}

impl ChangeBroadcaster {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(IndexMap::new()),
            next_id: AtomicU64::new(0),
            published: AtomicU64::new(0),
        }
    }

    /// Add a listener; listeners run in subscription order
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.listeners).insert(id, Arc::new(listener));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.listeners).shift_remove(&id).is_some()
    }

    /// Invoke every listener synchronously, in subscription order
    pub fn publish(&self) {
        self.published.fetch_add(1, Ordering::SeqCst);
        // Snapshot so listeners may subscribe or unsubscribe while running
        let listeners: Vec<Listener> = lock(&self.listeners).values().cloned().collect();
        tracing::trace!(listeners = listeners.len(), "publishing scheme change");
        for listener in listeners {
            listener();
        }
    }

    /// Total number of publishes since creation
    pub fn publish_count(&self) -> u64 {
        self.published.load(Ordering::SeqCst)
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }
}

impl Default for ChangeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
