//! Scheme store
//!
//! Holds the live [`ColorScheme`]. Every write publishes exactly one change
//! notification, including writes that store the value already present.

use crate::broadcast::{ChangeBroadcaster, SubscriptionId};
use crate::error::ThemeError;
use crate::scheme::{ColorScheme, SchemeProperty};
use crate::{read, write};
use catalog_core::Color;
use std::sync::RwLock;

pub struct SchemeStore {
    scheme: RwLock<ColorScheme>,
    broadcaster: ChangeBroadcaster,
}

impl SchemeStore {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(scheme.normalized()),
            broadcaster: ChangeBroadcaster::new(),
        }
    }

    pub fn get(&self, property: SchemeProperty) -> Color {
        read(&self.scheme).get(property)
    }

    /// Write one property and broadcast once
    pub fn set(&self, property: SchemeProperty, color: Color) {
        {
            let mut scheme = write(&self.scheme);
            scheme.set(property, color);
            tracing::debug!(
                property = property.id(),
                color = %scheme.get(property),
                "scheme property updated"
            );
        }
        self.broadcaster.publish();
    }

    /// Write a property given by name (`primary`, `on-surface`, `On background`, ...)
    pub fn set_named(&self, name: &str, color: Color) -> Result<(), ThemeError> {
        let property = name.parse::<SchemeProperty>()?;
        self.set(property, color);
        Ok(())
    }

    /// Swap in a whole scheme and broadcast once
    pub fn replace(&self, scheme: ColorScheme) {
        *write(&self.scheme) = scheme.normalized();
        tracing::debug!("scheme replaced");
        self.broadcaster.publish();
    }

    /// Copy of the current scheme
    pub fn snapshot(&self) -> ColorScheme {
        *read(&self.scheme)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.broadcaster.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.broadcaster.unsubscribe(id)
    }

    /// Number of change notifications published so far
    pub fn broadcast_count(&self) -> u64 {
        self.broadcaster.publish_count()
    }
}

impl Default for SchemeStore {
    fn default() -> Self {
        Self::new(ColorScheme::baseline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_every_set_broadcasts_once() {
        let store = SchemeStore::default();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let teal = Color::from_hex(0x018786);
        store.set(SchemeProperty::Secondary, teal);
        store.set(SchemeProperty::Secondary, teal);

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(store.broadcast_count(), 2);
        assert_eq!(store.get(SchemeProperty::Secondary), teal);
    }

    #[test]
    fn test_listener_can_read_store_during_broadcast() {
        let store = Arc::new(SchemeStore::default());
        let seen = Arc::new(std::sync::Mutex::new(None));
        let weak = Arc::downgrade(&store);
        let sink = seen.clone();
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                *sink.lock().unwrap() = Some(store.get(SchemeProperty::Primary));
            }
        });

        store.set(SchemeProperty::Primary, Color::BLACK);
        assert_eq!(*seen.lock().unwrap(), Some(Color::BLACK));
    }

    #[test]
    fn test_set_named_rejects_unknown_property() {
        let store = SchemeStore::default();
        let err = store.set_named("error", Color::WHITE).unwrap_err();
        assert_eq!(err, ThemeError::InvalidProperty("error".to_string()));
        assert_eq!(store.broadcast_count(), 0);

        store.set_named("on-surface", Color::WHITE).unwrap();
        assert_eq!(store.get(SchemeProperty::OnSurface), Color::WHITE);
    }

    #[test]
    fn test_replace_broadcasts_once() {
        let store = SchemeStore::default();
        store.replace(ColorScheme::dark());
        assert_eq!(store.snapshot(), ColorScheme::dark());
        assert_eq!(store.broadcast_count(), 1);
    }
}
