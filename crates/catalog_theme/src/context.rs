//! Theme context
//!
//! Bundles a [`SchemeStore`] with an [`ApplicatorRegistry`] and wires the
//! store's change broadcast to a full applicator pass. Components receive the
//! context explicitly instead of reaching for a global.

use crate::applicator::{ApplicatorRegistry, ApplyReport};
use crate::broadcast::SubscriptionId;
use crate::scheme::ColorScheme;
use crate::store::SchemeStore;
use crate::lock;
use std::sync::{Arc, Mutex};

pub struct ThemeContext {
    store: Arc<SchemeStore>,
    registry: Arc<ApplicatorRegistry>,
    last_report: Arc<Mutex<Option<ApplyReport>>>,
    link: SubscriptionId,
}

impl ThemeContext {
    pub fn new(scheme: ColorScheme) -> Self {
        let store = Arc::new(SchemeStore::new(scheme));
        let registry = Arc::new(ApplicatorRegistry::new());
        let last_report = Arc::new(Mutex::new(None));

        // The listener holds the store weakly; the store owns the listener
        let weak_store = Arc::downgrade(&store);
        let listener_registry = Arc::clone(&registry);
        let listener_report = Arc::clone(&last_report);
        let link = store.subscribe(move || {
            let Some(store) = weak_store.upgrade() else {
                return;
            };
            let report = listener_registry.apply_all(&store.snapshot());
            *lock(&listener_report) = Some(report);
        });

        Self {
            store,
            registry,
            last_report,
            link,
        }
    }

    pub fn store(&self) -> &Arc<SchemeStore> {
        &self.store
    }

    pub fn registry(&self) -> &Arc<ApplicatorRegistry> {
        &self.registry
    }

    /// Paint every registered widget from the current scheme without a store write
    pub fn apply_now(&self) -> ApplyReport {
        let report = self.registry.apply_all(&self.store.snapshot());
        *lock(&self.last_report) = Some(report.clone());
        report
    }

    /// Report from the most recent applicator pass
    pub fn last_report(&self) -> Option<ApplyReport> {
        lock(&self.last_report).clone()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ColorScheme::baseline())
    }
}

impl Drop for ThemeContext {
    fn drop(&mut self) {
        self.store.unsubscribe(self.link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::SchemeProperty;
    use catalog_core::Color;

    #[test]
    fn test_store_write_repaints_registered_widgets() {
        let ctx = ThemeContext::default();
        let card = Arc::new(Mutex::new(Color::TRANSPARENT));
        ctx.registry().register("card", &card, |s, w| {
            *w = s.surface;
            Ok(())
        });

        ctx.store().set(SchemeProperty::Surface, Color::from_hex(0xFAFAFA));
        assert_eq!(*card.lock().unwrap(), Color::from_hex(0xFAFAFA));
        assert_eq!(ctx.last_report().map(|r| r.applied), Some(1));
    }

    #[test]
    fn test_apply_now_does_not_broadcast() {
        let ctx = ThemeContext::default();
        let bg = Arc::new(Mutex::new(Color::TRANSPARENT));
        ctx.registry().register("bg", &bg, |s, w| {
            *w = s.background;
            Ok(())
        });

        let report = ctx.apply_now();
        assert_eq!(report.applied, 1);
        assert_eq!(ctx.store().broadcast_count(), 0);
        assert_eq!(*bg.lock().unwrap(), Color::WHITE);
    }

    #[test]
    fn test_dropping_context_detaches_listener() {
        let ctx = ThemeContext::default();
        let store = Arc::clone(ctx.store());
        drop(ctx);
        store.set(SchemeProperty::Primary, Color::BLACK);
        assert_eq!(store.broadcast_count(), 1);
    }
}
