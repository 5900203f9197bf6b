//! Applicator registry
//!
//! An applicator repaints one widget from the current [`ColorScheme`]. The
//! registry keeps them in registration order and runs all of them on every
//! scheme change.
//!
//! Ownership rules:
//! - the registry holds only a [`Weak`] reference to each widget; entries whose
//!   widget has been dropped are pruned on the next [`apply_all`]
//! - registering again for the same widget replaces the earlier applicator in
//!   place, so re-created views never leave stale duplicates behind
//! - a failing applicator is logged and recorded, and the remaining ones still
//!   run
//!
//! [`apply_all`]: ApplicatorRegistry::apply_all

use crate::error::ApplicatorError;
use crate::scheme::ColorScheme;
use crate::{lock, read, write};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

/// Handle for a registered applicator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ApplicatorId(u64);

/// Result of one paint attempt: `Ok(false)` means the widget is gone
type PaintFn = Arc<dyn Fn(&ColorScheme) -> Result<bool, ApplicatorError> + Send + Sync>;

/// Redraw hook into the widget toolkit
pub type RedrawCallback = Arc<dyn Fn() + Send + Sync>;

/// Liveness probe for the widget behind an entry
type AliveFn = Box<dyn Fn() -> bool + Send + Sync>;

struct Entry {
    label: String,
    /// Address of the widget allocation, used to detect re-registration.
    /// The weak references held by the entry keep the allocation from being reused.
    owner: usize,
    alive: AliveFn,
    paint: PaintFn,
}

impl Entry {
    fn alive(&self) -> bool {
        (self.alive)()
    }
}

/// One applicator that failed during [`ApplicatorRegistry::apply_all`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicatorFailure {
    pub id: ApplicatorId,
    pub label: String,
    pub error: ApplicatorError,
}

/// Outcome of a full applicator pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Applicators that painted successfully
    pub applied: usize,
    /// Entries removed because their widget was dropped
    pub pruned: usize,
    pub failures: Vec<ApplicatorFailure>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct ApplicatorRegistry {
    entries: Mutex<IndexMap<ApplicatorId, Entry>>,
    next_id: AtomicU64,
    total_failures: AtomicU64,
    redraw: RwLock<Option<RedrawCallback>>,
}

impl ApplicatorRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            next_id: AtomicU64::new(0),
            total_failures: AtomicU64::new(0),
            redraw: RwLock::new(None),
        }
    }

    /// Register `paint` for `widget`.
    ///
    /// If `widget` already has an applicator, that entry is replaced and its id
    /// and position are kept.
    pub fn register<W, F>(
        &self,
        label: impl Into<String>,
        widget: &Arc<Mutex<W>>,
        paint: F,
    ) -> ApplicatorId
    where
        W: Send + 'static,
        F: Fn(&ColorScheme, &mut W) -> Result<(), ApplicatorError> + Send + Sync + 'static,
    {
        let label = label.into();
        let owner = Arc::as_ptr(widget) as *const () as usize;
        let target: Weak<Mutex<W>> = Arc::downgrade(widget);
        let probe = target.clone();
        let alive: AliveFn = Box::new(move || probe.strong_count() > 0);
        let paint_label = label.clone();
        let paint: PaintFn = Arc::new(move |scheme: &ColorScheme| {
            let Some(widget) = target.upgrade() else {
                return Ok(false);
            };
            let mut guard = widget.lock().map_err(|_| ApplicatorError::Poisoned {
                widget: paint_label.clone(),
            })?;
            paint(scheme, &mut guard)?;
            Ok(true)
        });

        let mut entries = lock(&self.entries);
        if let Some((id, entry)) = entries.iter_mut().find(|(_, e)| e.owner == owner) {
            tracing::debug!(applicator = %label, "replacing applicator for re-registered widget");
            entry.label = label;
            entry.alive = alive;
            entry.paint = paint;
            return *id;
        }

        let id = ApplicatorId(self.next_id.fetch_add(1, Ordering::Relaxed));
        tracing::debug!(applicator = %label, "applicator registered");
        entries.insert(
            id,
            Entry {
                label,
                owner,
                alive,
                paint,
            },
        );
        id
    }

    /// Remove an applicator explicitly, e.g. on widget teardown
    pub fn unregister(&self, id: ApplicatorId) -> bool {
        lock(&self.entries).shift_remove(&id).is_some()
    }

    /// Run every applicator in registration order.
    ///
    /// Failures are logged and collected; they never stop the pass.
    pub fn apply_all(&self, scheme: &ColorScheme) -> ApplyReport {
        // Run without holding the lock so applicators may touch the registry
        let snapshot: Vec<(ApplicatorId, String, PaintFn)> = lock(&self.entries)
            .iter()
            .map(|(id, e)| (*id, e.label.clone(), Arc::clone(&e.paint)))
            .collect();

        let mut report = ApplyReport::default();
        let mut dead = Vec::new();
        for (id, label, paint) in snapshot {
            match paint(scheme) {
                Ok(true) => report.applied += 1,
                Ok(false) => dead.push(id),
                Err(error) => {
                    tracing::warn!(applicator = %label, %error, "applicator failed; continuing");
                    report.failures.push(ApplicatorFailure { id, label, error });
                }
            }
        }

        if !dead.is_empty() {
            let mut entries = lock(&self.entries);
            for id in &dead {
                if entries.shift_remove(id).is_some() {
                    report.pruned += 1;
                }
            }
            tracing::debug!(pruned = report.pruned, "pruned applicators of dropped widgets");
        }

        self.total_failures
            .fetch_add(report.failures.len() as u64, Ordering::SeqCst);

        if report.applied > 0 {
            let redraw = read(&self.redraw).clone();
            if let Some(redraw) = redraw {
                redraw();
            }
        }
        report
    }

    /// Drop entries whose widget no longer exists, without painting anything
    pub fn prune(&self) -> usize {
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|_, e| e.alive());
        before - entries.len()
    }

    /// Set the callback used to request a repaint after widgets were painted
    pub fn set_redraw_callback<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *write(&self.redraw) = Some(Arc::new(callback));
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels in registration order
    pub fn labels(&self) -> Vec<String> {
        lock(&self.entries).values().map(|e| e.label.clone()).collect()
    }

    /// Applicator failures across every pass so far
    pub fn total_failures(&self) -> u64 {
        self.total_failures.load(Ordering::SeqCst)
    }
}

impl Default for ApplicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Color;
    use std::sync::atomic::AtomicUsize;

    fn swatch() -> Arc<Mutex<Color>> {
        Arc::new(Mutex::new(Color::TRANSPARENT))
    }

    #[test]
    fn test_apply_all_runs_in_registration_order() {
        let registry = ApplicatorRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let widgets: Vec<_> = (0..4).map(|_| swatch()).collect();
        for (i, widget) in widgets.iter().enumerate() {
            let order = order.clone();
            registry.register(format!("w{i}"), widget, move |_, _| {
                order.lock().unwrap().push(i);
                Ok(())
            });
        }

        let report = registry.apply_all(&ColorScheme::baseline());
        assert_eq!(report.applied, 4);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_failure_does_not_stop_remaining_applicators() {
        let registry = ApplicatorRegistry::new();
        let (a, b, c) = (swatch(), swatch(), swatch());
        registry.register("a", &a, |s, w| {
            *w = s.primary;
            Ok(())
        });
        registry.register("b", &b, |_, _| Err(ApplicatorError::paint("b", "detached")));
        registry.register("c", &c, |s, w| {
            *w = s.secondary;
            Ok(())
        });

        let scheme = ColorScheme::baseline();
        let report = registry.apply_all(&scheme);
        assert_eq!(report.applied, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].label, "b");
        assert!(!report.is_clean());
        assert_eq!(*a.lock().unwrap(), scheme.primary);
        assert_eq!(*c.lock().unwrap(), scheme.secondary);
        assert_eq!(registry.total_failures(), 1);
    }

    #[test]
    fn test_poisoned_widget_is_reported_and_pass_continues() {
        let registry = ApplicatorRegistry::new();
        let (poisoned, healthy) = (swatch(), swatch());
        registry.register("poisoned", &poisoned, |s, w| {
            *w = s.primary;
            Ok(())
        });
        registry.register("healthy", &healthy, |s, w| {
            *w = s.surface;
            Ok(())
        });

        let handle = Arc::clone(&poisoned);
        let _ = std::thread::spawn(move || {
            let _guard = handle.lock().unwrap();
            panic!("widget panicked mid-paint");
        })
        .join();
        assert!(poisoned.is_poisoned());

        let scheme = ColorScheme::baseline();
        let report = registry.apply_all(&scheme);
        assert_eq!(report.applied, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].error,
            ApplicatorError::Poisoned {
                widget: "poisoned".to_string()
            }
        );
        assert_eq!(*healthy.lock().unwrap(), scheme.surface);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.total_failures(), 1);
    }

    #[test]
    fn test_dropped_widgets_are_pruned() {
        let registry = ApplicatorRegistry::new();
        let keep = swatch();
        registry.register("keep", &keep, |_, _| Ok(()));
        {
            let temp = swatch();
            registry.register("temp", &temp, |_, _| Ok(()));
            assert_eq!(registry.len(), 2);
        }

        let report = registry.apply_all(&ColorScheme::baseline());
        assert_eq!(report.applied, 1);
        assert_eq!(report.pruned, 1);
        assert_eq!(registry.labels(), vec!["keep".to_string()]);
    }

    #[test]
    fn test_prune_without_painting() {
        let registry = ApplicatorRegistry::new();
        let painted = Arc::new(AtomicUsize::new(0));
        let temp = swatch();
        let counter = painted.clone();
        registry.register("temp", &temp, move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        drop(temp);

        assert_eq!(registry.prune(), 1);
        assert!(registry.is_empty());
        assert_eq!(painted.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_re_registering_a_widget_replaces_in_place() {
        let registry = ApplicatorRegistry::new();
        let (first, second) = (swatch(), swatch());
        let id = registry.register("first", &first, |s, w| {
            *w = s.primary;
            Ok(())
        });
        registry.register("second", &second, |_, _| Ok(()));
        let again = registry.register("first-again", &first, |s, w| {
            *w = s.surface;
            Ok(())
        });

        assert_eq!(id, again);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.labels(),
            vec!["first-again".to_string(), "second".to_string()]
        );
        registry.apply_all(&ColorScheme::baseline());
        assert_eq!(*first.lock().unwrap(), ColorScheme::baseline().surface);
    }

    #[test]
    fn test_unregister_and_redraw_callback() {
        let registry = ApplicatorRegistry::new();
        let redraws = Arc::new(AtomicUsize::new(0));
        let counter = redraws.clone();
        registry.set_redraw_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let w = swatch();
        let id = registry.register("w", &w, |_, _| Ok(()));
        registry.apply_all(&ColorScheme::baseline());
        assert_eq!(redraws.load(Ordering::SeqCst), 1);

        assert!(registry.unregister(id));
        registry.apply_all(&ColorScheme::baseline());
        assert_eq!(redraws.load(Ordering::SeqCst), 1, "nothing painted, no redraw");
    }
}
