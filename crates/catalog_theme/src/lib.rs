//! Catalog Theme System
//!
//! Live color-scheme propagation for the component catalog and its theme
//! previewer.
//!
//! # Overview
//!
//! - **Scheme store**: the current value of every [`SchemeProperty`]
//! - **Change broadcaster**: a single "scheme changed" channel, published once
//!   per store write
//! - **Applicator registry**: ordered callbacks that repaint one widget each
//!   from the current scheme
//! - **Editors**: four-channel slider groups that write into the store on every
//!   interaction step
//! - **Themeable**: opt-in capability for example controllers
//!
//! # Quick Start
//!
//! ```rust
//! use catalog_core::Color;
//! use catalog_theme::{ColorScheme, SchemeProperty, ThemeContext};
//! use std::sync::{Arc, Mutex};
//!
//! let ctx = ThemeContext::new(ColorScheme::baseline());
//!
//! let swatch = Arc::new(Mutex::new(Color::TRANSPARENT));
//! ctx.registry().register("swatch", &swatch, |scheme, fill| {
//!     *fill = scheme.primary;
//!     Ok(())
//! });
//!
//! ctx.store().set(SchemeProperty::Primary, Color::from_hex(0xFF5500));
//! assert_eq!(*swatch.lock().unwrap(), Color::from_hex(0xFF5500));
//! ```
//!
//! # Design
//!
//! State is passed explicitly through [`ThemeContext`] rather than living in a
//! process-wide singleton. Applicators hold weak references to their widgets and
//! are pruned once the widget is gone; a failing applicator is logged and the
//! broadcast continues with the rest.

pub mod applicator;
pub mod broadcast;
pub mod context;
pub mod editor;
pub mod error;
pub mod scheme;
pub mod store;
pub mod themeable;
pub mod typography;

pub use applicator::{ApplicatorFailure, ApplicatorId, ApplicatorRegistry, ApplyReport};
pub use broadcast::{ChangeBroadcaster, SubscriptionId};
pub use context::ThemeContext;
pub use editor::{
    ColorPickerView, ColorSchemeEditor, EditorPanel, EditorView, IndexPath, Slider, SymbolEditor,
    SymbolSection,
};
pub use error::{ApplicatorError, ThemeError};
pub use scheme::{ColorScheme, SchemePreset, SchemeProperty};
pub use store::SchemeStore;
pub use themeable::{apply_container_scheme, ContainerScheme, Themeable};
pub use typography::{FontStyle, TypographyScheme};

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
