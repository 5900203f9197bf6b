//! Component Catalog Application
//!
//! Everything the catalog app does apart from drawing pixels: the demo tree,
//! screen navigation, the components grid, the example controllers and the
//! live theme previewer.
//!
//! # Example
//!
//! ```rust
//! use catalog_app::prelude::*;
//!
//! let tree = build_navigation_tree("Catalog", catalog_registrations());
//! let mut nav = CatalogNavigator::new(tree, ContainerScheme::default());
//!
//! nav.open("Buttons")?;
//! let rows: Vec<_> = nav.demo_rows()?.iter().map(|d| d.title().to_string()).collect();
//! assert_eq!(rows, ["Buttons", "Floating Action Button"]);
//! # Ok::<(), catalog_app::CatalogError>(())
//! ```

pub mod config;
pub mod demos;
mod error;
pub mod grid;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;
pub mod navigation;
pub mod node;
pub mod previewer;
pub mod selection;
pub mod widgets;

pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use navigation::{CatalogNavigator, NavigationBarAppearance, Screen};
pub use node::{build_navigation_tree, DemoNode, ExampleController, ExampleRegistration};
pub use previewer::{PreviewSnapshot, ThemePreviewer};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::demos::catalog_registrations;
    pub use crate::error::{CatalogError, Result};
    pub use crate::grid::{grid_metrics, CatalogCell, GridMetrics, SizeClass};
    pub use crate::navigation::{CatalogNavigator, Screen};
    pub use crate::node::{build_navigation_tree, DemoNode, ExampleController};
    pub use crate::previewer::ThemePreviewer;
    pub use crate::selection::{component_description, select_demos};

    pub use catalog_core::{Channel, Color, EdgeInsets, Size};
    pub use catalog_theme::{ColorScheme, ContainerScheme, SchemeProperty, Themeable};
}

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a widget, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
