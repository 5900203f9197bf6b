//! Components grid layout
//!
//! The root screen shows one square cell per top-level catalog node. Compact
//! devices get two columns in portrait and three in landscape; regular devices
//! get four. Cells are separated by one-point dividers and the section inset
//! equals the divider width.

use catalog_core::{Color, EdgeInsets, Point, Rect, Size};
use catalog_theme::FontStyle;
use serde::{Deserialize, Serialize};

/// Divider between cells and around the section
pub const DIVIDER_WIDTH: f32 = 1.0;

/// Horizontal size class of the device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    #[default]
    Compact,
    Regular,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape iff the viewport is wider than tall
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

pub fn column_count(size_class: SizeClass, orientation: Orientation) -> usize {
    match (size_class, orientation) {
        (SizeClass::Compact, Orientation::Portrait) => 2,
        (SizeClass::Compact, Orientation::Landscape) => 3,
        (SizeClass::Regular, _) => 4,
    }
}

/// Side of a square cell, never negative
pub fn cell_size(width: f32, columns: usize, divider: f32, safe_area: EdgeInsets) -> f32 {
    let columns = columns.max(1) as f32;
    let available = width - (columns + 1.0) * divider - (safe_area.left + safe_area.right);
    (available / columns).max(0.0)
}

/// Resolved layout of the components grid
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridMetrics {
    pub columns: usize,
    pub cell_size: f32,
    pub section_inset: f32,
    pub item_spacing: f32,
}

impl GridMetrics {
    /// Frame of the cell at `index`, in row-major order
    pub fn cell_frame(&self, index: usize, safe_area: EdgeInsets) -> Rect {
        let column = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        let stride = self.cell_size + self.item_spacing;
        Rect::new(
            safe_area.left + self.section_inset + column * stride,
            safe_area.top + self.section_inset + row * stride,
            self.cell_size,
            self.cell_size,
        )
    }
}

pub fn grid_metrics(
    viewport: Size,
    size_class: SizeClass,
    divider: f32,
    safe_area: EdgeInsets,
) -> GridMetrics {
    let columns = column_count(size_class, Orientation::from_size(viewport));
    GridMetrics {
        columns,
        cell_size: cell_size(viewport.width, columns, divider, safe_area),
        section_inset: divider,
        item_spacing: divider,
    }
}

/// One tile on the components grid
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogCell {
    title: String,
    highlighted: bool,
    selected: bool,
}

/// Frames of the cell's label and tile within its bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    pub label: Rect,
    pub tile: Rect,
}

impl CatalogCell {
    pub const PADDING: f32 = 16.0;
    pub const TILE_SIZE: f32 = 80.0;
    pub const ACCESSIBILITY_HINT: &'static str = "Opens the example";
    pub const HIGHLIGHT_BACKGROUND: Color = Color::rgb(229.0 / 255.0, 229.0 / 255.0, 234.0 / 255.0);

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            highlighted: false,
            selected: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn accessibility_identifier(&self) -> &str {
        &self.title
    }

    pub fn accessibility_hint(&self) -> &'static str {
        Self::ACCESSIBILITY_HINT
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn background(&self) -> Color {
        if self.highlighted || self.selected {
            Self::HIGHLIGHT_BACKGROUND
        } else {
            Color::WHITE
        }
    }

    /// Label pinned to the bottom, tile centered in the space above it
    pub fn layout(&self, bounds: Size, font: &FontStyle) -> CellLayout {
        let label_height = label_height(font);
        let label = Rect::new(
            Self::PADDING,
            bounds.height - label_height - Self::PADDING,
            (bounds.width - Self::PADDING * 2.0).max(0.0),
            label_height,
        );
        let tile = Rect::centered_at(
            Point::new(bounds.width / 2.0, label.y() / 2.0),
            Size::square(Self::TILE_SIZE),
        );
        CellLayout { label, tile }
    }
}

fn label_height(font: &FontStyle) -> f32 {
    (font.size * 1.2).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_theme::TypographyScheme;
    use proptest::prelude::*;

    #[test]
    fn test_column_counts() {
        assert_eq!(column_count(SizeClass::Compact, Orientation::Portrait), 2);
        assert_eq!(column_count(SizeClass::Compact, Orientation::Landscape), 3);
        assert_eq!(column_count(SizeClass::Regular, Orientation::Portrait), 4);
        assert_eq!(column_count(SizeClass::Regular, Orientation::Landscape), 4);
    }

    #[test]
    fn test_square_viewport_is_portrait() {
        assert_eq!(
            Orientation::from_size(Size::square(500.0)),
            Orientation::Portrait
        );
    }

    #[test]
    fn test_phone_portrait_metrics() {
        let metrics = grid_metrics(
            Size::new(375.0, 812.0),
            SizeClass::Compact,
            DIVIDER_WIDTH,
            EdgeInsets::ZERO,
        );
        assert_eq!(metrics.columns, 2);
        assert_eq!(metrics.cell_size, 186.0);
        assert_eq!(metrics.section_inset, 1.0);
        assert_eq!(metrics.cell_frame(3, EdgeInsets::ZERO), Rect::new(188.0, 188.0, 186.0, 186.0));
    }

    #[test]
    fn test_landscape_with_safe_area() {
        let insets = EdgeInsets::new(0.0, 44.0, 21.0, 44.0);
        let metrics = grid_metrics(Size::new(812.0, 375.0), SizeClass::Compact, 1.0, insets);
        assert_eq!(metrics.columns, 3);
        assert_eq!(metrics.cell_size, (812.0 - 4.0 - 88.0) / 3.0);
    }

    #[test]
    fn test_narrow_viewport_clamps_to_zero() {
        assert_eq!(cell_size(2.0, 4, 1.0, EdgeInsets::ZERO), 0.0);
    }

    #[test]
    fn test_cell_state_and_layout() {
        let mut cell = CatalogCell::new("Buttons");
        assert_eq!(cell.accessibility_identifier(), "Buttons");
        assert_eq!(cell.accessibility_hint(), "Opens the example");
        assert_eq!(cell.background(), Color::WHITE);
        cell.set_highlighted(true);
        assert_eq!(cell.background().to_hex_string(), "#e5e5ea");
        cell.set_highlighted(false);
        cell.set_selected(true);
        assert_eq!(cell.background(), CatalogCell::HIGHLIGHT_BACKGROUND);

        let typography = TypographyScheme::baseline();
        let layout = cell.layout(Size::square(186.0), &typography.body1);
        assert_eq!(layout.label, Rect::new(16.0, 150.0, 154.0, 20.0));
        assert_eq!(layout.tile.size(), Size::square(80.0));
        assert_eq!(layout.tile.center(), Point::new(93.0, 75.0));
    }

    proptest! {
        #[test]
        fn cells_fill_the_row(width in 100.0f32..3000.0, regular in any::<bool>()) {
            let size_class = if regular { SizeClass::Regular } else { SizeClass::Compact };
            let metrics = grid_metrics(Size::new(width, 600.0), size_class, DIVIDER_WIDTH, EdgeInsets::ZERO);
            let used = metrics.columns as f32 * metrics.cell_size
                + (metrics.columns as f32 + 1.0) * DIVIDER_WIDTH;
            prop_assert!((used - width).abs() < 0.01);
        }
    }
}
