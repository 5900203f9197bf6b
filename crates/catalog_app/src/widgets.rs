//! Sample widgets and their semantic color mapping
//!
//! A [`SampleWidget`] stands in for a toolkit view: it has a frame and a
//! painted [`Appearance`]. Each [`WidgetKind`] maps scheme roles onto its
//! background and foreground the way the Material themers do.

use catalog_core::{Color, Point, Rect, Size};
use catalog_theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    RootView,
    ActivityIndicator,
    FlatButton,
    FloatingButton,
    RaisedButton,
    Card,
    NavigationBar,
    Slider,
}

impl WidgetKind {
    pub fn id(self) -> &'static str {
        match self {
            WidgetKind::RootView => "root_view",
            WidgetKind::ActivityIndicator => "activity_indicator",
            WidgetKind::FlatButton => "flat_button",
            WidgetKind::FloatingButton => "floating_button",
            WidgetKind::RaisedButton => "raised_button",
            WidgetKind::Card => "card",
            WidgetKind::NavigationBar => "navigation_bar",
            WidgetKind::Slider => "slider",
        }
    }

    /// Size the widget takes when laid out at its natural size
    pub fn intrinsic_size(self) -> Size {
        match self {
            WidgetKind::RootView => Size::ZERO,
            WidgetKind::ActivityIndicator => Size::square(36.0),
            WidgetKind::FlatButton => Size::new(88.0, 36.0),
            WidgetKind::FloatingButton => Size::square(56.0),
            WidgetKind::RaisedButton => Size::new(124.0, 36.0),
            WidgetKind::Card => Size::square(200.0),
            WidgetKind::NavigationBar => Size::new(320.0, 56.0),
            WidgetKind::Slider => Size::new(200.0, 28.0),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Painted colors of a widget
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            foreground: Color::BLACK,
        }
    }
}

/// Which half of an [`Appearance`] to read
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Background,
    Foreground,
}

impl Appearance {
    pub fn get(&self, slot: Slot) -> Color {
        match slot {
            Slot::Background => self.background,
            Slot::Foreground => self.foreground,
        }
    }
}

/// Paint `appearance` for a widget of `kind` from `scheme`
pub fn apply_semantic_scheme(kind: WidgetKind, scheme: &ColorScheme, appearance: &mut Appearance) {
    match kind {
        WidgetKind::RootView => appearance.background = scheme.background,
        WidgetKind::ActivityIndicator | WidgetKind::FlatButton => {
            appearance.background = Color::TRANSPARENT;
            appearance.foreground = scheme.primary;
        }
        WidgetKind::FloatingButton => {
            appearance.background = scheme.secondary;
            appearance.foreground = scheme.on_secondary;
        }
        WidgetKind::RaisedButton | WidgetKind::NavigationBar => {
            appearance.background = scheme.primary;
            appearance.foreground = scheme.on_primary;
        }
        WidgetKind::Card => {
            appearance.background = scheme.surface;
            appearance.foreground = scheme.on_surface;
        }
        // Inactive track is the primary color at reduced opacity
        WidgetKind::Slider => {
            appearance.background = scheme.primary.with_alpha(0.24);
            appearance.foreground = scheme.primary;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleWidget {
    pub name: String,
    pub kind: WidgetKind,
    pub frame: Rect,
    pub appearance: Appearance,
}

impl SampleWidget {
    /// Widget at its intrinsic size with its origin at `origin`
    pub fn new(name: impl Into<String>, kind: WidgetKind, origin: Point) -> Self {
        Self::with_frame(name, kind, Rect::from_origin_size(origin, kind.intrinsic_size()))
    }

    pub fn with_frame(name: impl Into<String>, kind: WidgetKind, frame: Rect) -> Self {
        Self {
            name: name.into(),
            kind,
            frame,
            appearance: Appearance::default(),
        }
    }

    pub fn apply_scheme(&mut self, scheme: &ColorScheme) {
        apply_semantic_scheme(self.kind, scheme, &mut self.appearance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_roles() {
        let scheme = ColorScheme::baseline();
        let mut fab = SampleWidget::new("fab", WidgetKind::FloatingButton, Point::ZERO);
        fab.apply_scheme(&scheme);
        assert_eq!(fab.appearance.background, scheme.secondary);
        assert_eq!(fab.appearance.foreground, scheme.on_secondary);

        let mut flat = SampleWidget::new("flat", WidgetKind::FlatButton, Point::ZERO);
        flat.apply_scheme(&scheme);
        assert_eq!(flat.appearance.background, Color::TRANSPARENT);
        assert_eq!(flat.appearance.foreground, scheme.primary);

        let mut card = SampleWidget::new("card", WidgetKind::Card, Point::ZERO);
        card.apply_scheme(&scheme);
        assert_eq!(card.appearance.get(Slot::Background), scheme.surface);
        assert_eq!(card.appearance.get(Slot::Foreground), scheme.on_surface);
    }

    #[test]
    fn test_root_view_keeps_foreground() {
        let mut root = SampleWidget::with_frame("root", WidgetKind::RootView, Rect::ZERO);
        root.appearance.foreground = Color::WHITE;
        root.apply_scheme(&ColorScheme::dark());
        assert_eq!(root.appearance.background, ColorScheme::dark().background);
        assert_eq!(root.appearance.foreground, Color::WHITE);
    }

    #[test]
    fn test_new_uses_intrinsic_size() {
        let bar = SampleWidget::new("bar", WidgetKind::NavigationBar, Point::new(16.0, 300.0));
        assert_eq!(bar.frame, Rect::new(16.0, 300.0, 320.0, 56.0));
    }
}
