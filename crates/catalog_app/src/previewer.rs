//! Theme previewer
//!
//! Shows a row of sample widgets above a master/detail scheme editor. The top
//! half of the bounds holds the widgets, the bottom half is split into the
//! symbol list (left) and the editor area (right). Every widget registers an
//! applicator with the previewer's [`ThemeContext`], so editing a color in the
//! detail view repaints the whole row.

use crate::error::{CatalogError, Result};
use crate::lock;
use crate::widgets::{SampleWidget, WidgetKind};
use catalog_core::{Channel, Color, Point, Rect, RectEdge, Size};
use catalog_theme::{
    ApplicatorId, ApplicatorRegistry, ApplyReport, ColorScheme, EditorPanel, EditorView,
    IndexPath, SchemeProperty, SchemeStore, ThemeContext, ThemeError,
};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Gap between sample widgets and around the row
pub const WIDGET_SPACING: f32 = 16.0;

/// Bounds used when the host gives none
pub const DEFAULT_BOUNDS: Size = Size::new(768.0, 1024.0);

const ROOT_VIEW: &str = "root_view";

const WIDGET_ROW: [(&str, WidgetKind); 5] = [
    ("activity_indicator", WidgetKind::ActivityIndicator),
    ("flat_button", WidgetKind::FlatButton),
    ("floating_button", WidgetKind::FloatingButton),
    ("raised_button", WidgetKind::RaisedButton),
    ("card", WidgetKind::Card),
];

type WidgetHandle = Arc<Mutex<SampleWidget>>;

/// Observable previewer state
#[derive(Clone, Debug, Serialize)]
pub struct PreviewSnapshot {
    /// Root view first, then the sample widgets in layout order
    pub widgets: Vec<SampleWidget>,
    pub scheme: ColorScheme,
    pub broadcasts: u64,
    pub applicator_failures: u64,
    pub registered_applicators: usize,
    pub redraws: u64,
}

pub struct ThemePreviewer {
    context: ThemeContext,
    components_frame: Rect,
    symbols_frame: Rect,
    editor_frame: Rect,
    content_size: Size,
    root: WidgetHandle,
    widgets: Vec<(WidgetHandle, ApplicatorId)>,
    panel: EditorPanel,
    redraws: Arc<AtomicU64>,
}

impl ThemePreviewer {
    pub fn new(scheme: ColorScheme, bounds: Size) -> Self {
        let context = ThemeContext::new(scheme);
        let redraws = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&redraws);
        context.registry().set_redraw_callback(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        let bounds = bounds.non_negative().to_rect();
        let (components_frame, scheme_frame) = bounds.divided(bounds.mid_y(), RectEdge::MinY);
        let (symbols_frame, editor_frame) =
            scheme_frame.divided(scheme_frame.width() / 2.0, RectEdge::MinX);

        let mut root = SampleWidget::with_frame(ROOT_VIEW, WidgetKind::RootView, bounds);
        root.appearance.background = Color::WHITE;
        let root = Arc::new(Mutex::new(root));
        register_widget(context.registry(), &root);

        let (widgets, content_size) = layout_widgets();
        let widgets = widgets
            .into_iter()
            .map(|w| {
                let handle = Arc::new(Mutex::new(w));
                let id = register_widget(context.registry(), &handle);
                (handle, id)
            })
            .collect();

        let panel = EditorPanel::for_store(context.store());
        let previewer = Self {
            context,
            components_frame,
            symbols_frame,
            editor_frame,
            content_size,
            root,
            widgets,
            panel,
            redraws,
        };
        let report = previewer.context.apply_now();
        tracing::debug!(applied = report.applied, "theme previewer painted");
        previewer
    }

    pub fn context(&self) -> &ThemeContext {
        &self.context
    }

    pub fn store(&self) -> &Arc<SchemeStore> {
        self.context.store()
    }

    pub fn panel(&self) -> &EditorPanel {
        &self.panel
    }

    pub fn components_frame(&self) -> Rect {
        self.components_frame
    }

    pub fn symbols_frame(&self) -> Rect {
        self.symbols_frame
    }

    pub fn editor_frame(&self) -> Rect {
        self.editor_frame
    }

    /// Extent of the sample widgets inside the components area
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Mount the editor at `index` in the detail area
    pub fn select_row(&mut self, index: IndexPath) -> Result<&mut dyn EditorView> {
        Ok(self.panel.select(index)?)
    }

    pub fn select_property(&mut self, property: SchemeProperty) -> Result<&mut dyn EditorView> {
        let index = self
            .panel
            .index_of(property.title())
            .ok_or_else(|| ThemeError::InvalidProperty(property.id().to_string()))?;
        self.select_row(index)
    }

    /// Move one slider of the mounted editor; returns the edited color
    pub fn drag(&mut self, channel: Channel, value: f32) -> Result<Option<Color>> {
        let view = self
            .panel
            .mounted_mut()
            .ok_or(CatalogError::NoEditorMounted)?;
        view.slider_did_change(channel, value);
        Ok(view.color())
    }

    /// Recreate the sample widgets, replacing their applicators
    pub fn rebuild_widgets(&mut self) -> ApplyReport {
        let registry = Arc::clone(self.context.registry());
        for (_, id) in self.widgets.drain(..) {
            registry.unregister(id);
        }
        let pruned = registry.prune();

        let (widgets, content_size) = layout_widgets();
        self.content_size = content_size;
        self.widgets = widgets
            .into_iter()
            .map(|w| {
                let handle = Arc::new(Mutex::new(w));
                let id = register_widget(&registry, &handle);
                (handle, id)
            })
            .collect();
        tracing::debug!(pruned, registered = registry.len(), "previewer widgets rebuilt");
        self.context.apply_now()
    }

    /// Copy of the named widget, including the root view
    pub fn widget(&self, name: &str) -> Result<SampleWidget> {
        if name == ROOT_VIEW {
            return Ok(lock(&self.root).clone());
        }
        self.widgets
            .iter()
            .map(|(handle, _)| lock(handle))
            .find(|w| w.name == name)
            .map(|w| w.clone())
            .ok_or_else(|| CatalogError::UnknownWidget(name.to_string()))
    }

    pub fn widget_names(&self) -> Vec<String> {
        std::iter::once(ROOT_VIEW.to_string())
            .chain(self.widgets.iter().map(|(h, _)| lock(h).name.clone()))
            .collect()
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraws.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        let widgets = std::iter::once(&self.root)
            .chain(self.widgets.iter().map(|(h, _)| h))
            .map(|h| lock(h).clone())
            .collect();
        PreviewSnapshot {
            widgets,
            scheme: self.context.store().snapshot(),
            broadcasts: self.context.store().broadcast_count(),
            applicator_failures: self.context.registry().total_failures(),
            registered_applicators: self.context.registry().len(),
            redraws: self.redraw_count(),
        }
    }
}

impl Default for ThemePreviewer {
    fn default() -> Self {
        Self::new(ColorScheme::baseline(), DEFAULT_BOUNDS)
    }
}

fn register_widget(registry: &ApplicatorRegistry, widget: &WidgetHandle) -> ApplicatorId {
    let label = lock(widget).name.clone();
    registry.register(label, widget, |scheme, w: &mut SampleWidget| {
        w.apply_scheme(scheme);
        Ok(())
    })
}

/// Widgets left to right along the top, navigation bar underneath
fn layout_widgets() -> (Vec<SampleWidget>, Size) {
    let mut widgets = Vec::with_capacity(WIDGET_ROW.len() + 1);
    let mut extent = Size::ZERO;
    for (name, kind) in WIDGET_ROW {
        let origin = Point::new(extent.width + WIDGET_SPACING, WIDGET_SPACING);
        let widget = SampleWidget::new(name, kind, origin);
        extent = grow(extent, widget.frame);
        widgets.push(widget);
    }

    let origin = Point::new(WIDGET_SPACING, extent.height + WIDGET_SPACING);
    let bar = SampleWidget::new("navigation_bar", WidgetKind::NavigationBar, origin);
    extent = grow(extent, bar.frame);
    widgets.push(bar);
    (widgets, extent)
}

fn grow(extent: Size, frame: Rect) -> Size {
    Size::new(extent.width.max(frame.max_x()), extent.height.max(frame.max_y()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_split_the_bounds() {
        let previewer = ThemePreviewer::new(ColorScheme::baseline(), Size::new(800.0, 600.0));
        assert_eq!(previewer.components_frame(), Rect::new(0.0, 0.0, 800.0, 300.0));
        assert_eq!(previewer.symbols_frame(), Rect::new(0.0, 300.0, 400.0, 300.0));
        assert_eq!(previewer.editor_frame(), Rect::new(400.0, 300.0, 400.0, 300.0));
    }

    #[test]
    fn test_degenerate_bounds_collapse_to_empty_frames() {
        let previewer = ThemePreviewer::new(ColorScheme::baseline(), Size::new(-10.0, 600.0));
        assert_eq!(previewer.components_frame(), Rect::new(0.0, 0.0, 0.0, 300.0));
        assert_eq!(previewer.symbols_frame().width(), 0.0);
        assert_eq!(previewer.editor_frame().width(), 0.0);
        assert_eq!(previewer.widget("root_view").unwrap().frame.width(), 0.0);

        let previewer = ThemePreviewer::new(ColorScheme::baseline(), Size::new(f32::NAN, f32::NAN));
        assert_eq!(previewer.components_frame(), Rect::ZERO);
        assert_eq!(previewer.snapshot().registered_applicators, 7);
    }

    #[test]
    fn test_widgets_laid_out_left_to_right() {
        let previewer = ThemePreviewer::default();
        let frame = |name: &str| previewer.widget(name).unwrap().frame;
        assert_eq!(frame("activity_indicator"), Rect::new(16.0, 16.0, 36.0, 36.0));
        assert_eq!(frame("flat_button"), Rect::new(68.0, 16.0, 88.0, 36.0));
        assert_eq!(frame("floating_button"), Rect::new(172.0, 16.0, 56.0, 56.0));
        assert_eq!(frame("raised_button"), Rect::new(244.0, 16.0, 124.0, 36.0));
        assert_eq!(frame("card"), Rect::new(384.0, 16.0, 200.0, 200.0));
        assert_eq!(frame("navigation_bar"), Rect::new(16.0, 232.0, 320.0, 56.0));
        assert_eq!(previewer.content_size(), Size::new(584.0, 288.0));
    }

    #[test]
    fn test_construction_paints_once_without_broadcast() {
        let previewer = ThemePreviewer::new(ColorScheme::dark(), DEFAULT_BOUNDS);
        let snapshot = previewer.snapshot();
        assert_eq!(snapshot.broadcasts, 0);
        assert_eq!(snapshot.registered_applicators, 7);
        assert_eq!(snapshot.redraws, 1);
        assert_eq!(snapshot.widgets[0].name, "root_view");
        assert_eq!(
            snapshot.widgets[0].appearance.background,
            ColorScheme::dark().background
        );
    }

    #[test]
    fn test_drag_without_editor_fails() {
        let mut previewer = ThemePreviewer::default();
        assert!(matches!(
            previewer.drag(Channel::Red, 0.2),
            Err(CatalogError::NoEditorMounted)
        ));
    }

    #[test]
    fn test_drag_repaints_every_widget() {
        let mut previewer = ThemePreviewer::default();
        previewer.select_property(SchemeProperty::Primary).unwrap();
        let edited = previewer.drag(Channel::Red, 0.0).unwrap().unwrap();

        assert_eq!(previewer.store().get(SchemeProperty::Primary), edited);
        assert_eq!(previewer.widget("raised_button").unwrap().appearance.background, edited);
        assert_eq!(previewer.widget("flat_button").unwrap().appearance.foreground, edited);
        assert_eq!(previewer.snapshot().broadcasts, 1);
    }

    #[test]
    fn test_rebuild_keeps_registry_size() {
        let mut previewer = ThemePreviewer::default();
        let before = previewer.context().registry().len();
        for _ in 0..3 {
            let report = previewer.rebuild_widgets();
            assert!(report.is_clean());
        }
        assert_eq!(previewer.context().registry().len(), before);

        previewer.store().set(SchemeProperty::Surface, Color::BLACK);
        assert_eq!(previewer.widget("card").unwrap().appearance.background, Color::BLACK);
    }

    #[test]
    fn test_unknown_widget() {
        let previewer = ThemePreviewer::default();
        assert!(matches!(
            previewer.widget("toolbar"),
            Err(CatalogError::UnknownWidget(_))
        ));
        assert_eq!(previewer.widget_names().len(), 7);
    }
}
