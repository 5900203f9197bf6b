//! Scheme symbol editors
//!
//! The editor master list has one row per editable symbol. Selecting a row
//! mounts a fresh editor view; only one view is mounted at a time. A color
//! editor view is a group of four sliders, and every slider step writes the
//! recomputed color back through the editor's change callback.

use crate::error::ThemeError;
use crate::scheme::SchemeProperty;
use crate::store::SchemeStore;
use catalog_core::{Channel, Color};
use std::sync::Arc;

/// Callback fired with the new color on every slider step
pub type ChangeCallback = Arc<dyn Fn(Color) + Send + Sync>;

/// Accessor for an editor's starting value
pub type ValueAccessor = Arc<dyn Fn() -> Color + Send + Sync>;

/// Continuous slider over `[minimum, maximum]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    value: f32,
    minimum: f32,
    maximum: f32,
}

impl Slider {
    pub fn new(value: f32) -> Self {
        let mut slider = Self {
            value: 0.0,
            minimum: 0.0,
            maximum: 1.0,
        };
        slider.set_value(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamp into range; non-finite input snaps to the minimum
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_finite() {
            value.clamp(self.minimum, self.maximum)
        } else {
            self.minimum
        };
    }
}

/// A mounted editor view
pub trait EditorView: Send {
    fn title(&self) -> &str;

    /// Current color for color editors
    fn color(&self) -> Option<Color> {
        None
    }

    /// Feed one slider step. Returns false if the view has no such slider.
    fn slider_did_change(&mut self, _channel: Channel, _value: f32) -> bool {
        false
    }
}

/// Four-channel color picker
pub struct ColorPickerView {
    title: String,
    color: Color,
    sliders: [Slider; 4],
    did_change: ChangeCallback,
}

impl ColorPickerView {
    pub fn new(title: impl Into<String>, color: Color, did_change: ChangeCallback) -> Self {
        let color = color.clamped();
        Self {
            title: title.into(),
            color,
            sliders: Channel::ALL.map(|c| Slider::new(color.channel(c))),
            did_change,
        }
    }

    pub fn slider(&self, channel: Channel) -> Slider {
        self.sliders[channel.index()]
    }
}

impl EditorView for ColorPickerView {
    fn title(&self) -> &str {
        &self.title
    }

    fn color(&self) -> Option<Color> {
        Some(self.color)
    }

    fn slider_did_change(&mut self, channel: Channel, value: f32) -> bool {
        let slider = &mut self.sliders[channel.index()];
        slider.set_value(value);
        self.color = self.color.with_channel(channel, slider.value());
        (self.did_change)(self.color);
        true
    }
}

/// A row in the editor master list
pub trait SymbolEditor: Send + Sync {
    fn title(&self) -> &str;

    fn create_editor_view(&self) -> Box<dyn EditorView>;
}

/// Editor for one color property
pub struct ColorSchemeEditor {
    title: String,
    property: SchemeProperty,
    initial_value: ValueAccessor,
    did_change: ChangeCallback,
}

impl ColorSchemeEditor {
    pub fn new(
        property: SchemeProperty,
        initial_value: ValueAccessor,
        did_change: ChangeCallback,
    ) -> Self {
        Self {
            title: property.title().to_string(),
            property,
            initial_value,
            did_change,
        }
    }

    /// Editor that reads from and writes to `store`
    pub fn for_store(property: SchemeProperty, store: &Arc<SchemeStore>) -> Self {
        let reader = Arc::clone(store);
        let writer = Arc::clone(store);
        Self::new(
            property,
            Arc::new(move || reader.get(property)),
            Arc::new(move |color| writer.set(property, color)),
        )
    }

    pub fn property(&self) -> SchemeProperty {
        self.property
    }
}

impl SymbolEditor for ColorSchemeEditor {
    fn title(&self) -> &str {
        &self.title
    }

    fn create_editor_view(&self) -> Box<dyn EditorView> {
        Box::new(ColorPickerView::new(
            self.title.clone(),
            (self.initial_value)(),
            Arc::clone(&self.did_change),
        ))
    }
}

/// Row address in the master list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Titled group of editors
pub struct SymbolSection {
    pub title: String,
    pub editors: Vec<Box<dyn SymbolEditor>>,
}

struct Mounted {
    index: IndexPath,
    view: Box<dyn EditorView>,
}

/// Master list of symbol editors plus the single mounted editor view
pub struct EditorPanel {
    sections: Vec<SymbolSection>,
    mounted: Option<Mounted>,
}

impl EditorPanel {
    pub fn new(sections: Vec<SymbolSection>) -> Self {
        Self {
            sections,
            mounted: None,
        }
    }

    /// `Color Scheme` section with one editor per property, and an empty
    /// `Typography Scheme` section
    pub fn for_store(store: &Arc<SchemeStore>) -> Self {
        let color_editors = SchemeProperty::ALL
            .into_iter()
            .map(|p| Box::new(ColorSchemeEditor::for_store(p, store)) as Box<dyn SymbolEditor>)
            .collect();
        Self::new(vec![
            SymbolSection {
                title: "Color Scheme".to_string(),
                editors: color_editors,
            },
            SymbolSection {
                title: "Typography Scheme".to_string(),
                editors: Vec::new(),
            },
        ])
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.editors.len())
    }

    pub fn section_title(&self, section: usize) -> Option<&str> {
        self.sections.get(section).map(|s| s.title.as_str())
    }

    pub fn row_title(&self, index: IndexPath) -> Option<&str> {
        self.editor(index).map(|e| e.title())
    }

    fn editor(&self, index: IndexPath) -> Option<&dyn SymbolEditor> {
        self.sections
            .get(index.section)
            .and_then(|s| s.editors.get(index.row))
            .map(|e| e.as_ref())
    }

    /// Replace the mounted view with a fresh view for the row at `index`
    pub fn select(&mut self, index: IndexPath) -> Result<&mut dyn EditorView, ThemeError> {
        let editor = self.editor(index).ok_or(ThemeError::NoSuchEditor {
            section: index.section,
            row: index.row,
        })?;
        let view = editor.create_editor_view();
        tracing::debug!(editor = view.title(), "mounting editor view");
        let mounted = self.mounted.insert(Mounted { index, view });
        Ok(mounted.view.as_mut())
    }

    /// Find a row by title in any section
    pub fn index_of(&self, title: &str) -> Option<IndexPath> {
        self.sections.iter().enumerate().find_map(|(section, s)| {
            s.editors
                .iter()
                .position(|e| e.title() == title)
                .map(|row| IndexPath::new(section, row))
        })
    }

    pub fn mounted(&self) -> Option<&dyn EditorView> {
        self.mounted.as_ref().map(|m| m.view.as_ref())
    }

    pub fn mounted_mut(&mut self) -> Option<&mut dyn EditorView> {
        match self.mounted.as_mut() {
            Some(m) => Some(m.view.as_mut()),
            None => None,
        }
    }

    pub fn mounted_index(&self) -> Option<IndexPath> {
        self.mounted.as_ref().map(|m| m.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_clamps() {
        let mut slider = Slider::new(1.7);
        assert_eq!(slider.value(), 1.0);
        slider.set_value(-0.2);
        assert_eq!(slider.value(), 0.0);
        slider.set_value(f32::NAN);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_every_slider_step_writes_through() {
        let store = Arc::new(SchemeStore::default());
        let editor = ColorSchemeEditor::for_store(SchemeProperty::Primary, &store);
        let mut view = editor.create_editor_view();

        let start = store.get(SchemeProperty::Primary);
        assert_eq!(view.color(), Some(start));

        for step in [0.1, 0.2, 0.3] {
            assert!(view.slider_did_change(Channel::Red, step));
        }
        assert_eq!(store.broadcast_count(), 3);
        assert_eq!(
            store.get(SchemeProperty::Primary),
            start.with_channel(Channel::Red, 0.3)
        );
    }

    #[test]
    fn test_panel_model_shape() {
        let store = Arc::new(SchemeStore::default());
        let panel = EditorPanel::for_store(&store);
        assert_eq!(panel.number_of_sections(), 2);
        assert_eq!(panel.section_title(0), Some("Color Scheme"));
        assert_eq!(panel.number_of_rows(0), 9);
        assert_eq!(panel.section_title(1), Some("Typography Scheme"));
        assert_eq!(panel.number_of_rows(1), 0);
        assert_eq!(panel.row_title(IndexPath::new(0, 1)), Some("Primary variant"));
        assert_eq!(panel.index_of("On surface"), Some(IndexPath::new(0, 7)));
    }

    #[test]
    fn test_selecting_swaps_the_mounted_view() {
        let store = Arc::new(SchemeStore::default());
        let mut panel = EditorPanel::for_store(&store);
        assert!(panel.mounted().is_none());

        panel.select(IndexPath::new(0, 0)).unwrap();
        assert_eq!(panel.mounted().map(|v| v.title()), Some("Primary"));

        let view = panel.select(IndexPath::new(0, 2)).unwrap();
        assert_eq!(view.title(), "Secondary");
        assert_eq!(panel.mounted_index(), Some(IndexPath::new(0, 2)));

        assert_eq!(
            panel.select(IndexPath::new(1, 0)).err(),
            Some(ThemeError::NoSuchEditor { section: 1, row: 0 })
        );
        assert_eq!(panel.mounted_index(), Some(IndexPath::new(0, 2)));
    }
}
