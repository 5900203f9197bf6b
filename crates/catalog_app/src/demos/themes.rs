use crate::node::ExampleController;
use crate::previewer::ThemePreviewer;
use catalog_theme::Themeable;

/// Hosts a [`ThemePreviewer`]; it edits its own scheme, so app theming is ignored
pub struct ThemePreviewerExample {
    previewer: ThemePreviewer,
}

impl ThemePreviewerExample {
    pub fn new() -> Self {
        Self {
            previewer: ThemePreviewer::default(),
        }
    }

    pub fn previewer(&self) -> &ThemePreviewer {
        &self.previewer
    }

    pub fn previewer_mut(&mut self) -> &mut ThemePreviewer {
        &mut self.previewer
    }
}

impl Default for ThemePreviewerExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for ThemePreviewerExample {}

impl ExampleController for ThemePreviewerExample {
    fn title(&self) -> &str {
        "Preview themes"
    }

    fn summary(&self) -> String {
        let snapshot = self.previewer.snapshot();
        format!(
            "{} widgets, {} applicators, {} broadcasts",
            snapshot.widgets.len(),
            snapshot.registered_applicators,
            snapshot.broadcasts
        )
    }
}
