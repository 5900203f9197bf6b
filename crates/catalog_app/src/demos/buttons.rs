use super::describe_widgets;
use crate::node::ExampleController;
use crate::widgets::{SampleWidget, WidgetKind};
use catalog_core::Point;
use catalog_theme::{ColorScheme, FontStyle, Themeable, TypographyScheme};

/// Flat, raised and floating buttons side by side
pub struct ButtonsExample {
    widgets: Vec<SampleWidget>,
    title_font: Option<FontStyle>,
}

impl ButtonsExample {
    pub fn new() -> Self {
        Self {
            widgets: vec![
                SampleWidget::new("flat_button", WidgetKind::FlatButton, Point::new(16.0, 16.0)),
                SampleWidget::new("raised_button", WidgetKind::RaisedButton, Point::new(120.0, 16.0)),
                SampleWidget::new("floating_button", WidgetKind::FloatingButton, Point::new(260.0, 16.0)),
            ],
            title_font: None,
        }
    }

    pub fn widgets(&self) -> &[SampleWidget] {
        &self.widgets
    }

    /// Button title font, once a typography scheme has been applied
    pub fn title_font(&self) -> Option<&FontStyle> {
        self.title_font.as_ref()
    }
}

impl Default for ButtonsExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for ButtonsExample {
    fn set_color_scheme(&mut self, scheme: &ColorScheme) {
        for widget in &mut self.widgets {
            widget.apply_scheme(scheme);
        }
    }

    fn set_typography_scheme(&mut self, scheme: &TypographyScheme) {
        self.title_font = Some(scheme.button.clone());
    }
}

impl ExampleController for ButtonsExample {
    fn title(&self) -> &str {
        "Buttons"
    }

    fn summary(&self) -> String {
        describe_widgets(&self.widgets)
    }
}

pub struct FloatingButtonExample {
    button: SampleWidget,
}

impl FloatingButtonExample {
    pub fn new() -> Self {
        Self {
            button: SampleWidget::new(
                "floating_button",
                WidgetKind::FloatingButton,
                Point::new(16.0, 16.0),
            ),
        }
    }

    pub fn button(&self) -> &SampleWidget {
        &self.button
    }
}

impl Default for FloatingButtonExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for FloatingButtonExample {
    fn set_color_scheme(&mut self, scheme: &ColorScheme) {
        self.button.apply_scheme(scheme);
    }
}

impl ExampleController for FloatingButtonExample {
    fn title(&self) -> &str {
        "Floating Action Button"
    }

    fn summary(&self) -> String {
        describe_widgets(std::slice::from_ref(&self.button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_theme::{apply_container_scheme, ContainerScheme};

    #[test]
    fn test_buttons_take_color_and_typography() {
        let mut example = ButtonsExample::new();
        assert!(example.title_font().is_none());

        let container = ContainerScheme::new(ColorScheme::dark(), TypographyScheme::baseline());
        apply_container_scheme(&mut example, &container);

        let raised = &example.widgets()[1];
        assert_eq!(raised.appearance.background, ColorScheme::dark().primary);
        assert_eq!(example.title_font().map(|f| f.size), Some(14.0));
        assert!(example.summary().contains("raised_button bg=#bb86fc"));
    }

    #[test]
    fn test_floating_button_ignores_typography() {
        let mut example = FloatingButtonExample::new();
        apply_container_scheme(&mut example, &ContainerScheme::default());
        assert_eq!(
            example.button().appearance.background,
            ColorScheme::baseline().secondary
        );
    }
}
