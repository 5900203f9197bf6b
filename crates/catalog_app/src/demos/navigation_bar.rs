use super::describe_widgets;
use crate::node::ExampleController;
use crate::widgets::{SampleWidget, WidgetKind};
use catalog_core::Point;
use catalog_theme::{ColorScheme, FontStyle, Themeable, TypographyScheme};

pub struct NavigationBarExample {
    bar: SampleWidget,
    title: String,
    title_font: Option<FontStyle>,
}

impl NavigationBarExample {
    pub fn new() -> Self {
        Self {
            bar: SampleWidget::new("navigation_bar", WidgetKind::NavigationBar, Point::ZERO),
            title: "Navigation Bar".to_string(),
            title_font: None,
        }
    }

    pub fn bar(&self) -> &SampleWidget {
        &self.bar
    }

    pub fn bar_title(&self) -> &str {
        &self.title
    }

    pub fn title_font(&self) -> Option<&FontStyle> {
        self.title_font.as_ref()
    }
}

impl Default for NavigationBarExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for NavigationBarExample {
    fn set_color_scheme(&mut self, scheme: &ColorScheme) {
        self.bar.apply_scheme(scheme);
    }

    fn set_typography_scheme(&mut self, scheme: &TypographyScheme) {
        self.title_font = Some(scheme.headline6.clone());
    }
}

impl ExampleController for NavigationBarExample {
    fn title(&self) -> &str {
        "Navigation Bar"
    }

    fn summary(&self) -> String {
        describe_widgets(std::slice::from_ref(&self.bar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_theme::{apply_container_scheme, ContainerScheme};

    #[test]
    fn test_bar_takes_primary_and_headline6() {
        let mut example = NavigationBarExample::new();
        apply_container_scheme(&mut example, &ContainerScheme::default());
        let scheme = ColorScheme::baseline();
        assert_eq!(example.bar().appearance.background, scheme.primary);
        assert_eq!(example.bar().appearance.foreground, scheme.on_primary);
        assert_eq!(example.title_font().map(|f| f.weight), Some(500));
        assert_eq!(example.bar_title(), "Navigation Bar");
    }
}
