use super::describe_widgets;
use crate::node::ExampleController;
use crate::widgets::{SampleWidget, WidgetKind};
use catalog_core::Point;
use catalog_theme::{ContainerScheme, FontStyle, Themeable};

/// A single card; themed through the container scheme only
pub struct CardsExample {
    card: SampleWidget,
    body_font: Option<FontStyle>,
}

impl CardsExample {
    pub fn new() -> Self {
        Self {
            card: SampleWidget::new("card", WidgetKind::Card, Point::new(16.0, 16.0)),
            body_font: None,
        }
    }

    pub fn card(&self) -> &SampleWidget {
        &self.card
    }

    pub fn body_font(&self) -> Option<&FontStyle> {
        self.body_font.as_ref()
    }
}

impl Default for CardsExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for CardsExample {
    fn set_container_scheme(&mut self, scheme: &ContainerScheme) {
        self.card.apply_scheme(&scheme.color_scheme);
        self.body_font = Some(scheme.typography_scheme.body2.clone());
    }
}

impl ExampleController for CardsExample {
    fn title(&self) -> &str {
        "Card"
    }

    fn summary(&self) -> String {
        describe_widgets(std::slice::from_ref(&self.card))
    }
}
