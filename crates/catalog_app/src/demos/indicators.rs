use super::describe_widgets;
use crate::node::ExampleController;
use crate::widgets::{SampleWidget, WidgetKind};
use catalog_core::Point;
use catalog_theme::{ColorScheme, Themeable};

pub struct ActivityIndicatorExample {
    indicator: SampleWidget,
    animating: bool,
}

impl ActivityIndicatorExample {
    pub fn new() -> Self {
        Self {
            indicator: SampleWidget::new(
                "activity_indicator",
                WidgetKind::ActivityIndicator,
                Point::new(16.0, 16.0),
            ),
            animating: true,
        }
    }

    pub fn indicator(&self) -> &SampleWidget {
        &self.indicator
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }
}

impl Default for ActivityIndicatorExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for ActivityIndicatorExample {
    fn set_color_scheme(&mut self, scheme: &ColorScheme) {
        self.indicator.apply_scheme(scheme);
    }
}

impl ExampleController for ActivityIndicatorExample {
    fn title(&self) -> &str {
        "Activity Indicator"
    }

    fn summary(&self) -> String {
        let state = if self.animating { "animating" } else { "stopped" };
        format!(
            "{} ({state})",
            describe_widgets(std::slice::from_ref(&self.indicator))
        )
    }
}

pub struct SliderExample {
    slider: SampleWidget,
    value: f32,
}

impl SliderExample {
    pub fn new() -> Self {
        Self {
            slider: SampleWidget::new("slider", WidgetKind::Slider, Point::new(16.0, 16.0)),
            value: 0.5,
        }
    }

    pub fn slider(&self) -> &SampleWidget {
        &self.slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move the thumb; values outside `[0, 1]` are clamped
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    }
}

impl Default for SliderExample {
    fn default() -> Self {
        Self::new()
    }
}

impl Themeable for SliderExample {
    fn set_color_scheme(&mut self, scheme: &ColorScheme) {
        self.slider.apply_scheme(scheme);
    }
}

impl ExampleController for SliderExample {
    fn title(&self) -> &str {
        "Slider"
    }

    fn summary(&self) -> String {
        format!(
            "{} value={:.2}",
            describe_widgets(std::slice::from_ref(&self.slider)),
            self.value
        )
    }
}
