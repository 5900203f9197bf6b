//! Built-in example controllers and their catalog registrations

mod buttons;
mod cards;
mod indicators;
mod navigation_bar;
mod themes;

pub use buttons::{ButtonsExample, FloatingButtonExample};
pub use cards::CardsExample;
pub use indicators::{ActivityIndicatorExample, SliderExample};
pub use navigation_bar::NavigationBarExample;
pub use themes::ThemePreviewerExample;

use crate::node::ExampleRegistration;
use crate::widgets::SampleWidget;

/// Every example the catalog knows about, in registration order
pub fn catalog_registrations() -> Vec<ExampleRegistration> {
    vec![
        ExampleRegistration::new(&["Activity Indicator", "Activity Indicator"], || {
            Box::new(ActivityIndicatorExample::new())
        })
        .description("Activity indicators are visual indications of an app loading content.")
        .primary_demo(),
        ExampleRegistration::new(&["Buttons", "Floating Action Button"], || {
            Box::new(FloatingButtonExample::new())
        })
        .description("A floating action button represents the primary action of a screen."),
        ExampleRegistration::new(&["Buttons", "Buttons"], || Box::new(ButtonsExample::new()))
            .description("Buttons allow users to take actions, and make choices, with a single tap.")
            .primary_demo(),
        ExampleRegistration::new(&["Cards", "Card"], || Box::new(CardsExample::new()))
            .description("Cards contain content and actions about a single subject.")
            .primary_demo(),
        ExampleRegistration::new(&["Navigation Bar", "Navigation Bar"], || {
            Box::new(NavigationBarExample::new())
        })
        .description(
            "The navigation bar shows a title between leading and trailing bar button items.",
        )
        .primary_demo(),
        ExampleRegistration::new(&["Slider", "Slider"], || Box::new(SliderExample::new()))
            .description("Sliders allow users to make selections from a range of values.")
            .primary_demo(),
        ExampleRegistration::new(&["Slider", "Slider (stress)"], || {
            Box::new(SliderExample::new())
        })
        .hidden(),
        ExampleRegistration::new(&["Themes", "Preview themes"], || {
            Box::new(ThemePreviewerExample::new())
        })
        .description("Edit the color scheme and watch the sample components repaint.")
        .debug(),
    ]
}

/// `name bg=#.. fg=#..` for each widget, joined with `; `
fn describe_widgets(widgets: &[SampleWidget]) -> String {
    widgets
        .iter()
        .map(|w| {
            format!(
                "{} bg={} fg={}",
                w.name, w.appearance.background, w.appearance.foreground
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::build_navigation_tree;

    #[test]
    fn test_registrations_build_the_catalog_tree() {
        let tree = build_navigation_tree("Catalog", catalog_registrations());
        let titles: Vec<_> = tree.children().iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Activity Indicator",
                "Buttons",
                "Cards",
                "Navigation Bar",
                "Slider",
                "Themes"
            ]
        );
        // the stress slider is not presentable
        assert_eq!(tree.child("Slider").unwrap().children().len(), 1);

        let preview = tree.find(&["Themes", "Preview themes"]).unwrap();
        assert!(preview.is_debug());
        assert!(!preview.is_primary_demo());
    }

    #[test]
    fn test_every_factory_builds_its_controller() {
        for registration in catalog_registrations() {
            let controller = (registration.factory)();
            assert!(!controller.title().is_empty());
        }
    }
}
