//! Opt-in theming capability for example controllers
//!
//! Controllers implement only the setters they care about; the rest default to
//! no-ops, so the catalog can theme any controller through one entry point.

use crate::scheme::ColorScheme;
use crate::typography::TypographyScheme;
use serde::{Deserialize, Serialize};

/// Color and typography schemes applied together
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerScheme {
    pub color_scheme: ColorScheme,
    pub typography_scheme: TypographyScheme,
}

impl ContainerScheme {
    pub fn new(color_scheme: ColorScheme, typography_scheme: TypographyScheme) -> Self {
        Self {
            color_scheme,
            typography_scheme,
        }
    }
}

pub trait Themeable {
    fn set_color_scheme(&mut self, _scheme: &ColorScheme) {}

    fn set_typography_scheme(&mut self, _scheme: &TypographyScheme) {}

    fn set_container_scheme(&mut self, _scheme: &ContainerScheme) {}
}

/// Offer every part of `scheme` to `target`
pub fn apply_container_scheme<T: Themeable + ?Sized>(target: &mut T, scheme: &ContainerScheme) {
    target.set_color_scheme(&scheme.color_scheme);
    target.set_typography_scheme(&scheme.typography_scheme);
    target.set_container_scheme(scheme);
}
