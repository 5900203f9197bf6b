//! Typography scheme

use serde::{Deserialize, Serialize};

/// A single text style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub size: f32,
    pub weight: u16,
    pub letter_spacing: f32,
}

impl FontStyle {
    fn roboto(size: f32, weight: u16, letter_spacing: f32) -> Self {
        Self {
            family: "Roboto".to_string(),
            size,
            weight,
            letter_spacing,
        }
    }
}

/// Complete set of text styles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyScheme {
    pub headline1: FontStyle,
    pub headline2: FontStyle,
    pub headline3: FontStyle,
    pub headline4: FontStyle,
    pub headline5: FontStyle,
    pub headline6: FontStyle,
    pub subtitle1: FontStyle,
    pub subtitle2: FontStyle,
    pub body1: FontStyle,
    pub body2: FontStyle,
    pub button: FontStyle,
    pub caption: FontStyle,
    pub overline: FontStyle,
}

impl TypographyScheme {
    /// Material baseline type scale
    pub fn baseline() -> Self {
        Self {
            headline1: FontStyle::roboto(96.0, 300, -1.5),
            headline2: FontStyle::roboto(60.0, 300, -0.5),
            headline3: FontStyle::roboto(48.0, 400, 0.0),
            headline4: FontStyle::roboto(34.0, 400, 0.25),
            headline5: FontStyle::roboto(24.0, 400, 0.0),
            headline6: FontStyle::roboto(20.0, 500, 0.15),
            subtitle1: FontStyle::roboto(16.0, 400, 0.15),
            subtitle2: FontStyle::roboto(14.0, 500, 0.1),
            body1: FontStyle::roboto(16.0, 400, 0.5),
            body2: FontStyle::roboto(14.0, 400, 0.25),
            button: FontStyle::roboto(14.0, 500, 1.25),
            caption: FontStyle::roboto(12.0, 400, 0.4),
            overline: FontStyle::roboto(10.0, 400, 1.5),
        }
    }
}

impl Default for TypographyScheme {
    fn default() -> Self {
        Self::baseline()
    }
}
