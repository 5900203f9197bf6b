//! Semantic color scheme

use crate::error::ThemeError;
use catalog_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Semantic color keys editable in the previewer
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeProperty {
    Primary,
    PrimaryVariant,
    Secondary,
    Surface,
    Background,
    OnPrimary,
    OnSecondary,
    OnSurface,
    OnBackground,
}

impl SchemeProperty {
    /// Every property, in editor order
    pub const ALL: [SchemeProperty; 9] = [
        SchemeProperty::Primary,
        SchemeProperty::PrimaryVariant,
        SchemeProperty::Secondary,
        SchemeProperty::Surface,
        SchemeProperty::Background,
        SchemeProperty::OnPrimary,
        SchemeProperty::OnSecondary,
        SchemeProperty::OnSurface,
        SchemeProperty::OnBackground,
    ];

    /// Stable id for config and scenario files
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryVariant => "primary_variant",
            Self::Secondary => "secondary",
            Self::Surface => "surface",
            Self::Background => "background",
            Self::OnPrimary => "on_primary",
            Self::OnSecondary => "on_secondary",
            Self::OnSurface => "on_surface",
            Self::OnBackground => "on_background",
        }
    }

    /// Row title shown in the editor master list
    pub fn title(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::PrimaryVariant => "Primary variant",
            Self::Secondary => "Secondary",
            Self::Surface => "Surface",
            Self::Background => "Background",
            Self::OnPrimary => "On primary",
            Self::OnSecondary => "On secondary",
            Self::OnSurface => "On surface",
            Self::OnBackground => "On background",
        }
    }
}

impl Display for SchemeProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SchemeProperty {
    type Err = ThemeError;

    /// Accepts ids (`on_primary`), kebab case (`on-primary`) and titles (`On primary`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|p| p.id() == normalized)
            .ok_or_else(|| ThemeError::InvalidProperty(s.to_string()))
    }
}

/// One color per [`SchemeProperty`]; every key is always present
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub surface: Color,
    pub background: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_surface: Color,
    pub on_background: Color,
}

impl ColorScheme {
    /// Material baseline light scheme
    pub fn baseline() -> Self {
        Self {
            primary: Color::from_hex(0x6200EE),
            primary_variant: Color::from_hex(0x3700B3),
            secondary: Color::from_hex(0x03DAC6),
            surface: Color::WHITE,
            background: Color::WHITE,
            on_primary: Color::WHITE,
            on_secondary: Color::BLACK,
            on_surface: Color::BLACK,
            on_background: Color::BLACK,
        }
    }

    /// Material baseline dark scheme
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0xBB86FC),
            primary_variant: Color::from_hex(0x3700B3),
            secondary: Color::from_hex(0x03DAC6),
            surface: Color::from_hex(0x121212),
            background: Color::from_hex(0x121212),
            on_primary: Color::BLACK,
            on_secondary: Color::BLACK,
            on_surface: Color::WHITE,
            on_background: Color::WHITE,
        }
    }

    pub fn get(&self, property: SchemeProperty) -> Color {
        match property {
            SchemeProperty::Primary => self.primary,
            SchemeProperty::PrimaryVariant => self.primary_variant,
            SchemeProperty::Secondary => self.secondary,
            SchemeProperty::Surface => self.surface,
            SchemeProperty::Background => self.background,
            SchemeProperty::OnPrimary => self.on_primary,
            SchemeProperty::OnSecondary => self.on_secondary,
            SchemeProperty::OnSurface => self.on_surface,
            SchemeProperty::OnBackground => self.on_background,
        }
    }

    /// Store a color, clamping its channels into `[0, 1]`
    pub fn set(&mut self, property: SchemeProperty, color: Color) {
        let color = color.clamped();
        let slot = match property {
            SchemeProperty::Primary => &mut self.primary,
            SchemeProperty::PrimaryVariant => &mut self.primary_variant,
            SchemeProperty::Secondary => &mut self.secondary,
            SchemeProperty::Surface => &mut self.surface,
            SchemeProperty::Background => &mut self.background,
            SchemeProperty::OnPrimary => &mut self.on_primary,
            SchemeProperty::OnSecondary => &mut self.on_secondary,
            SchemeProperty::OnSurface => &mut self.on_surface,
            SchemeProperty::OnBackground => &mut self.on_background,
        };
        *slot = color;
    }

    /// `(property, color)` pairs in editor order
    pub fn iter(&self) -> impl Iterator<Item = (SchemeProperty, Color)> + '_ {
        SchemeProperty::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Copy with every channel clamped
    pub fn normalized(mut self) -> Self {
        for property in SchemeProperty::ALL {
            let color = self.get(property);
            self.set(property, color);
        }
        self
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Built-in scheme presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SchemePreset {
    #[default]
    Baseline,
    Dark,
}

impl SchemePreset {
    pub fn id(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Dark => "dark",
        }
    }

    pub fn all() -> &'static [SchemePreset] {
        const PRESETS: [SchemePreset; 2] = [SchemePreset::Baseline, SchemePreset::Dark];
        &PRESETS
    }

    pub fn scheme(self) -> ColorScheme {
        match self {
            Self::Baseline => ColorScheme::baseline(),
            Self::Dark => ColorScheme::dark(),
        }
    }
}

impl FromStr for SchemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}
