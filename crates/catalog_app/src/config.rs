//! Catalog configuration file handling (catalog.toml)

use crate::grid::{self, GridMetrics, SizeClass};
use anyhow::{Context, Result};
use catalog_core::{Color, EdgeInsets, Size};
use catalog_theme::{ColorScheme, SchemePreset, SchemeProperty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "catalog.toml";

/// Top-level catalog configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogSection {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Component Catalog".to_string()
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Simulated device the grid is laid out for
#[derive(Debug, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default)]
    pub size_class: SizeClass,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_divider")]
    pub divider_width: f32,
    #[serde(default)]
    pub safe_area: EdgeInsets,
}

fn default_width() -> f32 {
    375.0
}

fn default_height() -> f32 {
    812.0
}

fn default_divider() -> f32 {
    grid::DIVIDER_WIDTH
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            size_class: SizeClass::default(),
            width: default_width(),
            height: default_height(),
            divider_width: default_divider(),
            safe_area: EdgeInsets::ZERO,
        }
    }
}

impl DeviceConfig {
    pub fn viewport(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn grid_metrics(&self) -> GridMetrics {
        grid::grid_metrics(
            self.viewport(),
            self.size_class,
            self.divider_width,
            self.safe_area,
        )
    }
}

/// Starting color scheme: a preset plus per-property overrides
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Property id (e.g. `on_primary`) to hex color
    #[serde(default)]
    pub overrides: BTreeMap<String, Color>,
}

fn default_preset() -> String {
    SchemePreset::Baseline.id().to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            overrides: BTreeMap::new(),
        }
    }
}

impl ThemeConfig {
    pub fn color_scheme(&self) -> Result<ColorScheme> {
        let preset: SchemePreset = self
            .preset
            .parse()
            .with_context(|| format!("Invalid [theme] preset `{}`", self.preset))?;
        let mut scheme = preset.scheme();
        for (name, color) in &self.overrides {
            let property: SchemeProperty = name
                .parse()
                .with_context(|| format!("Invalid [theme.overrides] key `{name}`"))?;
            scheme.set(property, *color);
        }
        Ok(scheme)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl CatalogConfig {
    /// Load from a file or from `catalog.toml` in a directory.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        // surface bad presets and override keys at load time
        config.theme.color_scheme()?;
        Ok(config)
    }

    pub fn color_scheme(&self) -> Result<ColorScheme> {
        self.theme.color_scheme()
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
