//! Scenario definition for headless theme-propagation runs.

use crate::widgets::Slot;
use anyhow::{Context, Result};
use catalog_core::{Channel, Color};
use catalog_theme::SchemeProperty;
use serde::Deserialize;
use std::path::Path;

/// Sequence of steps driven against a theme previewer.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Mount the editor for a scheme property
    SelectProperty { property: SchemeProperty },
    /// Mount the editor at a symbol-list row
    SelectRow { section: usize, row: usize },
    /// Move one slider of the mounted editor through each value in turn
    Drag { channel: Channel, values: Vec<f32> },
    /// Write a color straight to the store
    SetColor { property: SchemeProperty, color: Color },
    /// Recreate the sample widgets
    Rebuild,
    AssertColor {
        widget: String,
        slot: Slot,
        color: Color,
    },
    AssertBroadcasts { count: u64 },
    AssertFailures { count: u64 },
    AssertRegistered { count: usize },
}

impl ScenarioStep {
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertColor { .. }
                | ScenarioStep::AssertBroadcasts { .. }
                | ScenarioStep::AssertFailures { .. }
                | ScenarioStep::AssertRegistered { .. }
        )
    }
}
