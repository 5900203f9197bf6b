//! Report output model for headless runs.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_run: usize,
    pub broadcasts: u64,
    pub applicator_failures: u64,
}

/// Counters copied into every report
#[derive(Debug, Clone, Copy, Default)]
pub struct RunCounters {
    pub steps_run: usize,
    pub broadcasts: u64,
    pub applicator_failures: u64,
}

impl HeadlessReport {
    pub fn passed(counters: RunCounters) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            steps_run: counters.steps_run,
            broadcasts: counters.broadcasts,
            applicator_failures: counters.applicator_failures,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        counters: RunCounters,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            steps_run: counters.steps_run,
            broadcasts: counters.broadcasts,
            applicator_failures: counters.applicator_failures,
        }
    }

    /// Write the report to `path`, relative to the working directory
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        self.write_under(Path::new(""), path)
    }

    /// Write the report to `base/path`; `path` must stay inside `base`
    pub fn write_under(&self, base: &Path, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let target = base.join(path);
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&target, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
