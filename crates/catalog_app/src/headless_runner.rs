//! Scenario runner that drives a theme previewer without a display.

use crate::headless_assert::{
    evaluate_assert_color, evaluate_assert_count, AssertionResult, DiagnosticsSnapshot,
};
use crate::headless_report::{HeadlessReport, RunCounters};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::previewer::ThemePreviewer;
use anyhow::Result;
use catalog_theme::IndexPath;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against `previewer`.
pub fn run_scenario(input: &str, previewer: &mut ThemePreviewer) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    Ok(run_loaded_scenario(&scenario, previewer))
}

/// Execute a pre-loaded scenario against `previewer`.
///
/// Interaction errors (no editor mounted, bad row) fail the run at that step
/// the same way a failed assertion does.
pub fn run_loaded_scenario(scenario: &HeadlessScenario, previewer: &mut ThemePreviewer) -> RunOutcome {
    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, ?step, "scenario step");
        if let Some((assertion, message)) = run_step(step, previewer) {
            let counters = counters(previewer, step_index);
            let report = HeadlessReport::failed(assertion, step_index, message, counters);
            return RunOutcome::Failed { report };
        }
    }

    RunOutcome::Passed {
        report: HeadlessReport::passed(counters(previewer, scenario.steps.len())),
    }
}

/// Run one step; `Some((assertion, message))` on failure
fn run_step(step: &ScenarioStep, previewer: &mut ThemePreviewer) -> Option<(&'static str, String)> {
    let interaction = match step {
        ScenarioStep::SelectProperty { property } => previewer
            .select_property(*property)
            .map(|_| ())
            .map_err(|e| ("select_property", e.to_string())),
        ScenarioStep::SelectRow { section, row } => previewer
            .select_row(IndexPath::new(*section, *row))
            .map(|_| ())
            .map_err(|e| ("select_row", e.to_string())),
        ScenarioStep::Drag { channel, values } => values
            .iter()
            .try_for_each(|value| previewer.drag(*channel, *value).map(|_| ()))
            .map_err(|e| ("drag", e.to_string())),
        ScenarioStep::SetColor { property, color } => {
            previewer.store().set(*property, *color);
            Ok(())
        }
        ScenarioStep::Rebuild => {
            previewer.rebuild_widgets();
            Ok(())
        }
        _ => Ok(()),
    };
    if let Err(failure) = interaction {
        return Some(failure);
    }
    if !step.is_assertion() {
        return None;
    }

    let snapshot = DiagnosticsSnapshot::from(&previewer.snapshot());
    let (assertion, result) = match step {
        ScenarioStep::AssertColor {
            widget,
            slot,
            color,
        } => (
            "assert_color",
            evaluate_assert_color(widget, *slot, *color, &snapshot),
        ),
        ScenarioStep::AssertBroadcasts { count } => (
            "assert_broadcasts",
            evaluate_assert_count("broadcasts", *count, snapshot.broadcasts),
        ),
        ScenarioStep::AssertFailures { count } => (
            "assert_failures",
            evaluate_assert_count("applicator failures", *count, snapshot.applicator_failures),
        ),
        ScenarioStep::AssertRegistered { count } => (
            "assert_registered",
            evaluate_assert_count(
                "registered applicators",
                *count as u64,
                snapshot.registered_applicators as u64,
            ),
        ),
        _ => return None,
    };
    match result {
        AssertionResult::Passed => None,
        AssertionResult::Failed { message, .. } => Some((assertion, message)),
    }
}

fn counters(previewer: &ThemePreviewer, steps_run: usize) -> RunCounters {
    let store = previewer.store();
    RunCounters {
        steps_run,
        broadcasts: store.broadcast_count(),
        applicator_failures: previewer.context().registry().total_failures(),
    }
}
