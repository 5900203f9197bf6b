//! Assertion helpers for headless runs.

use crate::previewer::PreviewSnapshot;
use crate::widgets::{Appearance, Slot};
use catalog_core::Color;
use rustc_hash::FxHashMap;

/// Tolerance for comparing colors that went through 8-bit hex text
const COLOR_EPSILON: f32 = 0.5 / 255.0;

/// Snapshot of previewer state used for headless assertions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    pub appearances: FxHashMap<String, Appearance>,
    pub broadcasts: u64,
    pub applicator_failures: u64,
    pub registered_applicators: usize,
}

impl From<&PreviewSnapshot> for DiagnosticsSnapshot {
    fn from(snapshot: &PreviewSnapshot) -> Self {
        Self {
            appearances: snapshot
                .widgets
                .iter()
                .map(|w| (w.name.clone(), w.appearance))
                .collect(),
            broadcasts: snapshot.broadcasts,
            applicator_failures: snapshot.applicator_failures,
            registered_applicators: snapshot.registered_applicators,
        }
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

pub fn evaluate_assert_color(
    widget: &str,
    slot: Slot,
    expected: Color,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(appearance) = snapshot.appearances.get(widget) else {
        return AssertionResult::failed("missing_widget", format!("{widget}: widget not found"));
    };
    let actual = appearance.get(slot);
    let close = actual
        .to_array()
        .iter()
        .zip(expected.to_array())
        .all(|(a, e)| (a - e).abs() <= COLOR_EPSILON);
    if close {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "color_mismatch",
            format!("{widget}: expected {slot:?} {expected}, got {actual}"),
        )
    }
}

pub fn evaluate_assert_count(what: &str, expected: u64, actual: u64) -> AssertionResult {
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "count_mismatch",
            format!("{what}: expected {expected}, got {actual}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(name: &str, appearance: Appearance) -> DiagnosticsSnapshot {
        let mut snapshot = DiagnosticsSnapshot::default();
        snapshot.appearances.insert(name.to_string(), appearance);
        snapshot
    }

    #[test]
    fn test_color_within_hex_precision_passes() {
        let appearance = Appearance {
            background: Color::rgb(0.201, 0.201, 0.201),
            foreground: Color::BLACK,
        };
        let snapshot = snapshot_with("card", appearance);
        let expected: Color = "#333333".parse().unwrap();
        assert_eq!(
            evaluate_assert_color("card", Slot::Background, expected, &snapshot),
            AssertionResult::Passed
        );
    }

    #[test]
    fn test_missing_widget_and_mismatch() {
        let snapshot = snapshot_with("card", Appearance::default());
        assert!(matches!(
            evaluate_assert_color("fab", Slot::Background, Color::WHITE, &snapshot),
            AssertionResult::Failed { code, .. } if code == "missing_widget"
        ));
        assert!(matches!(
            evaluate_assert_color("card", Slot::Foreground, Color::WHITE, &snapshot),
            AssertionResult::Failed { code, .. } if code == "color_mismatch"
        ));
        assert_eq!(evaluate_assert_count("broadcasts", 1, 1), AssertionResult::Passed);
    }
}
