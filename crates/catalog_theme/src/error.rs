//! Theme error types

use catalog_core::ColorParseError;
use thiserror::Error;

/// Errors raised by the scheme store and editor model
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ThemeError {
    /// A property name outside the closed [`SchemeProperty`](crate::SchemeProperty) set
    #[error("unknown scheme property `{0}`")]
    InvalidProperty(String),

    #[error("unknown scheme preset `{0}`")]
    UnknownPreset(String),

    /// Row selection outside the editor master list
    #[error("no editor at section {section}, row {row}")]
    NoSuchEditor { section: usize, row: usize },

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),
}

/// Failure while an applicator paints its widget
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicatorError {
    /// The widget lock was poisoned by a panic elsewhere
    #[error("widget `{widget}` is poisoned")]
    Poisoned { widget: String },

    #[error("failed to paint `{widget}`: {reason}")]
    Paint { widget: String, reason: String },
}

impl ApplicatorError {
    pub fn paint(widget: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Paint {
            widget: widget.into(),
            reason: reason.into(),
        }
    }
}
