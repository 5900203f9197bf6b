//! Error types for the catalog application core

use catalog_theme::ThemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Selection index outside the visible list
    #[error("no item at index {index} (list has {len})")]
    NoSuchItem { index: usize, len: usize },

    /// Demo-row selection while the top screen is not a node list
    #[error("the current screen is not a demo list")]
    NotANodeList,

    /// Slider input with no editor mounted in the previewer
    #[error("no editor is mounted")]
    NoEditorMounted,

    #[error("unknown component `{0}`")]
    UnknownComponent(String),

    #[error("unknown preview widget `{0}`")]
    UnknownWidget(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
