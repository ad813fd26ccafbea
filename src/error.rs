// src/error.rs
use folio_layout::LayoutError;
use folio_recipes::RecipeError;
use folio_render_core::RenderError;
use folio_types::IndexError;
use thiserror::Error;

/// Every failure a [`Report`](crate::Report) operation can surface.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Recipe failed: {0}")]
    Recipe(#[from] RecipeError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid report configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<IndexError> for ReportError {
    fn from(e: IndexError) -> Self {
        ReportError::Layout(LayoutError::IndexOutOfRange(e))
    }
}

impl ReportError {
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        ReportError::Layout(LayoutError::NotFound(message.into()))
    }
}
