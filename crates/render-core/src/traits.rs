use crate::error::RenderError;
use folio_layout::Document;

/// Serializes a document to a complete HTML page.
///
/// Implementations must emit containers, rows, columns and content in the
/// order they are stored.
pub trait DocumentRenderer {
    fn render(&self, document: &Document) -> Result<String, RenderError>;
}

/// Produces a PDF from a rendered page.
///
/// Backends receive both the HTML produced by a [`DocumentRenderer`] and the
/// document it came from, and may work from either.
pub trait PdfConverter {
    fn convert(&self, html: &str, document: &Document) -> Result<Vec<u8>, RenderError>;
}
