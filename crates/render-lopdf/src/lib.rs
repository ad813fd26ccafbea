//! PDF export using lopdf.
//!
//! This crate writes the text of a report, in document order, onto plain
//! Helvetica pages. It does not interpret the HTML; grid layout and styling
//! are dropped, which keeps it usable without a browser engine.

mod lines;
mod writer;

pub use lines::{TextLine, document_lines};
pub use writer::{PageGeometry, TextPdfConverter};
