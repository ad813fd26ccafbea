//! Core rendering abstractions for report export.
//!
//! This crate provides the seams between the layout tree and output backends:
//! - `DocumentRenderer` for turning a document into HTML
//! - `PdfConverter` for turning rendered HTML (and its document) into PDF bytes
//! - Error types and filename helpers shared by the backends

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentRenderer, PdfConverter};
pub use utils::output_filename;
