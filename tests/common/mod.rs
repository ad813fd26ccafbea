#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use folio::{Report, ReportError};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// The uncompressed file as text, for checking content stream operators
    pub fn raw(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Render a report to PDF and load it back
pub fn generate_pdf(report: &Report) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = report.render_pdf()?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render a report to HTML, keeping only the `<body>` part
pub fn body_html(report: &Report) -> Result<String, ReportError> {
    let html = report.render_html()?;
    let start = html.find("<body>").map_or(0, |i| i + "<body>".len());
    let end = html.rfind("</body>").unwrap_or(html.len());
    Ok(html[start..end].trim().to_string())
}

/// Text content of every column, in render order
pub fn column_texts(report: &Report) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for container in report.document().containers().iter() {
        for row in container.rows().iter() {
            for column in row.columns().iter() {
                out.push(column.content().iter().map(|c| c.plain_text()).collect());
            }
        }
    }
    out
}
