use super::Report;
use crate::ReportError;
use folio_render_core::{DocumentRenderer, PdfConverter, output_filename};
use folio_render_html::HtmlRenderer;
use folio_render_lopdf::TextPdfConverter;
use std::fs;
use std::path::PathBuf;

impl Report {
    pub fn render_html(&self) -> Result<String, ReportError> {
        self.render_html_with(&HtmlRenderer::new()?)
    }

    pub fn render_html_with(&self, renderer: &dyn DocumentRenderer) -> Result<String, ReportError> {
        Ok(renderer.render(self.document())?)
    }

    /// Writes the HTML page and returns the path written.
    ///
    /// Without a filename the report name is used, with `.html` appended.
    pub fn save_html(&self, filename: Option<&str>) -> Result<PathBuf, ReportError> {
        let path = self.output_path(filename, "html");
        fs::write(&path, self.render_html()?)?;
        log::info!("Saved HTML report to {}.", path.display());
        Ok(path)
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>, ReportError> {
        self.render_pdf_with(&HtmlRenderer::new()?, &TextPdfConverter::default())
    }

    pub fn render_pdf_with(
        &self,
        renderer: &dyn DocumentRenderer,
        converter: &dyn PdfConverter,
    ) -> Result<Vec<u8>, ReportError> {
        let html = renderer.render(self.document())?;
        Ok(converter.convert(&html, self.document())?)
    }

    pub fn save_pdf(&self, filename: Option<&str>) -> Result<PathBuf, ReportError> {
        let path = self.output_path(filename, "pdf");
        fs::write(&path, self.render_pdf()?)?;
        log::info!("Saved PDF report to {}.", path.display());
        Ok(path)
    }

    fn output_path(&self, filename: Option<&str>, extension: &str) -> PathBuf {
        output_filename(filename, self.name(), &self.identity_token(), extension)
    }

    /// Stands in for the file stem of an unnamed report.
    fn identity_token(&self) -> String {
        format!("report-{:x}", self as *const Self as usize)
    }
}
