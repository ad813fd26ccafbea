// src/writer.rs
use crate::lines::{TextLine, document_lines, wrap};
use folio_layout::Document;
use folio_render_core::{PdfConverter, RenderError};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as PdfDocument, Object, ObjectId, Stream, dictionary};

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    /// A4 with 2cm margins.
    fn default() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 56.7,
        }
    }
}

/// Writes the text of a document onto Helvetica pages.
#[derive(Debug, Clone, Default)]
pub struct TextPdfConverter {
    pub page: PageGeometry,
}

impl TextPdfConverter {
    pub fn new(page: PageGeometry) -> Self {
        Self { page }
    }

    /// Lays the lines out top to bottom, starting a new page when the bottom
    /// margin is reached. Each placed line carries its baseline y.
    fn paginate(&self, lines: Vec<TextLine>) -> Vec<Vec<(TextLine, f32)>> {
        let top = self.page.height - self.page.margin;
        let text_width = self.page.width - 2.0 * self.page.margin;
        let mut pages = vec![Vec::new()];
        let mut y = top;
        for line in lines {
            // Helvetica averages about half an em per glyph.
            let max_chars = (text_width / (line.size * 0.5)) as usize;
            for text in wrap(&line.text, max_chars) {
                let leading = line.size * 1.3;
                if y - leading < self.page.margin {
                    pages.push(Vec::new());
                    y = top;
                }
                y -= leading;
                if let Some(page) = pages.last_mut() {
                    page.push((TextLine { text, size: line.size }, y));
                }
            }
        }
        pages
    }

    fn page_content(&self, placed: &[(TextLine, f32)]) -> Content {
        let mut operations = Vec::new();
        for (line, y) in placed.iter().filter(|(line, _)| !line.text.is_empty()) {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), line.size.into()]));
            operations.push(Operation::new("Td", vec![self.page.margin.into(), (*y).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(&line.text))]));
            operations.push(Operation::new("ET", vec![]));
        }
        Content { operations }
    }
}

impl PdfConverter for TextPdfConverter {
    fn convert(&self, _html: &str, document: &Document) -> Result<Vec<u8>, RenderError> {
        let pages = self.paginate(document_lines(document));

        let mut pdf = PdfDocument::with_version("1.7");
        let pages_id = pdf.new_object_id();
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = pdf.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
        for placed in &pages {
            let content = self.page_content(placed).encode().map_err(pdf_error)?;
            let content_id = pdf.add_object(Stream::new(Dictionary::new(), content));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), self.page.width.into(), self.page.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );
        let catalog_id = pdf.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        pdf.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes)?;
        log::debug!(
            "Wrote '{}' as {} PDF page(s), {} bytes.",
            document.name(),
            page_ids.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Maps text onto the single-byte WinAnsi range used by the base fonts.
fn win_ansi(text: &str) -> Vec<u8> {
    let mut lossy = false;
    let bytes = text
        .chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{20ac}' => 0x80,
            _ => {
                lossy = true;
                b'?'
            }
        })
        .collect();
    if lossy {
        log::warn!("Text has characters outside WinAnsi, replaced with '?': {}", text);
    }
    bytes
}

fn pdf_error(err: lopdf::Error) -> RenderError {
    RenderError::Pdf(err.to_string())
}
