//! HTML output for folio documents.
//!
//! The page shell (doctype, head, stylesheets) is a handlebars template; the
//! body is serialized directly from the layout tree using the Bootstrap grid
//! classes `container`, `row` and `col`/`col-N`.

mod body;

pub use body::render_body;

use folio_layout::Document;
use folio_render_core::{DocumentRenderer, RenderError};
use handlebars::Handlebars;
use serde::Serialize;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
{{#each stylesheets}}
{{{this}}}
{{/each}}
</head>
<body>
{{{body}}}
</body>
</html>
"#;

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    stylesheets: Vec<String>,
    body: String,
}

/// Renders documents into standalone HTML pages.
pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string("page", PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn render(&self, document: &Document) -> Result<String, RenderError> {
        let stylesheets = std::iter::once(document.main_stylesheet())
            .chain(document.stylesheets().iter().map(String::as_str))
            .filter(|s| !s.trim().is_empty())
            .map(stylesheet_tag)
            .collect();
        let context = PageContext {
            title: document.name(),
            stylesheets,
            body: render_body(document),
        };
        let html = self.registry.render("page", &context)?;
        log::debug!("Rendered '{}' to {} bytes of HTML.", document.name(), html.len());
        Ok(html)
    }
}

/// Stylesheet entries are either complete head markup or a bare URL.
fn stylesheet_tag(entry: &str) -> String {
    let entry = entry.trim();
    if entry.starts_with('<') {
        entry.to_string()
    } else {
        format!(
            r#"<link href="{}" rel="stylesheet">"#,
            handlebars::html_escape(entry)
        )
    }
}
