use folio_idf::{Content, RenderOptions};
use folio_layout::{Column, Container, Document, Row};
use folio_style::NodeStyle;
use handlebars::html_escape;

/// Serializes the containers of `document` in render order.
pub fn render_body(document: &Document) -> String {
    let mut out = String::new();
    for (container, options) in document.containers().iter_with_options() {
        wrap(&mut out, options, |out| write_container(out, container));
    }
    out
}

fn write_container(out: &mut String, container: &Container) {
    out.push_str(&open_tag("div", "container", &container.style, Some(container.name())));
    out.push('\n');
    for (row, options) in container.rows().iter_with_options() {
        wrap(out, options, |out| write_row(out, row));
    }
    out.push_str("</div>\n");
}

fn write_row(out: &mut String, row: &Row) {
    out.push_str(&open_tag("div", "row", &row.style, None));
    out.push('\n');
    for (column, options) in row.columns().iter_with_options() {
        wrap(out, options, |out| write_column(out, column));
    }
    out.push_str("</div>\n");
}

fn write_column(out: &mut String, column: &Column) {
    let base = match column.size {
        Some(size) => format!("col-{size}"),
        None => "col".to_string(),
    };
    out.push_str(&open_tag("div", &base, &column.style, None));
    for (content, options) in column.content().iter_with_options() {
        wrap(out, options, |out| write_content(out, content));
    }
    out.push_str("</div>\n");
}

/// Writes one content element.
pub(crate) fn write_content(out: &mut String, content: &Content) {
    match content {
        Content::Text(text) => out.push_str(&html_escape(text)),
        Content::Markup(markup) => out.push_str(markup),
        Content::Shared(inner) => write_content(out, inner),
        Content::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attributes {
                out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
            }
            out.push('>');
            if element.is_void() {
                return;
            }
            for child in &element.children {
                write_content(out, child);
            }
            out.push_str(&format!("</{}>", element.tag));
        }
    }
}

fn wrap(out: &mut String, options: &RenderOptions, write: impl FnOnce(&mut String)) {
    if options.is_empty() {
        write(out);
        return;
    }
    out.push_str(&open_tag("div", "", &options.wrapper, None));
    write(out);
    out.push_str("</div>");
}

fn open_tag(tag: &str, base_class: &str, style: &NodeStyle, id: Option<&str>) -> String {
    let mut tag = format!("<{tag}");
    if let Some(id) = id {
        tag.push_str(&format!(r#" id="{}""#, html_escape(id)));
    }
    let classes = [base_class.to_string(), style.class_attr()]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !classes.is_empty() {
        tag.push_str(&format!(r#" class="{}""#, html_escape(&classes)));
    }
    let inline = style.style_attr();
    if !inline.is_empty() {
        tag.push_str(&format!(r#" style="{}""#, html_escape(&inline)));
    }
    tag.push('>');
    tag
}
