use folio_idf::{Content, Element};
use serde::{Deserialize, Serialize};

/// A ready-made block of content, described as data.
///
/// Serialized with a `type` tag, mirroring the JSON template node format:
/// `{"type": "Alert", "text": "Heads up", "kind": "warning"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Recipe {
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Paragraph {
        text: String,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    Table {
        #[serde(default)]
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        striped: bool,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<String>,
    },
    Link {
        href: String,
        text: String,
    },
    Code {
        text: String,
    },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    Alert {
        text: String,
        #[serde(default)]
        kind: AlertKind,
    },
    Separator,
    Spacer {
        #[serde(default = "default_spacer_height")]
        height: String,
    },
    Markup {
        html: String,
    },
}

fn default_heading_level() -> u8 {
    2
}

fn default_spacer_height() -> String {
    "1rem".to_string()
}

/// Bootstrap contextual colour of an alert box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl AlertKind {
    fn as_str(self) -> &'static str {
        match self {
            AlertKind::Primary => "primary",
            AlertKind::Secondary => "secondary",
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
            AlertKind::Light => "light",
            AlertKind::Dark => "dark",
        }
    }
}

impl Recipe {
    /// The type tags understood by [`get_html`](crate::get_html).
    pub const TAGS: &'static [&'static str] = &[
        "Heading", "Paragraph", "List", "Table", "Image", "Link", "Code", "Quote", "Alert",
        "Separator", "Spacer", "Markup",
    ];

    /// Produces the content elements for this recipe.
    pub fn build(self) -> Vec<Content> {
        let content = match self {
            Recipe::Heading { text, level } => {
                let tag = format!("h{}", level.clamp(1, 6));
                Element::new(&tag).child(text).into()
            }
            Recipe::Paragraph { text } => Element::new("p").child(text).into(),
            Recipe::List { items, ordered } => {
                let tag = if ordered { "ol" } else { "ul" };
                Element::new(tag)
                    .children(items.into_iter().map(|item| Element::new("li").child(item)))
                    .into()
            }
            Recipe::Table { header, rows, striped } => build_table(header, rows, striped).into(),
            Recipe::Image { src, alt, width } => {
                let mut image = Element::new("img")
                    .attr("class", "img-fluid")
                    .attr("src", src)
                    .attr("alt", alt);
                if let Some(width) = width {
                    image = image.attr("style", format!("width: {width}"));
                }
                image.into()
            }
            Recipe::Link { href, text } => Element::new("a").attr("href", href).child(text).into(),
            Recipe::Code { text } => Element::new("pre")
                .child(Element::new("code").child(text))
                .into(),
            Recipe::Quote { text, source } => {
                let mut figure = Element::new("figure").child(
                    Element::new("blockquote")
                        .attr("class", "blockquote")
                        .child(Element::new("p").child(text)),
                );
                if let Some(source) = source {
                    figure = figure.child(
                        Element::new("figcaption")
                            .attr("class", "blockquote-footer")
                            .child(source),
                    );
                }
                figure.into()
            }
            Recipe::Alert { text, kind } => Element::new("div")
                .attr("class", format!("alert alert-{}", kind.as_str()))
                .attr("role", "alert")
                .child(text)
                .into(),
            Recipe::Separator => Element::new("hr").into(),
            Recipe::Spacer { height } => Element::new("div")
                .attr("style", format!("height: {height}"))
                .into(),
            Recipe::Markup { html } => Content::Markup(html),
        };
        vec![content]
    }
}

fn build_table(header: Vec<String>, rows: Vec<Vec<String>>, striped: bool) -> Element {
    let class = if striped { "table table-striped" } else { "table" };
    let mut table = Element::new("table").attr("class", class);
    if !header.is_empty() {
        let cells = header.into_iter().map(|h| Element::new("th").attr("scope", "col").child(h));
        table = table.child(Element::new("thead").child(Element::new("tr").children(cells)));
    }
    let body = rows
        .into_iter()
        .map(|row| Element::new("tr").children(row.into_iter().map(|cell| Element::new("td").child(cell))));
    table.child(Element::new("tbody").children(body))
}
