//! Intermediate Document Format (IDF)
//! The leaf payload of a report: the content elements held by columns, and the
//! per-element options recorded when an element is inserted.

use folio_style::NodeStyle;
use std::sync::Arc;

// --- Content ---

/// A renderable leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Plain text, escaped when rendered to HTML.
    Text(String),
    /// Pre-built markup, emitted verbatim.
    Markup(String),
    /// A structured HTML element.
    Element(Element),
    /// Content referenced from several places at once.
    Shared(Arc<Content>),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Content::Markup(markup.into())
    }

    pub fn shared(content: Content) -> Self {
        Content::Shared(Arc::new(content))
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Content::Shared(_))
    }

    /// Returns an independent deep copy, unwrapping shared references.
    pub fn detached(&self) -> Content {
        match self {
            Content::Shared(inner) => inner.detached(),
            Content::Element(element) => Content::Element(Element {
                tag: element.tag.clone(),
                attributes: element.attributes.clone(),
                children: element.children.iter().map(Content::detached).collect(),
            }),
            other => other.clone(),
        }
    }

    /// Visible text with block-level elements on their own lines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Content::Text(text) => out.push_str(text),
            Content::Markup(markup) => out.push_str(&strip_tags(markup)),
            Content::Shared(inner) => inner.collect_text(out),
            Content::Element(element) => {
                let block = element.is_block();
                if block && !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                if element.tag == "br" {
                    out.push('\n');
                }
                if element.tag == "li" {
                    out.push_str("- ");
                }
                for child in &element.children {
                    child.collect_text(out);
                    if element.tag == "tr" {
                        out.push(' ');
                    }
                }
                if block && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

fn strip_tags(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

// --- Elements ---

const BLOCK_TAGS: &[&str] = &[
    "div", "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "table", "thead",
    "tbody", "tr", "pre", "blockquote", "figure", "figcaption", "hr",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img", "meta", "link", "input"];

/// An HTML element with ordered attributes and child content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Content>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn is_block(&self) -> bool {
        BLOCK_TAGS.contains(&self.tag.as_str())
    }

    /// Elements such as `<img>` that have no closing tag.
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }
}

// --- Insertion inputs ---

/// One or more content elements passed to a single insertion call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Elements(Vec<Content>);

impl Elements {
    pub fn into_vec(self) -> Vec<Content> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Content> for Elements {
    fn from(content: Content) -> Self {
        Elements(vec![content])
    }
}

impl From<Element> for Elements {
    fn from(element: Element) -> Self {
        Elements(vec![Content::Element(element)])
    }
}

impl From<&str> for Elements {
    fn from(text: &str) -> Self {
        Elements(vec![Content::from(text)])
    }
}

impl From<String> for Elements {
    fn from(text: String) -> Self {
        Elements(vec![Content::Text(text)])
    }
}

impl<C: Into<Content>> From<Vec<C>> for Elements {
    fn from(items: Vec<C>) -> Self {
        Elements(items.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<Content>, const N: usize> From<[C; N]> for Elements {
    fn from(items: [C; N]) -> Self {
        Elements(items.into_iter().map(Into::into).collect())
    }
}

/// Options recorded alongside a child when it is inserted.
///
/// A non-empty style wraps the element in an extra `<div>` when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub wrapper: NodeStyle,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrapped(wrapper: NodeStyle) -> Self {
        Self { wrapper }
    }

    pub fn is_empty(&self) -> bool {
        self.wrapper.classes.is_empty() && self.wrapper.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_copy_drops_sharing() {
        let shared = Content::shared(Content::text("total"));
        let copy = shared.detached();
        assert!(!copy.is_shared());
        assert_eq!(copy, Content::text("total"));
    }

    #[test]
    fn detached_copy_recurses_into_elements() {
        let element = Element::new("p").child(Content::shared(Content::text("x")));
        let Content::Element(copy) = Content::from(element).detached() else {
            panic!("expected element");
        };
        assert_eq!(copy.children, vec![Content::text("x")]);
    }

    #[test]
    fn plain_text_separates_blocks() {
        let list = Element::new("ul")
            .child(Element::new("li").child("one"))
            .child(Element::new("li").child("two"));
        let content = Content::from(Element::new("div").child(Element::new("h2").child("Title")).child(list));
        assert_eq!(content.plain_text(), "Title\n- one\n- two");
    }

    #[test]
    fn plain_text_strips_markup() {
        assert_eq!(Content::markup("<b>bold</b> move").plain_text(), "bold move");
    }

    #[test]
    fn elements_normalize_single_and_many() {
        assert_eq!(Elements::from("a").len(), 1);
        assert_eq!(Elements::from(vec!["a", "b"]).len(), 2);
        assert_eq!(Elements::from([Content::text("a")]).into_vec(), vec![Content::text("a")]);
    }

    #[test]
    fn render_options_empty_by_default() {
        assert!(RenderOptions::new().is_empty());
        let opts = RenderOptions::wrapped(NodeStyle::new().with_classes(["lead"]));
        assert!(!opts.is_empty());
    }
}
