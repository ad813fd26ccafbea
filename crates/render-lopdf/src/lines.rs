use folio_layout::Document;

/// One line of output text and the font size it is set in.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
}

impl TextLine {
    fn blank(size: f32) -> Self {
        Self {
            text: String::new(),
            size,
        }
    }
}

pub(crate) const TITLE_SIZE: f32 = 16.0;
pub(crate) const BODY_SIZE: f32 = 11.0;

/// Flattens a document into lines: the report name, then the text of every
/// content element in container, row, column order. Columns are separated by
/// a blank line.
pub fn document_lines(document: &Document) -> Vec<TextLine> {
    let mut lines = Vec::new();
    if !document.name().is_empty() {
        lines.push(TextLine {
            text: document.name().to_string(),
            size: TITLE_SIZE,
        });
        lines.push(TextLine::blank(BODY_SIZE));
    }
    for container in document.containers().iter() {
        for row in container.rows().iter() {
            for column in row.columns().iter() {
                if column.content().is_empty() {
                    continue;
                }
                for content in column.content().iter() {
                    lines.extend(content.plain_text().lines().map(|text| TextLine {
                        text: text.trim_end().to_string(),
                        size: BODY_SIZE,
                    }));
                }
                lines.push(TextLine::blank(BODY_SIZE));
            }
        }
    }
    lines
}

/// Breaks `text` on whitespace so no line exceeds `max_chars`, splitting
/// words that are longer than a whole line.
pub(crate) fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            out.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
        if needed > max_chars && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn unnamed_document_has_no_title() {
        assert!(document_lines(&Document::new("")).is_empty());
        let lines = document_lines(&Document::new("Sales"));
        assert_eq!(lines[0].text, "Sales");
        assert_eq!(lines[0].size, TITLE_SIZE);
    }
}
