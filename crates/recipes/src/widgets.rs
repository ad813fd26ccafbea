//! Shortcut constructors for the most common recipes.

use crate::recipe::{AlertKind, Recipe};

pub fn h1(text: &str) -> Recipe {
    heading(text, 1)
}

pub fn h2(text: &str) -> Recipe {
    heading(text, 2)
}

pub fn h3(text: &str) -> Recipe {
    heading(text, 3)
}

pub fn heading(text: &str, level: u8) -> Recipe {
    Recipe::Heading {
        text: text.to_string(),
        level,
    }
}

pub fn p(text: &str) -> Recipe {
    Recipe::Paragraph {
        text: text.to_string(),
    }
}

pub fn bullet_list<S: ToString>(items: &[S]) -> Recipe {
    Recipe::List {
        items: items.iter().map(ToString::to_string).collect(),
        ordered: false,
    }
}

pub fn numbered_list<S: ToString>(items: &[S]) -> Recipe {
    Recipe::List {
        items: items.iter().map(ToString::to_string).collect(),
        ordered: true,
    }
}

/// A table with a header row; every cell is stringified.
pub fn table<S: ToString>(header: &[&str], rows: &[Vec<S>]) -> Recipe {
    Recipe::Table {
        header: header.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect(),
        striped: false,
    }
}

pub fn alert(text: &str, kind: AlertKind) -> Recipe {
    Recipe::Alert {
        text: text.to_string(),
        kind,
    }
}

pub fn image(src: &str, alt: &str) -> Recipe {
    Recipe::Image {
        src: src.to_string(),
        alt: alt.to_string(),
        width: None,
    }
}

pub fn separator() -> Recipe {
    Recipe::Separator
}
