//! Default class and style tokens applied when nodes are created.

use crate::tokens::TokenList;
use serde::{Deserialize, Serialize};

/// The class and inline-style tokens of one node, or the defaults of one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub classes: TokenList,
    pub styles: TokenList,
}

impl NodeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes);
        self
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.extend(styles);
        self
    }

    /// Applies `self` as defaults in front of `overrides`.
    pub fn merged_with(&self, overrides: &NodeStyle) -> NodeStyle {
        NodeStyle {
            classes: merge(self.classes.as_slice(), overrides.classes.as_slice()).into(),
            styles: merge(self.styles.as_slice(), overrides.styles.as_slice()).into(),
        }
    }

    /// Value of the HTML `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Value of the HTML `style` attribute.
    pub fn style_attr(&self) -> String {
        self.styles.join("; ")
    }
}

/// Defaults-then-overrides concatenation. Both lists are kept in full.
pub fn merge(defaults: &[String], overrides: &[String]) -> Vec<String> {
    defaults.iter().chain(overrides).cloned().collect()
}

/// Per-level defaults injected into every newly created node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    pub container: NodeStyle,
    pub row: NodeStyle,
    pub column: NodeStyle,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            container: NodeStyle::default(),
            row: NodeStyle::new().with_classes(["justify-content-center pb-5 gx-5"]),
            column: NodeStyle::default(),
        }
    }
}

impl StyleDefaults {
    /// Defaults with every level empty.
    pub fn empty() -> Self {
        Self {
            container: NodeStyle::default(),
            row: NodeStyle::default(),
            column: NodeStyle::default(),
        }
    }
}
