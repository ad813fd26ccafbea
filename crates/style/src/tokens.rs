use folio_types::OneOrMany;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// An ordered list of class names or style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList(Vec<String>);

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `values`, or replaces the whole list when `overwrite` is set.
    pub fn set(&mut self, values: impl Into<OneOrMany<String>>, overwrite: bool) {
        if overwrite {
            self.0.clear();
        }
        self.0.extend(values.into().into_vec());
    }

    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(values.into_iter().map(Into::into));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Joins the non-blank tokens with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .join(separator)
    }
}

impl From<Vec<String>> for TokenList {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
