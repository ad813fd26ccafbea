//! Index normalization for ordered child sequences.
//!
//! Insertion positions live in `[0, len]`, access positions in `[0, len)`.
//! Out-of-range requests are errors, never clamped.

use thiserror::Error;

/// An index argument that does not address a valid slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("index {} is out of range for {context} (length {len})", display_index(.index))]
pub struct IndexError {
    pub index: Option<usize>,
    pub len: usize,
    pub context: String,
}

impl IndexError {
    pub fn new(index: Option<usize>, len: usize) -> Self {
        Self {
            index,
            len,
            context: "sequence".to_string(),
        }
    }

    /// Replaces the collection label carried by the error.
    pub fn in_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

fn display_index(index: &Option<usize>) -> String {
    index.map_or_else(|| "<none>".to_string(), |i| i.to_string())
}

/// Resolves the slot used by an insertion into a sequence of length `len`.
///
/// Without an index, a plain insertion appends. A replacement without an index
/// targets the last existing slot, which means it fails on an empty sequence.
pub fn insert_index(index: Option<usize>, len: usize, replace: bool) -> Result<usize, IndexError> {
    match (index, replace) {
        (None, false) => Ok(len),
        (None, true) => len.checked_sub(1).ok_or_else(|| IndexError::new(None, len)),
        (Some(i), false) if i <= len => Ok(i),
        (Some(i), true) if i < len => Ok(i),
        (Some(i), _) => Err(IndexError::new(Some(i), len)),
    }
}

/// Validates an access index into a sequence of length `len`.
pub fn valid_index(index: Option<usize>, len: usize) -> Result<usize, IndexError> {
    match index {
        Some(i) if i < len => Ok(i),
        other => Err(IndexError::new(other, len)),
    }
}

/// Either a single value or a list of values, flattened with [`OneOrMany::into_vec`].
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_insert_index_appends() {
        assert_eq!(insert_index(None, 0, false), Ok(0));
        assert_eq!(insert_index(None, 3, false), Ok(3));
    }

    #[test]
    fn insert_index_allows_end_but_not_beyond() {
        assert_eq!(insert_index(Some(3), 3, false), Ok(3));
        let err = insert_index(Some(4), 3, false).unwrap_err();
        assert_eq!(err.index, Some(4));
        assert_eq!(err.len, 3);
    }

    #[test]
    fn replace_requires_existing_slot() {
        assert_eq!(insert_index(Some(2), 3, true), Ok(2));
        assert!(insert_index(Some(3), 3, true).is_err());
        assert_eq!(insert_index(None, 3, true), Ok(2));
        assert!(insert_index(None, 0, true).is_err());
    }

    #[test]
    fn valid_index_rejects_none_and_out_of_range() {
        assert_eq!(valid_index(Some(0), 1), Ok(0));
        assert!(valid_index(Some(1), 1).is_err());
        assert!(valid_index(None, 5).is_err());
    }

    #[test]
    fn error_message_names_the_collection() {
        let err = valid_index(Some(7), 2).unwrap_err().in_context("row 1");
        assert_eq!(err.to_string(), "index 7 is out of range for row 1 (length 2)");
        let err = valid_index(None, 0).unwrap_err();
        assert_eq!(err.to_string(), "index <none> is out of range for sequence (length 0)");
    }

    #[test]
    fn one_or_many_flattens() {
        assert_eq!(OneOrMany::from("a").into_vec(), vec!["a".to_string()]);
        assert_eq!(OneOrMany::from(["a", "b"]).into_vec(), vec!["a", "b"]);
        assert_eq!(OneOrMany::<u8>::from(vec![]).into_vec(), Vec::<u8>::new());
    }
}
