use folio_types::IndexError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Container '{0}' already exists. Set overwrite to replace it.")]
    DuplicateName(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexError),
}

pub mod nodes;
pub mod tree;
pub mod tree_node;

pub use self::nodes::{Column, Container, Document, Row, container_label, row_label};
pub use self::tree::LayoutTree;
pub use self::tree_node::TreeNode;
