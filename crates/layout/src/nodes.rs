//! The node types of a report: a document of named containers, each holding
//! rows of columns, with content at the leaves.
//!
//! Structural mutation (adding or removing rows and columns) goes through
//! [`LayoutTree`](crate::LayoutTree) so that ids and default styles are applied
//! consistently. Styles, column sizes and column content can be edited directly.

use crate::tree_node::TreeNode;
use folio_idf::{Content, RenderOptions};
use folio_style::NodeStyle;
use folio_types::{IndexError, NodeId};

/// The root of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    main_stylesheet: String,
    stylesheets: Vec<String>,
    containers: TreeNode<Container>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            main_stylesheet: String::new(),
            stylesheets: Vec::new(),
            containers: TreeNode::new(),
        }
    }

    pub fn with_stylesheets(mut self, main: impl Into<String>, extra: Vec<String>) -> Self {
        self.main_stylesheet = main.into();
        self.stylesheets = extra;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primary stylesheet `<link>` element, emitted first in the head.
    pub fn main_stylesheet(&self) -> &str {
        &self.main_stylesheet
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn containers(&self) -> &TreeNode<Container> {
        &self.containers
    }

    pub(crate) fn containers_mut(&mut self) -> &mut TreeNode<Container> {
        &mut self.containers
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }

    /// Position of the named container in render order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.containers.position(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn container_names(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|c| c.name.as_str())
    }
}

/// A named top-level region holding rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: NodeId,
    name: String,
    pub style: NodeStyle,
    rows: TreeNode<Row>,
}

impl Container {
    pub(crate) fn new(id: NodeId, name: &str, style: NodeStyle) -> Self {
        Self {
            id,
            name: name.to_string(),
            style,
            rows: TreeNode::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &TreeNode<Row> {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut TreeNode<Row> {
        &mut self.rows
    }

    pub fn row(&self, index: usize) -> Result<&Row, IndexError> {
        self.rows
            .child_at(index)
            .map_err(|e| e.in_context(self.label()))
    }

    pub fn row_mut(&mut self, index: usize) -> Result<&mut Row, IndexError> {
        let label = self.label();
        self.rows.child_at_mut(index).map_err(|e| e.in_context(label))
    }

    /// Index of the row with the given id, if it is a child of this container.
    pub fn row_position(&self, id: NodeId) -> Option<usize> {
        self.rows.position(|r| r.id == id)
    }

    pub(crate) fn label(&self) -> String {
        container_label(&self.name)
    }
}

/// A horizontal band of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: NodeId,
    pub style: NodeStyle,
    columns: TreeNode<Column>,
}

impl Row {
    pub(crate) fn new(id: NodeId, style: NodeStyle) -> Self {
        Self {
            id,
            style,
            columns: TreeNode::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn columns(&self) -> &TreeNode<Column> {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut TreeNode<Column> {
        &mut self.columns
    }

    pub fn col_position(&self, id: NodeId) -> Option<usize> {
        self.columns.position(|c| c.id == id)
    }
}

/// A layout cell holding content elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    id: NodeId,
    pub style: NodeStyle,
    /// Width weight out of the 12-column grid. `None` lets the column size itself.
    pub size: Option<u32>,
    content: TreeNode<Content>,
}

impl Column {
    pub(crate) fn new(id: NodeId, style: NodeStyle) -> Self {
        Self {
            id,
            style,
            size: None,
            content: TreeNode::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> &TreeNode<Content> {
        &self.content
    }

    /// Content is a leaf sequence, so callers may edit it freely.
    pub fn content_mut(&mut self) -> &mut TreeNode<Content> {
        &mut self.content
    }

    /// Appends one element with its render options.
    pub fn add_content(&mut self, content: Content, options: RenderOptions) -> usize {
        self.content.push_with(content, options)
    }
}

/// How a container is named in index errors.
pub fn container_label(name: &str) -> String {
    format!("container '{name}'")
}

/// How a row is named in index errors.
pub fn row_label(container: &str, row: usize) -> String {
    format!("row {row} of container '{container}'")
}
