//! The report's current position and the pass that keeps it valid.
//!
//! Nodes are tracked by id. The cached indices are re-derived from the tree on
//! every [`Cursor::repair`], so a cursor that survived a repair always points
//! at attached nodes at their true positions.

use folio_layout::{Column, Container, LayoutTree, Row};
use folio_types::NodeId;

/// A row or column the cursor points at, with its index in the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub id: NodeId,
    pub index: usize,
}

impl Mark {
    fn new(id: NodeId, index: usize) -> Self {
        Self { id, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerMark {
    pub id: NodeId,
    pub name: String,
}

impl ContainerMark {
    fn of(container: &Container) -> Self {
        Self {
            id: container.id(),
            name: container.name().to_string(),
        }
    }
}

/// How deep the current selection reaches. A row is only ever selected inside
/// a selected container, and a column inside a selected row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Empty,
    Container(ContainerMark),
    Row(ContainerMark, Mark),
    Column(ContainerMark, Mark, Mark),
}

impl Position {
    fn into_parts(self) -> (Option<ContainerMark>, Option<Mark>, Option<Mark>) {
        match self {
            Position::Empty => (None, None, None),
            Position::Container(c) => (Some(c), None, None),
            Position::Row(c, r) => (Some(c), Some(r), None),
            Position::Column(c, r, k) => (Some(c), Some(r), Some(k)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn container(&self) -> Option<&ContainerMark> {
        match &self.position {
            Position::Empty => None,
            Position::Container(c) | Position::Row(c, _) | Position::Column(c, _, _) => Some(c),
        }
    }

    pub fn container_name(&self) -> Option<&str> {
        self.container().map(|c| c.name.as_str())
    }

    pub fn row(&self) -> Option<Mark> {
        match self.position {
            Position::Row(_, r) | Position::Column(_, r, _) => Some(r),
            _ => None,
        }
    }

    pub fn col(&self) -> Option<Mark> {
        match self.position {
            Position::Column(_, _, k) => Some(k),
            _ => None,
        }
    }

    /// Selects a container and forgets the row and column below it.
    pub(crate) fn select_container(&mut self, container: &Container) {
        self.position = Position::Container(ContainerMark::of(container));
    }

    /// Selects a row of the current container and forgets the column.
    /// Ignored while no container is selected.
    pub(crate) fn select_row(&mut self, index: usize, row: &Row) {
        let (container, _, _) = std::mem::take(&mut self.position).into_parts();
        self.position = match container {
            Some(c) => Position::Row(c, Mark::new(row.id(), index)),
            None => Position::Empty,
        };
    }

    /// Selects a column of the current row. Ignored while no row is selected.
    pub(crate) fn select_col(&mut self, index: usize, column: &Column) {
        let (container, row, _) = std::mem::take(&mut self.position).into_parts();
        self.position = match (container, row) {
            (Some(c), Some(r)) => Position::Column(c, r, Mark::new(column.id(), index)),
            (Some(c), None) => Position::Container(c),
            _ => Position::Empty,
        };
    }

    pub(crate) fn clear(&mut self) {
        self.position = Position::Empty;
    }

    /// Bookkeeping after the row at `index` left the current container.
    ///
    /// The removed row is forgotten; a current row after it moves one slot left.
    pub(crate) fn row_removed(&mut self, index: usize) {
        let (container, row, col) = std::mem::take(&mut self.position).into_parts();
        self.position = match (container, row) {
            (Some(c), Some(r)) if r.index == index => Position::Container(c),
            (Some(c), Some(mut r)) => {
                if r.index > index {
                    r.index -= 1;
                }
                match col {
                    Some(k) => Position::Column(c, r, k),
                    None => Position::Row(c, r),
                }
            }
            (Some(c), None) => Position::Container(c),
            _ => Position::Empty,
        };
    }

    /// Bookkeeping after the column at `index` left the current row.
    pub(crate) fn col_removed(&mut self, index: usize) {
        self.position = match std::mem::take(&mut self.position) {
            Position::Column(c, r, k) if k.index == index => Position::Row(c, r),
            Position::Column(c, r, mut k) => {
                if k.index > index {
                    k.index -= 1;
                }
                Position::Column(c, r, k)
            }
            other => other,
        };
    }

    /// Re-anchors the cursor after a structural change.
    ///
    /// Works top down and stops at the first level with nothing to select. A
    /// level whose node is missing or detached falls back to the last node at
    /// that level; a surviving node keeps its selection and has its index
    /// re-derived. Nodes are never created here.
    pub fn repair(&mut self, tree: &LayoutTree) {
        let (container, row, col) = std::mem::take(&mut self.position).into_parts();
        let attached = container.and_then(|c| tree.container_by_id(c.id));
        self.position = match attached {
            Some(container) => descend(container, row, col),
            None => match tree.last_container() {
                Some(last) => {
                    log::info!("Set current container to '{}'.", last.name());
                    descend(last, None, None)
                }
                None => Position::Empty,
            },
        };
    }

    /// True when every selected node is attached at its cached index.
    pub fn is_consistent_with(&self, tree: &LayoutTree) -> bool {
        let Some(c) = self.container() else {
            return true;
        };
        let Some(container) = tree.container_by_id(c.id) else {
            return false;
        };
        if container.name() != c.name {
            return false;
        }
        let Some(r) = self.row() else {
            return true;
        };
        let Ok(row) = container.row(r.index) else {
            return false;
        };
        if row.id() != r.id {
            return false;
        }
        match self.col() {
            None => true,
            Some(k) => row.columns().child_at(k.index).is_ok_and(|col| col.id() == k.id),
        }
    }
}

fn descend(container: &Container, row: Option<Mark>, col: Option<Mark>) -> Position {
    let c = ContainerMark::of(container);

    let (row_index, col) = match row.and_then(|r| container.row_position(r.id)) {
        Some(index) => (index, col),
        None => match container.rows().len().checked_sub(1) {
            Some(last) => {
                log::info!("Set current row to {}.", last);
                (last, None)
            }
            None => {
                log::info!("Container '{}' is empty.", container.name());
                return Position::Container(c);
            }
        },
    };
    let Ok(row) = container.row(row_index) else {
        return Position::Container(c);
    };
    let r = Mark::new(row.id(), row_index);

    let col_index = match col.and_then(|k| row.col_position(k.id)) {
        Some(index) => index,
        None => match row.columns().len().checked_sub(1) {
            Some(last) => {
                log::info!("Set current col to {}.", last);
                last
            }
            None => {
                log::info!("Row {} is empty.", row_index);
                return Position::Row(c, r);
            }
        },
    };
    match row.columns().child_at(col_index) {
        Ok(column) => Position::Column(c, r, Mark::new(column.id(), col_index)),
        Err(_) => Position::Row(c, r),
    }
}
