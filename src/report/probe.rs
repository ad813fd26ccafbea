//! Dry runs of the auto-creating lookups.
//!
//! Before a facade call creates or selects anything, the same selector is
//! resolved here against the unmodified tree, so that a bad index fails the
//! call with nothing changed.

use super::DEFAULT_CONTAINER;
use super::cursor::Cursor;
use super::options::{AddOptions, Selector};
use crate::ReportError;
use folio_layout::{Container, LayoutTree, Row, container_label, row_label};
use folio_types::{insert_index, valid_index};

pub(crate) struct Probe<'t> {
    tree: &'t LayoutTree,
    cursor: &'t Cursor,
}

/// The container a selector lands on. `None` when it would be created.
struct ContainerHit<'t> {
    node: Option<&'t Container>,
    name: String,
}

/// The row a selector lands on. `None` when it would be created.
struct RowHit<'t> {
    node: Option<&'t Row>,
    label: String,
}

impl<'t> Probe<'t> {
    pub(crate) fn new(tree: &'t LayoutTree, cursor: &'t Cursor) -> Self {
        Self { tree, cursor }
    }

    fn container(&self, name: Option<&str>) -> ContainerHit<'t> {
        match name {
            Some(name) => ContainerHit {
                node: self.tree.document().container(name),
                name: name.to_string(),
            },
            None => match self.cursor.container().and_then(|c| self.tree.container_by_id(c.id)) {
                Some(node) => ContainerHit {
                    node: Some(node),
                    name: node.name().to_string(),
                },
                None => ContainerHit {
                    node: None,
                    name: DEFAULT_CONTAINER.to_string(),
                },
            },
        }
    }

    /// Resolves the row, or a fresh one when `new_row` opens it first.
    fn row(&self, selector: Selector<'_>, new_row: bool) -> Result<RowHit<'t>, ReportError> {
        let hit = self.container(selector.container);
        let rows = hit.node.map_or(0, |c| c.rows().len());
        let context = || container_label(&hit.name);

        let (node, index) = match (selector.row, new_row) {
            (Some(i), true) => {
                insert_index(Some(i), rows, false).map_err(|e| e.in_context(context()))?;
                (None, i)
            }
            (None, true) => (None, rows),
            (Some(i), false) => {
                valid_index(Some(i), rows).map_err(|e| e.in_context(context()))?;
                (hit.node.and_then(|c| c.row(i).ok()), i)
            }
            (None, false) => {
                let current = match (hit.node, selector.container) {
                    // Naming a container re-anchors to its last row.
                    (Some(c), Some(_)) => c.rows().len().checked_sub(1),
                    (Some(c), None) => self.cursor.row().and_then(|r| c.row_position(r.id)),
                    (None, _) => None,
                };
                match current {
                    Some(i) => (hit.node.and_then(|c| c.row(i).ok()), i),
                    None => (None, rows),
                }
            }
        };
        Ok(RowHit {
            node,
            label: row_label(&hit.name, index),
        })
    }

    /// The column a selector without an explicit column index falls back to.
    fn current_col(&self, selector: Selector<'_>, row: &Row) -> Option<usize> {
        if selector.container.is_some() || selector.row.is_some() {
            row.columns().len().checked_sub(1)
        } else {
            self.cursor.col().and_then(|k| row.col_position(k.id))
        }
    }

    pub(crate) fn add_row(&self, selector: Selector<'_>, overwrite: bool) -> Result<(), ReportError> {
        let hit = self.container(selector.container);
        let rows = hit.node.map_or(0, |c| c.rows().len());
        insert_index(selector.row, rows, overwrite).map_err(|e| e.in_context(container_label(&hit.name)))?;
        Ok(())
    }

    pub(crate) fn get_row(&self, selector: Selector<'_>) -> Result<(), ReportError> {
        self.row(selector, false).map(|_| ())
    }

    /// `selector.col` is the insertion slot, `selector.row` the parent row.
    pub(crate) fn add_col(&self, selector: Selector<'_>, overwrite: bool) -> Result<(), ReportError> {
        let row = self.row(selector, false)?;
        let cols = row.node.map_or(0, |r| r.columns().len());
        insert_index(selector.col, cols, overwrite).map_err(|e| e.in_context(row.label))?;
        Ok(())
    }

    pub(crate) fn get_col(&self, selector: Selector<'_>) -> Result<(), ReportError> {
        let row = self.row(selector, false)?;
        if let Some(j) = selector.col {
            let cols = row.node.map_or(0, |r| r.columns().len());
            valid_index(Some(j), cols).map_err(|e| e.in_context(row.label))?;
        }
        Ok(())
    }

    /// Checks everything [`Report::add`](super::Report::add) will resolve.
    pub(crate) fn add(&self, options: &AddOptions) -> Result<(), ReportError> {
        let selector = options.selector();
        if options.overwrite {
            let row = self.row(selector, false)?;
            let Some(node) = row.node else {
                return Err(ReportError::not_found("No column to overwrite."));
            };
            let target = selector.col.or_else(|| self.current_col(selector, node));
            if target.is_none() {
                return Err(ReportError::not_found("No column to overwrite."));
            }
            valid_index(target, node.columns().len()).map_err(|e| e.in_context(row.label))?;
            return Ok(());
        }

        let row = self.row(selector, options.new_row)?;
        let cols = row.node.map_or(0, |r| r.columns().len());
        if let Some(j) = selector.col {
            let checked = if options.new_col {
                insert_index(Some(j), cols, false)
            } else {
                valid_index(Some(j), cols)
            };
            checked.map_err(|e| e.in_context(row.label))?;
        }
        Ok(())
    }
}
