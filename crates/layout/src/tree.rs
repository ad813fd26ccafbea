//! The Document → Container → Row → Column hierarchy.
//!
//! `LayoutTree` owns the document, hands out node ids and injects the
//! configured default styles into every node it creates. Parents are always
//! addressed explicitly here; resolving "the current container" is done by the
//! report's cursor before calling in.

use crate::LayoutError;
use crate::nodes::{Column, Container, Document, Row, row_label};
use folio_idf::RenderOptions;
use folio_style::{NodeStyle, StyleDefaults};
use folio_types::{IdGenerator, NodeId};

#[derive(Debug, Clone)]
pub struct LayoutTree {
    document: Document,
    defaults: StyleDefaults,
    ids: IdGenerator,
}

impl LayoutTree {
    pub fn new(document: Document, defaults: StyleDefaults) -> Self {
        Self {
            document,
            defaults,
            ids: IdGenerator::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    // --- Containers ---

    /// Creates a container and returns its position in render order.
    ///
    /// Overwriting an existing name replaces that container where it stands.
    pub fn add_container(
        &mut self,
        name: &str,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, LayoutError> {
        let existing = self.document.position(name);
        if existing.is_some() && !overwrite {
            return Err(LayoutError::DuplicateName(name.to_string()));
        }
        let container = Container::new(
            self.ids.next_id(),
            name,
            self.defaults.container.merged_with(style),
        );
        let index = self
            .document
            .containers_mut()
            .add_child(container, existing, existing.is_some())?;
        log::debug!("Added container '{}' at position {}.", name, index);
        Ok(index)
    }

    pub fn remove_container(&mut self, name: &str) -> Result<(Container, RenderOptions), LayoutError> {
        if self.document.containers().is_empty() {
            return Err(LayoutError::NotFound("No containers to remove.".to_string()));
        }
        let index = self.document.position(name).ok_or_else(|| missing_container(name))?;
        let removed = self.document.containers_mut().pop_child(index)?;
        log::debug!("Removed container '{}'.", name);
        Ok(removed)
    }

    pub fn container(&self, name: &str) -> Result<&Container, LayoutError> {
        self.document.container(name).ok_or_else(|| missing_container(name))
    }

    pub fn container_mut(&mut self, name: &str) -> Result<&mut Container, LayoutError> {
        let index = self.document.position(name).ok_or_else(|| missing_container(name))?;
        Ok(self.document.containers_mut().child_at_mut(index)?)
    }

    pub fn container_by_id(&self, id: NodeId) -> Option<&Container> {
        self.document.containers().iter().find(|c| c.id() == id)
    }

    /// The container rendered last, i.e. the most recently appended one.
    pub fn last_container(&self) -> Option<&Container> {
        self.document.containers().last()
    }

    // --- Rows ---

    pub fn add_row(
        &mut self,
        container: &str,
        index: Option<usize>,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, LayoutError> {
        let row = Row::new(self.ids.next_id(), self.defaults.row.merged_with(style));
        let target = self.container_mut(container)?;
        let label = target.label();
        let index = target
            .rows_mut()
            .add_child(row, index, overwrite)
            .map_err(|e| e.in_context(label))?;
        log::debug!("Added row {} to container '{}'.", index, container);
        Ok(index)
    }

    pub fn remove_row(
        &mut self,
        container: &str,
        index: usize,
    ) -> Result<(Row, RenderOptions), LayoutError> {
        let target = self.container_mut(container)?;
        let label = target.label();
        let removed = target
            .rows_mut()
            .pop_child(index)
            .map_err(|e| e.in_context(label))?;
        log::debug!("Removed row {} from container '{}'.", index, container);
        Ok(removed)
    }

    pub fn row(&self, container: &str, index: usize) -> Result<&Row, LayoutError> {
        Ok(self.container(container)?.row(index)?)
    }

    pub fn row_mut(&mut self, container: &str, index: usize) -> Result<&mut Row, LayoutError> {
        Ok(self.container_mut(container)?.row_mut(index)?)
    }

    // --- Columns ---

    pub fn add_col(
        &mut self,
        container: &str,
        row: usize,
        index: Option<usize>,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, LayoutError> {
        let column = Column::new(self.ids.next_id(), self.defaults.column.merged_with(style));
        let target = self.row_mut(container, row)?;
        let index = target
            .columns_mut()
            .add_child(column, index, overwrite)
            .map_err(|e| e.in_context(row_label(container, row)))?;
        log::debug!("Added column {} to row {} of container '{}'.", index, row, container);
        Ok(index)
    }

    pub fn remove_col(
        &mut self,
        container: &str,
        row: usize,
        index: usize,
    ) -> Result<(Column, RenderOptions), LayoutError> {
        let target = self.row_mut(container, row)?;
        let removed = target
            .columns_mut()
            .pop_child(index)
            .map_err(|e| e.in_context(row_label(container, row)))?;
        log::debug!("Removed column {} from row {} of container '{}'.", index, row, container);
        Ok(removed)
    }

    pub fn col(&self, container: &str, row: usize, index: usize) -> Result<&Column, LayoutError> {
        Ok(self
            .row(container, row)?
            .columns()
            .child_at(index)
            .map_err(|e| e.in_context(row_label(container, row)))?)
    }

    pub fn col_mut(
        &mut self,
        container: &str,
        row: usize,
        index: usize,
    ) -> Result<&mut Column, LayoutError> {
        Ok(self
            .row_mut(container, row)?
            .columns_mut()
            .child_at_mut(index)
            .map_err(|e| e.in_context(row_label(container, row)))?)
    }
}

fn missing_container(name: &str) -> LayoutError {
    LayoutError::NotFound(format!("Container '{name}' does not exist."))
}
