//! The report facade.
//!
//! Every structural call follows the same order: the selector is dry-run by
//! [`probe`], the target is resolved (creating a default node where the call
//! allows it), the tree is mutated and the cursor is repaired.

pub mod cursor;
mod export;
mod options;
mod probe;

pub use cursor::{ContainerMark, Cursor, Mark, Position};
pub use options::AddOptions;

use crate::{ReportConfig, ReportError};
use folio_idf::{Content, Elements, RenderOptions};
use folio_layout::{Column, Container, Document, LayoutTree, Row, container_label, row_label};
use folio_recipes::Recipe;
use folio_style::NodeStyle;
use folio_types::{OneOrMany, valid_index};
use options::Selector;
use probe::Probe;

/// Name given to the container created when content arrives before any
/// container exists.
pub const DEFAULT_CONTAINER: &str = "default_container";

/// A report under construction: the layout tree plus the cursor into it.
#[derive(Debug, Clone)]
pub struct Report {
    tree: LayoutTree,
    cursor: Cursor,
}

impl Default for Report {
    fn default() -> Self {
        Self::with_config(ReportConfig::default())
    }
}

impl Report {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(ReportConfig::named(name))
    }

    pub fn with_config(config: ReportConfig) -> Self {
        let document = Document::new(config.name).with_stylesheets(config.main_stylesheet, config.stylesheets);
        Self {
            tree: LayoutTree::new(document, config.defaults),
            cursor: Cursor::new(),
        }
    }

    pub fn from_json_config(json: &str) -> Result<Self, ReportError> {
        Ok(Self::with_config(ReportConfig::from_json(json)?))
    }

    pub fn name(&self) -> &str {
        self.tree.document().name()
    }

    pub fn document(&self) -> &Document {
        self.tree.document()
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn current_container_name(&self) -> Option<&str> {
        self.cursor.container_name()
    }

    pub fn current_row_index(&self) -> Option<usize> {
        self.cursor.row().map(|r| r.index)
    }

    pub fn current_col_index(&self) -> Option<usize> {
        self.cursor.col().map(|k| k.index)
    }

    fn probe(&self) -> Probe<'_> {
        Probe::new(&self.tree, &self.cursor)
    }

    // --- Content ---

    /// Adds content at the column `options` resolves to.
    ///
    /// Unless `overwrite` is set, `new_row` and then `new_col` open fresh nodes
    /// at the selected positions first. With `overwrite`, the resolved column
    /// must exist and is replaced by an empty one before the content goes in.
    pub fn add(&mut self, elements: impl Into<Elements>, options: AddOptions) -> Result<(), ReportError> {
        let elements = elements.into().into_vec();
        self.probe().add(&options)?;
        let selector = options.selector();

        if options.overwrite {
            let (container, row, col) = self.resolve_col(selector)?;
            self.insert_col(&container, row, Some(col), true, &NodeStyle::new())?;
        } else {
            if options.new_row {
                self.add_row(selector.row, selector.container, false, &NodeStyle::new())?;
            }
            if options.new_col {
                self.add_col(selector.col, selector.row, selector.container, false, &NodeStyle::new())?;
            }
        }

        let (container, row, col) = self.resolve_col(selector)?;
        let column = self.tree.col_mut(&container, row, col)?;
        if options.size.is_some() {
            column.size = options.size;
        }
        let count = elements.len();
        for content in elements {
            let content = if options.copy { content.detached() } else { content };
            column.add_content(content, options.render.clone());
        }
        log::debug!(
            "Added {} element(s) to column {} of row {} in '{}'.",
            count,
            col,
            row,
            container
        );
        Ok(())
    }

    pub fn add_recipe(&mut self, recipe: Recipe, options: AddOptions) -> Result<(), ReportError> {
        self.add(recipe.build(), options)
    }

    /// Builds content with [`folio_recipes::get_html`] and adds it.
    pub fn add_special(
        &mut self,
        tag: &str,
        args: serde_json::Value,
        options: AddOptions,
    ) -> Result<(), ReportError> {
        let content: Vec<Content> = folio_recipes::get_html(tag, args)?;
        self.add(content, options)
    }

    // --- Containers ---

    /// Creates a container and makes it current. With `overwrite`, an existing
    /// container of that name is replaced where it stands.
    pub fn add_container(&mut self, name: &str, overwrite: bool, style: &NodeStyle) -> Result<usize, ReportError> {
        let index = self.tree.add_container(name, overwrite, style)?;
        self.select_container(name)?;
        Ok(index)
    }

    /// Removes the named container, or the current one.
    pub fn remove_container(&mut self, name: Option<&str>) -> Result<(Container, RenderOptions), ReportError> {
        if self.tree.document().containers().is_empty() {
            return Err(ReportError::not_found("No containers to remove."));
        }
        let name = match name {
            Some(name) => name.to_string(),
            None => self
                .cursor
                .container_name()
                .map(str::to_string)
                .ok_or_else(|| ReportError::not_found("No container to remove."))?,
        };
        let removed = self.tree.remove_container(&name)?;
        if self.cursor.container_name() == Some(name.as_str()) {
            self.cursor.clear();
        }
        self.cursor.repair(&self.tree);
        Ok(removed)
    }

    /// Returns the named container, creating it when missing.
    pub fn get_container(&mut self, name: &str) -> Result<&Container, ReportError> {
        if !self.tree.document().contains(name) {
            self.add_container(name, false, &NodeStyle::new())?;
        }
        Ok(self.tree.container(name)?)
    }

    /// Returns the current container, creating `default_container` when none is set.
    pub fn get_current_container(&mut self) -> Result<&Container, ReportError> {
        let name = self.current_container_or_default()?;
        Ok(self.tree.container(&name)?)
    }

    pub fn set_current_container(&mut self, name: &str) -> Result<(), ReportError> {
        self.select_container(name)
    }

    // --- Rows ---

    /// Inserts a row (at the end by default) and makes it current.
    pub fn add_row(
        &mut self,
        index: Option<usize>,
        container: Option<&str>,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, ReportError> {
        self.probe().add_row(Selector { container, row: index, col: None }, overwrite)?;
        let container = self.resolve_container(container)?;
        self.insert_row(&container, index, overwrite, style)
    }

    /// Removes a row, by default the current one, and repairs the cursor.
    pub fn remove_row(
        &mut self,
        index: Option<usize>,
        container: Option<&str>,
    ) -> Result<(Row, RenderOptions), ReportError> {
        let name = self.existing_container(container, "No row to remove.")?;
        let index = {
            let target = self.tree.container(&name)?;
            let current = match container {
                Some(_) => target.rows().len().checked_sub(1),
                None => self.current_row_index(),
            };
            let index = index
                .or(current)
                .ok_or_else(|| ReportError::not_found("No row to remove."))?;
            valid_index(Some(index), target.rows().len()).map_err(|e| e.in_context(container_label(&name)))?
        };

        if container.is_some() {
            self.select_container(&name)?;
        }
        let removed = self.tree.remove_row(&name, index)?;
        self.cursor.row_removed(index);
        self.cursor.repair(&self.tree);
        Ok(removed)
    }

    /// Returns a row of the given or current container. A named container
    /// that does not exist yet is created and becomes current.
    pub fn get_row(&mut self, index: usize, container: Option<&str>) -> Result<&Row, ReportError> {
        self.probe().get_row(Selector { container, row: Some(index), col: None })?;
        let container = self.resolve_container(container)?;
        Ok(self.tree.row(&container, index)?)
    }

    pub fn get_current_row(&mut self) -> Result<&Row, ReportError> {
        let (container, row) = self.resolve_row(Selector::default())?;
        Ok(self.tree.row(&container, row)?)
    }

    pub fn set_current_row(&mut self, index: usize, container: Option<&str>) -> Result<(), ReportError> {
        let name = self.existing_container(container, "No container selected.")?;
        self.tree.row(&name, index)?;
        self.select_row(&name, index)
    }

    // --- Columns ---

    /// Inserts a column (at the end by default) into the given or current row
    /// and makes it current.
    pub fn add_col(
        &mut self,
        index: Option<usize>,
        row: Option<usize>,
        container: Option<&str>,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, ReportError> {
        self.probe().add_col(Selector { container, row, col: index }, overwrite)?;
        let (container, row) = self.resolve_row(Selector { container, row, col: None })?;
        self.insert_col(&container, row, index, overwrite, style)
    }

    /// Removes a column, by default the current one, and repairs the cursor.
    pub fn remove_col(
        &mut self,
        index: Option<usize>,
        row: Option<usize>,
        container: Option<&str>,
    ) -> Result<(Column, RenderOptions), ReportError> {
        let name = self.existing_container(container, "No column to remove.")?;
        let explicit = container.is_some() || row.is_some();
        let (row_index, index) = {
            let target = self.tree.container(&name)?;
            let row_index = match (row, container) {
                (Some(r), _) => Some(r),
                (None, Some(_)) => target.rows().len().checked_sub(1),
                (None, None) => self.current_row_index(),
            }
            .ok_or_else(|| ReportError::not_found("No column to remove."))?;
            let parent = target.row(row_index)?;
            let current = if explicit {
                parent.columns().len().checked_sub(1)
            } else {
                self.current_col_index()
            };
            let index = index
                .or(current)
                .ok_or_else(|| ReportError::not_found("No column to remove."))?;
            let index = valid_index(Some(index), parent.columns().len())
                .map_err(|e| e.in_context(row_label(&name, row_index)))?;
            (row_index, index)
        };

        if explicit {
            self.select_row(&name, row_index)?;
        }
        let removed = self.tree.remove_col(&name, row_index, index)?;
        self.cursor.col_removed(index);
        self.cursor.repair(&self.tree);
        Ok(removed)
    }

    /// Returns a column of the given or current row, creating missing
    /// parents the same way [`Report::add`] does.
    pub fn get_col(
        &mut self,
        index: usize,
        row: Option<usize>,
        container: Option<&str>,
    ) -> Result<&Column, ReportError> {
        let selector = Selector { container, row, col: Some(index) };
        self.probe().get_col(selector)?;
        let (container, row) = self.resolve_row(selector)?;
        Ok(self.tree.col(&container, row, index)?)
    }

    pub fn get_current_col(&mut self) -> Result<&Column, ReportError> {
        let (container, row, col) = self.resolve_col(Selector::default())?;
        Ok(self.tree.col(&container, row, col)?)
    }

    pub fn set_current_col(
        &mut self,
        index: usize,
        row: Option<usize>,
        container: Option<&str>,
    ) -> Result<(), ReportError> {
        let name = self.existing_container(container, "No container selected.")?;
        let row = match (row, container) {
            (Some(r), _) => Some(r),
            (None, Some(_)) => self.tree.container(&name)?.rows().len().checked_sub(1),
            (None, None) => self.current_row_index(),
        }
        .ok_or_else(|| ReportError::not_found("No row selected."))?;
        self.tree.col(&name, row, index)?;
        self.select_col(&name, row, index)
    }

    // --- Styles ---

    pub fn set_container_classes(
        &mut self,
        values: impl Into<OneOrMany<String>>,
        container: Option<&str>,
        overwrite: bool,
    ) -> Result<(), ReportError> {
        let name = self.resolve_container(container)?;
        self.tree.container_mut(&name)?.style.classes.set(values, overwrite);
        Ok(())
    }

    pub fn set_container_styles(
        &mut self,
        values: impl Into<OneOrMany<String>>,
        container: Option<&str>,
        overwrite: bool,
    ) -> Result<(), ReportError> {
        let name = self.resolve_container(container)?;
        self.tree.container_mut(&name)?.style.styles.set(values, overwrite);
        Ok(())
    }

    pub fn set_row_classes(
        &mut self,
        values: impl Into<OneOrMany<String>>,
        row: Option<usize>,
        container: Option<&str>,
        overwrite: bool,
    ) -> Result<(), ReportError> {
        let row = self.style_row(row, container)?;
        row.style.classes.set(values, overwrite);
        Ok(())
    }

    pub fn set_row_styles(
        &mut self,
        values: impl Into<OneOrMany<String>>,
        row: Option<usize>,
        container: Option<&str>,
        overwrite: bool,
    ) -> Result<(), ReportError> {
        let row = self.style_row(row, container)?;
        row.style.styles.set(values, overwrite);
        Ok(())
    }

    pub fn set_col_classes(
        &mut self,
        values: impl Into<OneOrMany<String>>,
        col: Option<usize>,
        row: Option<usize>,
        container: Option<&str>,
        overwrite: bool,
    ) -> Result<(), ReportError> {
        let column = self.style_col(Selector { container, row, col })?;
        column.style.classes.set(values, overwrite);
        Ok(())
    }

    pub fn set_col_styles(
        &mut self,
        values: impl Into<OneOrMany<String>>,
        col: Option<usize>,
        row: Option<usize>,
        container: Option<&str>,
        overwrite: bool,
    ) -> Result<(), ReportError> {
        let column = self.style_col(Selector { container, row, col })?;
        column.style.styles.set(values, overwrite);
        Ok(())
    }

    fn style_row(&mut self, row: Option<usize>, container: Option<&str>) -> Result<&mut Row, ReportError> {
        let selector = Selector { container, row, col: None };
        self.probe().get_row(selector)?;
        let (container, row) = self.resolve_row(selector)?;
        Ok(self.tree.row_mut(&container, row)?)
    }

    fn style_col(&mut self, selector: Selector<'_>) -> Result<&mut Column, ReportError> {
        self.probe().get_col(selector)?;
        let (container, row, col) = self.resolve_col(selector)?;
        Ok(self.tree.col_mut(&container, row, col)?)
    }

    // --- Resolution ---

    /// The named container, which must exist, or the current one.
    fn existing_container(&self, name: Option<&str>, missing: &str) -> Result<String, ReportError> {
        match name {
            Some(name) => Ok(self.tree.container(name)?.name().to_string()),
            None => self
                .cursor
                .container_name()
                .map(str::to_string)
                .ok_or_else(|| ReportError::not_found(missing)),
        }
    }

    fn current_container_or_default(&mut self) -> Result<String, ReportError> {
        if let Some(name) = self.cursor.container_name() {
            return Ok(name.to_string());
        }
        self.add_container(DEFAULT_CONTAINER, false, &NodeStyle::new())?;
        Ok(DEFAULT_CONTAINER.to_string())
    }

    /// Naming a container makes it current, creating it when missing.
    fn resolve_container(&mut self, name: Option<&str>) -> Result<String, ReportError> {
        match name {
            None => self.current_container_or_default(),
            Some(name) => {
                if self.tree.document().contains(name) {
                    self.select_container(name)?;
                } else {
                    self.add_container(name, false, &NodeStyle::new())?;
                }
                Ok(name.to_string())
            }
        }
    }

    fn resolve_row(&mut self, selector: Selector<'_>) -> Result<(String, usize), ReportError> {
        let container = self.resolve_container(selector.container)?;
        let row = match (selector.row, self.cursor.row()) {
            (Some(index), _) => {
                self.select_row(&container, index)?;
                index
            }
            (None, Some(current)) => current.index,
            (None, None) => self.insert_row(&container, None, false, &NodeStyle::new())?,
        };
        Ok((container, row))
    }

    fn resolve_col(&mut self, selector: Selector<'_>) -> Result<(String, usize, usize), ReportError> {
        let (container, row) = self.resolve_row(selector)?;
        let col = match (selector.col, self.cursor.col()) {
            (Some(index), _) => {
                self.select_col(&container, row, index)?;
                index
            }
            (None, Some(current)) => current.index,
            (None, None) => self.insert_col(&container, row, None, false, &NodeStyle::new())?,
        };
        Ok((container, row, col))
    }

    fn insert_row(
        &mut self,
        container: &str,
        index: Option<usize>,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, ReportError> {
        let index = self.tree.add_row(container, index, overwrite, style)?;
        self.select_row(container, index)?;
        Ok(index)
    }

    fn insert_col(
        &mut self,
        container: &str,
        row: usize,
        index: Option<usize>,
        overwrite: bool,
        style: &NodeStyle,
    ) -> Result<usize, ReportError> {
        let index = self.tree.add_col(container, row, index, overwrite, style)?;
        self.select_col(container, row, index)?;
        Ok(index)
    }

    // --- Cursor ---

    fn select_container(&mut self, name: &str) -> Result<(), ReportError> {
        self.cursor.select_container(self.tree.container(name)?);
        self.cursor.repair(&self.tree);
        Ok(())
    }

    fn select_row(&mut self, container: &str, index: usize) -> Result<(), ReportError> {
        self.cursor.select_container(self.tree.container(container)?);
        self.cursor.select_row(index, self.tree.row(container, index)?);
        self.cursor.repair(&self.tree);
        Ok(())
    }

    fn select_col(&mut self, container: &str, row: usize, index: usize) -> Result<(), ReportError> {
        self.cursor.select_container(self.tree.container(container)?);
        self.cursor.select_row(row, self.tree.row(container, row)?);
        self.cursor.select_col(index, self.tree.col(container, row, index)?);
        self.cursor.repair(&self.tree);
        Ok(())
    }
}

#[cfg(test)]
mod report_test;
