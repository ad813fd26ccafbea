//! A generic ordered list of children with per-child render options.
//!
//! `TreeNode` only manages its own sequence. Keeping any outside state (such
//! as a cursor) in step with a mutation is the caller's job.

use folio_idf::RenderOptions;
use folio_types::{IndexError, insert_index, valid_index};

#[derive(Debug, Clone, PartialEq)]
struct Entry<T> {
    node: T,
    options: RenderOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for TreeNode<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> TreeNode<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `child` at `pos` (default: the end), or overwrites the slot at
    /// `pos` when `replace` is set. Returns the index the child now occupies.
    pub fn add_child(
        &mut self,
        child: T,
        pos: Option<usize>,
        replace: bool,
    ) -> Result<usize, IndexError> {
        self.add_child_with(child, RenderOptions::default(), pos, replace)
    }

    pub fn add_child_with(
        &mut self,
        child: T,
        options: RenderOptions,
        pos: Option<usize>,
        replace: bool,
    ) -> Result<usize, IndexError> {
        let index = insert_index(pos, self.entries.len(), replace)?;
        let entry = Entry { node: child, options };
        if replace {
            self.entries[index] = entry;
        } else {
            self.entries.insert(index, entry);
        }
        Ok(index)
    }

    /// Appends `child` with default options.
    pub fn push(&mut self, child: T) -> usize {
        self.push_with(child, RenderOptions::default())
    }

    pub fn push_with(&mut self, child: T, options: RenderOptions) -> usize {
        self.entries.push(Entry { node: child, options });
        self.entries.len() - 1
    }

    /// Removes the child at `index`, returning it with its insertion options.
    pub fn pop_child(&mut self, index: usize) -> Result<(T, RenderOptions), IndexError> {
        let index = valid_index(Some(index), self.entries.len())?;
        let entry = self.entries.remove(index);
        Ok((entry.node, entry.options))
    }

    pub fn child_at(&self, index: usize) -> Result<&T, IndexError> {
        let index = valid_index(Some(index), self.entries.len())?;
        Ok(&self.entries[index].node)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let index = valid_index(Some(index), self.entries.len())?;
        Ok(&mut self.entries[index].node)
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last().map(|e| &e.node)
    }

    pub fn position(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.entries.iter().position(|e| predicate(&e.node))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.node)
    }

    pub fn iter_with_options(&self) -> impl Iterator<Item = (&T, &RenderOptions)> {
        self.entries.iter().map(|e| (&e.node, &e.options))
    }
}
