use folio_idf::RenderOptions;

/// Where [`Report::add`](crate::Report::add) puts content and how.
///
/// Left unset, `container`, `row` and `col` follow the cursor. By default a
/// new column is opened in the current row for every call.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOptions {
    pub container: Option<String>,
    pub row: Option<usize>,
    pub col: Option<usize>,
    /// Open a new row (at `row`, or at the end) before adding.
    pub new_row: bool,
    /// Open a new column (at `col`, or at the end) before adding.
    pub new_col: bool,
    /// Width weight set on the target column.
    pub size: Option<u32>,
    /// Store detached copies of shared content.
    pub copy: bool,
    /// Replace the target column, which must exist, with an empty one first.
    pub overwrite: bool,
    /// Wrapper applied to each added element when rendered.
    pub render: RenderOptions,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self {
            container: None,
            row: None,
            col: None,
            new_row: false,
            new_col: true,
            size: None,
            copy: false,
            overwrite: false,
            render: RenderOptions::default(),
        }
    }
}

impl AddOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds into the current column instead of opening a new one.
    pub fn current() -> Self {
        Self::default().new_col(false)
    }

    pub fn container(mut self, name: impl Into<String>) -> Self {
        self.container = Some(name.into());
        self
    }

    pub fn row(mut self, index: usize) -> Self {
        self.row = Some(index);
        self
    }

    pub fn col(mut self, index: usize) -> Self {
        self.col = Some(index);
        self
    }

    pub fn new_row(mut self, new_row: bool) -> Self {
        self.new_row = new_row;
        self
    }

    pub fn new_col(mut self, new_col: bool) -> Self {
        self.new_col = new_col;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub(crate) fn selector(&self) -> Selector<'_> {
        Selector {
            container: self.container.as_deref(),
            row: self.row,
            col: self.col,
        }
    }
}

/// A possibly partial address of a node. Unset parts follow the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Selector<'a> {
    pub container: Option<&'a str>,
    pub row: Option<usize>,
    pub col: Option<usize>,
}
