//! Results-table presentation models.
//!
//! Two behaviors of the results table live here: sort setup, where
//! non-sortable columns are disabled and the first sortable column starts
//! pre-sorted ascending, and the customize-header dialog, a checkbox per
//! hideable column.

/// One results-table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header label.
    pub label: String,
    /// Whether the column participates in sorting.
    pub sortable: bool,
    /// Whether the column is exempt from hiding.
    pub always_visible: bool,
    /// Whether the column is currently shown.
    pub visible: bool,
}

impl Column {
    /// Creates a sortable, hideable, visible column.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sortable: true,
            always_visible: false,
            visible: true,
        }
    }

    /// Sets whether the column participates in sorting.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column is exempt from hiding.
    pub fn with_always_visible(mut self, always_visible: bool) -> Self {
        self.always_visible = always_visible;
        self
    }

    /// Sets whether the column starts shown.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Sort configuration derived from a column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSetup {
    disabled_columns: Vec<usize>,
    initial_column: Option<usize>,
}

impl SortSetup {
    /// Derives the sort setup from the columns.
    ///
    /// Non-sortable columns get sorting disabled; the first sortable
    /// column becomes the initial sort, ascending. When every column is
    /// non-sortable there is no initial sort.
    pub fn from_columns(columns: &[Column]) -> Self {
        let disabled_columns = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.sortable)
            .map(|(index, _)| index)
            .collect();
        let initial_column = columns.iter().position(|column| column.sortable);

        Self {
            disabled_columns,
            initial_column,
        }
    }

    /// Indices of the columns whose sorting is disabled.
    pub fn disabled_columns(&self) -> &[usize] {
        &self.disabled_columns
    }

    /// Index of the initial ascending sort, when any column sorts.
    pub fn initial_column(&self) -> Option<usize> {
        self.initial_column
    }
}

/// One customize-header checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChoice {
    /// Column index the checkbox controls.
    pub column: usize,
    /// Checkbox label, taken from the column header.
    pub label: String,
    /// Whether the checkbox starts checked.
    pub checked: bool,
}

/// The customize-header dialog model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    choices: Vec<VisibilityChoice>,
}

impl ColumnVisibility {
    /// Builds the checkbox list: one per hideable column, checked when the
    /// column is currently shown. Always-visible columns get no checkbox.
    pub fn from_columns(columns: &[Column]) -> Self {
        let choices = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.always_visible)
            .map(|(index, column)| VisibilityChoice {
                column: index,
                label: column.label.clone(),
                checked: column.visible,
            })
            .collect();

        Self { choices }
    }

    /// The checkbox list, in column order.
    pub fn choices(&self) -> &[VisibilityChoice] {
        &self.choices
    }

    /// Applies a checkbox state to the columns.
    ///
    /// Hideable columns become visible exactly when their index appears in
    /// `checked`; always-visible columns are left untouched.
    pub fn apply(columns: &mut [Column], checked: &[usize]) {
        for (index, column) in columns.iter_mut().enumerate() {
            if column.always_visible {
                continue;
            }
            column.visible = checked.contains(&index);
        }
    }
}
