//! Column descriptors for visibility filtering.

/// A column descriptor.
///
/// The search engine consumes exactly one field: [`hidden`](Column::hidden).
/// Cells under a hidden column are excluded from matching when a search is
/// built with `ignore_hidden_columns(true)`. The `name` field is opaque
/// passthrough for the host application.
///
/// Column arrays are passed as `&[Option<Column>]`: a `None` entry stands
/// for a column the host never described (the array may also be shorter
/// than the row's cell count). Both cases are treated as "not hidden".
///
/// # Example
///
/// ```
/// use gridsift::Column;
///
/// let visible = Column::new("fruit");
/// let hidden = Column::new("internal id").hide();
/// assert!(!visible.hidden);
/// assert!(hidden.hidden);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    /// Display name, unused by the search engine.
    pub name: Option<String>,
    /// Whether the column is hidden from view.
    pub hidden: bool,
}

impl Column {
    /// Creates a visible column with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: Some(name.into()),
            hidden: false,
        }
    }

    /// Marks the column as hidden.
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}
