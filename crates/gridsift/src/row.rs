//! Rows: ordered sequences of cells.

use crate::cell::{Cell, CellData};

/// One record: an ordered sequence of cells.
///
/// A row is identified by its position in the input collection. Cells are
/// stored as `Option<Cell>`; a `None` entry models an absent cell, which
/// never matches any keyword.
///
/// # Example
///
/// ```
/// use gridsift::{Cell, Row};
///
/// // From homogeneous values
/// let row = Row::from(["apple", "red"]);
/// assert_eq!(row.len(), 2);
///
/// // With an absent cell
/// let row = Row::new(vec![Some(Cell::new("apple")), None]);
/// assert!(row.cells()[1].is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Option<Cell>>,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<Option<Cell>>) -> Self {
        Row { cells }
    }

    /// Returns the row's cells in order.
    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells
    }

    /// Returns the number of cells, absent cells included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T: Into<CellData>, const N: usize> From<[T; N]> for Row {
    fn from(values: [T; N]) -> Self {
        Row {
            cells: values.into_iter().map(|v| Some(Cell::new(v))).collect(),
        }
    }
}

impl<T: Into<CellData>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Row {
            cells: values.into_iter().map(|v| Some(Cell::new(v))).collect(),
        }
    }
}
