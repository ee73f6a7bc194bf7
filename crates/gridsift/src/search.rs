//! Search builder and executor.
//!
//! [`Search`] holds one boolean keyword query plus matching options and
//! provides methods for executing it against row collections.

use std::fmt;

use crate::cell::CellData;
use crate::column::Column;
use crate::expr::evaluate;
use crate::matcher::{cell_matches, escape_keyword, MatchOptions, Selector};
use crate::row::Row;

/// A boolean keyword search over rows.
///
/// The query combines keyword terms with `AND`, `OR`, parenthesized
/// grouping, and the literals `true`/`false`. A keyword term matches a row
/// when any of the row's cells contains it, case-insensitively. Regex
/// metacharacters in the query are escaped at construction, so every term
/// is a literal search phrase; parentheses become grouping.
///
/// An empty query matches every row.
///
/// # Example
///
/// ```
/// use gridsift::{Row, Search};
///
/// let rows = vec![
///     Row::from(["apple", "red"]),
///     Row::from(["banana", "yellow"]),
///     Row::from(["cherry", "red"]),
/// ];
///
/// let search = Search::new("red AND (apple OR cherry)").build();
/// let results = search.filter(&rows);
/// assert_eq!(results, vec![&rows[0], &rows[2]]);
/// ```
#[derive(Default)]
pub struct Search {
    keyword: String,
    expression: String,
    columns: Vec<Option<Column>>,
    ignore_hidden_columns: bool,
    selector: Option<Box<Selector>>,
}

impl Search {
    /// Creates a search for the given query.
    ///
    /// The raw query is kept for introspection; the escaped form drives
    /// evaluation.
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let expression = escape_keyword(&keyword);
        Search {
            keyword,
            expression,
            columns: Vec::new(),
            ignore_hidden_columns: false,
            selector: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Sets the column descriptors, parallel to cell positions.
    ///
    /// The array may be shorter than the rows' cell counts; missing and
    /// `None` entries are treated as visible. Columns only matter together
    /// with [`ignore_hidden_columns`](Search::ignore_hidden_columns).
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = Option<Column>>,
    {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Excludes cells under hidden columns from matching.
    pub fn ignore_hidden_columns(mut self, ignore: bool) -> Self {
        self.ignore_hidden_columns = ignore;
        self
    }

    /// Sets a custom text extraction function.
    ///
    /// The selector replaces all built-in extraction, rich content handling
    /// included. It is trusted to be pure and total.
    pub fn selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(&CellData, usize, usize) -> String + 'static,
    {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Finalizes the search.
    ///
    /// Currently this just returns self, but could validate in the future.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the raw query string.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the escaped expression fed to the evaluator.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns `true` if the query is blank (matches every row).
    pub fn is_empty(&self) -> bool {
        self.keyword.trim().is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single row matches this search.
    ///
    /// `row_index` is the row's position in its collection; it is only
    /// observable through a custom selector.
    pub fn matches(&self, row: &Row, row_index: usize) -> bool {
        let options = MatchOptions {
            columns: &self.columns,
            ignore_hidden_columns: self.ignore_hidden_columns,
            selector: self.selector.as_deref(),
        };

        evaluate(&self.expression, |term| {
            row.cells()
                .iter()
                .enumerate()
                .any(|(cell_index, cell)| {
                    cell_matches(row_index, cell_index, cell.as_ref(), term, &options)
                })
        })
    }

    /// Filters a slice, returning references to matching rows.
    ///
    /// The result is a stable subsequence: original order, no duplication,
    /// rows untouched.
    pub fn filter<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        rows.iter()
            .enumerate()
            .filter(|(row_index, row)| self.matches(row, *row_index))
            .map(|(_, row)| row)
            .collect()
    }

    /// Filters and clones matching rows.
    pub fn filter_cloned(&self, rows: &[Row]) -> Vec<Row> {
        self.filter(rows).into_iter().cloned().collect()
    }

    /// Counts the number of matching rows.
    pub fn count(&self, rows: &[Row]) -> usize {
        rows.iter()
            .enumerate()
            .filter(|(row_index, row)| self.matches(row, *row_index))
            .count()
    }

    /// Returns `true` if any row matches.
    pub fn any(&self, rows: &[Row]) -> bool {
        rows.iter()
            .enumerate()
            .any(|(row_index, row)| self.matches(row, row_index))
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("keyword", &self.keyword)
            .field("expression", &self.expression)
            .field("columns", &self.columns)
            .field("ignore_hidden_columns", &self.ignore_hidden_columns)
            .field("selector", &self.selector.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Filters rows by a boolean keyword query, positional form.
///
/// Convenience wrapper over [`Search`] returning owned rows. Use the
/// builder directly when a custom selector is needed.
///
/// # Example
///
/// ```
/// use gridsift::{filter_rows, Column, Row};
///
/// let columns = vec![Some(Column::new("fruit")), Some(Column::new("color"))];
/// let rows = vec![Row::from(["apple", "red"]), Row::from(["banana", "yellow"])];
///
/// let kept = filter_rows("red", &columns, false, &rows);
/// assert_eq!(kept, vec![rows[0].clone()]);
/// ```
pub fn filter_rows(
    keyword: &str,
    columns: &[Option<Column>],
    ignore_hidden_columns: bool,
    rows: &[Row],
) -> Vec<Row> {
    Search::new(keyword)
        .columns(columns.to_vec())
        .ignore_hidden_columns(ignore_hidden_columns)
        .build()
        .filter_cloned(rows)
}
