//! Gridsift - Boolean keyword search engine for tabular row collections.
//!
//! Gridsift filters in-memory rows of cells by a free-text boolean query.
//! It supports:
//!
//! - Keyword terms combined with `AND`, `OR`, and parenthesized grouping
//! - Literal `true` / `false` terms
//! - Case-insensitive substring matching against each cell's text
//! - Primitive and structured rich-content cell payloads
//! - Column visibility rules and custom text extraction
//!
//! # Quick Start
//!
//! ```rust
//! use gridsift::{Row, Search};
//!
//! // Define your data
//! let rows = vec![
//!     Row::from(["apple", "red"]),
//!     Row::from(["banana", "yellow"]),
//!     Row::from(["cherry", "red"]),
//! ];
//!
//! // Build and execute a search
//! let search = Search::new("red AND (apple OR cherry)").build();
//! let results = search.filter(&rows);
//!
//! assert_eq!(results, vec![&rows[0], &rows[2]]);
//! ```
//!
//! # Query Semantics
//!
//! A query is evaluated per row with fixed precedence:
//!
//! ```text
//! Expr := Or
//! Or   := And (OR And)*
//! And  := Term (AND Term)*
//! Term := 'true' | 'false' | '' | keyword | '(' Expr ')'
//! ```
//!
//! `AND` binds tighter than `OR`; parentheses group. Operators are
//! case-sensitive and word-bounded, so `brand` and `and` are ordinary
//! keywords. A keyword term holds for a row when any cell's text contains
//! it, ignoring case. Regex metacharacters in the query match themselves.
//! An empty query keeps every row.
//!
//! Filtering is a pure, stable operation: the result is a subsequence of
//! the input in original order, and the input is never mutated.
//!
//! # Cell Text
//!
//! | Payload | Searchable text |
//! |---------|-----------------|
//! | String | the string itself |
//! | Number | canonical display form (`42`, `1.5`) |
//! | Bool | `true` / `false` |
//! | Rich content | inner `content` string, markup included |
//! | Rich content without content | none (never matches) |
//! | Absent cell | none (never matches) |
//!
//! A custom [`Selector`] replaces this table wholesale, and columns marked
//! hidden can be excluded via
//! [`Search::ignore_hidden_columns`].

mod cell;
mod column;
mod error;
mod expr;
mod matcher;
mod row;
mod search;

// Re-export public API
pub use cell::{Cell, CellData, Number, RichContent};
pub use column::Column;
pub use error::{Result, SearchError};
pub use expr::evaluate;
pub use matcher::{cell_matches, escape_keyword, KeywordPattern, MatchOptions, Selector};
pub use row::Row;
pub use search::{filter_rows, Search};
