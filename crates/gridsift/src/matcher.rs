//! Keyword escaping and cell-level matching.
//!
//! [`escape_keyword`] turns a raw user query into literal search text: every
//! regex metacharacter gains a backslash, which simultaneously produces the
//! `\(` / `\)` marker pair the [expression evaluator](crate::evaluate)
//! recognizes as grouping. The escaper is the only producer of that pair,
//! so user-level parentheses are the query grammar's grouping syntax while
//! every other metacharacter matches itself.
//!
//! [`cell_matches`] is the per-cell predicate: it applies visibility rules,
//! extracts the cell's searchable text, and tests case-insensitive
//! containment of the keyword.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

use crate::cell::{Cell, CellData};
use crate::column::Column;
use crate::error::Result;

/// The metacharacter set the escaper neutralizes: `- [ ] { } ( ) * + ? . , \ ^ $ | #`.
static METACHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\[\]{}()*+?.,\\^$|#]").expect("metacharacter class is valid"));

/// Custom text extraction function.
///
/// Receives the cell's payload plus its row and cell indices and returns the
/// text to match against, bypassing all built-in extraction including rich
/// content handling. The selector is trusted to be pure and total; it is
/// called once per cell test and is not defensively wrapped.
pub type Selector = dyn Fn(&CellData, usize, usize) -> String;

/// Escapes regex metacharacters so a raw query is matched literally.
///
/// Escaped parentheses double as the evaluator's grouping markers, so
/// `red AND (apple OR cherry)` escapes to `red AND \(apple OR cherry\)`
/// and the parenthesized span groups.
///
/// # Example
///
/// ```
/// use gridsift::escape_keyword;
///
/// assert_eq!(escape_keyword("1.5"), r"1\.5");
/// assert_eq!(escape_keyword("(a)"), r"\(a\)");
/// assert_eq!(escape_keyword("plain"), "plain");
/// ```
pub fn escape_keyword(keyword: &str) -> String {
    METACHARACTERS.replace_all(keyword, r"\$0").into_owned()
}

/// A compiled, case-insensitive keyword pattern.
///
/// Matching is substring containment: the pattern matches anywhere within
/// the candidate text.
///
/// # Example
///
/// ```
/// use gridsift::{escape_keyword, KeywordPattern};
///
/// let pattern = KeywordPattern::new(&escape_keyword("Hello"))?;
/// assert!(pattern.is_match("say hello world"));
/// assert!(!pattern.is_match("goodbye"));
/// # Ok::<(), gridsift::SearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    /// Compiles a keyword pattern.
    ///
    /// The input is interpreted as a regex fragment; pass it through
    /// [`escape_keyword`] first when it should match literally. Escaped
    /// input always compiles, so the error path is reachable only for raw
    /// patterns.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(KeywordPattern { regex })
    }

    /// Tests whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Options consulted by [`cell_matches`].
#[derive(Clone, Copy)]
pub struct MatchOptions<'a> {
    /// Column descriptors, parallel to cell positions. May be shorter than
    /// the row; `None` entries are treated as visible.
    pub columns: &'a [Option<Column>],
    /// When set, cells under a hidden column never match.
    pub ignore_hidden_columns: bool,
    /// Custom text extraction, overriding the built-in rules.
    pub selector: Option<&'a Selector>,
}

/// Tests whether one cell matches a keyword.
///
/// An absent cell never matches. Hidden columns are checked before any text
/// extraction runs. Extraction priority: the selector if supplied, else
/// [`CellData::search_text`]. The keyword is assumed pre-escaped by
/// [`escape_keyword`]; a raw fragment that fails to compile matches nothing.
pub fn cell_matches(
    row_index: usize,
    cell_index: usize,
    cell: Option<&Cell>,
    keyword: &str,
    options: &MatchOptions<'_>,
) -> bool {
    let Some(cell) = cell else {
        return false;
    };

    if options.ignore_hidden_columns {
        if let Some(Some(column)) = options.columns.get(cell_index) {
            if column.hidden {
                return false;
            }
        }
    }

    let text = match options.selector {
        Some(selector) => Some(Cow::Owned(selector(&cell.data, row_index, cell_index))),
        None => cell.data.search_text(),
    };

    match text {
        Some(text) => match KeywordPattern::new(keyword) {
            Ok(pattern) => pattern.is_match(&text),
            Err(_) => false,
        },
        None => false,
    }
}
