//! Cell payload types and searchable-text extraction.
//!
//! A [`Cell`] holds one value at a (row, column) position. The value is
//! either a primitive (string, number, boolean) or a structured
//! [`RichContent`] carrying an inner text field. The [`CellData::search_text`]
//! method is the single extraction point deciding what text a value
//! contributes to keyword matching.

use std::borrow::Cow;
use std::fmt;

/// One value at a (row, column) position.
///
/// # Example
///
/// ```
/// use gridsift::{Cell, CellData};
///
/// let cell = Cell::new("apple");
/// assert_eq!(cell.data, CellData::String("apple".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The cell's payload.
    pub data: CellData,
}

impl Cell {
    /// Creates a cell from any supported payload type.
    pub fn new(data: impl Into<CellData>) -> Self {
        Cell { data: data.into() }
    }
}

/// A cell payload.
///
/// Primitive variants stringify to their canonical form for matching.
/// The [`Rich`](CellData::Rich) variant contributes only its inner content
/// string; everything else about it is opaque to the search engine.
#[derive(Debug, Clone, PartialEq)]
pub enum CellData {
    /// String value.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Structured rich content (e.g. embedded markup).
    Rich(RichContent),
}

impl CellData {
    /// Extracts the text this value contributes to keyword matching.
    ///
    /// - Primitives yield their canonical string form (`42`, `true`, ...).
    /// - Rich content yields its inner content string as-is, embedded
    ///   markup included; rich content without an inner string yields
    ///   `None` and never matches.
    pub fn search_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellData::String(s) => Some(Cow::Borrowed(s)),
            CellData::Number(n) => Some(Cow::Owned(n.to_string())),
            CellData::Bool(b) => Some(Cow::Owned(b.to_string())),
            CellData::Rich(rich) => rich.content.as_deref().map(Cow::Borrowed),
        }
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, CellData::String(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, CellData::Number(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, CellData::Bool(_))
    }

    /// Returns `true` if this is a `Rich` value.
    pub fn is_rich(&self) -> bool {
        matches!(self, CellData::Rich(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            CellData::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellData::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// Conversions from common types to CellData

impl From<String> for CellData {
    fn from(s: String) -> Self {
        CellData::String(s)
    }
}

impl From<&str> for CellData {
    fn from(s: &str) -> Self {
        CellData::String(s.to_string())
    }
}

impl From<Number> for CellData {
    fn from(n: Number) -> Self {
        CellData::Number(n)
    }
}

impl From<bool> for CellData {
    fn from(b: bool) -> Self {
        CellData::Bool(b)
    }
}

impl From<RichContent> for CellData {
    fn from(rich: RichContent) -> Self {
        CellData::Rich(rich)
    }
}

// Numeric type conversions
impl From<i32> for CellData {
    fn from(n: i32) -> Self {
        CellData::Number(Number::from(n))
    }
}

impl From<i64> for CellData {
    fn from(n: i64) -> Self {
        CellData::Number(Number::from(n))
    }
}

impl From<u32> for CellData {
    fn from(n: u32) -> Self {
        CellData::Number(Number::from(n))
    }
}

impl From<u64> for CellData {
    fn from(n: u64) -> Self {
        CellData::Number(Number::from(n))
    }
}

impl From<f32> for CellData {
    fn from(n: f32) -> Self {
        CellData::Number(Number::from(n))
    }
}

impl From<f64> for CellData {
    fn from(n: f64) -> Self {
        CellData::Number(Number::from(n))
    }
}

impl From<usize> for CellData {
    fn from(n: usize) -> Self {
        CellData::Number(Number::from(n))
    }
}

/// Numeric cell value.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// The `Display` impl provides the canonical string form used for
/// matching, so the cell value `42` matches the keyword `"42"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

// Conversions from primitive types
impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

/// Structured rich content, e.g. an embedded markup fragment.
///
/// The search engine reads exactly one field: `content`. Content is
/// matched as-is, markup included; there is no tag stripping. A value
/// without content contributes no searchable text.
///
/// # Example
///
/// ```
/// use gridsift::RichContent;
///
/// let rich = RichContent::new("<b>hello world</b>");
/// assert_eq!(rich.content.as_deref(), Some("<b>hello world</b>"));
/// assert_eq!(RichContent::empty().content, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichContent {
    /// The inner text of the content, markup included.
    pub content: Option<String>,
}

impl RichContent {
    /// Creates rich content with the given inner text.
    pub fn new(content: impl Into<String>) -> Self {
        RichContent {
            content: Some(content.into()),
        }
    }

    /// Creates rich content with no inner text.
    ///
    /// Such a value never matches any keyword.
    pub fn empty() -> Self {
        RichContent::default()
    }
}

impl From<&str> for RichContent {
    fn from(content: &str) -> Self {
        RichContent::new(content)
    }
}

impl From<String> for RichContent {
    fn from(content: String) -> Self {
        RichContent::new(content)
    }
}
