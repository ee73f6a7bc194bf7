//! Error types for the gridsift crate.

use thiserror::Error;

/// Errors that can occur when compiling keyword patterns.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid keyword pattern.
    ///
    /// Only reachable when compiling a raw, unescaped pattern via
    /// [`KeywordPattern::new`](crate::KeywordPattern::new). Patterns produced
    /// by [`escape_keyword`](crate::escape_keyword) always compile.
    #[error("invalid keyword pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for gridsift operations.
pub type Result<T> = std::result::Result<T, SearchError>;
