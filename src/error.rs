//! Error types for the tavnit library.
//!
//! Only model construction and I/O can fail. Template resolution never
//! returns an error: unknown lemmas and unresolved placeholders pass through
//! unchanged and are surfaced by the validation harness instead.

use std::io;
use thiserror::Error;

/// Result type alias for tavnit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building documents or loading data.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table block was built with no rows.
    #[error("Table must contain at least one row")]
    EmptyTable,

    /// Block content does not fit the block kind (e.g. a table block holding text).
    #[error("Block kind '{kind}' cannot hold {content} content")]
    ContentMismatch {
        /// Block kind name
        kind: &'static str,
        /// Content variant name
        content: &'static str,
    },

    /// Heading level outside 1-4.
    #[error("Invalid heading level {0} (expected 1-4)")]
    InvalidHeadingLevel(u8),

    /// A table cell span of zero, or a rowspan running past the last row.
    #[error("Invalid cell span at row {row}, cell {cell}: spans must be at least 1 and fit the table")]
    InvalidSpan {
        /// Row index (0-based)
        row: usize,
        /// Cell index within the row (0-based)
        cell: usize,
    },

    /// Table cell coordinates out of range for an edit operation.
    #[error("Table has no cell at row {row}, cell {cell}")]
    CellOutOfRange {
        /// Row index (0-based)
        row: usize,
        /// Cell index within the row (0-based)
        cell: usize,
    },

    /// Block index out of range for an edit operation.
    #[error("Block index {0} is out of range (document has {1} blocks)")]
    BlockOutOfRange(usize, usize),

    /// A gender name that could not be parsed.
    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    /// A lexicon entry with an empty lemma or form.
    #[error("Invalid lexicon entry '{0}': lemma and male/female/plural forms must be non-empty")]
    InvalidEntry(String),

    /// Section template not found in the library.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyTable;
        assert_eq!(err.to_string(), "Table must contain at least one row");

        let err = Error::BlockOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Block index 10 is out of range (document has 5 blocks)"
        );

        let err = Error::ContentMismatch {
            kind: "table",
            content: "text",
        };
        assert_eq!(err.to_string(), "Block kind 'table' cannot hold text content");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
