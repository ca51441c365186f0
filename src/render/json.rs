//! JSON serialization of documents.

use crate::error::{Error, Result};
use crate::model::DocumentStructure;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &DocumentStructure, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Load a document from JSON, validating every block.
pub fn from_json(json: &str) -> Result<DocumentStructure> {
    Ok(serde_json::from_str(json)?)
}
