//! Rendering result with metadata and statistics.

use crate::model::{BlockKind, Metadata};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML or text)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Statistics collected during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Blocks rendered (skipped blocks excluded)
    pub block_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of lists
    pub list_count: u32,

    /// Number of list items at every depth
    pub list_item_count: u32,

    /// Number of signature blocks
    pub signature_count: u32,

    /// Number of page breaks and rules
    pub marker_count: u32,

    /// Number of quotations
    pub quote_count: u32,

    /// Placeholders left literal after resolution
    pub unresolved_count: u32,

    /// Approximate word count of resolved text
    pub word_count: u32,

    /// Character count of resolved text (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a rendered block.
    pub fn add_block(&mut self, kind: BlockKind) {
        self.block_count += 1;
        match kind {
            BlockKind::Paragraph => self.paragraph_count += 1,
            BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 | BlockKind::Heading4 => {
                self.heading_count += 1
            }
            BlockKind::Table => self.table_count += 1,
            BlockKind::BulletedList | BlockKind::NumberedList => self.list_count += 1,
            BlockKind::Signature => self.signature_count += 1,
            BlockKind::PageBreak | BlockKind::Rule => self.marker_count += 1,
            BlockKind::Quote => self.quote_count += 1,
        }
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Add unresolved placeholders.
    pub fn add_unresolved(&mut self, count: usize) {
        self.unresolved_count += count as u32;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("המצווה עשה צוואה זו");

        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.char_count, 16);
    }

    #[test]
    fn test_add_block_by_kind() {
        let mut stats = RenderStats::new();
        stats.add_block(BlockKind::Heading2);
        stats.add_block(BlockKind::Rule);
        stats.add_block(BlockKind::PageBreak);

        assert_eq!(stats.block_count, 3);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.marker_count, 2);
    }
}
