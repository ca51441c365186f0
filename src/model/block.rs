//! Content blocks.

use super::{BlockMetadata, ListContent, TableContent, TextStyle};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Body paragraph
    Paragraph,
    /// Level 1 heading
    Heading1,
    /// Level 2 heading
    Heading2,
    /// Level 3 heading
    Heading3,
    /// Level 4 heading
    Heading4,
    /// Unordered list
    BulletedList,
    /// Ordered list
    NumberedList,
    /// Table
    Table,
    /// Signature block (line breaks kept verbatim)
    Signature,
    /// Page break marker
    PageBreak,
    /// Horizontal rule
    Rule,
    /// Indented or quoted text
    Quote,
}

impl BlockKind {
    /// Every block kind.
    pub const ALL: [BlockKind; 12] = [
        BlockKind::Paragraph,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Heading4,
        BlockKind::BulletedList,
        BlockKind::NumberedList,
        BlockKind::Table,
        BlockKind::Signature,
        BlockKind::PageBreak,
        BlockKind::Rule,
        BlockKind::Quote,
    ];

    /// Heading kind for a level in 1..=4.
    pub fn heading(level: u8) -> Result<Self> {
        match level {
            1 => Ok(BlockKind::Heading1),
            2 => Ok(BlockKind::Heading2),
            3 => Ok(BlockKind::Heading3),
            4 => Ok(BlockKind::Heading4),
            _ => Err(Error::InvalidHeadingLevel(level)),
        }
    }

    /// Heading level, or None for non-headings.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            BlockKind::Heading4 => Some(4),
            _ => None,
        }
    }

    /// Name of the content variant this kind holds.
    pub fn expected_content(&self) -> &'static str {
        match self {
            BlockKind::Table => "table",
            BlockKind::BulletedList | BlockKind::NumberedList => "list",
            BlockKind::PageBreak | BlockKind::Rule => "empty",
            _ => "text",
        }
    }

    /// Snake-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Heading3 => "heading3",
            BlockKind::Heading4 => "heading4",
            BlockKind::BulletedList => "bulleted_list",
            BlockKind::NumberedList => "numbered_list",
            BlockKind::Table => "table",
            BlockKind::Signature => "signature",
            BlockKind::PageBreak => "page_break",
            BlockKind::Rule => "rule",
            BlockKind::Quote => "quote",
        }
    }
}

/// Block content: exactly one of text, table or list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BlockContent {
    /// Plain text (may contain placeholders)
    Text(String),
    /// Table
    Table(TableContent),
    /// List
    List(ListContent),
    /// No content (structural markers)
    Empty,
}

impl BlockContent {
    /// Variant name.
    pub fn name(&self) -> &'static str {
        match self {
            BlockContent::Text(_) => "text",
            BlockContent::Table(_) => "table",
            BlockContent::List(_) => "list",
            BlockContent::Empty => "empty",
        }
    }
}

/// A typed unit of document content.
///
/// The content variant always matches the kind. Blocks are built through
/// the constructors below or deserialized through the same check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct ContentBlock {
    id: u64,
    kind: BlockKind,
    content: BlockContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<TextStyle>,
    metadata: BlockMetadata,
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: u64,
    kind: BlockKind,
    content: BlockContent,
    #[serde(default)]
    style: Option<TextStyle>,
    #[serde(default)]
    metadata: BlockMetadata,
}

impl TryFrom<RawBlock> for ContentBlock {
    type Error = Error;

    fn try_from(raw: RawBlock) -> Result<Self> {
        let mut block = Self::new(raw.kind, raw.content)?;
        block.id = raw.id;
        block.style = raw.style;
        block.metadata = raw.metadata;
        Ok(block)
    }
}

fn check(kind: BlockKind, content: &BlockContent) -> Result<()> {
    if kind.expected_content() == content.name() {
        Ok(())
    } else {
        Err(Error::ContentMismatch {
            kind: kind.as_str(),
            content: content.name(),
        })
    }
}

impl ContentBlock {
    /// Create a block, rejecting content that does not fit the kind.
    pub fn new(kind: BlockKind, content: BlockContent) -> Result<Self> {
        check(kind, &content)?;
        Ok(Self {
            id: 0,
            kind,
            content,
            style: None,
            metadata: BlockMetadata::default(),
        })
    }

    fn unchecked(kind: BlockKind, content: BlockContent) -> Self {
        Self {
            id: 0,
            kind,
            content,
            style: None,
            metadata: BlockMetadata::default(),
        }
    }

    /// Create a paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::unchecked(BlockKind::Paragraph, BlockContent::Text(text.into()))
    }

    /// Create a heading (level 1-4).
    pub fn heading(level: u8, text: impl Into<String>) -> Result<Self> {
        Ok(Self::unchecked(
            BlockKind::heading(level)?,
            BlockContent::Text(text.into()),
        ))
    }

    /// Create a table block.
    pub fn table(table: TableContent) -> Self {
        Self::unchecked(BlockKind::Table, BlockContent::Table(table))
    }

    /// Create an unordered list.
    pub fn bulleted_list(list: ListContent) -> Self {
        Self::unchecked(BlockKind::BulletedList, BlockContent::List(list))
    }

    /// Create an ordered list.
    pub fn numbered_list(list: ListContent) -> Self {
        Self::unchecked(BlockKind::NumberedList, BlockContent::List(list))
    }

    /// Create a signature block.
    pub fn signature(text: impl Into<String>) -> Self {
        Self::unchecked(BlockKind::Signature, BlockContent::Text(text.into()))
    }

    /// Create a page break.
    pub fn page_break() -> Self {
        Self::unchecked(BlockKind::PageBreak, BlockContent::Empty)
    }

    /// Create a horizontal rule.
    pub fn rule() -> Self {
        Self::unchecked(BlockKind::Rule, BlockContent::Empty)
    }

    /// Create an indented quotation.
    pub fn quote(text: impl Into<String>) -> Self {
        Self::unchecked(BlockKind::Quote, BlockContent::Text(text.into()))
    }

    /// Set style and return self.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set metadata and return self.
    pub fn with_metadata(mut self, metadata: BlockMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set indent level and return self.
    pub fn with_indent(mut self, level: u8) -> Self {
        self.metadata.indent_level = level;
        self
    }

    /// Stable id assigned by the owning document (0 until inserted).
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Block kind.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Block content.
    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    /// Block style, if set.
    pub fn style(&self) -> Option<&TextStyle> {
        self.style.as_ref()
    }

    /// Block metadata.
    pub fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    /// Mutable metadata.
    pub fn metadata_mut(&mut self) -> &mut BlockMetadata {
        &mut self.metadata
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: Option<TextStyle>) {
        self.style = style;
    }

    /// Replace the content, rejecting a variant that does not fit the kind.
    pub fn set_content(&mut self, content: BlockContent) -> Result<()> {
        check(self.kind, &content)?;
        self.content = content;
        Ok(())
    }

    /// Text content, for text-bearing kinds.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Table content, for table blocks.
    pub fn as_table(&self) -> Option<&TableContent> {
        match &self.content {
            BlockContent::Table(table) => Some(table),
            _ => None,
        }
    }

    /// List content, for list blocks.
    pub fn as_list(&self) -> Option<&ListContent> {
        match &self.content {
            BlockContent::List(list) => Some(list),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_match_kind() {
        assert_eq!(ContentBlock::paragraph("x").kind(), BlockKind::Paragraph);
        assert_eq!(ContentBlock::heading(3, "x").unwrap().kind(), BlockKind::Heading3);
        assert_eq!(ContentBlock::rule().content(), &BlockContent::Empty);
    }

    #[test]
    fn test_invalid_heading_level() {
        assert!(matches!(
            ContentBlock::heading(5, "x"),
            Err(Error::InvalidHeadingLevel(5))
        ));
        assert!(ContentBlock::heading(0, "x").is_err());
    }

    #[test]
    fn test_content_mismatch_rejected() {
        let err = ContentBlock::new(BlockKind::Table, BlockContent::Text("x".into())).unwrap_err();
        assert!(matches!(
            err,
            Error::ContentMismatch {
                kind: "table",
                content: "text"
            }
        ));

        let mut block = ContentBlock::paragraph("x");
        assert!(block
            .set_content(BlockContent::List(ListContent::from_strings(["a"])))
            .is_err());
        assert!(block.set_content(BlockContent::Text("y".into())).is_ok());
        assert_eq!(block.text(), Some("y"));
    }

    #[test]
    fn test_deserialize_checks_content() {
        let bad = r#"{"kind":"rule","content":{"type":"text","value":"x"}}"#;
        assert!(serde_json::from_str::<ContentBlock>(bad).is_err());

        let good = r#"{"kind":"quote","content":{"type":"text","value":"ציטוט"}}"#;
        let block: ContentBlock = serde_json::from_str(good).unwrap();
        assert_eq!(block.kind(), BlockKind::Quote);
        assert_eq!(block.metadata(), &BlockMetadata::default());
    }

    #[test]
    fn test_serialize_round_trip() {
        let block = ContentBlock::heading(2, "כותרת")
            .unwrap()
            .with_style(TextStyle::new().bold())
            .with_indent(1);
        let json = serde_json::to_string(&block).unwrap();
        let back: ContentBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
