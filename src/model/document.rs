//! Document-level types.

use super::{BlockKind, ContentBlock, DefaultStyles, PageSettings};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

/// An editable document: ordered blocks plus layout, styles and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Page layout
    #[serde(default)]
    pub page: PageSettings,

    /// Default style per block kind
    #[serde(default)]
    pub styles: DefaultStyles,

    blocks: Vec<ContentBlock>,

    #[serde(default)]
    next_id: u64,
}

impl DocumentStructure {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::new(),
            page: PageSettings::default(),
            styles: DefaultStyles::default(),
            blocks: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a document with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.metadata.title = Some(title.into());
        doc
    }

    /// Set page settings and return self.
    pub fn with_page(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    /// Add a block and return self.
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.push(block);
        self
    }

    /// All blocks in order.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get a block by index.
    pub fn get(&self, index: usize) -> Option<&ContentBlock> {
        self.blocks.get(index)
    }

    /// Get a mutable block by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ContentBlock> {
        self.blocks.get_mut(index)
    }

    /// Find a block by its stable id.
    pub fn find(&self, id: u64) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    /// Index of the block with a stable id.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    /// Append a block and return its id.
    pub fn push(&mut self, mut block: ContentBlock) -> u64 {
        let id = self.allocate_id();
        block.set_id(id);
        self.blocks.push(block);
        self.touch();
        id
    }

    /// Insert a block at `index` (0..=len) and return its id.
    pub fn insert(&mut self, index: usize, mut block: ContentBlock) -> Result<u64> {
        if index > self.blocks.len() {
            return Err(Error::BlockOutOfRange(index, self.blocks.len()));
        }
        let id = self.allocate_id();
        block.set_id(id);
        self.blocks.insert(index, block);
        self.touch();
        Ok(id)
    }

    /// Remove and return the block at `index`.
    pub fn remove(&mut self, index: usize) -> Result<ContentBlock> {
        self.check_index(index)?;
        let block = self.blocks.remove(index);
        self.touch();
        Ok(block)
    }

    /// Replace the block at `index`, keeping its id. Returns the old block.
    pub fn replace(&mut self, index: usize, mut block: ContentBlock) -> Result<ContentBlock> {
        self.check_index(index)?;
        block.set_id(self.blocks[index].id());
        let old = std::mem::replace(&mut self.blocks[index], block);
        self.touch();
        Ok(old)
    }

    /// Move the block at `from` so it ends up at index `to`.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let block = self.blocks.remove(from);
            self.blocks.insert(to, block);
            self.touch();
        }
        Ok(())
    }

    /// Count blocks of a kind.
    pub fn count_kind(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind() == kind).count()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(Error::BlockOutOfRange(index, self.blocks.len()))
        }
    }

    fn allocate_id(&mut self) -> u64 {
        // deserialized documents may carry ids without a counter
        if self.next_id == 0 {
            self.next_id = self.blocks.iter().map(ContentBlock::id).max().unwrap_or(0) + 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        trace!("allocated block id {}", id);
        id
    }

    fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }
}

impl Default for DocumentStructure {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(default)]
    pub title: Option<String>,

    /// Document author
    #[serde(default)]
    pub author: Option<String>,

    /// Language tag
    #[serde(default = "default_language")]
    pub language: String,

    /// Creation time
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,

    /// Last modification time
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

fn default_language() -> String {
    "he".to_string()
}

impl Metadata {
    /// Create metadata stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            language: default_language(),
            created: now,
            modified: now,
        }
    }

    /// Set author and return self.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}
