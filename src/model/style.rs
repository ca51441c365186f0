//! Text style, block layout metadata and per-kind defaults.

use super::{BlockKind, NumberingStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Horizontal text alignment.
///
/// Documents are right-to-left, so `Right` is the start edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Right alignment
    #[default]
    Right,
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Justified text
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Right => "right",
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Justify => "justify",
        }
    }
}

/// Character and paragraph styling for a block.
///
/// Every property is optional; an unset property inherits from the
/// document's [`DefaultStyles`] for the block kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Bold text
    pub bold: Option<bool>,

    /// Italic text
    pub italic: Option<bool>,

    /// Underlined text
    pub underline: Option<bool>,

    /// Text alignment
    pub alignment: Option<Alignment>,

    /// Line height as a multiple of font size
    pub line_height: Option<f32>,

    /// Text color (hex format, e.g., "#1a1a1a")
    pub color: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,
}

impl TextStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold and return self.
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// Set italic and return self.
    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Set underline and return self.
    pub fn underline(mut self) -> Self {
        self.underline = Some(true);
        self
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set line height and return self.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Set color and return self.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set font size and return self.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fill unset properties from `base`.
    pub fn over(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            underline: self.underline.or(base.underline),
            alignment: self.alignment.or(base.alignment),
            line_height: self.line_height.or(base.line_height),
            color: self.color.clone().or_else(|| base.color.clone()),
            font_size: self.font_size.or(base.font_size),
        }
    }

    /// CSS declarations for the set properties, in a fixed order.
    pub fn css_declarations(&self) -> Vec<String> {
        let mut decls = Vec::new();
        if self.bold == Some(true) {
            decls.push("font-weight: bold".to_string());
        }
        if self.italic == Some(true) {
            decls.push("font-style: italic".to_string());
        }
        if self.underline == Some(true) {
            decls.push("text-decoration: underline".to_string());
        }
        if let Some(alignment) = self.alignment {
            decls.push(format!("text-align: {}", alignment.as_css()));
        }
        if let Some(line_height) = self.line_height {
            decls.push(format!("line-height: {}", line_height));
        }
        if let Some(ref color) = self.color {
            decls.push(format!("color: {}", color));
        }
        if let Some(size) = self.font_size {
            decls.push(format!("font-size: {}pt", size));
        }
        decls
    }
}

/// Layout metadata for a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockMetadata {
    /// Indentation level (0 = none)
    pub indent_level: u8,

    /// Space above the block in points
    pub margin_top: Option<f32>,

    /// Space below the block in points
    pub margin_bottom: Option<f32>,

    /// Numbering style override for numbered lists
    pub list_style: Option<NumberingStyle>,

    /// Start a new page before this block
    pub page_break_before: bool,

    /// Keep this block on the same page as the next
    pub keep_with_next: bool,
}

impl BlockMetadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indent level and return self.
    pub fn with_indent(mut self, level: u8) -> Self {
        self.indent_level = level;
        self
    }

    /// Set vertical margins and return self.
    pub fn with_margins(mut self, top: f32, bottom: f32) -> Self {
        self.margin_top = Some(top);
        self.margin_bottom = Some(bottom);
        self
    }

    /// Set list numbering style and return self.
    pub fn with_list_style(mut self, style: NumberingStyle) -> Self {
        self.list_style = Some(style);
        self
    }

    /// Request a page break before the block and return self.
    pub fn with_page_break_before(mut self) -> Self {
        self.page_break_before = true;
        self
    }
}

/// Defaults applied to blocks of one kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockDefaults {
    /// Base text style
    pub style: TextStyle,

    /// Space above in points
    pub margin_top: f32,

    /// Space below in points
    pub margin_bottom: f32,
}

impl BlockDefaults {
    fn new(style: TextStyle, margin_top: f32, margin_bottom: f32) -> Self {
        Self {
            style,
            margin_top,
            margin_bottom,
        }
    }
}

/// Default style set keyed by block kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultStyles {
    by_kind: BTreeMap<BlockKind, BlockDefaults>,
}

impl DefaultStyles {
    /// Create an empty style set (every kind gets bare defaults).
    pub fn empty() -> Self {
        Self {
            by_kind: BTreeMap::new(),
        }
    }

    /// Defaults for a block kind.
    pub fn get(&self, kind: BlockKind) -> BlockDefaults {
        self.by_kind.get(&kind).cloned().unwrap_or_default()
    }

    /// Set defaults for a kind and return self.
    pub fn with(mut self, kind: BlockKind, defaults: BlockDefaults) -> Self {
        self.by_kind.insert(kind, defaults);
        self
    }

    /// Set defaults for a kind.
    pub fn set(&mut self, kind: BlockKind, defaults: BlockDefaults) {
        self.by_kind.insert(kind, defaults);
    }
}

impl Default for DefaultStyles {
    fn default() -> Self {
        let heading = |size: f32| TextStyle::new().bold().with_font_size(size);
        Self::empty()
            .with(
                BlockKind::Paragraph,
                BlockDefaults::new(TextStyle::new().align(Alignment::Justify), 0.0, 8.0),
            )
            .with(BlockKind::Heading1, BlockDefaults::new(heading(18.0), 18.0, 12.0))
            .with(BlockKind::Heading2, BlockDefaults::new(heading(16.0), 14.0, 10.0))
            .with(BlockKind::Heading3, BlockDefaults::new(heading(14.0), 12.0, 8.0))
            .with(BlockKind::Heading4, BlockDefaults::new(heading(12.0), 10.0, 6.0))
            .with(
                BlockKind::Quote,
                BlockDefaults::new(TextStyle::new().italic(), 6.0, 6.0),
            )
            .with(
                BlockKind::Signature,
                BlockDefaults::new(TextStyle::new(), 24.0, 8.0),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_over_fills_unset() {
        let base = TextStyle::new().bold().with_font_size(12.0);
        let style = TextStyle::new().with_font_size(14.0).with_color("#333");
        let merged = style.over(&base);

        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.font_size, Some(14.0));
        assert_eq!(merged.color.as_deref(), Some("#333"));
    }

    #[test]
    fn test_css_declarations_order() {
        let style = TextStyle::new()
            .with_font_size(11.0)
            .bold()
            .align(Alignment::Center);
        assert_eq!(
            style.css_declarations(),
            vec!["font-weight: bold", "text-align: center", "font-size: 11pt"]
        );
        assert!(TextStyle::new().css_declarations().is_empty());
    }

    #[test]
    fn test_default_styles() {
        let styles = DefaultStyles::default();
        assert_eq!(styles.get(BlockKind::Heading1).style.bold, Some(true));
        // kinds without an entry get bare defaults
        assert_eq!(styles.get(BlockKind::Rule), BlockDefaults::default());
    }

    #[test]
    fn test_default_styles_json_keys() {
        let json = serde_json::to_string(&DefaultStyles::default()).unwrap();
        assert!(json.contains("\"heading1\""));
        let back: DefaultStyles = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DefaultStyles::default());
    }
}
