//! Rendering options and configuration.

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Inline-start indentation per indent level, in pixels
    pub indent_px: u32,

    /// Wrap the output in an `<article>` carrying page settings
    pub wrap_article: bool,

    /// Emit the page header and footer
    pub include_header_footer: bool,

    /// Background for header-row cells without their own background
    pub header_background: Option<String>,

    /// Marker for unordered list items in plain text
    pub list_marker: char,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation step.
    pub fn with_indent(mut self, px: u32) -> Self {
        self.indent_px = px;
        self
    }

    /// Enable or disable the `<article>` wrapper.
    pub fn with_article(mut self, wrap: bool) -> Self {
        self.wrap_article = wrap;
        self
    }

    /// Enable or disable header and footer output.
    pub fn with_header_footer(mut self, include: bool) -> Self {
        self.include_header_footer = include;
        self
    }

    /// Set the header-row background.
    pub fn with_header_background(mut self, color: Option<String>) -> Self {
        self.header_background = color;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_px: 24,
            wrap_article: true,
            include_header_footer: true,
            header_background: Some("#f2f2f2".to_string()),
            list_marker: '•',
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.indent_px, 24);
        assert!(options.wrap_article);
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_indent(16)
            .with_article(false)
            .with_header_background(None)
            .with_stats(true);
        assert_eq!(options.indent_px, 16);
        assert!(!options.wrap_article);
        assert!(options.header_background.is_none());
        assert!(options.collect_stats);
    }
}
