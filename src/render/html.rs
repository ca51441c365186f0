//! HTML rendering for documents.
//!
//! Output is right-to-left. Every text passes through the template resolver
//! before it is escaped, so block text, table cells, list items and the page
//! header and footer may all carry placeholders.

use crate::error::Result;
use crate::model::{
    BlockContent, BlockKind, ContentBlock, DefaultStyles, DocumentStructure, ListItem,
    NumberingStyle, PageSettings, TableContent, TableRow,
};
use crate::template::{parse, ResolutionContext, Segment, TemplateResolver};
use log::debug;
use unicode_bidi::{bidi_class, BidiClass};

use super::visitor::{BlockVisitor, CompositeVisitor, VisitorAction};
use super::{RenderOptions, RenderResult, RenderStats};

/// Convert a document to HTML.
pub fn to_html(
    doc: &DocumentStructure,
    ctx: &ResolutionContext,
    options: &RenderOptions,
) -> Result<String> {
    HtmlRenderer::new(options.clone()).render(doc, ctx)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(
    doc: &DocumentStructure,
    ctx: &ResolutionContext,
    options: &RenderOptions,
) -> Result<RenderResult> {
    HtmlRenderer::new(options.clone()).render_with_stats(doc, ctx)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    resolver: TemplateResolver,
    visitors: CompositeVisitor,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer over the built-in lexicon.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            resolver: TemplateResolver::default(),
            visitors: CompositeVisitor::new(),
            stats: RenderStats::new(),
        }
    }

    /// Use a specific resolver (e.g. one over a custom lexicon).
    pub fn with_resolver(mut self, resolver: TemplateResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Install a block visitor.
    ///
    /// Visitors run in installation order; the first non-`Continue` action wins.
    pub fn with_visitor<V: BlockVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.add(visitor);
        self
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &DocumentStructure, ctx: &ResolutionContext) -> Result<String> {
        self.render_internal(doc, ctx)
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(
        mut self,
        doc: &DocumentStructure,
        ctx: &ResolutionContext,
    ) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc, ctx)?;
        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &DocumentStructure, ctx: &ResolutionContext) -> Result<String> {
        debug!("rendering {} blocks to HTML", doc.len());
        let mut output = String::new();

        if self.options.wrap_article {
            output.push_str(&article_open(&doc.page, &doc.metadata.language));
        }

        if self.options.include_header_footer {
            if let Some(ref header) = doc.page.header {
                let text = self.resolve(header, ctx, false);
                output.push_str(&format!("<header>{}</header>\n", escape_html(&text)));
            }
        }

        for block in doc.blocks() {
            self.render_block(&mut output, block, &doc.styles, ctx);
        }

        if self.options.include_header_footer {
            if let Some(ref footer) = doc.page.footer {
                let text = self.resolve(footer, ctx, false);
                output.push_str(&format!("<footer>{}</footer>\n", escape_html(&text)));
            }
        }

        if self.options.wrap_article {
            output.push_str("</article>\n");
        }

        Ok(output.trim_end().to_string())
    }

    fn resolve(&mut self, text: &str, ctx: &ResolutionContext, counted: bool) -> String {
        let resolved = self.resolver.resolve(text, ctx);
        if self.options.collect_stats {
            self.stats.add_unresolved(count_placeholders(&resolved));
            if counted {
                self.stats.count_text(&resolved);
            }
        }
        resolved
    }

    fn visit(&mut self, f: impl FnOnce(&mut dyn BlockVisitor) -> VisitorAction) -> VisitorAction {
        if self.visitors.is_empty() {
            VisitorAction::Continue
        } else {
            f(&mut self.visitors)
        }
    }

    fn render_block(
        &mut self,
        output: &mut String,
        block: &ContentBlock,
        styles: &DefaultStyles,
        ctx: &ResolutionContext,
    ) {
        let kind = block.kind();
        let css = self.block_css(block, styles);

        match block.content() {
            BlockContent::Text(text) => {
                let resolved = self.resolve(text, ctx, true);
                let action = match kind.heading_level() {
                    Some(level) => self.visit(|v| v.visit_heading(&resolved, level)),
                    None => self.visit(|v| v.visit_text(kind, &resolved)),
                };
                if self.apply(output, action, kind) {
                    return;
                }
                self.render_text_block(output, kind, &resolved, css);
            }
            BlockContent::Table(table) => {
                let action = self.visit(|v| v.visit_table(table));
                if self.apply(output, action, kind) {
                    return;
                }
                self.render_table(output, table, css, ctx);
            }
            BlockContent::List(list) => {
                let ordered = kind == BlockKind::NumberedList;
                let action = self.visit(|v| v.visit_list(list, ordered));
                if self.apply(output, action, kind) {
                    return;
                }
                let numbering = block.metadata().list_style.unwrap_or(list.numbering);
                self.render_list(output, &list.items, ordered, numbering, list.start, css, ctx);
            }
            BlockContent::Empty => {
                let action = self.visit(|v| v.visit_marker(kind));
                if self.apply(output, action, kind) {
                    return;
                }
                match kind {
                    BlockKind::PageBreak => {
                        let mut css = css;
                        css.push("break-after: page".to_string());
                        output.push_str(&format!(
                            "<div class=\"page-break\"{}></div>\n",
                            style_attr(&css)
                        ));
                    }
                    _ => output.push_str(&format!("<hr{}>\n", style_attr(&css))),
                }
            }
        }

        if self.options.collect_stats {
            self.stats.add_block(kind);
        }
    }

    /// Apply a visitor action; returns true when the block is handled.
    fn apply(&mut self, output: &mut String, action: VisitorAction, kind: BlockKind) -> bool {
        match action {
            VisitorAction::Continue => false,
            VisitorAction::Skip => true,
            VisitorAction::Replace(content) => {
                output.push_str(&content);
                output.push('\n');
                if self.options.collect_stats {
                    self.stats.add_block(kind);
                }
                true
            }
        }
    }

    fn block_css(&self, block: &ContentBlock, styles: &DefaultStyles) -> Vec<String> {
        let defaults = styles.get(block.kind());
        let style = match block.style() {
            Some(style) => style.over(&defaults.style),
            None => defaults.style,
        };
        let meta = block.metadata();

        let mut css = style.css_declarations();
        let top = meta.margin_top.unwrap_or(defaults.margin_top);
        if top > 0.0 {
            css.push(format!("margin-top: {}pt", top));
        }
        let bottom = meta.margin_bottom.unwrap_or(defaults.margin_bottom);
        if bottom > 0.0 {
            css.push(format!("margin-bottom: {}pt", bottom));
        }
        if meta.indent_level > 0 {
            let px = meta.indent_level as u32 * self.options.indent_px;
            css.push(format!("margin-inline-start: {}px", px));
        }
        if meta.page_break_before {
            css.push("break-before: page".to_string());
        }
        if meta.keep_with_next {
            css.push("break-after: avoid".to_string());
        }
        css
    }

    fn render_text_block(&self, output: &mut String, kind: BlockKind, text: &str, mut css: Vec<String>) {
        let dir = if is_ltr(text) { " dir=\"ltr\"" } else { "" };

        let (open, close) = match kind {
            BlockKind::Heading1 => ("<h1".to_string(), "</h1>"),
            BlockKind::Heading2 => ("<h2".to_string(), "</h2>"),
            BlockKind::Heading3 => ("<h3".to_string(), "</h3>"),
            BlockKind::Heading4 => ("<h4".to_string(), "</h4>"),
            BlockKind::Quote => ("<blockquote".to_string(), "</blockquote>"),
            BlockKind::Signature => {
                css.insert(0, "white-space: pre-wrap".to_string());
                ("<div class=\"signature\"".to_string(), "</div>")
            }
            _ => ("<p".to_string(), "</p>"),
        };

        output.push_str(&open);
        output.push_str(dir);
        output.push_str(&style_attr(&css));
        output.push('>');
        output.push_str(&escape_html(text));
        output.push_str(close);
        output.push('\n');
    }

    fn render_table(
        &mut self,
        output: &mut String,
        table: &TableContent,
        mut css: Vec<String>,
        ctx: &ResolutionContext,
    ) {
        css.push("border-collapse: collapse".to_string());
        output.push_str(&format!("<table{}>\n", style_attr(&css)));

        if let Some(widths) = table.column_widths() {
            output.push_str("<colgroup>");
            for width in widths {
                output.push_str(&format!("<col style=\"width: {}%\">", width));
            }
            output.push_str("</colgroup>\n");
        }

        for row in table.rows() {
            self.render_row(output, row, ctx);
        }

        output.push_str("</table>\n");
    }

    fn render_row(&mut self, output: &mut String, row: &TableRow, ctx: &ResolutionContext) {
        let tag = if row.is_header { "th" } else { "td" };
        output.push_str("<tr>");

        for cell in &row.cells {
            let text = self.resolve(&cell.text, ctx, true);

            let mut attrs = String::new();
            if cell.colspan > 1 {
                attrs.push_str(&format!(" colspan=\"{}\"", cell.colspan));
            }
            if cell.rowspan > 1 {
                attrs.push_str(&format!(" rowspan=\"{}\"", cell.rowspan));
            }

            let mut css = vec![format!("vertical-align: {}", cell.vertical_alignment.as_css())];
            let background = match cell.background {
                Some(ref color) => Some(color.as_str()),
                None if row.is_header => self.options.header_background.as_deref(),
                None => None,
            };
            if let Some(color) = background {
                css.push(format!("background-color: {}", color));
            }
            if let Some(ref style) = cell.style {
                css.extend(style.css_declarations());
            }

            output.push_str(&format!(
                "<{tag}{attrs}{}>{}</{tag}>",
                style_attr(&css),
                escape_html(&text)
            ));
        }

        output.push_str("</tr>\n");
    }

    #[allow(clippy::too_many_arguments)]
    fn render_list(
        &mut self,
        output: &mut String,
        items: &[ListItem],
        ordered: bool,
        numbering: NumberingStyle,
        start: u32,
        mut css: Vec<String>,
        ctx: &ResolutionContext,
    ) {
        let tag = if ordered { "ol" } else { "ul" };
        let mut attrs = String::new();
        if ordered {
            css.insert(0, format!("list-style-type: {}", numbering.as_css()));
            if start > 1 {
                attrs.push_str(&format!(" start=\"{}\"", start));
            }
        }
        output.push_str(&format!("<{tag}{attrs}{}>\n", style_attr(&css)));

        for item in items {
            if self.options.collect_stats {
                self.stats.add_list_item();
            }
            let text = self.resolve(&item.text, ctx, true);
            output.push_str("<li>");
            output.push_str(&escape_html(&text));
            if !item.children.is_empty() {
                output.push('\n');
                self.render_list(output, &item.children, ordered, numbering, 1, Vec::new(), ctx);
            }
            output.push_str("</li>\n");
        }

        output.push_str(&format!("</{tag}>\n"));
    }
}

fn article_open(page: &PageSettings, language: &str) -> String {
    let (width, height) = page.dimensions_mm();
    let m = page.margins;
    format!(
        "<article dir=\"rtl\" lang=\"{}\" data-page-size=\"{}\" data-orientation=\"{}\" \
         data-page-width=\"{}mm\" data-page-height=\"{}mm\" data-margins=\"{}mm {}mm {}mm {}mm\">\n",
        escape_html(language),
        page.size.name(),
        page.orientation.as_str(),
        width,
        height,
        m.top,
        m.right,
        m.bottom,
        m.left
    )
}

fn style_attr(css: &[String]) -> String {
    if css.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape_html(&css.join("; ")))
    }
}

fn count_placeholders(text: &str) -> usize {
    parse(text)
        .iter()
        .filter(|s| matches!(s, Segment::Placeholder { .. }))
        .count()
}

/// Check whether text's base direction is left-to-right (first strong
/// character is L). Text with no strong characters follows the document.
pub fn is_ltr(text: &str) -> bool {
    text.chars()
        .find_map(|c| match bidi_class(c) {
            BidiClass::L => Some(true),
            BidiClass::R | BidiClass::AL => Some(false),
            _ => None,
        })
        .unwrap_or(false)
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;
    use crate::model::{BlockMetadata, ListContent, TableCell, TextStyle};

    fn render(doc: &DocumentStructure, ctx: &ResolutionContext) -> String {
        let options = RenderOptions::default().with_article(false);
        to_html(doc, ctx, &options).unwrap()
    }

    fn ctx() -> ResolutionContext {
        ResolutionContext::new(Gender::Female).with_value("name", "רחל")
    }

    // ====== Text blocks ======

    #[test]
    fn test_paragraph_resolved_and_escaped() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::paragraph("המנוח {{name}} עשה <צוואה>"));
        let html = render(&doc, &ctx());
        assert!(html.contains("המנוחה רחל עשתה &lt;צוואה&gt;"));
        assert!(html.starts_with("<p"));
    }

    #[test]
    fn test_heading_levels() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::heading(1, "צוואה").unwrap())
            .with_block(ContentBlock::heading(4, "סעיף").unwrap());
        let html = render(&doc, &ctx());
        assert!(html.contains("<h1 style=\"font-weight: bold; font-size: 18pt"));
        assert!(html.contains(">סעיף</h4>"));
    }

    #[test]
    fn test_ltr_block_marked() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::paragraph("Last Will and Testament"))
            .with_block(ContentBlock::paragraph("123 צוואה"));
        let html = render(&doc, &ctx());
        assert_eq!(html.matches("dir=\"ltr\"").count(), 1);
    }

    #[test]
    fn test_signature_keeps_line_breaks() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::signature("חתימה: ______\nתאריך: ______"));
        let html = render(&doc, &ctx());
        assert!(html.contains("white-space: pre-wrap"));
        assert!(html.contains("חתימה: ______\nתאריך: ______"));
    }

    #[test]
    fn test_style_and_indent() {
        let block = ContentBlock::paragraph("טקסט")
            .with_style(TextStyle::new().underline().with_color("#333"))
            .with_metadata(BlockMetadata::new().with_indent(2));
        let doc = DocumentStructure::new().with_block(block);
        let html = render(&doc, &ctx());
        assert!(html.contains("text-decoration: underline"));
        assert!(html.contains("color: #333"));
        assert!(html.contains("text-align: justify"));
        assert!(html.contains("margin-inline-start: 48px"));
    }

    // ====== Structures ======

    #[test]
    fn test_table_cells() {
        let table = TableContent::new(vec![
            TableRow::from_strings(["שם", "חלק"]).as_header(),
            TableRow::new(vec![
                TableCell::text("{{name}}").with_background("#fff"),
                TableCell::text("מחצית").colspan(1),
            ]),
        ])
        .unwrap();
        let doc = DocumentStructure::new().with_block(ContentBlock::table(table));
        let html = render(&doc, &ctx());

        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<td ").count(), 2);
        assert!(html.contains("background-color: #f2f2f2"));
        assert!(html.contains(">רחל</td>"));
    }

    #[test]
    fn test_nested_list() {
        let list = ListContent::new(vec![
            ListItem::new("ראשון").with_child(ListItem::new("משנה")),
            ListItem::new("שני"),
        ])
        .with_numbering(NumberingStyle::Hebrew)
        .with_start(3);
        let doc = DocumentStructure::new().with_block(ContentBlock::numbered_list(list));
        let html = render(&doc, &ctx());

        assert!(html.contains("<ol start=\"3\" style=\"list-style-type: hebrew\">"));
        assert_eq!(html.matches("<ol").count(), 2);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn test_markers() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::rule())
            .with_block(ContentBlock::page_break());
        let html = render(&doc, &ctx());
        assert!(html.contains("<hr>"));
        assert!(html.contains("<div class=\"page-break\" style=\"break-after: page\"></div>"));
    }

    // ====== Document wrapper ======

    #[test]
    fn test_article_header_footer() {
        let doc = DocumentStructure::new()
            .with_page(
                PageSettings::new()
                    .with_header("צוואת {{name}}")
                    .with_footer("עמוד"),
            )
            .with_block(ContentBlock::paragraph("x"));
        let html = to_html(&doc, &ctx(), &RenderOptions::default()).unwrap();

        assert!(html.starts_with("<article dir=\"rtl\" lang=\"he\" data-page-size=\"A4\""));
        assert!(html.contains("<header>צוואת רחל</header>"));
        assert!(html.ends_with("<footer>עמוד</footer>\n</article>"));
    }

    #[test]
    fn test_deterministic() {
        let doc = DocumentStructure::new().with_block(ContentBlock::paragraph("הוא {{name}}"));
        assert_eq!(render(&doc, &ctx()), render(&doc, &ctx()));
    }

    // ====== Visitors and stats ======

    struct DropQuotes;

    impl BlockVisitor for DropQuotes {
        fn visit_text(&mut self, kind: BlockKind, _text: &str) -> VisitorAction {
            if kind == BlockKind::Quote {
                VisitorAction::Skip
            } else {
                VisitorAction::Continue
            }
        }
    }

    #[test]
    fn test_visitor_skip() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::quote("ציטוט"))
            .with_block(ContentBlock::paragraph("פסקה"));
        let html = HtmlRenderer::new(RenderOptions::default().with_article(false))
            .with_visitor(DropQuotes)
            .render(&doc, &ctx())
            .unwrap();
        assert!(!html.contains("blockquote"));
        assert!(html.contains("פסקה"));
    }

    #[test]
    fn test_stats() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::heading(1, "כותרת").unwrap())
            .with_block(ContentBlock::paragraph("{{name}} {{missing}}"))
            .with_block(ContentBlock::bulleted_list(ListContent::from_strings(["א", "ב"])));
        let result = to_html_with_stats(&doc, &ctx(), &RenderOptions::default()).unwrap();

        assert_eq!(result.stats.block_count, 3);
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.list_item_count, 2);
        assert_eq!(result.stats.unresolved_count, 1);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#39;");
    }
}
