//! Plain text preview rendering.

use crate::error::Result;
use crate::model::{item_number, BlockContent, BlockKind, DocumentStructure, ListItem, NumberingStyle};
use crate::template::{ResolutionContext, TemplateResolver};

use super::RenderOptions;

/// Convert a document to a plain-text preview.
///
/// Text is resolved the same way as for HTML. Ordered list markers are
/// computed (`1.`, `א׳`, `iv.`); tables become tab-separated rows.
pub fn to_text(
    doc: &DocumentStructure,
    ctx: &ResolutionContext,
    options: &RenderOptions,
) -> Result<String> {
    to_text_with(&TemplateResolver::default(), doc, ctx, options)
}

/// Convert a document to plain text using a specific resolver.
pub fn to_text_with(
    resolver: &TemplateResolver,
    doc: &DocumentStructure,
    ctx: &ResolutionContext,
    options: &RenderOptions,
) -> Result<String> {
    let mut parts: Vec<String> = Vec::new();

    if options.include_header_footer {
        if let Some(ref header) = doc.page.header {
            parts.push(resolver.resolve(header, ctx));
        }
    }

    for block in doc.blocks() {
        let indent = "  ".repeat(block.metadata().indent_level as usize);
        let text = match block.content() {
            BlockContent::Text(text) => {
                let resolved = resolver.resolve(text, ctx);
                match block.kind() {
                    BlockKind::Quote => prefix_lines(&resolved, &format!("{}    ", indent)),
                    BlockKind::Signature => resolved,
                    _ => prefix_lines(&resolved, &indent),
                }
            }
            BlockContent::Table(table) => table
                .rows()
                .iter()
                .map(|row| {
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .map(|c| resolver.resolve(&c.text, ctx))
                        .collect();
                    format!("{}{}", indent, cells.join("\t"))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            BlockContent::List(list) => {
                let ordered = block.kind() == BlockKind::NumberedList;
                let numbering = block.metadata().list_style.unwrap_or(list.numbering);
                let mut lines = Vec::new();
                let marker = |n: u32| {
                    if ordered {
                        list_marker(numbering, n)
                    } else {
                        options.list_marker.to_string()
                    }
                };
                push_items(resolver, ctx, &list.items, list.start, 0, &indent, &marker, &mut lines);
                lines.join("\n")
            }
            BlockContent::Empty => match block.kind() {
                BlockKind::PageBreak => "\u{000C}".to_string(),
                _ => "----------".to_string(),
            },
        };
        parts.push(text);
    }

    if options.include_header_footer {
        if let Some(ref footer) = doc.page.footer {
            parts.push(resolver.resolve(footer, ctx));
        }
    }

    Ok(parts.join("\n\n").trim().to_string())
}

/// Marker for the `n`th item of an ordered list.
pub fn list_marker(numbering: NumberingStyle, n: u32) -> String {
    match numbering {
        // gematria numerals already carry geresh or gershayim
        NumberingStyle::Hebrew => numbering.format(n),
        _ => format!("{}.", numbering.format(n)),
    }
}

#[allow(clippy::too_many_arguments)]
fn push_items(
    resolver: &TemplateResolver,
    ctx: &ResolutionContext,
    items: &[ListItem],
    start: u32,
    depth: usize,
    indent: &str,
    marker: &dyn Fn(u32) -> String,
    lines: &mut Vec<String>,
) {
    for (i, item) in items.iter().enumerate() {
        lines.push(format!(
            "{}{}{} {}",
            indent,
            "  ".repeat(depth),
            marker(item_number(start, i)),
            resolver.resolve(&item.text, ctx)
        ));
        push_items(resolver, ctx, &item.children, 1, depth + 1, indent, marker, lines);
    }
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;
    use crate::model::{ContentBlock, ListContent, TableContent};

    fn ctx() -> ResolutionContext {
        ResolutionContext::new(Gender::Plural).with_value("name", "משפחת כהן")
    }

    #[test]
    fn test_to_text() {
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::heading(1, "צוואה").unwrap())
            .with_block(ContentBlock::paragraph("{{name}} הוא היורש"));

        let result = to_text(&doc, &ctx(), &RenderOptions::default()).unwrap();
        assert_eq!(result, "צוואה\n\nמשפחת כהן הם היורשים");
    }

    #[test]
    fn test_hebrew_list_markers() {
        let list = ListContent::from_strings(["א", "ב"])
            .with_numbering(NumberingStyle::Hebrew)
            .with_start(15);
        let doc = DocumentStructure::new().with_block(ContentBlock::numbered_list(list));

        let result = to_text(&doc, &ctx(), &RenderOptions::default()).unwrap();
        assert_eq!(result, "ט״ו א\nט״ז ב");
    }

    #[test]
    fn test_numbering_saturates_at_max_start() {
        let json = r#"{"items": [{"text": "א"}, {"text": "ב"}], "start": 4294967295}"#;
        let list: ListContent = serde_json::from_str(json).unwrap();
        let doc = DocumentStructure::new().with_block(ContentBlock::numbered_list(list));

        let result = to_text(&doc, &ctx(), &RenderOptions::default()).unwrap();
        assert_eq!(result, "4294967295. א\n4294967295. ב");
    }

    #[test]
    fn test_nested_roman_and_bullets() {
        let list = ListContent::new(vec![
            ListItem::new("one").with_child(ListItem::new("sub")),
            ListItem::new("two"),
        ])
        .with_numbering(NumberingStyle::LowerRoman);
        let doc = DocumentStructure::new()
            .with_block(ContentBlock::numbered_list(list))
            .with_block(ContentBlock::bulleted_list(ListContent::from_strings(["x"])));

        let options = RenderOptions::default().with_list_marker('-');
        let result = to_text(&doc, &ctx(), &options).unwrap();
        assert_eq!(result, "i. one\n  i. sub\nii. two\n\n- x");
    }

    #[test]
    fn test_table_rows() {
        let table = TableContent::with_header(["שם", "ת\"ז"], [["{{name}}", "123"]]).unwrap();
        let doc = DocumentStructure::new().with_block(ContentBlock::table(table));
        let result = to_text(&doc, &ctx(), &RenderOptions::default()).unwrap();
        assert_eq!(result, "שם\tת\"ז\nמשפחת כהן\t123");
    }

    #[test]
    fn test_list_marker() {
        assert_eq!(list_marker(NumberingStyle::Decimal, 3), "3.");
        assert_eq!(list_marker(NumberingStyle::UpperAlpha, 2), "B.");
        assert_eq!(list_marker(NumberingStyle::Hebrew, 1), "א׳");
    }
}
