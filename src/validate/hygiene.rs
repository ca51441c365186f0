//! Raw-body scans for syntax that bypasses the placeholder grammar.

use crate::template::{parse, Segment};
use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    slash_suffix: Regex,
    paren_suffix: Regex,
    double_brace: Regex,
    single_brace: Regex,
    double_bracket: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        // two-letter minimum on the left keeps "ו/או" out
        slash_suffix: Regex::new(r"[א-ת]{2,}/[א-ת]{1,3}\b").expect("valid pattern"),
        paren_suffix: Regex::new(r"[א-ת]+\([א-ת]{1,3}\)").expect("valid pattern"),
        double_brace: Regex::new(r"\{\{[^{}]*\}\}").expect("valid pattern"),
        single_brace: Regex::new(r"\{[^{}]*\}").expect("valid pattern"),
        double_bracket: Regex::new(r"\[\[[^\[\]]*\]\]").expect("valid pattern"),
    })
}

/// Find ad-hoc gender suffixes (`עשה/תה`, `המנוח(ה)`) in template text.
///
/// Placeholders are skipped, so inline forms never match.
pub fn legacy_markers(body: &str) -> Vec<String> {
    let p = patterns();
    let mut found = Vec::new();
    for text in text_segments(body) {
        for re in [&p.slash_suffix, &p.paren_suffix] {
            found.extend(re.find_iter(text).map(|m| m.as_str().to_string()));
        }
    }
    found
}

/// Find placeholder-like text the grammar does not recognize.
///
/// Reports `{{..}}` bodies that are not placeholders, single-brace
/// `{name}`, `[[name]]`, and an unterminated `{{`.
pub fn stale_placeholders(body: &str) -> Vec<String> {
    let p = patterns();
    let mut found = Vec::new();
    for text in text_segments(body) {
        found.extend(p.double_brace.find_iter(text).map(|m| m.as_str().to_string()));
        let rest = p.double_brace.replace_all(text, " ");

        found.extend(p.double_bracket.find_iter(&rest).map(|m| m.as_str().to_string()));

        if let Some(pos) = rest.find("{{") {
            let tail: String = rest[pos..].chars().take(24).collect();
            found.push(tail);
        } else {
            found.extend(p.single_brace.find_iter(&rest).map(|m| m.as_str().to_string()));
        }
    }
    found
}

fn text_segments(body: &str) -> impl Iterator<Item = &str> {
    parse(body).into_iter().filter_map(|segment| match segment {
        Segment::Text(text) => Some(text),
        Segment::Placeholder { .. } => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_markers() {
        assert_eq!(legacy_markers("המצווה עשה/תה צוואה"), vec!["עשה/תה"]);
        assert_eq!(legacy_markers("המנוח(ה) ציווה"), vec!["המנוח(ה)"]);
        assert!(legacy_markers("בנו ו/או בתו").is_empty());
        assert!(legacy_markers("{{gender:עשה|עשתה|עשו}}").is_empty());
    }

    #[test]
    fn test_stale_placeholders() {
        assert_eq!(stale_placeholders("שלום {name}"), vec!["{name}"]);
        assert_eq!(stale_placeholders("שלום [[name]]"), vec!["[[name]]"]);
        assert_eq!(stale_placeholders("שלום {{first name}}"), vec!["{{first name}}"]);
        assert_eq!(stale_placeholders("שלום {{name"), vec!["{{name"]);
        assert!(stale_placeholders("שלום {{name}} {{gender:א|ב|ג}}").is_empty());
    }
}
