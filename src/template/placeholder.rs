//! Placeholder grammar.
//!
//! ```text
//! {{name}}                      simple variable
//! {{gender:הוא|היא|הם}}         inline forms (male|female|plural[|organization])
//! {{@heir1:יורש}}               lemma inflected with the gender bound to `heir1`
//! ```
//!
//! Placeholders never nest and there is no escape for a literal `{{`. A
//! `{{...}}` whose body matches none of the forms is left as plain text.

use crate::gender::Gender;
use std::collections::HashMap;

const INLINE_PREFIX: &str = "gender:";

/// The three tri-form or four-form literal choices of an inline placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineForms {
    /// Masculine form
    pub male: String,
    /// Feminine form
    pub female: String,
    /// Plural form
    pub plural: String,
    /// Optional organization form (falls back to plural)
    pub organization: Option<String>,
}

impl InlineForms {
    /// Pick the literal matching `gender`.
    pub fn select(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Plural => &self.plural,
            Gender::Organization => self.organization.as_deref().unwrap_or(&self.plural),
        }
    }
}

/// A parsed placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{name}}`
    Variable(String),

    /// `{{gender:m|f|p}}` or `{{gender:m|f|p|o}}`
    InlineForms(InlineForms),

    /// `{{@tag:lemma}}`
    Override {
        /// Slot tag looked up in the override map
        tag: String,
        /// Lexicon lemma to inflect
        word: String,
    },
}

impl Placeholder {
    /// Parse the text between `{{` and `}}`.
    pub fn parse_body(body: &str) -> Option<Self> {
        let body = body.trim();

        if let Some(rest) = body.strip_prefix(INLINE_PREFIX) {
            let forms: Vec<&str> = rest.split('|').map(str::trim).collect();
            return match forms.as_slice() {
                [m, f, p] => Some(Placeholder::InlineForms(InlineForms {
                    male: m.to_string(),
                    female: f.to_string(),
                    plural: p.to_string(),
                    organization: None,
                })),
                [m, f, p, o] => Some(Placeholder::InlineForms(InlineForms {
                    male: m.to_string(),
                    female: f.to_string(),
                    plural: p.to_string(),
                    organization: Some(o.to_string()),
                })),
                _ => None,
            };
        }

        if let Some(rest) = body.strip_prefix('@') {
            let (tag, word) = rest.split_once(':')?;
            let (tag, word) = (tag.trim(), word.trim());
            if tag.is_empty() || word.is_empty() || tag.contains(char::is_whitespace) {
                return None;
            }
            return Some(Placeholder::Override {
                tag: tag.to_string(),
                word: word.to_string(),
            });
        }

        if is_identifier(body) {
            return Some(Placeholder::Variable(body.to_string()));
        }

        None
    }

    /// Variable name, if this is a simple variable.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Placeholder::Variable(name) => Some(name),
            _ => None,
        }
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text (may contain `{{` that did not form a placeholder)
    Text(&'a str),

    /// A recognized placeholder
    Placeholder {
        /// Parsed form
        placeholder: Placeholder,
        /// The exact source text, braces included
        raw: &'a str,
    },
}

/// Check whether `s` is a valid variable name.
///
/// A letter or `_`, followed by letters, digits or `_`. Hebrew letters count.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Split a template into text and placeholder segments.
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(rel) = template[pos..].find("{{") {
        let open = pos + rel;
        let body_start = open + 2;
        let Some(close_rel) = template[body_start..].find("}}") else {
            break;
        };
        let close = body_start + close_rel;
        let body = &template[body_start..close];

        if body.contains('{') {
            // "{{{x}}": retry from the next brace
            pos = open + 1;
            continue;
        }

        match Placeholder::parse_body(body) {
            Some(placeholder) => {
                if open > text_start {
                    segments.push(Segment::Text(&template[text_start..open]));
                }
                segments.push(Segment::Placeholder {
                    placeholder,
                    raw: &template[open..close + 2],
                });
                text_start = close + 2;
                pos = text_start;
            }
            None => pos = close + 2,
        }
    }

    if text_start < template.len() {
        segments.push(Segment::Text(&template[text_start..]));
    }

    segments
}

/// Names of all simple variables used in a template, in first-use order.
pub fn variables(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(template) {
        if let Segment::Placeholder { placeholder, .. } = segment {
            if let Some(name) = placeholder.variable_name() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}

/// Replace `{{name}}` tokens with values from `values`.
///
/// Names missing from `values` stay as the literal token. Substituted values
/// are never rescanned. Other placeholder forms are left untouched.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder {
                placeholder: Placeholder::Variable(name),
                raw,
            } => out.push_str(values.get(&name).map(String::as_str).unwrap_or(raw)),
            Segment::Placeholder { raw, .. } => out.push_str(raw),
        }
    }
    out
}

/// Resolve `{{gender:...}}` placeholders for `gender`, leaving everything
/// else untouched.
pub fn resolve_inline(text: &str, gender: Gender) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in parse(text) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder {
                placeholder: Placeholder::InlineForms(forms),
                ..
            } => out.push_str(forms.select(gender)),
            Segment::Placeholder { raw, .. } => out.push_str(raw),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_variable() {
        let segments = parse("שלום {{name}}!");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Text("שלום "));
        assert!(matches!(
            &segments[1],
            Segment::Placeholder { placeholder: Placeholder::Variable(n), raw } if n == "name" && *raw == "{{name}}"
        ));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(variables("{{ name }}"), vec!["name"]);
    }

    #[test]
    fn test_parse_inline_forms() {
        let placeholder = Placeholder::parse_body("gender:הוא|היא|הם").unwrap();
        let Placeholder::InlineForms(forms) = placeholder else {
            panic!("expected inline forms");
        };
        assert_eq!(forms.select(Gender::Female), "היא");
        assert_eq!(forms.select(Gender::Organization), "הם");
    }

    #[test]
    fn test_parse_four_form_inline() {
        let Some(Placeholder::InlineForms(forms)) =
            Placeholder::parse_body("gender:הוא|היא|הם|החברה")
        else {
            panic!("expected inline forms");
        };
        assert_eq!(forms.select(Gender::Organization), "החברה");
    }

    #[test]
    fn test_inline_forms_allow_empty_suffix() {
        assert_eq!(resolve_inline("המנוח{{gender:|ה|ים}}", Gender::Female), "המנוחה");
        assert_eq!(resolve_inline("המנוח{{gender:|ה|ים}}", Gender::Male), "המנוח");
    }

    #[test]
    fn test_parse_override() {
        let placeholder = Placeholder::parse_body("@heir1:יורש").unwrap();
        assert_eq!(
            placeholder,
            Placeholder::Override {
                tag: "heir1".to_string(),
                word: "יורש".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_bodies_are_text() {
        assert!(Placeholder::parse_body("gender:a|b").is_none());
        assert!(Placeholder::parse_body("first name").is_none());
        assert!(Placeholder::parse_body("@:word").is_none());
        assert!(Placeholder::parse_body("1abc").is_none());

        let segments = parse("{{first name}}");
        assert_eq!(segments, vec![Segment::Text("{{first name}}")]);
    }

    #[test]
    fn test_triple_brace() {
        let segments = parse("{{{x}}}");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Text("{"));
        assert_eq!(segments[2], Segment::Text("}"));
    }

    #[test]
    fn test_unterminated_is_text() {
        assert_eq!(parse("abc {{name"), vec![Segment::Text("abc {{name")]);
    }

    #[test]
    fn test_substitute() {
        assert_eq!(
            substitute("שלום {{name}}", &values(&[("name", "דוד")])),
            "שלום דוד"
        );
        assert_eq!(substitute("שלום {{name}}", &HashMap::new()), "שלום {{name}}");
    }

    #[test]
    fn test_substitute_repeated_name() {
        let out = substitute("{{a}} ו-{{a}}", &values(&[("a", "x")]));
        assert_eq!(out, "x ו-x");
    }

    #[test]
    fn test_substitute_single_pass() {
        let out = substitute("{{a}}", &values(&[("a", "{{b}}"), ("b", "boom")]));
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn test_substitute_leaves_other_forms() {
        let text = "{{gender:הוא|היא|הם}} {{@x:יורש}}";
        assert_eq!(substitute(text, &HashMap::new()), text);
    }

    #[test]
    fn test_hebrew_identifier() {
        assert!(is_identifier("שם_המנוח"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_variables_first_use_order() {
        assert_eq!(variables("{{b}} {{a}} {{b}}"), vec!["b", "a"]);
    }
}
