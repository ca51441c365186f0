//! Whole-text gender agreement.
//!
//! Matching runs over word tokens, left to right. At each word the longest
//! lemma (by word count) wins; at equal length an exact key beats a key
//! reached by stripping the definite article `ה`. Replaced text is appended
//! to the output and never scanned again. A word that runs straight into a
//! placeholder (`המנוח{{gender:|ה|ים}}`) is only part of a longer word and is
//! left alone.

use super::tokenizer::{normalize_key, tokenize, Token};
use super::{Gender, Lexicon, LexiconRegistry};
use crate::template::{parse, Placeholder, Segment};
use log::trace;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// The Hebrew definite article.
pub const ARTICLE: char = 'ה';

/// Gender agreement engine over one lexicon snapshot.
#[derive(Debug, Clone)]
pub struct GenderEngine {
    lexicon: Arc<Lexicon>,
}

impl GenderEngine {
    /// Create an engine over a lexicon snapshot.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Create an engine over the registry's current lexicon.
    pub fn from_registry(registry: &LexiconRegistry) -> Self {
        Self::new(registry.snapshot())
    }

    /// Create an engine over the built-in Hebrew lexicon.
    ///
    /// The built-in table is immutable and shared by every such engine.
    pub fn hebrew() -> Self {
        static BUILTIN: OnceLock<Arc<Lexicon>> = OnceLock::new();
        Self::new(BUILTIN.get_or_init(|| Arc::new(Lexicon::hebrew())).clone())
    }

    /// The lexicon this engine reads.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Rewrite every lexicon lemma in `text` to its `gender` form.
    ///
    /// Placeholders are copied through untouched; unknown words are kept.
    pub fn resolve(&self, text: &str, gender: Gender) -> String {
        let mut out = String::with_capacity(text.len());
        let segments = parse(text);
        for (k, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Text(text) => {
                    self.rewrite_into(text, gender, Glue::around(&segments, k), &mut out)
                }
                Segment::Placeholder { raw, .. } => out.push_str(raw),
            }
        }
        out
    }

    /// Resolve `{{@tag:lemma}}` placeholders using the gender bound to each tag.
    ///
    /// A tag missing from `overrides` may name a gender directly
    /// (`{{@female:יורש}}`). Unbound tags and unknown lemmas stay literal.
    /// The rest of the text is not touched.
    pub fn resolve_with_overrides(&self, text: &str, overrides: &HashMap<String, Gender>) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in parse(text) {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder {
                    placeholder: Placeholder::Override { tag, word },
                    raw,
                } => match self.resolve_override(&tag, &word, overrides) {
                    Some(form) => out.push_str(&form),
                    None => out.push_str(raw),
                },
                Segment::Placeholder { raw, .. } => out.push_str(raw),
            }
        }
        out
    }

    /// Inflect a single lemma (optionally with the definite article).
    pub fn inflect(&self, word: &str, gender: Gender) -> Option<String> {
        self.lookup(&normalize_key(word), gender)
    }

    pub(crate) fn resolve_override(
        &self,
        tag: &str,
        word: &str,
        overrides: &HashMap<String, Gender>,
    ) -> Option<String> {
        let gender = match overrides.get(tag) {
            Some(gender) => *gender,
            None => tag.parse().ok()?,
        };
        self.inflect(word, gender)
    }

    /// Rewrite plain text (no placeholder handling) into `out`.
    ///
    /// An edge word glued to a placeholder is never matched.
    pub(crate) fn rewrite_into(&self, text: &str, gender: Gender, glue: Glue, out: &mut String) {
        let tokens = tokenize(text);
        let max_words = self.lexicon.max_words().max(1);
        let mut replaced = 0usize;

        let first = usize::from(glue.before && tokens.first().is_some_and(Token::is_word));
        let usable = if glue.after && tokens.last().is_some_and(Token::is_word) {
            tokens.len() - 1
        } else {
            tokens.len()
        };
        let matchable = &tokens[..usable.max(first)];

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.is_word() && i >= first && i < matchable.len() {
                if let Some((form, next)) = self.match_at(matchable, i, gender, max_words) {
                    out.push_str(&form);
                    replaced += 1;
                    i = next;
                    continue;
                }
            }
            out.push_str(token.text);
            i += 1;
        }

        if replaced > 0 {
            trace!("gender {}: replaced {} lemma(s)", gender, replaced);
        }
    }

    /// Find the longest lemma starting at word token `i`.
    ///
    /// Returns the replacement and the index of the first unconsumed token.
    fn match_at(
        &self,
        tokens: &[Token<'_>],
        i: usize,
        gender: Gender,
        max_words: usize,
    ) -> Option<(String, usize)> {
        let mut words = vec![tokens[i].text];
        let mut ends = vec![i + 1];
        let mut j = i + 1;

        while words.len() < max_words {
            match (tokens.get(j), tokens.get(j + 1)) {
                (Some(sep), Some(word)) if sep.is_whitespace() && word.is_word() => {
                    words.push(word.text);
                    ends.push(j + 2);
                    j += 2;
                }
                _ => break,
            }
        }

        for n in (1..=words.len()).rev() {
            let key = normalize_key(&words[..n].join(" "));
            if let Some(form) = self.lookup(&key, gender) {
                return Some((form, ends[n - 1]));
            }
        }
        None
    }

    fn lookup(&self, key: &str, gender: Gender) -> Option<String> {
        if let Some(entry) = self.lexicon.lookup_normalized(key) {
            return Some(entry.form(gender).to_string());
        }

        let stripped = key.strip_prefix(ARTICLE)?;
        if stripped.is_empty() || stripped.starts_with(' ') {
            return None;
        }
        let entry = self.lexicon.lookup_normalized(stripped)?;
        if !entry.takes_article {
            return None;
        }
        Some(format!("{}{}", ARTICLE, entry.form(gender)))
    }
}

/// Whether a text segment touches a placeholder on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Glue {
    pub before: bool,
    pub after: bool,
}

impl Glue {
    /// Glue for the text segment at `k`.
    pub(crate) fn around(segments: &[Segment<'_>], k: usize) -> Self {
        let is_placeholder = |s: Option<&Segment<'_>>| matches!(s, Some(Segment::Placeholder { .. }));
        Self {
            before: k > 0 && is_placeholder(segments.get(k - 1)),
            after: is_placeholder(segments.get(k + 1)),
        }
    }
}

impl Default for GenderEngine {
    fn default() -> Self {
        Self::hebrew()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::GenderedEntry;

    fn engine() -> GenderEngine {
        GenderEngine::hebrew()
    }

    #[test]
    fn test_resolve_female_scenario() {
        assert_eq!(
            engine().resolve("המנוח עשה צוואה", Gender::Female),
            "המנוחה עשתה צוואה"
        );
    }

    #[test]
    fn test_resolve_plural_and_organization() {
        let engine = engine();
        assert_eq!(engine.resolve("הוא חתם", Gender::Plural), "הם חתמו");
        assert_eq!(engine.resolve("הוא חתם", Gender::Organization), "היא חתמה");
        assert_eq!(
            engine.resolve("המנוח עשה צוואה", Gender::Organization),
            "המנוחה עשתה צוואה"
        );
    }

    #[test]
    fn test_unknown_words_untouched() {
        let text = "צוואה זו נערכה בירושלים.";
        assert_eq!(engine().resolve(text, Gender::Female), text);
    }

    #[test]
    fn test_short_lemma_not_matched_inside_word() {
        let engine = engine();
        // "בו" and "לו" must not fire inside longer words
        assert_eq!(engine.resolve("בוקר טוב", Gender::Female), "בוקר טוב");
        assert_eq!(engine.resolve("לולאה", Gender::Female), "לולאה");
        assert_eq!(engine.resolve("נתן לו", Gender::Female), "נתן לה");
    }

    #[test]
    fn test_article_only_for_nominal_entries() {
        let engine = engine();
        assert_eq!(engine.resolve("היורש", Gender::Female), "היורשת");
        // "לו" does not take the article: "הלו" is left alone
        assert_eq!(engine.resolve("הלו", Gender::Female), "הלו");
    }

    #[test]
    fn test_multi_word_longest_match() {
        let engine = engine();
        assert_eq!(
            engine.resolve("החתום מטה מצהיר", Gender::Female),
            "החתומה מטה מצהירה"
        );
        assert_eq!(
            engine.resolve("מיופה כוח רשאי", Gender::Plural),
            "מיופי כוח רשאים"
        );
    }

    #[test]
    fn test_punctuation_preserved() {
        assert_eq!(
            engine().resolve("\"המנוח\", עשה.", Gender::Female),
            "\"המנוחה\", עשתה."
        );
    }

    #[test]
    fn test_placeholders_opaque_to_scan() {
        let text = "{{@x:הוא}} הוא {{הוא}}";
        assert_eq!(
            engine().resolve(text, Gender::Female),
            "{{@x:הוא}} היא {{הוא}}"
        );
    }

    #[test]
    fn test_single_pass_no_cascade() {
        let lexicon = Lexicon::empty()
            .with_entries([
                ("אלף", GenderedEntry::new("אלף", "בית", "אלפים")),
                ("בית", GenderedEntry::new("בית", "גימל", "בתים")),
            ])
            .unwrap();
        let engine = GenderEngine::new(Arc::new(lexicon));
        assert_eq!(engine.resolve("אלף בית", Gender::Female), "בית גימל");
    }

    #[test]
    fn test_resolve_with_overrides() {
        let engine = engine();
        let mut overrides = HashMap::new();
        overrides.insert("heir1".to_string(), Gender::Female);
        overrides.insert("heir2".to_string(), Gender::Plural);

        let text = "{{@heir1:היורש}} ו{{@heir2:יורש}}; הוא";
        assert_eq!(
            engine.resolve_with_overrides(text, &overrides),
            "היורשת ויורשים; הוא"
        );
    }

    #[test]
    fn test_override_with_gender_tag() {
        let out = engine().resolve_with_overrides("{{@female:נאמן}}", &HashMap::new());
        assert_eq!(out, "נאמנה");
    }

    #[test]
    fn test_unbound_override_stays_literal() {
        let text = "{{@unknown:יורש}} {{@heir:מילה}}";
        let mut overrides = HashMap::new();
        overrides.insert("heir".to_string(), Gender::Female);
        assert_eq!(engine().resolve_with_overrides(text, &overrides), text);
    }

    #[test]
    fn test_inflect() {
        let engine = engine();
        assert_eq!(engine.inflect("המבקש", Gender::Plural).as_deref(), Some("המבקשים"));
        assert_eq!(engine.inflect("שולחן", Gender::Plural), None);
    }

    #[test]
    fn test_word_glued_to_placeholder_untouched() {
        let engine = engine();
        assert_eq!(
            engine.resolve("המנוח{{x}} המנוח", Gender::Female),
            "המנוח{{x}} המנוחה"
        );
        assert_eq!(engine.resolve("{{x}}לו, לו", Gender::Plural), "{{x}}לו, להם");
        // multi-word lemma may not end on a glued word
        assert_eq!(
            engine.resolve("הוא בא כוחו{{x}}", Gender::Female),
            "היא בא כוחו{{x}}"
        );
    }
}
