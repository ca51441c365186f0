//! Unicode-aware word tokenizer for Hebrew text.
//!
//! Words are maximal runs of letters, digits and combining marks (niqqud and
//! cantillation are combining marks). Geresh/gershayim and their ASCII
//! stand-ins are word-internal only when both neighbours are word
//! characters, so `עו"ד` is one word while `"המנוח"` is a quoted word.
//! Maqaf and hyphen always separate.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A word
    Word,
    /// Whitespace, punctuation or anything between words
    Separator,
}

/// A slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token kind
    pub kind: TokenKind,
    /// Token text, borrowed from the input
    pub text: &'a str,
    /// Byte offset of the token in the input
    pub start: usize,
}

impl Token<'_> {
    /// Check if this is a word token.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this is a whitespace-only separator.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Separator && self.text.chars().all(char::is_whitespace)
    }

    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Check if a character can be part of a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '"' | '\u{05F3}' | '\u{05F4}' | '\u{2019}')
}

/// Split text into alternating word and separator tokens.
///
/// Concatenating the token texts reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        let kind = if is_word_char(c) {
            TokenKind::Word
        } else if is_joiner(c)
            && current == Some(TokenKind::Word)
            && chars.get(i + 1).is_some_and(|&(_, next)| is_word_char(next))
        {
            TokenKind::Word
        } else {
            TokenKind::Separator
        };

        match current {
            Some(k) if k == kind => {}
            Some(k) => {
                tokens.push(Token {
                    kind: k,
                    text: &text[start..offset],
                    start,
                });
                start = offset;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token {
            kind,
            text: &text[start..],
            start,
        });
    }

    tokens
}

/// Normalize a lemma or word for lexicon lookup: NFC, whitespace collapsed
/// to single spaces.
pub fn normalize_key(s: &str) -> String {
    let nfc: String = s.nfc().collect();
    nfc.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text)
            .into_iter()
            .filter(|t| t.is_word())
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_tokenize_round_trip() {
        let text = "המנוח, עו\"ד כהן; \"הוא\" הלך-לביתו.";
        let joined: String = tokenize(text).iter().map(|t| t.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_tokenize_hebrew_words() {
        assert_eq!(words("המנוח עשה צוואה"), vec!["המנוח", "עשה", "צוואה"]);
    }

    #[test]
    fn test_gershayim_inside_word() {
        assert_eq!(words("עו\"ד כהן"), vec!["עו\"ד", "כהן"]);
        assert_eq!(words("ת״ז 123"), vec!["ת״ז", "123"]);
    }

    #[test]
    fn test_quotes_around_word_separate() {
        assert_eq!(words("\"המנוח\""), vec!["המנוח"]);
        assert_eq!(words("'לו'"), vec!["לו"]);
    }

    #[test]
    fn test_maqaf_and_hyphen_separate() {
        assert_eq!(words("בית־משפט"), vec!["בית", "משפט"]);
        assert_eq!(words("שלו-עצמו"), vec!["שלו", "עצמו"]);
    }

    #[test]
    fn test_niqqud_stays_in_word() {
        // shin with shin dot and qamats
        let text = "שָׁלוֹם עולם";
        assert_eq!(words(text).len(), 2);
    }

    #[test]
    fn test_token_offsets() {
        let tokens = tokenize("אב אם");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].start, "אב".len());
        assert!(tokens[1].is_whitespace());
        assert_eq!(tokens[2].end(), "אב אם".len());
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  בא   כוחו "), "בא כוחו");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
