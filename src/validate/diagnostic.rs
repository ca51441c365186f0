//! Validation diagnostics.

use crate::gender::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, template still passes
    Warning,
    /// Template fails
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A defect found in a section template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A declared variable was still a literal `{{name}}` after resolution
    UnresolvedVariable {
        /// Gender of the failing run
        gender: Gender,
        /// Variable name
        name: String,
    },

    /// Declared but never referenced in the body
    DeclaredButUnused {
        /// Variable name
        name: String,
    },

    /// Referenced in the body but not declared
    UsedButUndeclared {
        /// Variable name
        name: String,
    },

    /// Ad-hoc gender suffix such as `עשה/תה` or `המנוח(ה)`
    LegacyGenderMarker {
        /// Matched text
        text: String,
    },

    /// Placeholder-like text the grammar does not recognize
    StalePlaceholder {
        /// Matched text
        text: String,
    },

    /// Override whose word is not in the lexicon
    UnknownOverrideLemma {
        /// Override tag
        tag: String,
        /// Word that could not be inflected
        word: String,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnresolvedVariable { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Check if this diagnostic fails the template.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Short machine-friendly code.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::UnresolvedVariable { .. } => "unresolved_variable",
            Diagnostic::DeclaredButUnused { .. } => "declared_but_unused",
            Diagnostic::UsedButUndeclared { .. } => "used_but_undeclared",
            Diagnostic::LegacyGenderMarker { .. } => "legacy_gender_marker",
            Diagnostic::StalePlaceholder { .. } => "stale_placeholder",
            Diagnostic::UnknownOverrideLemma { .. } => "unknown_override_lemma",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedVariable { gender, name } => {
                write!(f, "variable '{}' left unresolved for {}", name, gender)
            }
            Diagnostic::DeclaredButUnused { name } => {
                write!(f, "variable '{}' is declared but never used", name)
            }
            Diagnostic::UsedButUndeclared { name } => {
                write!(f, "variable '{}' is used but not declared", name)
            }
            Diagnostic::LegacyGenderMarker { text } => {
                write!(f, "legacy gender marker '{}'", text)
            }
            Diagnostic::StalePlaceholder { text } => write!(f, "stale placeholder '{}'", text),
            Diagnostic::UnknownOverrideLemma { tag, word } => {
                write!(f, "override '@{}' names unknown word '{}'", tag, word)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        let unresolved = Diagnostic::UnresolvedVariable {
            gender: Gender::Female,
            name: "x".into(),
        };
        assert!(unresolved.is_error());
        assert!(!Diagnostic::DeclaredButUnused { name: "x".into() }.is_error());
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::UnresolvedVariable {
            gender: Gender::Plural,
            name: "heir".into(),
        };
        assert_eq!(d.to_string(), "variable 'heir' left unresolved for plural");
    }

    #[test]
    fn test_json_tag() {
        let d = Diagnostic::StalePlaceholder {
            text: "{name}".into(),
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"type":"stale_placeholder","text":"{name}"}"#);
    }
}
