//! Grammatical gender and lexicon entry types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical gender of a document subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Masculine singular (the lexicon's lemma form)
    #[default]
    Male,
    /// Feminine singular
    Female,
    /// Plural (mixed or multiple subjects)
    Plural,
    /// A company or other legal entity
    Organization,
}

impl Gender {
    /// All genders in declaration order.
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Plural,
        Gender::Organization,
    ];

    /// Lowercase English name, as used in placeholders and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Plural => "plural",
            Gender::Organization => "organization",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculine" | "זכר" => Ok(Gender::Male),
            "female" | "f" | "feminine" | "נקבה" => Ok(Gender::Female),
            "plural" | "p" | "רבים" => Ok(Gender::Plural),
            "organization" | "organisation" | "org" | "o" | "תאגיד" => {
                Ok(Gender::Organization)
            }
            _ => Err(Error::UnknownGender(s.to_string())),
        }
    }
}

fn default_takes_article() -> bool {
    true
}

/// The grammatical forms of a single lemma.
///
/// The male form is conventionally identical to the lemma itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderedEntry {
    /// Masculine singular form
    pub male: String,

    /// Feminine singular form
    pub female: String,

    /// Plural form
    pub plural: String,

    /// Organization form; falls back to `plural` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Whether the `ה`-prefixed (definite) variant of the lemma is matched too
    #[serde(default = "default_takes_article")]
    pub takes_article: bool,
}

impl GenderedEntry {
    /// Create an entry without an organization form.
    pub fn new(
        male: impl Into<String>,
        female: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            male: male.into(),
            female: female.into(),
            plural: plural.into(),
            organization: None,
            takes_article: true,
        }
    }

    /// Set the organization form and return self.
    pub fn with_organization(mut self, form: impl Into<String>) -> Self {
        self.organization = Some(form.into());
        self
    }

    /// Disable definite-article matching and return self.
    pub fn without_article(mut self) -> Self {
        self.takes_article = false;
        self
    }

    /// The form matching `gender`.
    pub fn form(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Plural => &self.plural,
            Gender::Organization => self.organization.as_deref().unwrap_or(&self.plural),
        }
    }

    /// Check that the mandatory forms are present.
    pub(crate) fn validate(&self, lemma: &str) -> Result<()> {
        if lemma.trim().is_empty()
            || self.male.trim().is_empty()
            || self.female.trim().is_empty()
            || self.plural.trim().is_empty()
        {
            return Err(Error::InvalidEntry(lemma.to_string()));
        }
        Ok(())
    }
}
