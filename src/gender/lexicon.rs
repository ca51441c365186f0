//! Gender lexicon and its process-wide registry.
//!
//! A [`Lexicon`] is immutable once built. Adding a lemma produces a new
//! lexicon with a bumped version; the [`LexiconRegistry`] swaps the shared
//! `Arc` under a write lock, so resolutions that already hold a snapshot
//! keep reading the old table.

use super::hebrew::HEBREW_ENTRIES;
use super::tokenizer::normalize_key;
use super::GenderedEntry;
use crate::error::Result;
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// A versioned lemma → forms table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    version: u64,
    entries: BTreeMap<String, GenderedEntry>,
    max_words: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the built-in Hebrew legal vocabulary.
    pub fn hebrew() -> Self {
        let mut lexicon = Self::empty();
        for &(male, female, plural, organization, takes_article) in HEBREW_ENTRIES {
            let entry = GenderedEntry {
                male: male.to_string(),
                female: female.to_string(),
                plural: plural.to_string(),
                organization: Some(organization.to_string()),
                takes_article,
            };
            lexicon.insert(male, entry);
        }
        lexicon.version = 1;
        lexicon
    }

    /// Build a lexicon from `(lemma, entry)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, GenderedEntry)>,
        S: AsRef<str>,
    {
        Self::empty().with_entries(entries)
    }

    /// Load a lexicon from a JSON object mapping lemma to entry.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, GenderedEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the entries as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Version number; increases with every derived lexicon.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of lemmas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon has no lemmas.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest number of words in any lemma.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Look up a lemma.
    pub fn get(&self, lemma: &str) -> Option<&GenderedEntry> {
        self.entries.get(&normalize_key(lemma))
    }

    /// Check if a lemma is present.
    pub fn contains(&self, lemma: &str) -> bool {
        self.get(lemma).is_some()
    }

    /// Iterate over `(lemma, entry)` pairs in lemma order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GenderedEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Return a new lexicon with one more (or a replaced) entry.
    pub fn with_entry(&self, lemma: impl AsRef<str>, entry: GenderedEntry) -> Result<Self> {
        self.with_entries([(lemma, entry)])
    }

    /// Return a new lexicon with the given entries added.
    pub fn with_entries<I, S>(&self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, GenderedEntry)>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        for (lemma, entry) in entries {
            let lemma = lemma.as_ref();
            entry.validate(lemma)?;
            next.insert(lemma, entry);
        }
        next.version = self.version + 1;
        Ok(next)
    }

    pub(crate) fn lookup_normalized(&self, key: &str) -> Option<&GenderedEntry> {
        self.entries.get(key)
    }

    fn insert(&mut self, lemma: &str, entry: GenderedEntry) {
        let key = normalize_key(lemma);
        let words = key.split(' ').count();
        self.max_words = self.max_words.max(words);
        self.entries.insert(key, entry);
    }
}

/// Shared, swappable lexicon.
///
/// Readers call [`snapshot`](Self::snapshot) once per resolution and work on
/// the returned `Arc`; writers build a new lexicon and swap it in.
#[derive(Debug)]
pub struct LexiconRegistry {
    current: RwLock<Arc<Lexicon>>,
}

impl LexiconRegistry {
    /// Create a registry holding `lexicon`.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            current: RwLock::new(Arc::new(lexicon)),
        }
    }

    /// Create a registry holding the built-in Hebrew lexicon.
    pub fn hebrew() -> Self {
        Self::new(Lexicon::hebrew())
    }

    /// Current lexicon.
    pub fn snapshot(&self) -> Arc<Lexicon> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Version of the current lexicon.
    pub fn version(&self) -> u64 {
        self.snapshot().version()
    }

    /// Add (or replace) one lemma. Returns the new version.
    pub fn add_entry(&self, lemma: impl AsRef<str>, entry: GenderedEntry) -> Result<u64> {
        self.extend([(lemma, entry)])
    }

    /// Add several lemmas in one swap. Returns the new version.
    pub fn extend<I, S>(&self, entries: I) -> Result<u64>
    where
        I: IntoIterator<Item = (S, GenderedEntry)>,
        S: AsRef<str>,
    {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.with_entries(entries)?;
        let version = next.version();
        debug!(
            "lexicon updated to version {} ({} lemmas)",
            version,
            next.len()
        );
        *guard = Arc::new(next);
        Ok(version)
    }

    /// Merge all entries of another lexicon (e.g. loaded from a file).
    pub fn merge(&self, other: &Lexicon) -> Result<u64> {
        self.extend(other.iter().map(|(k, v)| (k.to_string(), v.clone())))
    }
}

impl Default for LexiconRegistry {
    fn default() -> Self {
        Self::hebrew()
    }
}
