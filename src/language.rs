//! Language records and the catalog they are loaded into.
//!
//! The catalog is read once from JSON at startup and never mutated; callers
//! share it by reference.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::storage::{KeyError, validate_lang_code};

/// A playable language: display name, code, legal letters and flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    pub name:       String,
    pub code:       String,
    /// Every letter a puzzle in this language may use, as one string.
    pub letter_set: String,
    pub flag_emoji: String,
}

impl Language {
    /// Iterates the legal letters in the order they appear in `letter_set`.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letter_set.chars()
    }

    pub fn is_legal_letter(&self, c: char) -> bool {
        self.letter_set.contains(c)
    }
}

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The JSON could not be read or did not match the expected shape.
    #[error("Failed to parse language catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries share a code.
    #[error("Duplicate language code {0:?}")]
    DuplicateCode(String),

    /// A code cannot be used in a storage key.
    #[error(transparent)]
    Code(#[from] KeyError),

    /// A language has no letters.
    #[error("Language {0:?} has an empty letter set")]
    EmptyLetterSet(String),
}

/// Immutable set of languages keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: BTreeMap<String, Language>,
}

impl LanguageCatalog {
    /// Builds a catalog from already deserialized records.
    ///
    /// # Errors
    /// Returns `CatalogError` for duplicate codes, codes containing `_` or
    /// empty letter sets.
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for language in languages {
            validate_lang_code(&language.code)?;
            if language.letter_set.is_empty() {
                return Err(CatalogError::EmptyLetterSet(language.code));
            }
            if map.contains_key(&language.code) {
                return Err(CatalogError::DuplicateCode(language.code));
            }
            map.insert(language.code.clone(), language);
        }
        debug!(count = map.len(), "loaded language catalog");
        Ok(Self { languages: map })
    }

    /// Parses a JSON array of language records.
    ///
    /// # Errors
    /// Returns `CatalogError::Json` for malformed JSON, or any error from [`Self::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let languages: Vec<Language> = serde_json::from_str(json)?;
        Self::new(languages)
    }

    /// Reads a JSON array of language records.
    ///
    /// # Errors
    /// Returns `CatalogError::Json` for I/O or parse failures, or any error from [`Self::new`].
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let languages: Vec<Language> = serde_json::from_reader(reader)?;
        Self::new(languages)
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    /// Languages in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<'a> IntoIterator for &'a LanguageCatalog {
    type Item = &'a Language;
    type IntoIter = std::collections::btree_map::Values<'a, String, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.values()
    }
}
