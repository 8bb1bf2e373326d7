//! Saved progress for a single puzzle and the key-value store holding it.
//!
//! Saves are stored as JSON text under their [`StorageKey`], the same layout
//! a browser's local storage would hold.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{KeyError, StorageKey, ValidWord};

/// Words found so far in one puzzle, saved under `id`.
///
/// `found_words` acts as a set in insertion order: [`Self::record`] ignores
/// words already present, and repeats collapse when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SaveRecord")]
pub struct LocalGameProgressSave {
    pub id:          String,
    pub found_words: Vec<String>,
}

/// Wire shape of a save, before repeated words are collapsed.
#[derive(Deserialize)]
struct SaveRecord {
    id:          String,
    found_words: Vec<String>,
}

impl From<SaveRecord> for LocalGameProgressSave {
    fn from(record: SaveRecord) -> Self {
        let mut save = Self {
            id:          record.id,
            found_words: record.found_words,
        };
        save.dedup();
        save
    }
}

/// Error type for progress persistence.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Stored text is not a valid save, or a save could not be encoded.
    #[error("Failed to encode or decode progress save: {0}")]
    Json(#[from] serde_json::Error),

    /// A save's `id` names a different puzzle than the key it was stored under.
    #[error("Progress save id {found:?} does not match storage key {expected:?}")]
    IdMismatch { expected: String, found: String },

    /// A save's `id` is not a storage key.
    #[error("Invalid progress save id: {0}")]
    InvalidId(#[from] KeyError),
}

impl LocalGameProgressSave {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id:          id.into(),
            found_words: Vec::new(),
        }
    }

    /// An empty save for the puzzle named by `key`.
    pub fn for_key(key: &StorageKey) -> Self {
        Self::new(key.to_string())
    }

    /// A save capturing the words already marked found in `words`.
    pub fn from_words(key: &StorageKey, words: &[ValidWord]) -> Self {
        let mut save = Self::for_key(key);
        for w in words.iter().filter(|w| w.is_found) {
            save.record(&w.word);
        }
        save
    }

    /// Adds `word`. Returns false if it was already saved.
    pub fn record(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        self.found_words.push(word.to_owned());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.found_words.iter().any(|w| w == word)
    }

    /// Marks every saved word found in `words`.
    ///
    /// Returns the saved words that are not in the puzzle at all, which
    /// happens when the word list changed after the save was written.
    pub fn apply_to(&self, words: &mut [ValidWord]) -> Vec<String> {
        let mut unknown = Vec::new();
        for saved in &self.found_words {
            match words.iter_mut().find(|w| &w.word == saved) {
                Some(w) => w.is_found = true,
                None => unknown.push(saved.clone()),
            }
        }
        if !unknown.is_empty() {
            warn!(id = %self.id, ?unknown, "saved words missing from puzzle word list");
        }
        unknown
    }

    /// Parses `id` as a storage key.
    ///
    /// # Errors
    /// Returns `ProgressError::InvalidId` if the id is not a valid key.
    pub fn key(&self) -> Result<StorageKey, ProgressError> {
        Ok(self.id.parse()?)
    }

    /// Collapses repeated words, keeping the first occurrence.
    fn dedup(&mut self) {
        let mut seen = HashSet::with_capacity(self.found_words.len());
        self.found_words.retain(|w| seen.insert(w.clone()));
    }

    /// Copy with a padded id and no repeated words, as written to a store.
    fn canonical(&self) -> Result<Self, ProgressError> {
        let mut save = self.clone();
        save.id = self.key()?.to_string();
        save.dedup();
        Ok(save)
    }
}

/// Key-value persistence for progress saves.
pub trait ProgressStore {
    /// Loads the save for `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    /// Returns `ProgressError` if the stored text is unreadable or belongs to
    /// a different key.
    fn load(&self, key: &StorageKey) -> Result<Option<LocalGameProgressSave>, ProgressError>;

    /// Stores `save` under the key its id names, replacing any earlier save.
    ///
    /// # Errors
    /// Returns `ProgressError::InvalidId` if the id is not a storage key, or
    /// `ProgressError::Json` if the save cannot be encoded.
    fn save(&mut self, save: &LocalGameProgressSave) -> Result<(), ProgressError>;

    /// Loads the save for `key`, or an empty one if nothing is stored.
    ///
    /// # Errors
    /// Same as [`ProgressStore::load`].
    fn load_or_new(&self, key: &StorageKey) -> Result<LocalGameProgressSave, ProgressError> {
        Ok(self
            .load(key)?
            .unwrap_or_else(|| LocalGameProgressSave::for_key(key)))
    }
}

/// In-memory [`ProgressStore`] holding JSON text per key.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text for a key, as the host storage would hold it.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Replaces the raw text stored under `key`.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &StorageKey) -> Result<Option<LocalGameProgressSave>, ProgressError> {
        let id = key.to_string();
        let Some(text) = self.entries.get(&id) else {
            debug!(%id, "no progress save");
            return Ok(None);
        };

        let mut save: LocalGameProgressSave = serde_json::from_str(text)?;
        if save.key()? != *key {
            return Err(ProgressError::IdMismatch {
                expected: id,
                found:    save.id,
            });
        }
        save.id.clone_from(&id);
        debug!(%id, words = save.found_words.len(), "loaded progress save");
        Ok(Some(save))
    }

    fn save(&mut self, save: &LocalGameProgressSave) -> Result<(), ProgressError> {
        let save = save.canonical()?;
        let text = serde_json::to_string(&save)?;
        debug!(id = %save.id, words = save.found_words.len(), "stored progress save");
        self.entries.insert(save.id, text);
        Ok(())
    }
}
