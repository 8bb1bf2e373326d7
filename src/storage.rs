use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{PuzzleDate, ParseError, STORAGE_KEY_PREFIX, STORAGE_KEY_SEPARATOR};

/// Builds the progress storage key `game_<date>_<lang_code>`.
///
/// Total over any input. Callers holding a [`PuzzleDate`] should prefer
/// [`StorageKey`], which also guards against codes that would make two keys
/// collide.
pub fn get_local_storage_id(date: &str, lang_code: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{date}{STORAGE_KEY_SEPARATOR}{lang_code}")
}

/// Error type for storage key construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Language code is empty or contains the key separator.
    #[error(
        "Invalid language code {0:?}: must be non-empty and must not contain '{sep}'",
        sep = STORAGE_KEY_SEPARATOR
    )]
    InvalidLanguageCode(String),

    /// Key does not start with the storage prefix.
    #[error("Storage key {0:?} does not start with '{prefix}'", prefix = STORAGE_KEY_PREFIX)]
    MissingPrefix(String),

    /// Key has no separator between date and language code.
    #[error("Invalid storage key format: {0}")]
    InvalidFormat(String),

    /// Date portion of the key failed to parse.
    #[error(transparent)]
    Date(#[from] ParseError),
}

/// Storage key for one puzzle's progress: a date plus a language code.
///
/// The date is always written in its padded form, and the code can never
/// contain the separator, so distinct (date, code) pairs give distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageKey {
    date:      PuzzleDate,
    lang_code: String,
}

impl StorageKey {
    /// # Errors
    /// Returns `KeyError::InvalidLanguageCode` if `lang_code` is empty or contains `_`.
    pub fn new(date: PuzzleDate, lang_code: impl Into<String>) -> Result<Self, KeyError> {
        let lang_code = lang_code.into();
        validate_lang_code(&lang_code)?;
        Ok(Self { date, lang_code })
    }

    pub const fn date(&self) -> PuzzleDate {
        self.date
    }

    pub fn lang_code(&self) -> &str {
        &self.lang_code
    }
}

pub(crate) fn validate_lang_code(code: &str) -> Result<(), KeyError> {
    if code.is_empty() || code.contains(STORAGE_KEY_SEPARATOR) {
        return Err(KeyError::InvalidLanguageCode(code.to_owned()));
    }
    Ok(())
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&get_local_storage_id(&self.date.to_string(), &self.lang_code))
    }
}

impl FromStr for StorageKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(STORAGE_KEY_PREFIX)
            .ok_or_else(|| KeyError::MissingPrefix(s.to_owned()))?;

        // Dates never contain the separator, so the first one ends the date.
        let (date, lang_code) = rest.split_once(STORAGE_KEY_SEPARATOR).ok_or_else(|| {
            KeyError::InvalidFormat(format!(
                "no '{STORAGE_KEY_SEPARATOR}' between date and language code in {s:?}"
            ))
        })?;

        Self::new(date.parse()?, lang_code)
    }
}

impl Serialize for StorageKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StorageKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
