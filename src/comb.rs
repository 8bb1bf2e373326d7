use serde::{Deserialize, Serialize};

use crate::Language;

/// Letter arrangement of one puzzle: a required center letter ringed by
/// outer letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombData {
    pub center_char: char,
    pub outer_chars: Vec<char>,
}

/// Error type for comb validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombError {
    /// The center letter is repeated among the outer letters.
    #[error("Center letter '{0}' also appears among the outer letters")]
    CenterInOuter(char),

    /// An outer letter appears more than once.
    #[error("Outer letter '{0}' appears more than once")]
    DuplicateOuter(char),

    /// A letter is not in the language's letter set.
    #[error("Letter '{letter}' is not legal in language {code:?}")]
    IllegalLetter { letter: char, code: String },
}

impl CombData {
    /// # Errors
    /// Returns `CombError` if any letter appears twice.
    pub fn new(
        center_char: char,
        outer_chars: impl IntoIterator<Item = char>,
    ) -> Result<Self, CombError> {
        let comb = Self {
            center_char,
            outer_chars: outer_chars.into_iter().collect(),
        };
        comb.check_distinct()?;
        Ok(comb)
    }

    /// Checks that all letters are distinct. Useful after deserializing.
    ///
    /// # Errors
    /// Returns `CombError::CenterInOuter` or `CombError::DuplicateOuter`.
    pub fn check_distinct(&self) -> Result<(), CombError> {
        for (i, &c) in self.outer_chars.iter().enumerate() {
            if c == self.center_char {
                return Err(CombError::CenterInOuter(c));
            }
            if self.outer_chars[..i].contains(&c) {
                return Err(CombError::DuplicateOuter(c));
            }
        }
        Ok(())
    }

    /// Checks that every letter belongs to `language`.
    ///
    /// # Errors
    /// Returns `CombError::IllegalLetter` for the first letter outside the letter set.
    pub fn validate_for(&self, language: &Language) -> Result<(), CombError> {
        match self.letters().find(|&c| !language.is_legal_letter(c)) {
            Some(letter) => Err(CombError::IllegalLetter {
                letter,
                code: language.code.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Center letter first, then the outer letters in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.center_char).chain(self.outer_chars.iter().copied())
    }

    pub fn contains(&self, c: char) -> bool {
        c == self.center_char || self.outer_chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        1 + self.outer_chars.len()
    }

    /// Always false: a comb has at least its center letter.
    pub const fn is_empty(&self) -> bool {
        false
    }
}
