use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One dictionary word that solves a puzzle.
///
/// `point_value` and `is_panagram` arrive with the puzzle data; nothing here
/// derives them from the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidWord {
    pub point_value: u32,
    pub word:        String,
    pub is_found:    bool,
    pub is_panagram: bool,
}

impl ValidWord {
    pub fn new(word: impl Into<String>, point_value: u32, is_panagram: bool) -> Self {
        Self {
            point_value,
            word: word.into(),
            is_found: false,
            is_panagram,
        }
    }
}

/// Progress snapshot over a puzzle's word list.
///
/// [`Self::from_words`], [`Self::new`] and deserialization all keep found
/// counts within the maxima. The fields stay public for reading; a struct
/// literal bypasses the check.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "CountRecord")]
#[display(
    fmt = "{}/{} points, {}/{} words",
    points_found,
    max_points,
    words_found,
    max_words
)]
pub struct WordCountData {
    pub points_found: u32,
    pub words_found:  u32,
    pub max_points:   u32,
    pub max_words:    u32,
}

/// Error type for inconsistent progress counts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    #[error("Points found ({found}) exceed max points ({max})")]
    PointsExceedMax { found: u32, max: u32 },

    #[error("Words found ({found}) exceed max words ({max})")]
    WordsExceedMax { found: u32, max: u32 },
}

/// Wire shape of a snapshot, before the counts are checked.
#[derive(Deserialize)]
struct CountRecord {
    points_found: u32,
    words_found:  u32,
    max_points:   u32,
    max_words:    u32,
}

impl TryFrom<CountRecord> for WordCountData {
    type Error = CountError;

    fn try_from(record: CountRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.points_found,
            record.words_found,
            record.max_points,
            record.max_words,
        )
    }
}

impl WordCountData {
    /// # Errors
    /// Returns `CountError` if a found count exceeds its maximum.
    pub const fn new(
        points_found: u32,
        words_found: u32,
        max_points: u32,
        max_words: u32,
    ) -> Result<Self, CountError> {
        if points_found > max_points {
            return Err(CountError::PointsExceedMax {
                found: points_found,
                max:   max_points,
            });
        }
        if words_found > max_words {
            return Err(CountError::WordsExceedMax {
                found: words_found,
                max:   max_words,
            });
        }
        Ok(Self {
            points_found,
            words_found,
            max_points,
            max_words,
        })
    }

    /// Totals `words`. Found counts can never exceed the maxima.
    pub fn from_words(words: &[ValidWord]) -> Self {
        words.iter().collect()
    }

    /// Whether every word has been found. An empty puzzle is never complete.
    pub const fn is_complete(&self) -> bool {
        self.max_words > 0 && self.words_found == self.max_words
    }
}

impl<'a> FromIterator<&'a ValidWord> for WordCountData {
    fn from_iter<I: IntoIterator<Item = &'a ValidWord>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, w| {
            acc.max_words = acc.max_words.saturating_add(1);
            acc.max_points = acc.max_points.saturating_add(w.point_value);
            if w.is_found {
                acc.words_found = acc.words_found.saturating_add(1);
                acc.points_found = acc.points_found.saturating_add(w.point_value);
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::word_list;

    #[test]
    fn test_counts_nothing_found() {
        let words = word_list();
        let counts = WordCountData::from_words(&words);
        assert_eq!(counts.words_found, 0);
        assert_eq!(counts.points_found, 0);
        assert_eq!(counts.max_words, 4);
        assert_eq!(counts.max_points, 1 + 5 + 6 + 14);
        assert!(!counts.is_complete());
    }

    #[test]
    fn test_counts_partial_and_complete() {
        let mut words = word_list();
        words[2].is_found = true;
        words[3].is_found = true;

        let counts = WordCountData::from_words(&words);
        assert_eq!((counts.words_found, counts.points_found), (2, 20));
        assert_eq!(counts.to_string(), "20/26 points, 2/4 words");

        for w in &mut words {
            w.is_found = true;
        }
        let counts: WordCountData = words.iter().collect();
        assert!(counts.is_complete());
        assert_eq!(counts.points_found, counts.max_points);
    }

    #[test]
    fn test_empty_word_list() {
        let counts = WordCountData::from_words(&[]);
        assert_eq!(counts, WordCountData::default());
        assert!(!counts.is_complete());
    }

    #[test]
    fn test_new_checks_counts() {
        assert!(WordCountData::new(20, 2, 26, 4).is_ok());
        assert!(WordCountData::new(26, 4, 26, 4).is_ok());
        assert_eq!(
            WordCountData::new(27, 2, 26, 4),
            Err(CountError::PointsExceedMax { found: 27, max: 26 })
        );
        assert_eq!(
            WordCountData::new(20, 5, 26, 4),
            Err(CountError::WordsExceedMax { found: 5, max: 4 })
        );
    }

    #[test]
    fn test_serde_checks_counts() {
        let counts = WordCountData::from_words(&word_list());
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"{"points_found":0,"words_found":0,"max_points":26,"max_words":4}"#
        );
        let parsed: WordCountData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, counts);

        let bad = r#"{"points_found":30,"words_found":0,"max_points":26,"max_words":4}"#;
        let err = serde_json::from_str::<WordCountData>(bad).unwrap_err();
        assert!(err.to_string().contains("Points found (30) exceed max points (26)"));

        let bad = r#"{"points_found":0,"words_found":5,"max_points":26,"max_words":4}"#;
        assert!(serde_json::from_str::<WordCountData>(bad).is_err());
    }

    #[test]
    fn test_valid_word_serde_field_names() {
        let json = r#"{"point_value": 14, "word": "bracelet", "is_found": false, "is_panagram": true}"#;
        let parsed: ValidWord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, ValidWord::new("bracelet", 14, true));
    }
}
