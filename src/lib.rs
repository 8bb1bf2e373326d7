//! Data layer for a daily letter-comb word puzzle.
//!
//! Each day's puzzle is a [`CombData`] (one center letter ringed by outer
//! letters) plus the list of [`ValidWord`]s it accepts, in one of the
//! [`Language`]s of a [`LanguageCatalog`]. Puzzles are named by their
//! [`PuzzleDate`], written `YYYY-MM-DD`, and a player's progress is saved as a
//! [`LocalGameProgressSave`] under the [`StorageKey`] `game_<date>_<lang_code>`.

mod comb;
mod consts;
mod date;
mod language;
mod prelude;
mod progress;
mod storage;
#[cfg(test)]
mod test_utils;
mod types;
mod word;

pub use comb::{CombData, CombError};
pub use consts::*;
pub use date::{PuzzleDate, date_from_string, date_to_string, pad};
pub use language::{CatalogError, Language, LanguageCatalog};
pub use progress::{LocalGameProgressSave, MemoryStore, ProgressError, ProgressStore};
pub use storage::{KeyError, StorageKey, get_local_storage_id};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use word::{CountError, ValidWord, WordCountData};

use crate::prelude::*;

/// Error produced when a date cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
