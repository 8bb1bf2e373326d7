//! Shorthand constructors for tests.

use crate::{CombData, Language, Month, PuzzleDate, StorageKey, ValidWord, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year should be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month should be valid")
}

pub fn date(y: u16, m: u8, d: u8) -> PuzzleDate {
    PuzzleDate::new(y, m, d).expect("test date should be valid")
}

pub fn key(y: u16, m: u8, d: u8, code: &str) -> StorageKey {
    StorageKey::new(date(y, m, d), code).expect("test key should be valid")
}

pub fn english() -> Language {
    Language {
        name:       "English".to_owned(),
        code:       "en".to_owned(),
        letter_set: "abcdefghijklmnopqrstuvwxyz".to_owned(),
        flag_emoji: "🇬🇧".to_owned(),
    }
}

pub fn comb(center: char, outer: &str) -> CombData {
    CombData::new(center, outer.chars()).expect("test comb should be valid")
}

/// Words for the comb `t` + `ablecr`, none found yet.
pub fn word_list() -> Vec<ValidWord> {
    vec![
        ValidWord::new("tale", 1, false),
        ValidWord::new("treat", 5, false),
        ValidWord::new("table", 6, false),
        ValidWord::new("bracelet", 14, true),
    ]
}
