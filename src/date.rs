//! Canonical date keys for daily puzzles.
//!
//! A puzzle is identified by a calendar date written as `YYYY-MM-DD`. The
//! padded form sorts lexicographically in chronological order, so it doubles
//! as a stable storage key component. Parsing also accepts the unpadded
//! `YYYY-M-D` form written by older saves.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::ParseError;
use crate::consts::{
    DATE_SEPARATOR, DAY_WIDTH, DAYS_IN_MONTH, DECEMBER, JANUARY, MAX_MONTH, MIN_DAY, MONTH_WIDTH,
    YEAR_WIDTH,
};
use crate::types::{Day, Month, Year};

/// A full calendar date naming one day's puzzle.
///
/// Fields are ordered year, month, day so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl PuzzleDate {
    /// Builds a date from plain integers, validating each component.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from already validated components.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Today's date on the local clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the clock is outside years 1-9999.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(Local::now().date_naive())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day < self.month.len_in(self.year) {
            return Self::new(year, month, day + 1).ok();
        }
        if month < MAX_MONTH {
            return Self::new(year, month + 1, MIN_DAY).ok();
        }
        Self::new(year.checked_add(1)?, JANUARY, MIN_DAY).ok()
    }

    /// The previous day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day > MIN_DAY {
            return Self::new(year, month, day - 1).ok();
        }
        if month > JANUARY {
            let prev = Month::new(month - 1).ok()?;
            return Self::new(year, prev.get(), prev.len_in(self.year)).ok();
        }
        Self::new(year.checked_sub(1)?, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]).ok()
    }
}

/// Left-pads the decimal form of `value` with zeros to at least `width` digits.
///
/// Wider values are returned whole, never truncated.
pub fn pad(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

/// Formats a date as its canonical `YYYY-MM-DD` key.
pub fn date_to_string(date: PuzzleDate) -> String {
    date.to_string()
}

/// Parses `YYYY-MM-DD` (or unpadded `YYYY-M-D`) into a date.
///
/// # Errors
/// - `ParseError::EmptyInput` for blank text.
/// - `ParseError::InvalidFormat` unless there are exactly three `-` separated
///   runs of decimal digits.
/// - `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for components
///   outside the calendar.
pub fn date_from_string(text: &str) -> Result<PuzzleDate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, found {} part(s) in {trimmed:?}",
            parts.len()
        )));
    };

    PuzzleDate::new(
        parse_component(year)?,
        parse_component(month)?,
        parse_component(day)?,
    )
}

/// Parses one run of ASCII digits. Signs and inner whitespace are rejected,
/// as is anything too large for the component's integer type.
fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            pad(u64::from(self.year()), YEAR_WIDTH),
            pad(u64::from(self.month()), MONTH_WIDTH),
            pad(u64::from(self.day()), DAY_WIDTH),
        )
    }
}

impl FromStr for PuzzleDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        date_from_string(s)
    }
}

impl TryFrom<(u16, u8, u8)> for PuzzleDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<PuzzleDate> for (u16, u8, u8) {
    fn from(date: PuzzleDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl From<PuzzleDate> for NaiveDate {
    fn from(date: PuzzleDate) -> Self {
        // Years 1-9999 are all inside chrono's supported range.
        Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .unwrap_or(Self::MIN)
    }
}

impl TryFrom<NaiveDate> for PuzzleDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let out_of_range = || ParseError::InvalidFormat(date.to_string());
        let year = u16::try_from(date.year()).map_err(|_| out_of_range())?;
        let month = u8::try_from(date.month()).map_err(|_| out_of_range())?;
        let day = u8::try_from(date.day()).map_err(|_| out_of_range())?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for PuzzleDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PuzzleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
