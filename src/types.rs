use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU8, NonZeroU16};

/// A calendar year in `1..=MAX_YEAR`, so it always fits four digits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or greater than `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

/// A month number in `1..=12`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or greater than `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        Self::new_const(value).ok_or(ParseError::InvalidMonth(value))
    }

    const fn new_const(value: u8) -> Option<Self> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Some(Self(month)),
            _ => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in the given year.
    pub const fn len_in(self, year: Year) -> u8 {
        month_len(year.get(), self)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day of the month, validated against the length of a specific month.
///
/// A `Day` on its own carries no month, so it is only constructed through
/// [`Day::new`] alongside the year and month it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{}", _0)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of `month` in `year`.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(day) if value <= month.len_in(year) => Ok(Self(day)),
            _ => Err(ParseError::InvalidDay {
                year: year.get(),
                month: month.get(),
                day: value,
            }),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1-12.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    match Month::new_const(month) {
        Some(month) => Some(month_len(year, month)),
        None => None,
    }
}

const fn month_len(year: u16, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{month, year};

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_conversions() {
        let y: Year = 2024.try_into().unwrap();
        assert_eq!(y.get(), 2024);
        assert_eq!(u16::from(y), 2024);
        assert_eq!(y.to_string(), "2024");
        assert!(y.is_leap());
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_len_in() {
        assert_eq!(month(2).len_in(year(2024)), 29);
        assert_eq!(month(2).len_in(year(2023)), 28);
        assert_eq!(month(4).len_in(year(2023)), 30);
        assert_eq!(month(12).len_in(year(2023)), 31);
    }

    #[test]
    fn test_day_checked_against_month() {
        assert!(Day::new(31, year(2024), month(1)).is_ok());
        assert!(Day::new(29, year(2024), month(2)).is_ok());
        assert!(Day::new(31, year(2024), month(4)).is_err());

        let result = Day::new(29, year(2023), month(2));
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));

        assert!(matches!(
            Day::new(0, year(2023), month(1)),
            Err(ParseError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_component_serde() {
        assert_eq!(serde_json::to_string(&year(2024)).unwrap(), "2024");
        assert_eq!(serde_json::to_string(&month(8)).unwrap(), "8");

        let parsed: Month = serde_json::from_str("8").unwrap();
        assert_eq!(parsed, month(8));
        assert!(serde_json::from_str::<Month>("13").is_err());
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_days_in_month_rejects_bad_months() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, u8::MAX), None);
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2023, 12), Some(31));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }
}
