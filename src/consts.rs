/// Maximum valid year (inclusive), the widest value that fits `YEAR_WIDTH`
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of a month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month for a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between year, month and day in a date string
pub const DATE_SEPARATOR: char = '-';

/// Minimum digits of the year field in a canonical date string
pub const YEAR_WIDTH: usize = 4;
/// Minimum digits of the month field in a canonical date string
pub const MONTH_WIDTH: usize = 2;
/// Minimum digits of the day field in a canonical date string
pub const DAY_WIDTH: usize = 2;

/// Leading text of every progress storage key
pub const STORAGE_KEY_PREFIX: &str = "game_";
/// Separator between the date and the language code in a storage key
pub const STORAGE_KEY_SEPARATOR: char = '_';
