/// Earliest accepted birth year (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Upper bound for day choices before a month and year are picked
pub const DEFAULT_DAYS_IN_MONTH: u8 = 31;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month labels for the month picker, in calendar order
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// First birth year counted as Gen Z
pub const GEN_Z_FIRST_YEAR: u16 = 1997;
/// Last birth year counted as Gen Z
pub const GEN_Z_LAST_YEAR: u16 = 2012;
/// First birth year counted as Gen Alpha; the span is open-ended
pub const GEN_ALPHA_FIRST_YEAR: u16 = 2013;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
