use crate::DateError;
use crate::clock;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DEFAULT_DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A birth year guaranteed to be in the range `MIN_YEAR..=current_year`.
/// Uses `NonZeroU16` internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that `MIN_YEAR <= value <= current_year`
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the value falls outside the window.
    pub fn new(value: u16, current_year: u16) -> Result<Self, DateError> {
        let out_of_range = || DateError::YearOutOfRange {
            year: i64::from(value),
            min: MIN_YEAR,
            max: current_year,
        };
        if !(MIN_YEAR..=current_year).contains(&value) {
            return Err(out_of_range());
        }
        NonZeroU16::new(value).map(Self).ok_or_else(out_of_range)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    /// Validates against the system clock's current year.
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value, clock::current_year())
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(i64::from(value)))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month, as shown in the month picker
    pub const fn name(self) -> &'static str {
        crate::consts::MONTH_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidDay {
            year: i64::from(year.get()),
            month: i64::from(month.get()),
            day: i64::from(value),
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No year/month context here; only the widest month bound applies
        let invalid = || DateError::InvalidDay {
            year: 0,
            month: 0,
            day: i64::from(value),
        };
        if !(MIN_DAY..=DEFAULT_DAYS_IN_MONTH).contains(&value) {
            return Err(invalid());
        }
        NonZeroU8::new(value).map(Self).ok_or_else(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of selectable days while the form is still being filled in.
///
/// Falls back to `DEFAULT_DAYS_IN_MONTH` until both a month and a year are
/// known, and for a month outside `1..=12`.
pub const fn days_in_month_or_default(month: Option<u8>, year: Option<u16>) -> u8 {
    match (month, year) {
        (Some(m @ 1..=MAX_MONTH), Some(y)) => days_in_month(y, m),
        _ => DEFAULT_DAYS_IN_MONTH,
    }
}
