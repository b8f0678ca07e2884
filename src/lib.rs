mod clock;
mod consts;
mod form;
mod generation;
#[cfg(feature = "cli")]
pub mod logging;
mod types;

pub use clock::{FixedYear, SystemClock, YearProvider, current_year};
pub use consts::*;
pub use form::{BirthDateForm, RESULT_BADGE, Notice, ResultView, SubmitError, Submission};
pub use generation::{Generation, GenerationSpan, UnknownGeneration, classify};
pub use types::{Day, Month, Year, days_in_month, days_in_month_or_default, is_leap_year};

use derive_more::Display;
use std::str::FromStr;

/// A birth date that has passed calendar validation.
///
/// Only constructible through [`BirthDate::new`] and friends, so holding one
/// means the date exists and its year lies in `MIN_YEAR..=current year`.
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BirthDate {
    year: Year,
    month: Month,
    day: Day,
}

/// One of the three inputs on the birth date form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Missing {_0}")]
    MissingField(Field),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {year} (must be {min}-{max})")]
    YearOutOfRange { year: i64, min: u16, max: u16 },
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: i64, day: i64 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl BirthDate {
    /// Validates a (year, month, day) triple against the calendar and the
    /// accepted year window ending at `current_year`.
    ///
    /// Arguments are wide so that values which would not fit the component
    /// types are rejected instead of truncated.
    ///
    /// # Errors
    /// Returns the first component that fails validation, checked in
    /// year, month, day order.
    pub fn new(year: i64, month: i64, day: i64, current_year: u16) -> Result<Self, DateError> {
        let year_out_of_range = || DateError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: current_year,
        };
        let year = u16::try_from(year)
            .map_err(|_| year_out_of_range())
            .and_then(|y| Year::new(y, current_year))?;

        let month = u8::try_from(month)
            .map_err(|_| DateError::InvalidMonth(month))
            .and_then(Month::new)?;

        let day = u8::try_from(day)
            .map_err(|_| DateError::InvalidDay {
                year: i64::from(year.get()),
                month: i64::from(month.get()),
                day,
            })
            .and_then(|d| Day::new(d, year, month))?;

        Ok(Self { year, month, day })
    }

    /// Builds a date from already-validated components, re-checking that the
    /// day exists in that month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of the month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Validates raw form field values.
    ///
    /// Each field is trimmed and parsed as a base-10 integer. An absent or
    /// blank field is reported as missing before any parsing happens.
    ///
    /// # Errors
    /// `DateError::MissingField` for an absent field, `DateError::InvalidFormat`
    /// for a non-numeric one, otherwise whatever [`BirthDate::new`] reports.
    pub fn from_fields(
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
        current_year: u16,
    ) -> Result<Self, DateError> {
        let year = Self::require(year, Field::Year)?;
        let month = Self::require(month, Field::Month)?;
        let day = Self::require(day, Field::Day)?;

        Self::new(
            Self::parse_i64(year)?,
            Self::parse_i64(month)?,
            Self::parse_i64(day)?,
            current_year,
        )
    }

    /// Parses an ISO `YYYY-MM-DD` string against an explicit current year.
    ///
    /// # Errors
    /// `DateError::EmptyInput` for a blank string, `DateError::InvalidFormat`
    /// when the string is not three hyphen-separated numbers, otherwise
    /// whatever [`BirthDate::new`] reports.
    pub fn parse_as_of(s: &str, current_year: u16) -> Result<Self, DateError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => Self::new(
                Self::parse_i64(year)?,
                Self::parse_i64(month)?,
                Self::parse_i64(day)?,
                current_year,
            ),
            _ => Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            ))),
        }
    }

    fn require(value: Option<&str>, field: Field) -> Result<&str, DateError> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(DateError::MissingField(field))
    }

    fn parse_i64(s: &str) -> Result<i64, DateError> {
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
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

    /// Generation this birth date belongs to, if any
    pub fn generation(&self) -> Option<Generation> {
        classify(i64::from(self.year.get()))
    }

    /// Same date as a `chrono` calendar date
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )
    }
}

/// Checks a (year, month, day) triple against the calendar, accepting years
/// from `MIN_YEAR` up to the system clock's current year.
pub fn is_valid_date(year: i64, month: i64, day: i64) -> bool {
    is_valid_date_in(year, month, day, current_year())
}

/// Same as [`is_valid_date`] with an explicit current year.
pub fn is_valid_date_in(year: i64, month: i64, day: i64, current_year: u16) -> bool {
    match BirthDate::new(year, month, day, current_year) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(year, month, day, %err, "rejected birth date");
            false
        }
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`, validating against the system clock's year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_as_of(s, current_year())
    }
}

impl TryFrom<(i64, i64, i64)> for BirthDate {
    type Error = DateError;

    fn try_from(value: (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, current_year())
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
