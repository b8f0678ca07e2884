//! Headless model of the birth date form.
//!
//! A [`BirthDateForm`] holds the raw field values exactly as entered. Submitting
//! it validates the date, classifies the year and produces either a
//! [`ResultView`] or a dismissible [`Notice`]. The form itself is never
//! consumed, so a rejected submission can be corrected and resubmitted.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{
    BirthDate, DateError, Generation, MIN_DAY, MIN_YEAR, MONTH_NAMES, YearProvider,
    days_in_month_or_default,
};

/// Badge shown above a successful result
pub const RESULT_BADGE: &str = "🎉 Congratulations!";

/// Raw year/month/day input as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDateForm {
    pub year:  String,
    pub month: String,
    pub day:   String,
}

/// Why a submission did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The date does not exist or its year is outside the accepted window.
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    /// The date is fine but predates every known generation.
    #[error("Born in {year}, which is not Gen Z or Gen Alpha")]
    OutOfGenerationRange { year: u16 },
}

/// Dismissible message shown instead of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Notice {
    pub title:       &'static str,
    pub description: &'static str,
}

/// What the results screen shows for a classified birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub birth_date:  BirthDate,
    pub generation:  Generation,
    pub badge:       &'static str,
    pub headline:    String,
    pub description: &'static str,
}

/// Outcome of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Result(ResultView),
    Notice(Notice),
}

impl BirthDateForm {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year:  year.into(),
            month: month.into(),
            day:   day.into(),
        }
    }

    /// Validates and classifies the entered date.
    ///
    /// # Errors
    /// `SubmitError::InvalidDate` when the fields do not form an accepted date,
    /// `SubmitError::OutOfGenerationRange` when the year predates Gen Z.
    pub fn try_submit(&self, clock: &impl YearProvider) -> Result<ResultView, SubmitError> {
        let birth_date = BirthDate::from_fields(
            Some(self.year.as_str()),
            Some(self.month.as_str()),
            Some(self.day.as_str()),
            clock.current_year(),
        )?;

        let generation = birth_date
            .generation()
            .ok_or(SubmitError::OutOfGenerationRange {
                year: birth_date.year(),
            })?;

        Ok(ResultView::new(birth_date, generation))
    }

    /// Same as [`try_submit`](Self::try_submit), with errors turned into the
    /// notice the user sees.
    pub fn submit(&self, clock: &impl YearProvider) -> Submission {
        match self.try_submit(clock) {
            Ok(view) => {
                tracing::debug!(date = %view.birth_date, generation = %view.generation, "form accepted");
                Submission::Result(view)
            },
            Err(err) => {
                tracing::debug!(%err, form = ?self, "form rejected");
                Submission::Notice(err.notice())
            },
        }
    }

    /// Day choices for the currently entered month and year.
    ///
    /// Until both parse, every day up to 31 is offered.
    pub fn day_options(&self) -> RangeInclusive<u8> {
        let month = self.month.trim().parse::<u8>().ok();
        let year = self.year.trim().parse::<u16>().ok();
        MIN_DAY..=days_in_month_or_default(month, year)
    }

    /// Month choices as (number, name) pairs, January first
    pub fn month_options() -> impl Iterator<Item = (u8, &'static str)> {
        (1..).zip(MONTH_NAMES)
    }

    /// Year choices, newest first, from `current_year` down to `MIN_YEAR`
    pub fn year_options(current_year: u16) -> impl Iterator<Item = u16> {
        (MIN_YEAR..=current_year).rev()
    }
}

impl SubmitError {
    /// Notice shown to the user for this error
    pub const fn notice(&self) -> Notice {
        match self {
            Self::InvalidDate(_) => Notice {
                title:       "Invalid Date",
                description: "Please enter a valid birth date.",
            },
            Self::OutOfGenerationRange { .. } => Notice {
                title:       "Not Gen Z or Alpha",
                description: "Based on your birth date, you're not part of Generation Z or Alpha.",
            },
        }
    }
}

impl ResultView {
    pub fn new(birth_date: BirthDate, generation: Generation) -> Self {
        Self {
            birth_date,
            generation,
            badge: RESULT_BADGE,
            headline: format!("You're {generation}!"),
            description: generation.description(),
        }
    }
}

impl Submission {
    pub const fn result_view(&self) -> Option<&ResultView> {
        match self {
            Self::Result(view) => Some(view),
            Self::Notice(_) => None,
        }
    }

    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Result(_) => None,
            Self::Notice(notice) => Some(notice),
        }
    }
}
