//! Source of the current calendar year.
//!
//! The upper bound of the accepted birth-year range moves with the wall
//! clock, so validation takes the year from a [`YearProvider`]. Tests and the
//! `--as-of` flag pin it with [`FixedYear`].

use chrono::{Datelike, Local};

/// Supplies the calendar year that bounds accepted birth years.
pub trait YearProvider {
    fn current_year(&self) -> u16;
}

/// Reads the year from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl YearProvider for SystemClock {
    fn current_year(&self) -> u16 {
        // Years outside u16 mean a broken clock; saturate rather than wrap.
        u16::try_from(Local::now().year().max(0)).unwrap_or(u16::MAX)
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub u16);

impl YearProvider for FixedYear {
    fn current_year(&self) -> u16 {
        self.0
    }
}

/// Current calendar year according to the system clock.
pub fn current_year() -> u16 {
    SystemClock.current_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_year() {
        assert_eq!(FixedYear(2024).current_year(), 2024);
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let expected = u16::try_from(Local::now().year()).unwrap();
        assert_eq!(current_year(), expected);
    }
}
