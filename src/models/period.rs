use chrono::{Datelike, Local, Month};
use std::str::FromStr;

use crate::error::BudgetError;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Years a period may fall in.
pub(crate) const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Next,
    Prev,
}

/// The month/year a set of budgets applies to. Formats as `"October 2025"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Period {
    month: Month,
    year: i32,
}

impl Period {
    /// `year` is clamped into [`YEARS`].
    pub(crate) fn new(month: Month, year: i32) -> Self {
        Self {
            month,
            year: year.clamp(*YEARS.start(), *YEARS.end()),
        }
    }

    pub(crate) fn current() -> Self {
        let now = Local::now();
        let month = MONTHS
            .get(now.month0() as usize)
            .copied()
            .unwrap_or(Month::January);
        Self::new(month, now.year())
    }

    /// Signed number of months from `self` to `other`.
    pub(crate) fn months_until(self, other: Period) -> i64 {
        other.ordinal() - self.ordinal()
    }

    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month.number_from_month())
    }

    /// One step around the 12-month cycle, carrying into the year. Stepping
    /// past either end of [`YEARS`] leaves the period where it is.
    pub(crate) fn step(self, direction: Direction) -> Self {
        let (month, year) = match direction {
            Direction::Next if self.month == Month::December => (Month::January, self.year + 1),
            Direction::Prev if self.month == Month::January => (Month::December, self.year - 1),
            Direction::Next => (self.month.succ(), self.year),
            Direction::Prev => (self.month.pred(), self.year),
        };
        if YEARS.contains(&year) {
            Self { month, year }
        } else {
            self
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

impl FromStr for Period {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BudgetError::InvalidPeriod(s.to_string());
        let (month_part, year_part) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let month_lower = month_part.trim().to_lowercase();
        let month = MONTHS
            .iter()
            .find(|m| m.name().to_lowercase() == month_lower)
            .copied()
            .ok_or_else(invalid)?;
        let year = year_part.trim().parse::<i32>().map_err(|_| invalid())?;
        if !YEARS.contains(&year) {
            return Err(invalid());
        }
        Ok(Self::new(month, year))
    }
}
