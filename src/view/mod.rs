//! Presentation values derived from a store snapshot. Nothing here mutates.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Category, MAX_AMOUNT};

const WARNING_AT: Decimal = Decimal::from_parts(70, 0, 0, false, 0);
const CRITICAL_AT: Decimal = Decimal::from_parts(90, 0, 0, false, 0);
const EDIT_RANGE_FLOOR: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const EDIT_RANGE_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Severity of a spend-to-budget ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tier {
    Normal,
    Warning,
    Critical,
}

impl Tier {
    pub(crate) fn from_percentage(percentage: Decimal) -> Self {
        if percentage >= CRITICAL_AT {
            Self::Critical
        } else if percentage >= WARNING_AT {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Progress {
    /// Unclamped; overspending shows as more than 100.
    pub(crate) percentage: Decimal,
    pub(crate) tier: Tier,
}

impl Progress {
    /// Fill fraction for a progress bar, clamped to `0.0..=1.0`.
    pub(crate) fn bar_ratio(&self) -> f64 {
        ratio_of_percentage(self.percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overview {
    pub(crate) total_budget: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) percentage: Decimal,
}

impl Overview {
    /// Budget left over; negative when the period is overspent.
    pub(crate) fn remaining(&self) -> Decimal {
        self.total_budget - self.total_spent
    }

    pub(crate) fn bar_ratio(&self) -> f64 {
        ratio_of_percentage(self.percentage)
    }
}

/// `part / whole * 100`, or zero when there is no budget to measure against.
/// Saturates at `Decimal::MAX` rather than overflowing.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, x| {
        acc.checked_add(x).unwrap_or(Decimal::MAX)
    })
}

fn ratio_of_percentage(percentage: Decimal) -> f64 {
    (percentage / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}

pub(crate) fn category_progress(category: &Category) -> Progress {
    let percentage = percent_of(category.spent, category.budget);
    Progress {
        percentage,
        tier: Tier::from_percentage(percentage),
    }
}

pub(crate) fn overview(categories: &[Category]) -> Overview {
    let total_budget = saturating_sum(categories.iter().map(|c| c.budget));
    let total_spent = saturating_sum(categories.iter().map(|c| c.spent));
    Overview {
        total_budget,
        total_spent,
        percentage: percent_of(total_spent, total_budget),
    }
}

/// Upper bound for nudging a budget in the editor: at least 1000, or half as
/// much again as the current budget, never above [`MAX_AMOUNT`].
pub(crate) fn edit_range_max(budget: Decimal) -> Decimal {
    let scaled = budget
        .checked_mul(EDIT_RANGE_FACTOR)
        .unwrap_or(MAX_AMOUNT);
    EDIT_RANGE_FLOOR.max(scaled).min(MAX_AMOUNT)
}

#[cfg(test)]
mod tests;
