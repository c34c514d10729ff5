use rust_decimal::prelude::*;
use tracing::warn;

use crate::models::{Category, AMOUNT_DECIMAL_PLACES};

/// A proposed budget for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Allocation {
    pub(crate) id: String,
    pub(crate) budget: Decimal,
}

impl Allocation {
    pub(crate) fn new(id: &str, budget: Decimal) -> Self {
        Self {
            id: id.to_string(),
            budget,
        }
    }
}

/// A reallocation policy: looks at the current categories and proposes new
/// budgets. Categories it leaves out keep their budget.
pub(crate) trait Rebalance {
    fn propose(&self, categories: &[Category]) -> Vec<Allocation>;
}

impl<F> Rebalance for F
where
    F: Fn(&[Category]) -> Vec<Allocation>,
{
    fn propose(&self, categories: &[Category]) -> Vec<Allocation> {
        self(categories)
    }
}

/// Assigns fixed budgets by position: the first target goes to the first
/// category, and so on. Extra targets are ignored.
#[derive(Debug, Clone)]
pub(crate) struct FixedTargets {
    targets: Vec<Decimal>,
}

impl FixedTargets {
    pub(crate) fn new(targets: Vec<Decimal>) -> Self {
        Self { targets }
    }

    /// Nudges the first category up to 280 and the second down to 150.
    pub(crate) fn suggested() -> Self {
        Self::new(vec![Decimal::from(280), Decimal::from(150)])
    }
}

impl Rebalance for FixedTargets {
    fn propose(&self, categories: &[Category]) -> Vec<Allocation> {
        categories
            .iter()
            .zip(&self.targets)
            .map(|(cat, target)| Allocation::new(&cat.id, *target))
            .collect()
    }
}

/// Redistributes the current total budget in proportion to what each category
/// has spent.
///
/// Shares are rounded down to `decimal_places`, then the leftover units go to
/// the categories with the largest truncated fractions (earlier categories win
/// ties), so the proposals always sum to the rounded total.
#[derive(Debug, Clone)]
pub(crate) struct SpendWeighted {
    decimal_places: u32,
}

impl SpendWeighted {
    /// Precision finer than a cent is capped, since the store would refuse it.
    pub(crate) fn new(decimal_places: u32) -> Self {
        Self {
            decimal_places: decimal_places.min(AMOUNT_DECIMAL_PLACES),
        }
    }
}

impl Default for SpendWeighted {
    fn default() -> Self {
        Self::new(AMOUNT_DECIMAL_PLACES)
    }
}

impl Rebalance for SpendWeighted {
    fn propose(&self, categories: &[Category]) -> Vec<Allocation> {
        let Some(total_spent) = checked_sum(categories.iter().map(|c| c.spent)) else {
            warn!("spend total overflowed; no weighted proposal");
            return Vec::new();
        };
        if total_spent <= Decimal::ZERO {
            return Vec::new();
        }

        let dp = self.decimal_places;
        let unit = Decimal::new(1, dp);
        let Some(total) = checked_sum(categories.iter().map(|c| c.budget)) else {
            warn!("budget total overflowed; no weighted proposal");
            return Vec::new();
        };
        let total = total.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);

        let Some(exact) = categories
            .iter()
            .map(|c| {
                total
                    .checked_mul(c.spent)
                    .and_then(|x| x.checked_div(total_spent))
            })
            .collect::<Option<Vec<Decimal>>>()
        else {
            warn!("weighted share overflowed; no weighted proposal");
            return Vec::new();
        };
        let mut shares: Vec<Decimal> = exact
            .iter()
            .map(|e| e.round_dp_with_strategy(dp, RoundingStrategy::ToZero))
            .collect();

        let allocated: Decimal = shares.iter().sum();
        let leftover =
            ((total - allocated) / unit).round_dp_with_strategy(0, RoundingStrategy::ToZero);
        let Some(extra_units) = leftover.to_usize() else {
            warn!(%leftover, "leftover units out of range; no weighted proposal");
            return Vec::new();
        };

        let mut by_fraction: Vec<usize> = (0..shares.len()).collect();
        by_fraction.sort_by(|&a, &b| {
            let fa = exact[a] - shares[a];
            let fb = exact[b] - shares[b];
            fb.cmp(&fa).then(a.cmp(&b))
        });
        for &i in by_fraction.iter().take(extra_units) {
            shares[i] += unit;
        }

        categories
            .iter()
            .zip(shares)
            .map(|(cat, share)| Allocation::new(&cat.id, share))
            .collect()
    }
}

fn checked_sum(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, x| acc.checked_add(x))
}
