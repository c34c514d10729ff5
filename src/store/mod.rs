mod rebalance;
mod seed;

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::BudgetError;
use crate::models::*;

pub(crate) use rebalance::{Allocation, FixedTargets, Rebalance, SpendWeighted};

/// In-memory owner of the category list and the current period.
///
/// Categories keep insertion order, which is also display order. Every amount
/// held passes [`check_amount`]: mutators validate before they write.
#[derive(Debug, Clone)]
pub(crate) struct BudgetStore {
    categories: Vec<Category>,
    period: Period,
}

impl BudgetStore {
    pub(crate) fn new(period: Period, categories: Vec<Category>) -> Result<Self, BudgetError> {
        let mut seen = HashSet::new();
        for cat in &categories {
            if !seen.insert(cat.id.as_str()) {
                return Err(BudgetError::DuplicateId(cat.id.clone()));
            }
            check_amount(cat.budget).map_err(|_| {
                BudgetError::InvalidAmount(format!("{} budget {}", cat.id, cat.budget))
            })?;
            check_amount(cat.spent).map_err(|_| {
                BudgetError::InvalidAmount(format!("{} spent {}", cat.id, cat.spent))
            })?;
        }
        Ok(Self { categories, period })
    }

    /// Store holding the built-in category list.
    pub(crate) fn seeded(period: Period) -> Result<Self, BudgetError> {
        Self::new(period, seed::default_categories())
    }

    pub(crate) fn period(&self) -> Period {
        self.period
    }

    pub(crate) fn list(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn get(&self, id: &str) -> Result<&Category, BudgetError> {
        Category::find_by_id(&self.categories, id)
            .ok_or_else(|| BudgetError::NotFound(id.to_string()))
    }

    pub(crate) fn set_budget(&mut self, id: &str, amount: Decimal) -> Result<(), BudgetError> {
        let amount = check_amount(amount).inspect_err(|_| {
            warn!(id, %amount, "rejected budget amount");
        })?;
        let cat = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| BudgetError::NotFound(id.to_string()))?;
        info!(id, old = %cat.budget, new = %amount, "budget updated");
        cat.budget = amount;
        Ok(())
    }

    pub(crate) fn reset_all(&mut self) {
        for cat in &mut self.categories {
            cat.budget = Decimal::ZERO;
        }
        info!(count = self.categories.len(), "all budgets reset");
    }

    pub(crate) fn advance_period(&mut self, direction: Direction) -> Period {
        self.period = self.period.step(direction);
        debug!(period = %self.period, ?direction, "period changed");
        self.period
    }

    /// Apply the allocations proposed by `policy`.
    ///
    /// The whole proposal is checked first; if any entry names an unknown
    /// category or an amount `set_budget` would refuse, nothing is written. Returns the number of
    /// budgets whose value changed.
    pub(crate) fn rebalance<P: Rebalance + ?Sized>(
        &mut self,
        policy: &P,
    ) -> Result<usize, BudgetError> {
        let proposal = policy.propose(&self.categories);

        for alloc in &proposal {
            if check_amount(alloc.budget).is_err() {
                warn!(id = %alloc.id, budget = %alloc.budget, "rebalance proposal rejected");
                return Err(BudgetError::InvalidAmount(format!(
                    "{} budget {}",
                    alloc.id, alloc.budget
                )));
            }
            if Category::find_by_id(&self.categories, &alloc.id).is_none() {
                warn!(id = %alloc.id, "rebalance proposal names unknown category");
                return Err(BudgetError::NotFound(alloc.id.clone()));
            }
        }

        let mut changed = 0;
        for alloc in proposal {
            if let Some(cat) = self.categories.iter_mut().find(|c| c.id == alloc.id) {
                if cat.budget != alloc.budget {
                    cat.budget = alloc.budget;
                    changed += 1;
                }
            }
        }
        info!(changed, "rebalance applied");
        Ok(changed)
    }
}
