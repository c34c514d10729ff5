use thiserror::Error;

/// Failures of the budget store and its input parsing.
///
/// Every variant is recoverable: the operation that produced it left the
/// store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum BudgetError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Duplicate category id: {0}")]
    DuplicateId(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}
