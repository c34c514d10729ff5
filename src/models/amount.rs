use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::BudgetError;

/// Largest budget or spend a category may hold: one trillion.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Amounts are whole cents.
pub(crate) const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Parse a user-entered budget amount.
///
/// Accepts surrounding whitespace, one leading `$` and `,` thousands
/// separators, so `" $1,250.50 "` parses as `1250.50`. Anything that is not a
/// plain non-negative decimal (empty, `NaN`, `inf`, `-5`) is `InvalidAmount`,
/// as is anything [`check_amount`] refuses.
pub(crate) fn parse_amount(input: &str) -> Result<Decimal, BudgetError> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() {
        return Err(BudgetError::InvalidAmount(input.to_string()));
    }

    let amount =
        Decimal::from_str(&cleaned).map_err(|_| BudgetError::InvalidAmount(input.to_string()))?;
    check_amount(amount).map_err(|_| BudgetError::InvalidAmount(input.to_string()))
}

/// Accept `amount` if it is non-negative, at most [`MAX_AMOUNT`] and has no
/// digits below a cent. Trailing zeros (`1.500`) are fine.
pub(crate) fn check_amount(amount: Decimal) -> Result<Decimal, BudgetError> {
    let amount = amount.normalize();
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BudgetError::InvalidAmount(amount.to_string()));
    }
    if amount > MAX_AMOUNT || amount.scale() > AMOUNT_DECIMAL_PLACES {
        return Err(BudgetError::InvalidAmount(amount.to_string()));
    }
    // `-0` is accepted as zero
    Ok(amount.abs())
}
