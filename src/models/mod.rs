mod amount;
mod category;
mod period;

pub(crate) use amount::{check_amount, parse_amount, AMOUNT_DECIMAL_PLACES, MAX_AMOUNT};
pub(crate) use category::Category;
pub(crate) use period::{Direction, Period};

#[cfg(test)]
mod tests;
