use rust_decimal::Decimal;

use crate::models::Category;

const DEFAULT_CATEGORIES: &[(&str, &str, &str, i64, i64)] = &[
    ("food", "Food", "🍔", 250, 72),
    ("transport", "Transport", "🚗", 180, 145),
    ("shopping", "Shopping", "🛍", 400, 89),
    ("bills", "Bills", "💡", 320, 320),
    ("other", "Other", "📦", 350, 99),
];

pub(super) fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|&(id, name, icon, budget, spent)| {
            Category::new(id, name, icon, Decimal::from(budget), Decimal::from(spent))
        })
        .collect()
}
