use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Category {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) icon: String,
    pub(crate) budget: Decimal,
    /// Spend observed for the period. Supplied from outside; never edited here.
    pub(crate) spent: Decimal,
}

impl Category {
    pub(crate) fn new(id: &str, name: &str, icon: &str, budget: Decimal, spent: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            budget,
            spent,
        }
    }

    /// Find a category by ID in a slice.
    pub(crate) fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }

    /// Find a category by ID, falling back to a case-insensitive name match.
    pub(crate) fn find_by_key<'a>(categories: &'a [Category], key: &str) -> Option<&'a Category> {
        Self::find_by_id(categories, key).or_else(|| {
            let lower = key.to_lowercase();
            categories.iter().find(|c| c.name.to_lowercase() == lower)
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
