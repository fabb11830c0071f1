//! The fixed category vocabularies and the category filter.

use crate::transaction::{Transaction, TransactionType};

/// The categories offered for expenses, in display order.
pub const EXPENSE_CATEGORIES: [&str; 9] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Other",
];

/// The categories offered for income, in display order.
pub const INCOME_CATEGORIES: [&str; 7] = [
    "Salary",
    "Freelance",
    "Investment",
    "Business",
    "Gift",
    "Pocket Money",
    "Other",
];

/// The query value that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// The category options for a transaction of type `type_`.
pub fn categories_for(type_: TransactionType) -> &'static [&'static str] {
    match type_ {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// The distinct categories used by `transactions`, in the order they first
/// appear.
pub fn observed_categories(transactions: &[Transaction]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();

    for transaction in transactions {
        if !categories.contains(&transaction.category.as_str()) {
            categories.push(&transaction.category);
        }
    }

    categories
}

/// Selects which categories are shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep transactions of any category.
    #[default]
    All,
    /// Keep transactions whose category equals the given name exactly.
    Only(String),
}

impl CategoryFilter {
    /// Interpret a query parameter, where a missing or empty value and
    /// [ALL_CATEGORIES] select every category.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(category) => CategoryFilter::Only(category.to_owned()),
        }
    }

    /// Whether a transaction with `category` passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// The value to put in the `category` query parameter.
    pub fn as_query_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        category::{CategoryFilter, EXPENSE_CATEGORIES, categories_for, observed_categories},
        transaction::{Transaction, TransactionId, TransactionType},
    };

    fn transaction(id: u64, category: &str) -> Transaction {
        Transaction::build(
            TransactionType::Expense,
            Decimal::ONE,
            category,
            "test",
            date!(2024 - 09 - 01),
        )
        .finalize(TransactionId::new(id))
    }

    #[test]
    fn vocabulary_depends_on_type() {
        assert_eq!(categories_for(TransactionType::Expense), &EXPENSE_CATEGORIES);
        assert!(categories_for(TransactionType::Income).contains(&"Pocket Money"));
        assert!(!categories_for(TransactionType::Income).contains(&"Travel"));
    }

    #[test]
    fn observed_categories_are_distinct_in_first_seen_order() {
        let transactions = vec![
            transaction(1, "Travel"),
            transaction(2, "Salary"),
            transaction(3, "Travel"),
            transaction(4, "Gift"),
        ];

        assert_eq!(
            observed_categories(&transactions),
            vec!["Travel", "Salary", "Gift"]
        );
    }

    #[test]
    fn filter_from_query() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("all")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("Food & Dining")),
            CategoryFilter::Only("Food & Dining".to_owned())
        );
    }

    #[test]
    fn only_matches_exact_category() {
        let filter = CategoryFilter::Only("Travel".to_owned());

        assert!(filter.matches("Travel"));
        assert!(!filter.matches("travel"));
        assert!(!filter.matches("Other"));
        assert!(CategoryFilter::All.matches("anything"));
    }
}
