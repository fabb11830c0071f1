//! Defines the core data models for transactions.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::month::MonthKey;

// ============================================================================
// MODELS
// ============================================================================

/// The identifier the store assigns to a transaction when it is created.
///
/// IDs are never reused within a session, even after the transaction they
/// referred to has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Wrap a raw ID, e.g. one parsed from a URL path.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw integer value of the ID.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    #[default]
    Expense,
}

impl TransactionType {
    /// The lowercase name used in forms and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and add the
/// builder to a [crate::store::TransactionStore].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    pub type_: TransactionType,
    /// The amount of money spent or earned. Never negative, the sign is
    /// given by `type_`.
    pub amount: Decimal,
    /// The category the transaction belongs to, e.g. "Salary" or "Travel".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        type_: TransactionType,
        amount: Decimal,
        category: &str,
        description: &str,
        date: Date,
    ) -> TransactionBuilder {
        TransactionBuilder {
            type_,
            amount,
            category: category.to_owned(),
            description: description.to_owned(),
            date,
        }
    }

    /// The calendar month the transaction falls in.
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// The field values of this transaction without its ID.
    pub fn to_builder(&self) -> TransactionBuilder {
        TransactionBuilder {
            type_: self.type_,
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date,
        }
    }
}

/// Every field of a [Transaction] except its ID.
///
/// The store assigns the ID when the builder is added, or keeps the existing
/// ID when the builder replaces the fields of a stored transaction.
///
/// # Examples
///
/// ```ignore
/// use rust_decimal::Decimal;
/// use time::macros::date;
///
/// use crate::transaction::{Transaction, TransactionType};
///
/// let lunch = Transaction::build(
///         TransactionType::Expense,
///         Decimal::new(4599, 2),
///         "Food & Dining",
///         "Lunch at restaurant",
///         date!(2024-09-15),
///     );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// Whether the transaction is income or an expense.
    pub type_: TransactionType,
    /// The non-negative amount of money.
    pub amount: Decimal,
    /// The category, normally one of [crate::category::categories_for].
    ///
    /// Categories outside of the vocabulary are accepted.
    pub category: String,
    /// A human-readable description of the transaction.
    pub description: String,
    /// The date when the transaction occurred.
    pub date: Date,
}

impl TransactionBuilder {
    /// Create a [Transaction] with the given `id`.
    pub fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            type_: self.type_,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        month::MonthKey,
        transaction::{Transaction, TransactionId, TransactionType},
    };

    #[test]
    fn finalize_keeps_fields() {
        let builder = Transaction::build(
            TransactionType::Income,
            Decimal::from(3000),
            "Salary",
            "Monthly salary",
            date!(2024 - 09 - 01),
        );

        let transaction = builder.clone().finalize(TransactionId::new(7));

        assert_eq!(transaction.id, TransactionId::new(7));
        assert_eq!(transaction.to_builder(), builder);
    }

    #[test]
    fn month_is_date_prefix() {
        let transaction = Transaction::build(
            TransactionType::Expense,
            Decimal::ONE,
            "Other",
            "test",
            date!(2024 - 09 - 18),
        )
        .finalize(TransactionId::new(1));

        assert_eq!(transaction.month(), "2024-09".parse::<MonthKey>().unwrap());
    }

    #[test]
    fn transaction_type_deserializes_from_lowercase() {
        #[derive(serde::Deserialize)]
        struct Form {
            type_: TransactionType,
        }

        let form: Form = serde_html_form::from_str("type_=income").unwrap();
        assert_eq!(form.type_, TransactionType::Income);

        let form: Form = serde_html_form::from_str("type_=expense").unwrap();
        assert_eq!(form.type_, TransactionType::Expense);

        assert!(serde_html_form::from_str::<Form>("type_=transfer").is_err());
    }
}
