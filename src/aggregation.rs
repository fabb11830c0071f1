//! Pure functions that derive the view data from a slice of transactions.
//!
//! None of these functions touch the store, so each view takes an immutable
//! snapshot of the transactions and the active [ViewFilter] and computes:
//! - the filtered set of transactions,
//! - income, expense and balance totals,
//! - expenses grouped by category,
//! - income and expenses grouped by month.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    category::EXPENSE_CATEGORIES,
    filters::ViewFilter,
    month::MonthKey,
    transaction::{Transaction, TransactionType},
};

/// Income, expenses and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expenses: Decimal,
    /// `income - expenses`.
    pub balance: Decimal,
}

/// The sum of expenses in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// The expense category.
    pub category: &'static str,
    /// The sum of expenses in the category, always greater than zero.
    pub total: Decimal,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    /// The month being summarized.
    pub month: MonthKey,
    /// Sum of income amounts in the month.
    pub income: Decimal,
    /// Sum of expense amounts in the month.
    pub expenses: Decimal,
}

/// Keeps the transactions in `filter.month` whose category passes
/// `filter.category`, in their original order.
pub fn filtered(transactions: &[Transaction], filter: &ViewFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| {
            transaction.month() == filter.month && filter.category.matches(&transaction.category)
        })
        .cloned()
        .collect()
}

/// Add `amount` to `total`, capping the result at [Decimal::MAX].
///
/// Amounts are never negative, so the sum can only overflow upwards.
fn add_amount(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!("total overflowed adding {amount}, capping at {}", Decimal::MAX);
        Decimal::MAX
    })
}

/// The sum of the amounts of transactions of type `type_`.
pub fn total_by_type(transactions: &[Transaction], type_: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|transaction| transaction.type_ == type_)
        .fold(Decimal::ZERO, |total, transaction| {
            add_amount(total, transaction.amount)
        })
}

/// Total income, total expenses and the balance between them.
///
/// An empty slice gives zero for every total.
pub fn summarize(transactions: &[Transaction]) -> Totals {
    let income = total_by_type(transactions, TransactionType::Income);
    let expenses = total_by_type(transactions, TransactionType::Expense);

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Sums expenses per category of [EXPENSE_CATEGORIES], in vocabulary order.
///
/// Categories without any expenses are left out, as are expenses whose
/// category is not in the vocabulary.
pub fn by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    EXPENSE_CATEGORIES
        .iter()
        .map(|&category| {
            let total = transactions
                .iter()
                .filter(|transaction| {
                    transaction.type_ == TransactionType::Expense
                        && transaction.category == category
                })
                .fold(Decimal::ZERO, |total, transaction| {
                    add_amount(total, transaction.amount)
                });

            CategoryTotal { category, total }
        })
        .filter(|category_total| category_total.total > Decimal::ZERO)
        .collect()
}

/// Groups transactions by month, sorted from the earliest month.
///
/// This is meant to be called with every transaction in the store, not the
/// filtered set, so the month series always covers the whole history.
pub fn by_month(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut totals: BTreeMap<MonthKey, MonthlyTotals> = BTreeMap::new();

    for transaction in transactions {
        let month = transaction.month();
        let entry = totals.entry(month).or_insert(MonthlyTotals {
            month,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        });

        match transaction.type_ {
            TransactionType::Income => entry.income = add_amount(entry.income, transaction.amount),
            TransactionType::Expense => {
                entry.expenses = add_amount(entry.expenses, transaction.amount)
            }
        }
    }

    totals.into_values().collect()
}

/// The first `count` transactions of `transactions`.
pub fn recent(transactions: &[Transaction], count: usize) -> &[Transaction] {
    &transactions[..transactions.len().min(count)]
}
