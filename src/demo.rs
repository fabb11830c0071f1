//! Sample transactions for trying the app out, loaded by `server --demo`.

use rust_decimal::Decimal;
use time::macros::date;

use crate::{
    store::TransactionStore,
    transaction::{Transaction, TransactionType},
};

/// Add the five September 2024 sample transactions to `store`.
pub fn seed_demo_transactions(store: &mut TransactionStore) {
    let samples = [
        Transaction::build(
            TransactionType::Expense,
            Decimal::new(4599, 2),
            "Food & Dining",
            "Lunch at restaurant",
            date!(2024 - 09 - 15),
        ),
        Transaction::build(
            TransactionType::Income,
            Decimal::from(3000),
            "Salary",
            "Monthly salary",
            date!(2024 - 09 - 01),
        ),
        Transaction::build(
            TransactionType::Expense,
            Decimal::from(120),
            "Transportation",
            "Gas and parking",
            date!(2024 - 09 - 18),
        ),
        Transaction::build(
            TransactionType::Expense,
            Decimal::new(8950, 2),
            "Shopping",
            "Groceries",
            date!(2024 - 09 - 17),
        ),
        Transaction::build(
            TransactionType::Income,
            Decimal::from(500),
            "Freelance",
            "Web development project",
            date!(2024 - 09 - 10),
        ),
    ];

    for sample in samples {
        store.add(sample);
    }

    tracing::info!("seeded {} demo transactions", store.all().len());
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{aggregation::summarize, demo::seed_demo_transactions, store::TransactionStore};

    #[test]
    fn seeds_september_samples() {
        let mut store = TransactionStore::new();

        seed_demo_transactions(&mut store);

        let transactions = store.all();
        assert_eq!(transactions.len(), 5);
        assert_eq!(transactions[0].description, "Lunch at restaurant");
        assert!(
            transactions
                .iter()
                .all(|transaction| transaction.month().to_string() == "2024-09")
        );

        let totals = summarize(transactions);
        assert_eq!(totals.income, Decimal::from(3500));
        assert_eq!(totals.expenses, Decimal::new(25549, 2));
        assert_eq!(totals.balance, Decimal::new(324451, 2));
    }
}
