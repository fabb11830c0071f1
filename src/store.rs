//! The in-memory transaction store.

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Holds every transaction of the session in insertion order.
///
/// The store is the only place transactions are mutated. Views read a slice
/// of the store through [TransactionStore::all] and derive everything else
/// with the functions in [crate::aggregation].
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    /// Create an empty store. The first transaction added gets the ID 1.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a transaction with a fresh ID and return the stored transaction.
    pub fn add(&mut self, builder: TransactionBuilder) -> Transaction {
        let id = TransactionId::new(self.next_id);
        self.next_id += 1;

        let transaction = builder.finalize(id);
        self.transactions.push(transaction.clone());

        transaction
    }

    /// Replace every field of the transaction `id` except the ID itself.
    ///
    /// The transaction keeps its position in insertion order.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if `id` is not in the store,
    /// in which case the store is unchanged.
    pub fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::UpdateMissingTransaction)?;

        *slot = builder.finalize(id);

        Ok(slot.clone())
    }

    /// Delete the transaction `id`, returning it if it was in the store.
    ///
    /// Removing an ID that is not in the store does nothing.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)?;

        Some(self.transactions.remove(index))
    }

    /// Every transaction in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` is not in the store.
    pub fn get(&self, id: TransactionId) -> Result<&Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
