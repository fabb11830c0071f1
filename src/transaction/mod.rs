//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The add/edit form and the endpoints it submits to
//! - The page listing the filtered transactions

mod categories_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod form_page;
mod submit;
mod transactions_page;

pub use categories_endpoint::get_category_options;
pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form_page::{get_edit_transaction_form, get_new_transaction_form};
pub use transactions_page::get_transactions_page;
pub(crate) use transactions_page::transaction_list_item;
