//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}/edit', use
//! [format_endpoint].

use crate::transaction::TransactionId;

/// The root route which redirects to the overview.
pub const ROOT: &str = "/";
/// The landing page with the income, expense and balance totals.
pub const OVERVIEW_VIEW: &str = "/overview";
/// The page listing the filtered transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page with the category and monthly charts.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The form for adding a transaction.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The form for editing an existing transaction.
pub const EDIT_TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/edit";

/// The category options for a transaction type.
pub const CATEGORIES_API: &str = "/api/categories";
/// The route to create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}/edit',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: TransactionId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
