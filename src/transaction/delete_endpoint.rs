use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, alert::Alert, store::TransactionStore, transaction::TransactionId};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The store holding the transaction.
    store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// On success the response holds nothing but an out-of-band alert, so the
/// targeted list item is replaced with nothing.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let removed = match state.store.lock() {
        Ok(mut store) => store.remove(transaction_id),
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match removed {
        // The status code has to be 200 OK or HTMX will not delete the list item.
        Some(transaction) => {
            tracing::info!("deleted transaction {}", transaction.id);
            Alert::Success {
                message: "Transaction deleted".to_owned(),
                details: format!("Removed \"{}\".", transaction.description),
            }
            .into_html()
            .into_response()
        }
        None => {
            tracing::warn!("tried to delete missing transaction {transaction_id}");
            Error::DeleteMissingTransaction.into_alert_response()
        }
    }
}
