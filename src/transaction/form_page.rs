//! Defines the route handlers that open the add and edit transaction forms.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    form::FormState,
    store::TransactionStore,
    timezone::local_today,
    transaction::{TransactionId, form::transaction_form_view},
    view::{RedirectQuery, redirect_target},
};

/// The state needed to open, create or update a transaction form.
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// The store the form reads from and writes to.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders a blank form dated today.
pub async fn get_new_transaction_form(
    State(state): State<TransactionFormState>,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let form = FormState::open_for_create(today);

    transaction_form_view(&form, &redirect_target(query.redirect_url)).into_response()
}

/// Renders the form filled in with the transaction's current values.
pub async fn get_edit_transaction_form(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let form = {
        let store = match state.store.lock() {
            Ok(store) => store,
            Err(error) => {
                tracing::error!("could not acquire store lock: {error}");
                return Error::StoreLockError.into_alert_response();
            }
        };

        match store.get(transaction_id) {
            Ok(transaction) => FormState::open_for_edit(transaction),
            Err(error) => {
                tracing::warn!("could not open transaction {transaction_id} for editing: {error}");
                return error.into_alert_response();
            }
        }
    };

    transaction_form_view(&form, &redirect_target(query.redirect_url)).into_response()
}
