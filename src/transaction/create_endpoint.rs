//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::{Query, State},
    response::Response,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;

use crate::{
    form::{FormFields, FormState},
    transaction::{form_page::TransactionFormState, submit::submit_transaction_form},
    view::{RedirectQuery, redirect_target},
};

/// A route handler for creating a new transaction, redirects to `redirect_url` on success.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Query(query): Query<RedirectQuery>,
    Form(fields): Form<FormFields>,
) -> Response {
    let form = FormState::Open {
        editing: None,
        fields,
        errors: Default::default(),
    };

    submit_transaction_form(&state.store, form, &redirect_target(query.redirect_url))
}
