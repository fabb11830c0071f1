//! Writes a submitted transaction form to the store and builds the htmx response.

use std::sync::Mutex;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    Error,
    form::{FormState, SubmitOutcome},
    store::TransactionStore,
    transaction::form::transaction_form_view,
};

/// Submit `form` and respond with a redirect to `redirect_url` on success.
///
/// An invalid form is sent back with status 422 and the errors shown next to
/// each field. Other failures respond with an alert.
pub(super) fn submit_transaction_form(
    store: &Mutex<TransactionStore>,
    mut form: FormState,
    redirect_url: &str,
) -> Response {
    let outcome = match store.lock() {
        Ok(mut store) => form.submit(&mut store),
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            Err(Error::StoreLockError)
        }
    };

    match outcome {
        Ok(SubmitOutcome::Created(_) | SubmitOutcome::Updated(_)) => (
            HxRedirect(redirect_url.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(SubmitOutcome::Rejected) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            transaction_form_view(&form, redirect_url),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not save transaction: {error}");
            error.into_alert_response()
        }
    }
}
