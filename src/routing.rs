//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};

use crate::{
    AppState,
    analytics::get_analytics_page,
    endpoints,
    not_found::get_404_not_found,
    overview::get_overview_page,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_category_options, get_edit_transaction_form, get_new_transaction_form,
        get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::OVERVIEW_VIEW, get(get_overview_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::ANALYTICS_VIEW, get(get_analytics_page))
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_form))
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_form),
        )
        .route(endpoints::CATEGORIES_API, get(get_category_options))
        .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the overview page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::OVERVIEW_VIEW)
}
