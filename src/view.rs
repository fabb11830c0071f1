//! The layout and state shared by the overview, transactions and analytics views.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    category::observed_categories,
    endpoints,
    filters::{FilterQuery, ViewFilter, filter_bar},
    html::{BUTTON_PRIMARY_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    store::TransactionStore,
    timezone::current_month,
    transaction::Transaction,
};

/// The state needed to render a view.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The transactions to display.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for ViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A copy of every transaction plus the active filter, taken once per request.
///
/// The store lock is released before any rendering happens.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    /// Every transaction in insertion order.
    pub transactions: Vec<Transaction>,
    /// The month and category selection for this request.
    pub filter: ViewFilter,
}

impl ViewSnapshot {
    /// Copy the transactions in `state` and resolve `query` against the current month.
    ///
    /// # Errors
    /// Returns an error if the store lock is poisoned or the timezone is invalid.
    pub fn load(state: &ViewState, query: &FilterQuery) -> Result<Self, Error> {
        let current_month = current_month(&state.local_timezone)?;

        let transactions = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?
            .all()
            .to_vec();

        Ok(Self {
            transactions,
            filter: ViewFilter::from_query(query, current_month),
        })
    }
}

/// The query parameter naming the page to return to after saving a form.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    /// A path on this site, e.g. `/overview?month=2024-09&category=all`.
    pub redirect_url: Option<String>,
}

/// The page to send the client to after a form is saved.
///
/// Only paths on this site are followed, anything else goes to the
/// transactions view.
pub fn redirect_target(redirect_url: Option<String>) -> String {
    match redirect_url {
        Some(url) if url.starts_with('/') && !url.starts_with("//") => url,
        Some(url) => {
            tracing::warn!("ignoring redirect to {url:?}");
            endpoints::TRANSACTIONS_VIEW.to_owned()
        }
        None => endpoints::TRANSACTIONS_VIEW.to_owned(),
    }
}

/// `endpoint` with `redirect_url` attached as the `redirect_url` query parameter.
pub fn with_redirect(endpoint: &str, redirect_url: &str) -> String {
    match serde_urlencoded::to_string([("redirect_url", redirect_url)]) {
        Ok(query) => format!("{endpoint}?{query}"),
        Err(error) => {
            tracing::error!("could not encode redirect URL {redirect_url:?}: {error}");
            endpoint.to_owned()
        }
    }
}

/// Wraps `content` in the layout of a view: navigation, filters and the
/// "Add Transaction" button.
pub fn view_page(
    title: &str,
    endpoint: &str,
    snapshot: &ViewSnapshot,
    head_elements: &[HeadElement],
    content: &Markup,
) -> Markup {
    let nav_bar = NavBar::new(endpoint, &snapshot.filter).into_html();
    let categories = observed_categories(&snapshot.transactions);
    let filters = filter_bar(endpoint, &snapshot.filter, &categories);
    let new_transaction_url = with_redirect(
        endpoints::NEW_TRANSACTION_VIEW,
        &snapshot.filter.to_url(endpoint),
    );

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            (nav_bar)

            div class="flex flex-wrap justify-between items-end gap-4 w-full"
            {
                (filters)

                div class="mb-6"
                {
                    button
                        type="button"
                        id="add-transaction"
                        hx-get=(new_transaction_url)
                        hx-target="#modal-container"
                        hx-target-error="#alert-container"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "Add Transaction"
                    }
                }
            }

            (content)
        }
    };

    base(title, head_elements, &content)
}
