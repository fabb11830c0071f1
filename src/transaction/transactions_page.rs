//! Defines the route handler for the page that lists the filtered transactions.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    aggregation::filtered,
    endpoints::{self, format_endpoint},
    filters::FilterQuery,
    html::{
        CARD_STYLE, amount_class, edit_delete_action_buttons, format_signed_amount,
        type_badge_class,
    },
    transaction::Transaction,
    view::{ViewSnapshot, ViewState, view_page, with_redirect},
};

/// Render every transaction in the selected month and category.
pub async fn get_transactions_page(
    State(state): State<ViewState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let snapshot = ViewSnapshot::load(&state, &query)?;
    let transactions = filtered(&snapshot.transactions, &snapshot.filter);
    let redirect_url = snapshot.filter.to_url(endpoints::TRANSACTIONS_VIEW);

    let content = html! {
        section class={ (CARD_STYLE) " overflow-hidden" }
        {
            h2 class="text-xl font-semibold mb-4" { "All Transactions" }

            @if transactions.is_empty() {
                p class="py-8 text-center text-gray-500 dark:text-gray-400"
                {
                    "No transactions found for the selected filters."
                }
            } @else {
                ul id="transaction-list" class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for transaction in &transactions {
                        (transaction_list_item(transaction, Some(&redirect_url)))
                    }
                }
            }
        }
    };

    Ok(view_page(
        "Transactions",
        endpoints::TRANSACTIONS_VIEW,
        &snapshot,
        &[],
        &content,
    )
    .into_response())
}

/// Renders one transaction as a list item.
///
/// If `redirect_url` is given the item gets edit and delete buttons, and the
/// edit form returns to `redirect_url` once saved.
pub(crate) fn transaction_list_item(
    transaction: &Transaction,
    redirect_url: Option<&str>,
) -> Markup {
    let item_id = format!("transaction-{}", transaction.id);
    let actions = redirect_url.map(|redirect_url| {
        edit_delete_action_buttons(
            &with_redirect(
                &format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id),
                redirect_url,
            ),
            &format_endpoint(endpoints::TRANSACTION, transaction.id),
            &format!(
                "Are you sure you want to delete the transaction '{}'? This cannot be undone.",
                transaction.description
            ),
            &format!("#{item_id}"),
        )
    });

    html! {
        li id=(item_id) class="flex items-center justify-between gap-4 py-3"
        {
            div class="flex items-center gap-3 min-w-0"
            {
                span class=(type_badge_class(transaction.type_)) { (transaction.type_) }

                div class="min-w-0"
                {
                    p class="font-medium truncate" { (transaction.description) }
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        (transaction.category) " • " (transaction.date)
                    }
                }
            }

            div class="flex items-center gap-4 shrink-0"
            {
                span class={ "font-semibold " (amount_class(transaction.type_)) }
                {
                    (format_signed_amount(transaction.type_, transaction.amount))
                }

                @if let Some(actions) = actions {
                    (actions)
                }
            }
        }
    }
}
