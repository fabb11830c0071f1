//! The overview page: income, expense and balance totals plus the most recent transactions.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    Error,
    aggregation::{Totals, filtered, recent, summarize},
    endpoints,
    filters::FilterQuery,
    html::{CARD_STYLE, format_currency},
    transaction::transaction_list_item,
    view::{ViewSnapshot, ViewState, view_page},
};

/// How many transactions the "Recent Transactions" list shows.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// Display the totals for the selected month and category.
pub async fn get_overview_page(
    State(state): State<ViewState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let snapshot = ViewSnapshot::load(&state, &query)?;
    let transactions = filtered(&snapshot.transactions, &snapshot.filter);
    let totals = summarize(&transactions);
    let recent_transactions = recent(&transactions, RECENT_TRANSACTION_COUNT);

    let content = html! {
        (totals_cards(&totals))

        section class=(CARD_STYLE)
        {
            h2 class="text-xl font-semibold mb-4" { "Recent Transactions" }

            @if recent_transactions.is_empty() {
                p class="py-8 text-center text-gray-500 dark:text-gray-400"
                {
                    "No transactions found for the selected filters."
                }
            } @else {
                ul id="recent-transactions" class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for transaction in recent_transactions {
                        (transaction_list_item(transaction, None))
                    }
                }
            }
        }
    };

    Ok(view_page(
        "Overview",
        endpoints::OVERVIEW_VIEW,
        &snapshot,
        &[],
        &content,
    )
    .into_response())
}

fn totals_cards(totals: &Totals) -> Markup {
    let balance_class = if totals.balance >= Decimal::ZERO {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    html! {
        section id="totals" class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full mb-6"
        {
            (total_card("total-income", "Total Income", totals.income, "text-green-600 dark:text-green-400"))
            (total_card("total-expenses", "Total Expenses", totals.expenses, "text-red-600 dark:text-red-400"))
            (total_card("balance", "Balance", totals.balance, balance_class))
        }
    }
}

fn total_card(id: &str, title: &str, amount: Decimal, amount_class: &str) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            p class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }
            p class={ "text-2xl font-bold " (amount_class) } { (format_currency(amount)) }
        }
    }
}
