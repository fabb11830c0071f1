//! Analytics HTTP handler and view rendering.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    aggregation::{CategoryTotal, by_category, by_month, filtered},
    analytics::charts::{
        AnalyticsChart, category_color, charts_script, charts_view, expenses_by_category_chart,
        monthly_trends_chart,
    },
    endpoints,
    filters::FilterQuery,
    html::{CARD_STYLE, ECHARTS_URL, HeadElement, format_currency},
    view::{ViewSnapshot, ViewState, view_page},
};

/// Display the charts and category summary.
///
/// The category chart and summary only use the filtered transactions, while
/// the monthly trends cover every transaction on record.
pub async fn get_analytics_page(
    State(state): State<ViewState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let snapshot = ViewSnapshot::load(&state, &query)?;
    let transactions = filtered(&snapshot.transactions, &snapshot.filter);
    let breakdown = by_category(&transactions);
    let monthly_totals = by_month(&snapshot.transactions);

    let charts = [
        AnalyticsChart {
            id: "expenses-by-category-chart",
            options: expenses_by_category_chart(&breakdown).to_string(),
        },
        AnalyticsChart {
            id: "monthly-trends-chart",
            options: monthly_trends_chart(&monthly_totals).to_string(),
        },
    ];

    let content = html! {
        (charts_view(&charts))
        (category_summary_view(&breakdown))
    };

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        charts_script(&charts),
    ];

    Ok(view_page(
        "Analytics",
        endpoints::ANALYTICS_VIEW,
        &snapshot,
        &scripts,
        &content,
    )
    .into_response())
}

fn category_summary_view(breakdown: &[CategoryTotal]) -> Markup {
    html! {
        section id="category-summary" class=(CARD_STYLE)
        {
            h2 class="text-xl font-semibold mb-4" { "Category Summary" }

            @if breakdown.is_empty() {
                p class="py-8 text-center text-gray-500 dark:text-gray-400"
                {
                    "No expenses found for the selected filters."
                }
            } @else {
                ul class="space-y-3"
                {
                    @for (index, category_total) in breakdown.iter().enumerate() {
                        li class="flex items-center justify-between"
                        {
                            div class="flex items-center gap-3"
                            {
                                span
                                    class="inline-block w-4 h-4 rounded-full"
                                    style={ "background-color: " (category_color(index)) ";" }
                                {}

                                span class="font-medium" { (category_total.category) }
                            }

                            span class="font-semibold" { (format_currency(category_total.total)) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use rust_decimal::Decimal;
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        analytics::get_analytics_page,
        filters::FilterQuery,
        html::ECHARTS_URL,
        store::TransactionStore,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
        transaction::{Transaction, TransactionType},
        view::ViewState,
    };

    fn get_test_state() -> ViewState {
        let mut store = TransactionStore::new();
        store.add(Transaction::build(
            TransactionType::Expense,
            Decimal::new(4599, 2),
            "Food & Dining",
            "Lunch at restaurant",
            date!(2024 - 09 - 15),
        ));
        store.add(Transaction::build(
            TransactionType::Expense,
            Decimal::from(120),
            "Transportation",
            "Gas and parking",
            date!(2024 - 09 - 18),
        ));
        store.add(Transaction::build(
            TransactionType::Income,
            Decimal::from(3000),
            "Salary",
            "Monthly salary",
            date!(2024 - 09 - 01),
        ));
        store.add(Transaction::build(
            TransactionType::Expense,
            Decimal::from(75),
            "Entertainment",
            "Concert",
            date!(2024 - 08 - 30),
        ));

        ViewState {
            store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn query(month: &str) -> Query<FilterQuery> {
        Query(FilterQuery {
            month: Some(month.to_owned()),
            category: None,
        })
    }

    #[tokio::test]
    async fn summary_lists_filtered_categories_with_palette_colors() {
        let response = get_analytics_page(State(get_test_state()), query("2024-09"))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows: Vec<(String, String)> = html
            .select(&Selector::parse("#category-summary li").unwrap())
            .map(|row| {
                let swatch = row
                    .select(&Selector::parse("span[style]").unwrap())
                    .next()
                    .and_then(|swatch| swatch.value().attr("style"))
                    .unwrap_or_default()
                    .to_owned();
                (row.text().collect::<String>(), swatch)
            })
            .collect();

        assert_eq!(rows.len(), 2, "want only September expenses, got {rows:?}");
        assert!(rows[0].0.contains("Food & Dining"));
        assert!(rows[0].0.contains("₹45.99"));
        assert!(rows[0].1.contains("#3B82F6"));
        assert!(rows[1].0.contains("Transportation"));
        assert!(rows[1].1.contains("#EF4444"));
    }

    #[tokio::test]
    async fn monthly_trends_cover_every_month() {
        let response = get_analytics_page(State(get_test_state()), query("2024-09"))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let scripts: String = html
            .select(&Selector::parse("head script").unwrap())
            .map(|script| script.inner_html())
            .collect();

        assert!(scripts.contains("monthly-trends-chart"));
        assert!(scripts.contains("Aug 2024"));
        assert!(scripts.contains("Sep 2024"));

        let echarts = html
            .select(&Selector::parse("head script[src]").unwrap())
            .filter_map(|script| script.value().attr("src"))
            .any(|src| src == ECHARTS_URL);
        assert!(echarts, "want the ECharts library to be loaded");
    }

    #[tokio::test]
    async fn empty_month_shows_no_expenses_message() {
        let response = get_analytics_page(State(get_test_state()), query("2023-01"))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let summary = html
            .select(&Selector::parse("#category-summary").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert!(summary.contains("No expenses found for the selected filters."));
    }
}
