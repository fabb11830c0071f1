//! The month and category selectors shared by every view.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    category::{ALL_CATEGORIES, CategoryFilter},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    month::MonthKey,
};

/// The raw query parameters for the month and category selectors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    /// The selected month as `YYYY-MM`.
    pub month: Option<String>,
    /// The selected category, or "all".
    pub category: Option<String>,
}

/// The validated month and category selection for a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    /// Only transactions in this month are shown.
    pub month: MonthKey,
    /// Only transactions whose category passes this filter are shown.
    pub category: CategoryFilter,
}

impl ViewFilter {
    /// Build the filter from query parameters.
    ///
    /// A missing month selects `current_month`. A month that cannot be parsed
    /// also falls back to `current_month`.
    pub fn from_query(query: &FilterQuery, current_month: MonthKey) -> Self {
        let month = match query.month.as_deref() {
            None | Some("") => current_month,
            Some(text) => text.parse().unwrap_or_else(|error| {
                tracing::warn!("{error}, falling back to the current month {current_month}");
                current_month
            }),
        };

        Self {
            month,
            category: CategoryFilter::from_query(query.category.as_deref()),
        }
    }

    /// Encode the filter as a URL query string, e.g.
    /// `month=2024-09&category=Food+%26+Dining`.
    pub fn to_query_string(&self) -> String {
        let month = self.month.to_string();
        let pairs = [
            ("month", month.as_str()),
            ("category", self.category.as_query_value()),
        ];

        serde_urlencoded::to_string(pairs).unwrap_or_else(|error| {
            tracing::error!("could not encode filter {self:?}: {error}");
            String::new()
        })
    }

    /// `route` with the filter appended as the query string.
    pub fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}

/// Renders the month and category selectors.
///
/// Changing either selector reloads `route` with the new selection as query
/// parameters, so the charts are initialised again on the new page. The
/// category options are "All Categories" followed by `categories`.
pub fn filter_bar(route: &str, filter: &ViewFilter, categories: &[&str]) -> Markup {
    let selected_category = match &filter.category {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => Some(category.as_str()),
    };
    // Keep the active selection visible even if no transaction uses it anymore.
    let missing_selection =
        selected_category.filter(|selected| !categories.contains(selected));

    html! {
        form
            id="filters"
            method="get"
            action=(route)
            onchange="this.requestSubmit()"
            class="flex flex-wrap items-end gap-4 w-full mb-6"
        {
            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month:" }

                input
                    type="month"
                    name="month"
                    id="month"
                    value=(filter.month)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category:" }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(ALL_CATEGORIES) selected[selected_category.is_none()]
                    {
                        "All Categories"
                    }

                    @for category in categories.iter().copied().chain(missing_selection) {
                        option value=(category) selected[selected_category == Some(category)]
                        {
                            (category)
                        }
                    }
                }
            }

            noscript
            {
                button type="submit" class="px-4 py-2 rounded bg-blue-500 text-white" { "Apply" }
            }
        }
    }
}
