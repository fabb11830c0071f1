//! The tab bar for switching between the overview, transactions and analytics views.

use maud::{Markup, html};

use crate::{endpoints, filters::ViewFilter};

/// A link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link {
    url: String,
    title: &'static str,
    is_current: bool,
}

impl Link {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "inline-block px-4 py-3 rounded-t-lg border-b-2 border-blue-600 \
            text-blue-600 dark:text-blue-500 dark:border-blue-500"
        } else {
            "inline-block px-4 py-3 rounded-t-lg border-b-2 border-transparent \
            text-gray-500 hover:text-gray-700 hover:border-gray-300 \
            dark:text-gray-400 dark:hover:text-gray-300"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar {
    links: Vec<Link>,
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    /// Every link keeps the month and category in `filter`.
    pub fn new(active_endpoint: &str, filter: &ViewFilter) -> NavBar {
        let links = [
            (endpoints::OVERVIEW_VIEW, "Overview"),
            (endpoints::TRANSACTIONS_VIEW, "Transactions"),
            (endpoints::ANALYTICS_VIEW, "Analytics"),
        ]
        .into_iter()
        .map(|(endpoint, title)| Link {
            url: filter.to_url(endpoint),
            title,
            is_current: active_endpoint == endpoint,
        })
        .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="w-full border-b border-gray-200 dark:border-gray-700 mb-6"
            {
                ul class="flex flex-wrap -mb-px text-sm font-medium text-center"
                {
                    @for link in self.links {
                        li class="me-2" { (link.into_html()) }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use std::collections::HashMap;

    use scraper::{Html, Selector};

    use crate::{category::CategoryFilter, endpoints, filters::ViewFilter, navigation::NavBar};

    fn filter() -> ViewFilter {
        ViewFilter {
            month: "2024-09".parse().unwrap(),
            category: CategoryFilter::Only("Salary".to_owned()),
        }
    }

    #[test]
    fn set_active_endpoint() {
        let mut cases = HashMap::new();
        cases.insert(endpoints::OVERVIEW_VIEW, true);
        cases.insert(endpoints::TRANSACTIONS_VIEW, true);
        cases.insert(endpoints::ANALYTICS_VIEW, true);

        cases.insert(endpoints::ROOT, false);
        cases.insert(endpoints::NEW_TRANSACTION_VIEW, false);
        cases.insert(endpoints::TRANSACTIONS_API, false);
        cases.insert(endpoints::CATEGORIES_API, false);

        for (endpoint, should_be_active) in cases {
            let nav_bar = NavBar::new(endpoint, &filter());

            assert_link_active(nav_bar, endpoint, should_be_active);
        }
    }

    #[test]
    fn links_keep_filter_query() {
        let markup = NavBar::new(endpoints::OVERVIEW_VIEW, &filter()).into_html();
        let html = Html::parse_fragment(&markup.into_string());

        let hrefs: Vec<&str> = html
            .select(&Selector::parse("a").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();

        assert_eq!(
            hrefs,
            vec![
                "/overview?month=2024-09&category=Salary",
                "/transactions?month=2024-09&category=Salary",
                "/analytics?month=2024-09&category=Salary",
            ]
        );
    }

    #[track_caller]
    fn assert_link_active(nav_bar: NavBar, endpoint: &str, should_be_active: bool) {
        let get_active_string = |is_active: bool| -> &str {
            if is_active {
                "active (true)"
            } else {
                "inactive (false)"
            }
        };

        for link in nav_bar.links {
            if link.url.split('?').next() == Some(endpoint) {
                assert_eq!(
                    link.is_current,
                    should_be_active,
                    "Link for current page should be {} but got {}",
                    get_active_string(should_be_active),
                    get_active_string(link.is_current),
                )
            } else {
                assert!(
                    !link.is_current,
                    "Link for inactive page should {} but got {}",
                    get_active_string(false),
                    get_active_string(link.is_current)
                )
            }
        }
    }
}
