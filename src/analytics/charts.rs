//! Chart generation and rendering for the analytics page.
//!
//! This module creates interactive ECharts visualizations:
//! - **Expenses by Category**: Pie chart of the filtered expenses per category
//! - **Monthly Trends**: Income and expense bars for every month on record
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Tooltip,
        Trigger,
    },
    series::{bar::Bar, pie::Pie},
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    aggregation::{CategoryTotal, MonthlyTotals},
    html::HeadElement,
};

/// The colours assigned to categories in order, repeating after the last one.
pub(super) const CATEGORY_PALETTE: [&str; 9] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#F97316", "#06B6D4", "#84CC16",
    "#EC4899",
];

const INCOME_COLOR: &str = "#10B981";
const EXPENSE_COLOR: &str = "#EF4444";

/// The palette colour for the category at `index` in the breakdown.
pub(super) fn category_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// An analytics chart with its HTML container ID and ECharts configuration.
pub(super) struct AnalyticsChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for `charts`.
pub(super) fn charts_view(charts: &[AnalyticsChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded bg-white dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for `charts`.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[AnalyticsChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn expenses_by_category_chart(breakdown: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|category_total| (to_chart_value(category_total.total), category_total.category))
        .collect();
    let colors: Vec<Color> = (0..breakdown.len())
        .map(|index| Color::from(category_color(index)))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .color(colors)
        .series(
            Pie::new()
                .name("Expenses")
                .radius("60%")
                .center(vec!["50%", "55%"])
                .data(data),
        )
}

pub(super) fn monthly_trends_chart(monthly_totals: &[MonthlyTotals]) -> Chart {
    let labels: Vec<String> = monthly_totals.iter().map(|totals| totals.month.label()).collect();
    let income: Vec<f64> = monthly_totals
        .iter()
        .map(|totals| to_chart_value(totals.income))
        .collect();
    let expenses: Vec<f64> = monthly_totals
        .iter()
        .map(|totals| to_chart_value(totals.expenses))
        .collect();

    Chart::new()
        .title(Title::new().text("Monthly Trends"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(60)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .data(income),
        )
        .series(
            Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .data(expenses),
        )
}

/// Amounts are exact decimals, charts only need them approximately.
fn to_chart_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{
        aggregation::{CategoryTotal, MonthlyTotals},
        analytics::charts::{
            AnalyticsChart, category_color, charts_script, expenses_by_category_chart,
            monthly_trends_chart,
        },
        html::HeadElement,
    };

    #[test]
    fn palette_cycles() {
        assert_eq!(category_color(0), "#3B82F6");
        assert_eq!(category_color(8), "#EC4899");
        assert_eq!(category_color(9), "#3B82F6");
    }

    #[test]
    fn pie_chart_contains_categories() {
        let breakdown = [
            CategoryTotal {
                category: "Food & Dining",
                total: Decimal::new(4599, 2),
            },
            CategoryTotal {
                category: "Transportation",
                total: Decimal::from(120),
            },
        ];

        let options = expenses_by_category_chart(&breakdown).to_string();

        assert!(options.contains("Expenses by Category"));
        assert!(options.contains("Food & Dining"));
        assert!(options.contains("45.99"));
        assert!(options.contains("Transportation"));
    }

    #[test]
    fn bar_chart_labels_months() {
        let series = [
            MonthlyTotals {
                month: "2024-08".parse().unwrap(),
                income: Decimal::from(100),
                expenses: Decimal::ZERO,
            },
            MonthlyTotals {
                month: "2024-09".parse().unwrap(),
                income: Decimal::from(3500),
                expenses: Decimal::new(25549, 2),
            },
        ];

        let options = monthly_trends_chart(&series).to_string();

        assert!(options.contains("Monthly Trends"));
        assert!(options.contains("Aug 2024"));
        assert!(options.contains("Sep 2024"));
        assert!(options.contains("255.49"));
    }

    #[test]
    fn script_initializes_each_chart() {
        let charts = [
            AnalyticsChart {
                id: "first-chart",
                options: "{}".to_owned(),
            },
            AnalyticsChart {
                id: "second-chart",
                options: "{}".to_owned(),
            },
        ];

        let HeadElement::ScriptSource(script) = charts_script(&charts) else {
            panic!("want inline script");
        };

        assert!(script.0.contains("document.getElementById(\"first-chart\")"));
        assert!(script.0.contains("document.getElementById(\"second-chart\")"));
        assert!(script.0.starts_with("document.addEventListener('DOMContentLoaded'"));
    }
}
