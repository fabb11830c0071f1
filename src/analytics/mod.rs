//! The analytics page: expenses by category, monthly trends and a category summary.

mod charts;
mod page;

pub use page::get_analytics_page;
