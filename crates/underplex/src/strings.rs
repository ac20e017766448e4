//! String helpers for report headers and listings.

use chrono::{Datelike, NaiveDate};
use std::fmt::Display;

/// Today's local date as `year-month-day`, no zero padding (e.g. `2024-3-7`).
pub fn date_string() -> String {
    format_date(chrono::Local::now().date_naive())
}

fn format_date(d: NaiveDate) -> String {
    format!("{}-{}-{}", d.year(), d.month(), d.day())
}

/// `Display` text of each item, in iteration order.
pub fn string_list<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().map(|t| t.to_string()).collect()
}
