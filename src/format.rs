//! Display formatting helpers for amounts and dates.

use chrono::NaiveDate;

/// Formats an amount for display with two decimal places, e.g. `$150.00`.
pub fn format_amount(value: f64) -> String {
    format!("${value:.2}")
}

/// Short chart-label style, e.g. `Feb 15`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Full table style, e.g. `Feb 15, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
