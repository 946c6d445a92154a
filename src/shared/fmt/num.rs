//! Number formatting utilities for human-readable display.
//!
//! Handles f64 prices, large aggregates (market cap, volume) and percentage
//! changes. String helpers only; layout and styling live in the consumer.

use crate::shared::VsCurrency;

/// Trims trailing zeros, adds thousands separators.
fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    };

    let parts = trimmed.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{rest}"))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Same as [`display_formatted_string`] but keeps at least two decimals.
fn with_min_two_decimals(formatted: String) -> String {
    let display = display_formatted_string(formatted);
    match display.split_once('.') {
        None => format!("{display}.00"),
        Some((int, frac)) if frac.len() == 1 => format!("{int}.{frac}0"),
        Some(_) => display,
    }
}

/// Format a price with its currency symbol.
///
/// Prices at or above 1 get exactly two decimals; sub-unit prices keep up to
/// six significant decimals so micro-cap assets stay distinguishable.
pub fn format_price(price: f64, currency: VsCurrency) -> String {
    let symbol = currency.symbol();
    if price >= 1.0 {
        format!("{symbol}{}", with_min_two_decimals(format!("{price:.2}")))
    } else {
        format!("{symbol}{}", with_min_two_decimals(format!("{price:.6}")))
    }
}

/// Abbreviate a large aggregate with a T/B/M/K suffix.
pub fn format_large_number(value: f64) -> String {
    if value >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{value:.2}")
    }
}

/// Format a percentage change with an explicit sign.
pub fn format_percentage(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    if value >= 0.0 {
        format!("+{formatted}%")
    } else {
        format!("-{formatted}%")
    }
}
