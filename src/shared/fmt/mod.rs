//! Display formatting helpers for the presentation layer.

pub mod num;

pub use num::{format_large_number, format_percentage, format_price};
