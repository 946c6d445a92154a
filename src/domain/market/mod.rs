//! Market domain — listed coin snapshots, query parameters, conversion.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{CoinId, VsCurrency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── CoinMarket ──────────────────────────────────────────────────────────────

/// A validated, read-only snapshot of one asset's market metrics.
///
/// Produced by a fetch and superseded wholesale by the next successful one;
/// there is no partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image_url: String,
    pub price: f64,
    pub market_cap: f64,
    pub rank: Option<u32>,
    pub volume_24h: f64,
    /// 24-hour change, percent.
    pub change_24h: Option<f64>,
    /// 7-day change in the quote currency, percent.
    pub change_7d: Option<f64>,
    /// Seven-day price samples for the row sparkline.
    pub sparkline_7d: Option<Vec<f64>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CoinMarket {
    /// Whether the asset is up over the last 24 hours (flat counts as up).
    pub fn is_up_24h(&self) -> bool {
        self.change_24h.unwrap_or(0.0) >= 0.0
    }
}

// ─── MarketsQuery ────────────────────────────────────────────────────────────

/// Parameters for the market listing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketsQuery {
    pub vs_currency: VsCurrency,
    /// 1-based page index.
    pub page: u32,
    pub per_page: u32,
    /// Include the 7-day sample series in each row.
    pub sparkline: bool,
    /// Include the 7-day percentage-change window.
    pub include_7d_change: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            vs_currency: VsCurrency::Usd,
            page: 1,
            per_page: 50,
            sparkline: true,
            include_7d_change: true,
        }
    }
}

impl MarketsQuery {
    pub fn with_currency(currency: VsCurrency) -> Self {
        Self {
            vs_currency: currency,
            ..Self::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingSymbol,
    MissingName,
    MissingPrice,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Market row validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingSymbol => write!(f, "Missing symbol"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingPrice => write!(f, "Missing current price"),
        }
    }
}

impl std::error::Error for ValidationError {}
