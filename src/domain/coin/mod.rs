//! Coin domain — per-asset detail lookups.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{CoinId, VsCurrency};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Validated per-asset detail snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: ImageSet,
    /// English description; may be empty.
    pub description: String,
    current_price: HashMap<String, f64>,
    market_cap: HashMap<String, f64>,
    total_volume: HashMap<String, f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub change_30d: Option<f64>,
}

/// Icon URLs at the three sizes the backend serves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub large: String,
    pub small: String,
    pub thumb: String,
}

impl CoinDetail {
    pub fn price_in(&self, currency: VsCurrency) -> Option<f64> {
        self.current_price.get(currency.as_str()).copied()
    }

    pub fn market_cap_in(&self, currency: VsCurrency) -> Option<f64> {
        self.market_cap.get(currency.as_str()).copied()
    }

    pub fn volume_in(&self, currency: VsCurrency) -> Option<f64> {
        self.total_volume.get(currency.as_str()).copied()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    MissingId,
    MissingName,
    MissingMarketData,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::MissingMarketData => write!(f, "Missing market data"),
        }
    }
}

impl std::error::Error for ValidationError {}
