//! Wire types for per-asset detail responses (REST).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw response from `/coins/{id}` (localization, tickers and community
/// blocks excluded via query flags).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageLinksResponse>,
    #[serde(default)]
    pub description: Option<DescriptionResponse>,
    #[serde(default)]
    pub market_data: Option<MarketDataResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageLinksResponse {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DescriptionResponse {
    #[serde(default)]
    pub en: Option<String>,
}

/// Per-currency metric maps, keyed by lowercase currency code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,
}
