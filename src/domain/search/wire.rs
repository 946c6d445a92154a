//! Wire types for free-text search responses (REST).

use serde::{Deserialize, Serialize};

/// Raw response from `/search`. Only the coin block is consumed; the
/// exchange/category blocks are ignored by serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoinResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCoinResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}
