//! Wire types for market listing responses (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw row from `/coins/markets`.
///
/// The backend nulls out most numeric fields for dead or freshly-listed
/// assets, so everything beyond the identity triple is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketRow {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<SparklineIn7d>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Seven-day price sample series attached when `sparkline=true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparklineIn7d {
    pub price: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_row_parses_realistic_payload() {
        let sample = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 67234.0,
            "market_cap": 1324503892021,
            "market_cap_rank": 1,
            "fully_diluted_valuation": 1412103892021,
            "total_volume": 28457120394,
            "price_change_percentage_24h": 1.92,
            "price_change_percentage_7d_in_currency": -0.73,
            "sparkline_in_7d": { "price": [66000.1, 66950.4, 67234.0] },
            "last_updated": "2024-03-14T09:30:05.123Z"
        }"#;

        let row: MarketRow = serde_json::from_str(sample).unwrap();
        assert_eq!(row.id, "bitcoin");
        assert_eq!(row.market_cap_rank, Some(1));
        assert_eq!(row.sparkline_in_7d.unwrap().price.len(), 3);
        assert!(row.last_updated.is_some());
    }

    #[test]
    fn test_market_row_tolerates_nulls() {
        let sample = r#"{
            "id": "deadcoin",
            "symbol": "ded",
            "name": "Dead Coin",
            "image": null,
            "current_price": null,
            "market_cap": null,
            "market_cap_rank": null,
            "total_volume": null,
            "price_change_percentage_24h": null,
            "last_updated": null
        }"#;

        let row: MarketRow = serde_json::from_str(sample).unwrap();
        assert_eq!(row.current_price, None);
        assert_eq!(row.sparkline_in_7d, None);
    }
}
