//! Conversion: MarketRow → CoinMarket (TryFrom + validation).

use super::wire::MarketRow;
use super::{CoinMarket, ValidationError};

impl TryFrom<MarketRow> for CoinMarket {
    type Error = ValidationError;

    fn try_from(source: MarketRow) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if source.id.is_empty() {
            errors.push(ValidationError::MissingId);
        }
        if source.symbol.is_empty() {
            errors.push(ValidationError::MissingSymbol);
        }
        if source.name.is_empty() {
            errors.push(ValidationError::MissingName);
        }

        let price = source.current_price.unwrap_or_else(|| {
            errors.push(ValidationError::MissingPrice);
            0.0
        });

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id, errors));
        }

        Ok(CoinMarket {
            id: source.id.into(),
            symbol: source.symbol,
            name: source.name,
            image_url: source.image.unwrap_or_default(),
            price,
            market_cap: source.market_cap.unwrap_or_default(),
            rank: source.market_cap_rank,
            volume_24h: source.total_volume.unwrap_or_default(),
            change_24h: source.price_change_percentage_24h,
            change_7d: source.price_change_percentage_7d_in_currency,
            sparkline_7d: source.sparkline_in_7d.map(|s| s.price),
            last_updated: source.last_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::wire::SparklineIn7d;

    fn minimal_row() -> MarketRow {
        MarketRow {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image: Some("https://example.com/btc.png".to_string()),
            current_price: Some(67234.0),
            market_cap: Some(1.3e12),
            market_cap_rank: Some(1),
            total_volume: Some(2.8e10),
            price_change_percentage_24h: Some(1.92),
            price_change_percentage_7d_in_currency: Some(-0.73),
            sparkline_in_7d: Some(SparklineIn7d {
                price: vec![66000.1, 66950.4, 67234.0],
            }),
            last_updated: None,
        }
    }

    #[test]
    fn test_full_row_converts() {
        let coin = CoinMarket::try_from(minimal_row()).unwrap();
        assert_eq!(coin.id.as_str(), "bitcoin");
        assert_eq!(coin.rank, Some(1));
        assert_eq!(coin.sparkline_7d.as_deref(), Some(&[66000.1, 66950.4, 67234.0][..]));
        assert!(coin.is_up_24h());
    }

    #[test]
    fn test_missing_price_fails() {
        let mut row = minimal_row();
        row.current_price = None;
        let err = CoinMarket::try_from(row).unwrap_err();
        assert!(format!("{err}").contains("price"));
    }

    #[test]
    fn test_missing_identity_fails() {
        let mut row = minimal_row();
        row.id = String::new();
        row.name = String::new();
        let err = CoinMarket::try_from(row).unwrap_err();
        match err {
            ValidationError::Multiple(_, errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got: {other:?}"),
        }
    }

    #[test]
    fn test_nullable_metrics_default() {
        let mut row = minimal_row();
        row.market_cap = None;
        row.total_volume = None;
        row.price_change_percentage_24h = None;
        let coin = CoinMarket::try_from(row).unwrap();
        assert_eq!(coin.market_cap, 0.0);
        assert_eq!(coin.volume_24h, 0.0);
        assert_eq!(coin.change_24h, None);
        // Flat counts as up for sparkline coloring.
        assert!(coin.is_up_24h());
    }
}
