//! Conversion: CoinDetailResponse → CoinDetail (TryFrom + validation).

use super::wire::CoinDetailResponse;
use super::{CoinDetail, ImageSet, ValidationError};

impl TryFrom<CoinDetailResponse> for CoinDetail {
    type Error = ValidationError;

    fn try_from(source: CoinDetailResponse) -> Result<Self, Self::Error> {
        if source.id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let market_data = source
            .market_data
            .ok_or(ValidationError::MissingMarketData)?;

        let image = source
            .image
            .map(|links| ImageSet {
                large: links.large.unwrap_or_default(),
                small: links.small.unwrap_or_default(),
                thumb: links.thumb.unwrap_or_default(),
            })
            .unwrap_or_default();

        Ok(CoinDetail {
            id: source.id.into(),
            symbol: source.symbol,
            name: source.name,
            image,
            description: source
                .description
                .and_then(|d| d.en)
                .unwrap_or_default(),
            current_price: market_data.current_price,
            market_cap: market_data.market_cap,
            total_volume: market_data.total_volume,
            change_24h: market_data.price_change_percentage_24h,
            change_7d: market_data.price_change_percentage_7d,
            change_30d: market_data.price_change_percentage_30d,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::wire::{DescriptionResponse, MarketDataResponse};
    use crate::shared::VsCurrency;

    fn minimal_response() -> CoinDetailResponse {
        CoinDetailResponse {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image: None,
            description: Some(DescriptionResponse {
                en: Some("The first cryptocurrency.".to_string()),
            }),
            market_data: Some(MarketDataResponse {
                current_price: [("usd".to_string(), 67234.0)].into(),
                market_cap: [("usd".to_string(), 1.3e12)].into(),
                total_volume: [("usd".to_string(), 2.8e10)].into(),
                price_change_percentage_24h: Some(1.92),
                price_change_percentage_7d: Some(-0.73),
                price_change_percentage_30d: None,
            }),
        }
    }

    #[test]
    fn test_detail_converts_and_resolves_currency() {
        let detail = CoinDetail::try_from(minimal_response()).unwrap();
        assert_eq!(detail.price_in(VsCurrency::Usd), Some(67234.0));
        assert_eq!(detail.price_in(VsCurrency::Eur), None);
        assert_eq!(detail.change_30d, None);
        assert_eq!(detail.description, "The first cryptocurrency.");
    }

    #[test]
    fn test_missing_market_data_fails() {
        let mut resp = minimal_response();
        resp.market_data = None;
        assert!(matches!(
            CoinDetail::try_from(resp),
            Err(ValidationError::MissingMarketData)
        ));
    }

    #[test]
    fn test_missing_name_fails() {
        let mut resp = minimal_response();
        resp.name = String::new();
        assert!(matches!(
            CoinDetail::try_from(resp),
            Err(ValidationError::MissingName)
        ));
    }
}
