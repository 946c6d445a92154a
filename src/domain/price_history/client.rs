//! Price history sub-client — historical chart queries.

use crate::client::CoinDashClient;
use crate::domain::price_history::PriceHistory;
use crate::error::SdkError;
use crate::shared::{CoinId, VsCurrency};

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinDashClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Fetch `days` worth of price/market-cap/volume history for an asset.
    pub async fn get(
        &self,
        coin: &CoinId,
        currency: VsCurrency,
        days: u32,
    ) -> Result<PriceHistory, SdkError> {
        let resp = self.client.http.get_market_chart(coin, currency, days).await?;
        Ok(resp.into())
    }
}
