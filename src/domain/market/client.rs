//! Markets sub-client — paginated listing.

use crate::client::CoinDashClient;
use crate::domain::market::{CoinMarket, MarketsQuery};
use crate::error::SdkError;

/// Sub-client for market listing operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinDashClient,
}

impl<'a> Markets<'a> {
    /// Fetch one page of market data, ordered by market cap descending.
    ///
    /// Served from the response cache when fresh (see
    /// [`crate::http::ResponseCache`]). Rows that fail domain validation are
    /// dropped with a warning rather than failing the whole page — the
    /// upstream occasionally lists assets with no usable identity or price.
    pub async fn list(&self, query: &MarketsQuery) -> Result<Vec<CoinMarket>, SdkError> {
        let rows = self.client.http.get_markets(query).await?;

        let mut coins = Vec::with_capacity(rows.len());
        for row in rows {
            match CoinMarket::try_from(row) {
                Ok(coin) => coins.push(coin),
                Err(e) => tracing::warn!("dropping invalid market row: {e}"),
            }
        }
        Ok(coins)
    }
}
