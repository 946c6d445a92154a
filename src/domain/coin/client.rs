//! Coins sub-client — per-asset detail lookup.

use crate::client::CoinDashClient;
use crate::domain::coin::{self, CoinDetail};
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for per-asset operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinDashClient,
}

impl<'a> Coins<'a> {
    /// Fetch the detail snapshot for one asset.
    pub async fn detail(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        let resp = self.client.http.get_coin_detail(id).await?;
        resp.try_into()
            .map_err(|e: coin::ValidationError| SdkError::Validation(e.to_string()))
    }
}
