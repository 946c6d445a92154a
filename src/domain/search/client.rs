//! Search sub-client — free-text asset lookup.

use crate::client::CoinDashClient;
use crate::domain::search::{self, SearchHit};
use crate::error::SdkError;

/// Sub-client for search operations.
pub struct Search<'a> {
    pub(crate) client: &'a CoinDashClient,
}

impl<'a> Search<'a> {
    /// Free-text search returning at most [`search::MAX_RESULTS`] candidates.
    ///
    /// A blank query short-circuits to an empty list without touching the
    /// network (or the cache).
    pub async fn query(&self, query: &str) -> Result<Vec<SearchHit>, SdkError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let resp = self.client.http.search(query).await?;
        Ok(search::top_hits(resp))
    }
}
