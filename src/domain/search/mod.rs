//! Search domain — free-text asset lookup.

pub mod client;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// Maximum number of hits surfaced to the caller.
pub const MAX_RESULTS: usize = 10;

/// One candidate match for a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub thumb_url: String,
    pub rank: Option<u32>,
}

impl From<wire::SearchCoinResponse> for SearchHit {
    fn from(source: wire::SearchCoinResponse) -> Self {
        Self {
            id: source.id.into(),
            name: source.name,
            symbol: source.symbol,
            thumb_url: source.thumb.unwrap_or_default(),
            rank: source.market_cap_rank,
        }
    }
}

/// The top [`MAX_RESULTS`] hits of a response, in backend relevance order.
pub fn top_hits(resp: wire::SearchResponse) -> Vec<SearchHit> {
    resp.coins
        .into_iter()
        .take(MAX_RESULTS)
        .map(SearchHit::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::wire::{SearchCoinResponse, SearchResponse};
    use super::*;

    fn coin(id: &str) -> SearchCoinResponse {
        SearchCoinResponse {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            thumb: None,
            market_cap_rank: None,
        }
    }

    #[test]
    fn test_top_hits_caps_at_ten() {
        let resp = SearchResponse {
            coins: (0..15).map(|i| coin(&format!("coin-{i}"))).collect(),
        };
        let hits = top_hits(resp);
        assert_eq!(hits.len(), MAX_RESULTS);
        assert_eq!(hits[0].id.as_str(), "coin-0");
        assert_eq!(hits[9].id.as_str(), "coin-9");
    }

    #[test]
    fn test_top_hits_preserves_short_lists() {
        let resp = SearchResponse {
            coins: vec![coin("bitcoin")],
        };
        assert_eq!(top_hits(resp).len(), 1);
    }
}
