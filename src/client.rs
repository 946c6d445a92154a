//! High-level client — `CoinDashClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::market::client::Markets;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::search::client::Search;
use crate::error::SdkError;
use crate::http::cache::{ResponseCache, DEFAULT_TTL};
use crate::http::GeckoHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;
pub use crate::domain::search::client::Search as SearchClient;

/// The primary entry point for the CoinDash SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.search()`, etc. Cloning is cheap and clones
/// share one response cache.
#[derive(Clone)]
pub struct CoinDashClient {
    pub(crate) http: GeckoHttp,
}

impl CoinDashClient {
    pub fn builder() -> CoinDashClientBuilder {
        CoinDashClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        self.http.cache().clear().await;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinDashClientBuilder {
    base_url: String,
    api_key: Option<String>,
    cache_ttl: Duration,
}

impl Default for CoinDashClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            cache_ttl: DEFAULT_TTL,
        }
    }
}

impl CoinDashClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Demo-tier API key, sent with every request when set.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<CoinDashClient, SdkError> {
        Ok(CoinDashClient {
            http: GeckoHttp::new(
                &self.base_url,
                self.api_key,
                ResponseCache::new(self.cache_ttl),
            ),
        })
    }
}
