//! Low-level HTTP client — `GeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Every GET flows through the
//! response cache, so the URL built here doubles as the cache's request key:
//! query parameters are always emitted in the same order, which is what
//! makes two logically-equivalent requests collide in the cache.

use crate::domain::coin::wire::CoinDetailResponse;
use crate::domain::market::wire::MarketRow;
use crate::domain::market::MarketsQuery;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::domain::search::wire::SearchResponse;
use crate::error::{HttpError, SdkError};
use crate::http::cache::ResponseCache;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{CoinId, VsCurrency};

use reqwest::header::{ACCEPT, RETRY_AFTER};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Demo-tier API key header.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Request timeout — the upstream can be slow with large pages.
const TIMEOUT_SECS: u64 = 20;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct GeckoHttp {
    base_url: String,
    client: Client,
    api_key: Option<String>,
    cache: Arc<ResponseCache>,
}

impl GeckoHttp {
    pub fn new(base_url: &str, api_key: Option<String>, cache: ResponseCache) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
            cache: Arc::new(cache),
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    // ── Endpoints ────────────────────────────────────────────────────────

    pub async fn get_markets(&self, query: &MarketsQuery) -> Result<Vec<MarketRow>, SdkError> {
        let url = self.markets_url(query);
        self.get_cached(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_coin_detail(&self, id: &CoinId) -> Result<CoinDetailResponse, SdkError> {
        let url = self.coin_detail_url(id);
        self.get_cached(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_market_chart(
        &self,
        id: &CoinId,
        currency: VsCurrency,
        days: u32,
    ) -> Result<MarketChartResponse, SdkError> {
        let url = self.market_chart_url(id, currency, days);
        self.get_cached(&url, RetryPolicy::Idempotent).await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, SdkError> {
        let url = self.search_url(query);
        self.get_cached(&url, RetryPolicy::Idempotent).await
    }

    // ── Request keys ─────────────────────────────────────────────────────

    fn markets_url(&self, q: &MarketsQuery) -> String {
        let mut url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline={}",
            self.base_url, q.vs_currency, q.per_page, q.page, q.sparkline
        );
        if q.include_7d_change {
            url.push_str("&price_change_percentage=7d");
        }
        url
    }

    fn coin_detail_url(&self, id: &CoinId) -> String {
        format!(
            "{}/coins/{}?localization=false&tickers=false&community_data=false&developer_data=false",
            self.base_url, id
        )
    }

    fn market_chart_url(&self, id: &CoinId, currency: VsCurrency, days: u32) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url, id, currency, days
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search?query={}", self.base_url, urlencoding::encode(query))
    }

    // ── Internal fetch path ──────────────────────────────────────────────

    /// Cached GET with retry, decoded at the boundary.
    async fn get_cached<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        let payload = self.request_with_retry(url, retry).await?;
        Ok(T::deserialize(payload.as_ref())?)
    }

    async fn request_with_retry(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<Arc<Value>, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.cache.get_or_fetch(url, || self.do_get(url)).await;
            }
            RetryPolicy::Idempotent => RetryConfig::polling(),
            RetryPolicy::Custom(c) => c,
        };

        let mut attempt = 0;
        loop {
            match self.cache.get_or_fetch(url, || self.do_get(url)).await {
                Ok(payload) => return Ok(payload),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::RequestFailed { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Transport(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                    };

                    if !should_retry || attempt >= config.max_retries {
                        if should_retry {
                            tracing::warn!(
                                attempts = attempt + 1,
                                "giving up on {}: {}",
                                url,
                                e
                            );
                        }
                        return Err(e);
                    }

                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One raw GET. Success bodies parse to opaque JSON; non-success maps to
    /// the three-kind error taxonomy.
    async fn do_get(&self, url: &str) -> Result<Value, HttpError> {
        let mut req = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<Value>().await?);
        }

        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body = resp.text().await.unwrap_or_default();

        Err(HttpError::from_status(status.as_u16(), body, retry_after_ms))
    }
}
