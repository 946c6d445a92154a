//! # CoinDash SDK
//!
//! The data layer of a live cryptocurrency market dashboard: a cache-backed
//! CoinGecko client, a polling task, and pure chart geometry.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared** — Newtypes, currency model, formatting, sparkline geometry
//! 2. **Domain** — Vertical slices: wire types, conversions, state, sub-clients
//! 3. **HTTP** — `GeckoHttp` with a TTL response cache, single-flight
//!    deduplication and per-endpoint retry policies
//! 4. **Polling** — `MarketPoller`, a cancellable periodic refresh task
//! 5. **High-Level Client** — `CoinDashClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coindash_sdk::prelude::*;
//!
//! let client = CoinDashClient::builder().build()?;
//!
//! let coins = client.markets().list(&MarketsQuery::default()).await?;
//! let history = client
//!     .price_history()
//!     .get(&CoinId::from("bitcoin"), VsCurrency::Usd, 7)
//!     .await?;
//! let path = sparkline::svg_path(&history.price_values());
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes, currency model, formatting, sparkline geometry.
pub mod shared;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with response caching and retry policies.
pub mod http;

// ── Layer 4: Polling ─────────────────────────────────────────────────────────

/// Periodic market polling.
pub mod poll;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `CoinDashClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + geometry
    pub use crate::shared::sparkline::{self, SparklinePoint};
    pub use crate::shared::{CoinId, VsCurrency};

    // Domain types — market
    pub use crate::domain::market::{CoinMarket, MarketsQuery};

    // Domain types — coin detail
    pub use crate::domain::coin::{CoinDetail, ImageSet};

    // Domain types — price history, search
    pub use crate::domain::price_history::{PriceHistory, PriceHistoryState, PricePoint};
    pub use crate::domain::search::SearchHit;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{
        CoinDashClient, CoinDashClientBuilder, CoinsClient, MarketsClient, PriceHistorySubClient,
        SearchClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    pub use crate::http::{ResponseCache, DEFAULT_TTL};

    // Polling
    pub use crate::poll::{MarketPoller, PollConfig, PollEvent, DEFAULT_POLL_INTERVAL};
}
