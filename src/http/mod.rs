//! HTTP client layer — `GeckoHttp` with response caching and retry policies.

pub mod cache;
pub mod client;
pub mod retry;

pub use cache::{ResponseCache, DEFAULT_TTL};
pub use client::GeckoHttp;
pub use retry::{RetryConfig, RetryPolicy};
