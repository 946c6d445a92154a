//! Integration tests against the live CoinGecko API.
//!
//! These tests exercise the full client → cache → HTTP → domain-conversion
//! path against real responses.
//!
//! All tests are `#[ignore]` because they require network access (and are
//! subject to the public tier's rate limits).
//!
//! Run with:
//! ```bash
//! cargo test --test api_integration -- --ignored --test-threads=1
//! ```
//!
//! Set `COINGECKO_API_KEY` (directly or via `.env`) to use a demo-tier key.

use std::time::Duration;

use coindash_sdk::prelude::*;

fn client() -> CoinDashClient {
    dotenvy::dotenv().ok();
    let mut builder = CoinDashClient::builder();
    if let Ok(key) = std::env::var("COINGECKO_API_KEY") {
        builder = builder.api_key(&key);
    }
    builder.build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn test_markets_list_returns_ranked_rows() {
    let client = client();
    let coins = client
        .markets()
        .list(&MarketsQuery::default())
        .await
        .expect("market listing should succeed");

    assert!(!coins.is_empty());
    assert!(coins.len() <= 50);
    let top = &coins[0];
    assert_eq!(top.rank, Some(1));
    assert!(top.price > 0.0);
    // Sparkline samples were requested, so the top coin should carry some.
    assert!(top
        .sparkline_7d
        .as_ref()
        .is_some_and(|series| !series.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_second_list_is_served_from_cache() {
    let client = client();
    let query = MarketsQuery::default();

    let first = client.markets().list(&query).await.expect("first fetch");

    let started = std::time::Instant::now();
    let second = client.markets().list(&query).await.expect("cached fetch");
    let elapsed = started.elapsed();

    assert_eq!(first.len(), second.len());
    // No network round-trip on a fresh entry.
    assert!(elapsed < Duration::from_millis(100), "cache hit took {elapsed:?}");
}

#[tokio::test]
#[ignore]
async fn test_coin_detail_lookup() {
    let client = client();
    let detail = client
        .coins()
        .detail(&CoinId::from("bitcoin"))
        .await
        .expect("detail lookup should succeed");

    assert_eq!(detail.name, "Bitcoin");
    assert!(detail.price_in(VsCurrency::Usd).is_some_and(|p| p > 0.0));
}

#[tokio::test]
#[ignore]
async fn test_price_history_is_ascending() {
    let client = client();
    let history = client
        .price_history()
        .get(&CoinId::from("bitcoin"), VsCurrency::Usd, 7)
        .await
        .expect("history fetch should succeed");

    assert!(!history.is_empty());
    for pair in history.prices.windows(2) {
        assert!(pair[0].time <= pair[1].time);
    }

    // The fetched series feeds straight into the sparkline transform.
    let path = sparkline::svg_path(&history.price_values());
    assert!(path.is_some_and(|p| p.starts_with("M ")));
}

#[tokio::test]
#[ignore]
async fn test_search_caps_results() {
    let client = client();
    let hits = client
        .search()
        .query("bitcoin")
        .await
        .expect("search should succeed");

    assert!(!hits.is_empty());
    assert!(hits.len() <= 10);
    assert!(hits.iter().any(|hit| hit.id.as_str() == "bitcoin"));
}

#[tokio::test]
#[ignore]
async fn test_blank_search_short_circuits() {
    let client = client();
    let hits = client
        .search()
        .query("   ")
        .await
        .expect("blank search should not fail");
    assert!(hits.is_empty());
}
