//! TTL response cache with single-flight deduplication.
//!
//! One explicit cache object per client (no global state), keyed by the full
//! request URL. Entries are replaced wholesale on refresh and never evicted
//! except by overwrite, so they live for the life of the process unless
//! superseded. The clock is injectable so freshness can be driven
//! deterministically in tests.

use async_lock::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a cached response stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_millis(30_000);

/// Time source for freshness checks.
pub type Clock = Arc<dyn Fn() -> Instant + Send + Sync>;

/// A cached response with its fetch timestamp.
#[derive(Clone)]
struct CacheEntry {
    payload: Arc<Value>,
    fetched_at: Instant,
}

/// In-memory response cache shared by all endpoint methods of a client.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Per-key flight locks: concurrent callers for the same stale key
    /// serialize here, so only the winner performs the network fetch.
    flights: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    ttl: Duration,
    clock: Clock,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(Instant::now))
    }

    /// Construct with an explicit time source.
    pub fn with_clock(ttl: Duration, clock: Clock) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            flights: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached payload for `key` if fresh, otherwise run `fetch`,
    /// store its result and return it.
    ///
    /// Freshness (`now - fetched_at < ttl`) is evaluated at call time only;
    /// there is no background invalidation. A successful fetch overwrites any
    /// prior entry for the key unconditionally. Fetch errors propagate to the
    /// caller and are never cached.
    ///
    /// Concurrent callers for the same key coalesce: whoever acquires the
    /// flight lock first fetches, the rest observe the fresh entry on wake-up
    /// without issuing their own request. If the winner failed, the next
    /// waiter fetches for itself — errors are not broadcast.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<Arc<Value>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(payload) = self.lookup(key).await {
            tracing::debug!(key, "cache hit");
            return Ok(payload);
        }

        let flight = self.flight_lock(key).await;
        let _guard = flight.lock().await;

        // A concurrent caller may have refreshed this key while we waited.
        if let Some(payload) = self.lookup(key).await {
            tracing::debug!(key, "cache hit after in-flight fetch");
            return Ok(payload);
        }

        tracing::debug!(key, "cache miss");
        let payload = Arc::new(fetch().await?);
        let entry = CacheEntry {
            payload: Arc::clone(&payload),
            fetched_at: (self.clock)(),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(payload)
    }

    /// Fresh payload for `key`, if any. Side-effect-free.
    async fn lookup(&self, key: &str) -> Option<Arc<Value>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        let now = (self.clock)();
        if now.saturating_duration_since(entry.fetched_at) < self.ttl {
            Some(Arc::clone(&entry.payload))
        } else {
            None
        }
    }

    async fn flight_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut flights = self.flights.lock().await;
        Arc::clone(
            flights
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// Drop every cached entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
