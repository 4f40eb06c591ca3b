use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, instrument};

use shared_config::AppConfig;

use crate::models::{CacheEntry, CacheStats, CollectionStats, StatsError};
use crate::services::clock::{Clock, SystemClock};
use crate::services::tensor::{StatsFetcher, TensorClient};

/// How long a successful fetch is served before upstream is asked again.
pub const FRESHNESS_WINDOW_MS: i64 = 10_000;

type StatsResult = Result<CollectionStats, StatsError>;
type InFlightFetch = Shared<BoxFuture<'static, StatsResult>>;
type Store = Arc<RwLock<HashMap<String, CacheEntry>>>;

#[derive(Debug, Default)]
struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    coalesced: AtomicU64,
    upstream_errors: AtomicU64,
}

/// Memoizes collection stats per key for [`FRESHNESS_WINDOW_MS`].
///
/// Concurrent misses on the same key share one upstream call. Failed
/// fetches never touch the store, so the next call after a failure
/// tries upstream again.
pub struct StatsCacheService {
    store: Store,
    in_flight: Arc<Mutex<HashMap<String, InFlightFetch>>>,
    fetcher: Arc<dyn StatsFetcher>,
    clock: Arc<dyn Clock>,
    freshness_window_ms: i64,
    counters: Arc<CacheCounters>,
}

impl StatsCacheService {
    pub fn new(fetcher: Arc<dyn StatsFetcher>, clock: Arc<dyn Clock>) -> Self {
        Self::with_freshness_window(fetcher, clock, FRESHNESS_WINDOW_MS)
    }

    pub fn with_freshness_window(
        fetcher: Arc<dyn StatsFetcher>,
        clock: Arc<dyn Clock>,
        freshness_window_ms: i64,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            fetcher,
            clock,
            freshness_window_ms,
            counters: Arc::new(CacheCounters::default()),
        }
    }

    /// Production wiring: Tensor upstream and the system clock.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(TensorClient::new(config)), Arc::new(SystemClock))
    }

    pub fn freshness_window_ms(&self) -> i64 {
        self.freshness_window_ms
    }

    #[instrument(skip(self))]
    pub async fn get_stats(&self, key: &str) -> StatsResult {
        let now = self.clock.now_millis();

        if let Some(value) = self.fresh_value(key, now).await {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Returning cached data for slug: {}", key);
            return Ok(value);
        }

        let fetch = {
            let mut in_flight = self.in_flight.lock().await;

            // A fetch may have landed between the first look and taking the lock.
            if let Some(value) = self.fresh_value(key, now).await {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Returning cached data for slug: {}", key);
                return Ok(value);
            }

            match in_flight.get(key) {
                Some(pending) => {
                    self.counters.coalesced.fetch_add(1, Ordering::Relaxed);
                    debug!("Joining in-flight stats fetch for slug: {}", key);
                    pending.clone()
                }
                None => {
                    self.counters.misses.fetch_add(1, Ordering::Relaxed);
                    let fetch = self.start_fetch(key.to_string());
                    in_flight.insert(key.to_string(), fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Stored entry for `key`, fresh or not. Never triggers a fetch.
    pub async fn peek(&self, key: &str) -> Option<CacheEntry> {
        self.store.read().await.get(key).cloned()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        let hits = self.counters.hits.load(Ordering::Relaxed);
        let misses = self.counters.misses.load(Ordering::Relaxed);
        let coalesced = self.counters.coalesced.load(Ordering::Relaxed);
        let lookups = hits + misses + coalesced;

        CacheStats {
            hits,
            misses,
            coalesced,
            upstream_errors: self.counters.upstream_errors.load(Ordering::Relaxed),
            total_entries: self.store.read().await.len() as u64,
            hit_rate: if lookups == 0 {
                0.0
            } else {
                hits as f64 / lookups as f64
            },
        }
    }

    async fn fresh_value(&self, key: &str, now: i64) -> Option<CollectionStats> {
        let store = self.store.read().await;
        store
            .get(key)
            .filter(|entry| now - entry.fetched_at < self.freshness_window_ms)
            .map(|entry| entry.value.clone())
    }

    /// Builds the shared upstream call for `key`. The future stores a
    /// successful result, then clears its own in-flight marker.
    fn start_fetch(&self, key: String) -> InFlightFetch {
        let fetcher = Arc::clone(&self.fetcher);
        let clock = Arc::clone(&self.clock);
        let store = Arc::clone(&self.store);
        let in_flight = Arc::clone(&self.in_flight);
        let counters = Arc::clone(&self.counters);

        async move {
            let result = fetcher.fetch_collection_stats(&key).await;

            match &result {
                Ok(stats) => {
                    let fetched_at = clock.now_millis();
                    store.write().await.insert(
                        key.clone(),
                        CacheEntry {
                            key: key.clone(),
                            fetched_at,
                            value: stats.clone(),
                        },
                    );
                    info!("Cached collection stats for {} at {}", key, fetched_at);
                }
                Err(e) => {
                    counters.upstream_errors.fetch_add(1, Ordering::Relaxed);
                    error!("Error fetching collection stats for {}: {}", key, e);
                }
            }

            in_flight.lock().await.remove(&key);
            result
        }
        .boxed()
        .shared()
    }
}
