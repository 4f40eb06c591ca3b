//! # Collection Stats Cell
//!
//! Proxies Tensor's `instrumentTV2` collection statistics for the mint
//! dashboard, behind a per-collection cache with a 10 second freshness
//! window.
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |               Collection Stats Cell                 |
//! +-----------------------------------------------------+
//! |  handlers.rs    |  HTTP endpoint handlers           |
//! |  router.rs      |  Route definitions                |
//! |  models.rs      |  Payload, wire and error types    |
//! |  services/      |  Business logic layer             |
//! |    cache.rs     |  Freshness-window stats cache     |
//! |    tensor.rs    |  Tensor GraphQL client            |
//! |    clock.rs     |  Injectable time source           |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /stats?slugDisplay=<slug>` - Collection stats (defaults to the configured slug)
//! - `GET /stats/cache` - Cache hit/miss counters
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use collection_stats_cell::services::StatsCacheService;
//! use shared_config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env();
//! let cache = StatsCacheService::from_config(&config);
//! let stats = cache.get_stats("sendfomo").await?;
//! println!("{:?} keys minted", stats.stats_v2.num_mints);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! - `TENSOR_API_KEY` - Sent as `X-TENSOR-API-KEY`
//! - `TENSOR_API_URL` - GraphQL endpoint (optional, defaults to production)
//! - `COLLECTION_SLUG` - Default collection (optional, defaults to `sendfomo`)

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{CacheEntry, CacheStats, CollectionStats, CollectionStatsV2, StatsError};
pub use router::{create_stats_router, stats_routes};
pub use services::{StatsCacheService, StatsFetcher, TensorClient, FRESHNESS_WINDOW_MS};
