use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers::{get_cache_stats, get_collection_stats, StatsHandlers};
use crate::services::StatsCacheService;

/// Routes backed by a cache the caller owns, so other cells can share it.
pub fn stats_routes(cache: Arc<StatsCacheService>, config: &AppConfig) -> Router {
    let handlers = Arc::new(StatsHandlers::new(cache, config.collection_slug.clone()));

    Router::new()
        .route("/stats", get(get_collection_stats))
        .route("/stats/cache", get(get_cache_stats))
        .with_state(handlers)
}

pub fn create_stats_router(config: Arc<AppConfig>) -> Router {
    let cache = Arc::new(StatsCacheService::from_config(&config));
    stats_routes(cache, &config)
}
