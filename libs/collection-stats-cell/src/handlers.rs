use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;

use shared_models::error::AppError;

use crate::models::CacheStats;
use crate::services::StatsCacheService;

/// Lets shared caches hold a response for one freshness window.
pub const STATS_CACHE_CONTROL: &str = "s-maxage=10, stale-while-revalidate=59";

pub const STATS_FAILURE_MESSAGE: &str = "Failed to fetch collection statistics.";

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(rename = "slugDisplay")]
    pub slug_display: Option<String>,
}

pub struct StatsHandlers {
    cache: Arc<StatsCacheService>,
    default_slug: String,
}

impl StatsHandlers {
    pub fn new(cache: Arc<StatsCacheService>, default_slug: String) -> Self {
        Self {
            cache,
            default_slug,
        }
    }

    fn resolve_slug(&self, query: StatsQuery) -> String {
        query
            .slug_display
            .map(|slug| slug.trim().to_string())
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| self.default_slug.clone())
    }
}

/// `GET /stats?slugDisplay=<slug>`
pub async fn get_collection_stats(
    State(handlers): State<Arc<StatsHandlers>>,
    Query(query): Query<StatsQuery>,
) -> Result<Response, AppError> {
    let slug = handlers.resolve_slug(query);

    let stats = handlers.cache.get_stats(&slug).await.map_err(|e| {
        error!("Error fetching collection stats: {}", e);
        AppError::Internal(STATS_FAILURE_MESSAGE.to_string())
    })?;

    Ok(([(header::CACHE_CONTROL, STATS_CACHE_CONTROL)], Json(stats)).into_response())
}

pub async fn get_cache_stats(State(handlers): State<Arc<StatsHandlers>>) -> Json<CacheStats> {
    Json(handlers.cache.cache_stats().await)
}
