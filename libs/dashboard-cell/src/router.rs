use std::sync::Arc;

use axum::{routing::get, Router};

use collection_stats_cell::StatsCacheService;
use shared_config::AppConfig;

use crate::handlers::get_dashboard_summary;
use crate::services::DashboardService;

pub fn dashboard_routes(config: &AppConfig, stats: Arc<StatsCacheService>) -> Router {
    let service = Arc::new(DashboardService::new(config, stats));

    Router::new()
        .route("/dashboard", get(get_dashboard_summary))
        .with_state(service)
}
