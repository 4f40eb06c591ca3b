use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::DashboardSummary;
use crate::services::DashboardService;

/// `GET /dashboard`; always 200, missing sources show up as nulls.
pub async fn get_dashboard_summary(
    State(service): State<Arc<DashboardService>>,
) -> Json<DashboardSummary> {
    Json(service.summary().await)
}
