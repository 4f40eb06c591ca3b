use std::sync::Arc;

use axum::{routing::get, Router};

use collection_stats_cell::{stats_routes, StatsCacheService};
use dashboard_cell::dashboard_routes;
use shared_config::AppConfig;

/// One stats cache is shared by the stats proxy and the dashboard summary.
pub fn create_router(state: Arc<AppConfig>) -> Router {
    let stats_cache = Arc::new(StatsCacheService::from_config(&state));

    let api = Router::new()
        .merge(stats_routes(stats_cache.clone(), &state))
        .merge(dashboard_routes(&state, stats_cache));

    Router::new()
        .route("/", get(|| async { "Mint Dashboard API is running!" }))
        .nest("/api", api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use shared_utils::test_utils::{MockTensorResponses, TestConfig};

    async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let app = create_router(TestConfig::default().to_arc());
        let (status, body) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Mint Dashboard API is running!");
    }

    #[tokio::test]
    async fn stats_and_dashboard_share_one_cache() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(MockTensorResponses::success("sendfomo", 5, 2)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = create_router(TestConfig::with_mock_server(&mock_server.uri()).to_arc());

        let (status, _) = get(&app, "/api/stats").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(&app, "/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["total_keys_minted"], 5);
        assert_eq!(json["current_mint_number"], 6);
    }
}
