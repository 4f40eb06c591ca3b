use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::models::DashboardError;

pub fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            Client::new()
        })
}

/// GET `url` and decode a JSON body, treating any non-2xx as a failure.
pub async fn get_json<T>(
    client: &Client,
    url: &str,
    source_name: &'static str,
) -> Result<T, DashboardError>
where
    T: DeserializeOwned,
{
    debug!("Making request to {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DashboardError::Upstream {
            source_name,
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| DashboardError::Upstream {
        source_name,
        status: Some(status.as_u16()),
        message: e.to_string(),
    })?;

    if !status.is_success() {
        error!("{} API error ({}): {}", source_name, status, body);
        return Err(DashboardError::Upstream {
            source_name,
            status: Some(status.as_u16()),
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| DashboardError::Parse {
        source_name,
        message: e.to_string(),
    })
}
