use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, warn};

use shared_config::AppConfig;

use crate::models::{
    CollectionStats, CollectionStatsVariables, GraphQlRequest, GraphQlResponse, StatsError,
};

pub const TENSOR_API_KEY_HEADER: &str = "X-TENSOR-API-KEY";

pub const COLLECTION_STATS_QUERY: &str = r#"query CollectionStats($slug: String!) {
  instrumentTV2(slug: $slug) {
    id
    slug
    slugMe
    slugDisplay
    statsV2 {
      currency
      buyNowPrice
      buyNowPriceNetFees
      sellNowPrice
      sellNowPriceNetFees
      numListed
      numMints
      floor1h
      floor24h
      floor7d
      sales1h
      sales24h
      sales7d
      salesAll
      volume1h
      volume24h
      volume7d
      volumeAll
    }
    firstListDate
    name
  }
}"#;

/// Source of collection statistics consulted on a cache miss.
#[async_trait]
pub trait StatsFetcher: Send + Sync {
    async fn fetch_collection_stats(&self, slug: &str) -> Result<CollectionStats, StatsError>;
}

/// Tensor GraphQL API client
/// Based on: https://docs.tensor.so/
pub struct TensorClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl TensorClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build Tensor HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            api_url: config.tensor_api_url.clone(),
            api_key: config.tensor_api_key.clone(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl StatsFetcher for TensorClient {
    /// POST the fixed `instrumentTV2` query for one slug.
    async fn fetch_collection_stats(&self, slug: &str) -> Result<CollectionStats, StatsError> {
        debug!("Requesting collection stats for {} from {}", slug, self.api_url);

        let request_body = GraphQlRequest {
            query: COLLECTION_STATS_QUERY,
            variables: CollectionStatsVariables { slug },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header(TENSOR_API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Tensor stats request failed: {} - {}", status, response_text);
            return Err(StatsError::Upstream {
                status: Some(status.as_u16()),
                message: response_text,
            });
        }

        let body: GraphQlResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!("Malformed Tensor response for {}: {} - {}", slug, e, response_text);
            StatsError::Upstream {
                status: Some(status.as_u16()),
                message: format!("Failed to parse stats response: {}", e),
            }
        })?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            error!("GraphQL Errors for {}: {:?}", slug, errors);
            return Err(StatsError::GraphQl { errors });
        }

        let stats = body
            .data
            .and_then(|data| data.instrument_tv2)
            .ok_or_else(|| StatsError::Upstream {
                status: Some(status.as_u16()),
                message: format!("No collection stats returned for slug {}", slug),
            })?;

        info!("Fetched collection stats for {}", slug);
        Ok(stats)
    }
}
