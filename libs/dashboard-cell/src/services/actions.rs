use reqwest::Client;

use shared_config::AppConfig;

use crate::models::{BurnAction, DashboardError, MintAction};
use crate::services::http::{build_client, get_json};

/// Reads the mint and burn action descriptors the dashboard links to.
pub struct ActionsClient {
    client: Client,
    mint_action_url: String,
    burn_action_url: String,
}

impl ActionsClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: build_client(config.upstream_timeout_secs),
            mint_action_url: config.mint_action_url.clone(),
            burn_action_url: config.burn_action_url.clone(),
        }
    }

    pub async fn fetch_mint_action(&self) -> Result<MintAction, DashboardError> {
        get_json(&self.client, &self.mint_action_url, "mint action").await
    }

    pub async fn fetch_burn_action(&self) -> Result<BurnAction, DashboardError> {
        get_json(&self.client, &self.burn_action_url, "burn action").await
    }
}
