use reqwest::Client;

use shared_config::AppConfig;

use crate::models::{DashboardError, PriceResponse, TokenPrices};
use crate::services::http::{build_client, get_json};

/// Jupiter price API client for the SEND and SOL tokens.
pub struct PriceClient {
    client: Client,
    price_api_url: String,
    send_token_mint: String,
    sol_token_mint: String,
}

impl PriceClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: build_client(config.upstream_timeout_secs),
            price_api_url: config.price_api_url.clone(),
            send_token_mint: config.send_token_mint.clone(),
            sol_token_mint: config.sol_token_mint.clone(),
        }
    }

    pub async fn fetch_prices(&self) -> Result<TokenPrices, DashboardError> {
        let url = format!(
            "{}?ids={},{}",
            self.price_api_url, self.send_token_mint, self.sol_token_mint
        );

        let response: PriceResponse = get_json(&self.client, &url, "price").await?;
        let price_of = |mint: &str| {
            response
                .data
                .get(mint)
                .and_then(|entry| entry.as_ref())
                .and_then(|entry| entry.price_usd())
        };

        Ok(TokenPrices {
            send_usd: price_of(&self.send_token_mint),
            sol_usd: price_of(&self.sol_token_mint),
        })
    }
}
