use std::sync::Arc;
use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub tensor_api_key: String,
    pub tensor_api_url: String,
    pub collection_slug: String,
    pub mock_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            tensor_api_key: "test-tensor-api-key".to_string(),
            tensor_api_url: "http://localhost:8899/graphql".to_string(),
            collection_slug: "sendfomo".to_string(),
            mock_base_url: "http://localhost:8899".to_string(),
        }
    }
}

impl TestConfig {
    /// Points every upstream collaborator at a single mock server.
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            tensor_api_url: format!("{}/graphql", uri),
            mock_base_url: uri.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            tensor_api_key: self.tensor_api_key.clone(),
            tensor_api_url: self.tensor_api_url.clone(),
            collection_slug: self.collection_slug.clone(),
            upstream_timeout_secs: 2,
            mint_action_url: format!("{}/api/actions/mint", self.mock_base_url),
            burn_action_url: format!("{}/api/actions/burn", self.mock_base_url),
            price_api_url: format!("{}/price/v2", self.mock_base_url),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockTensorResponses;

impl MockTensorResponses {
    pub fn collection_stats(slug: &str, num_mints: u64, num_listed: u64) -> Value {
        json!({
            "id": "0d4a2a4e-6b1f-4c7e-9f0a-5e2f4bde1a01",
            "slug": "0d4a2a4e-6b1f-4c7e-9f0a-5e2f4bde1a01",
            "slugMe": null,
            "slugDisplay": slug,
            "statsV2": {
                "currency": null,
                "buyNowPrice": "2500000000",
                "buyNowPriceNetFees": "2575000000",
                "sellNowPrice": "2100000000",
                "sellNowPriceNetFees": "2037000000",
                "numListed": num_listed,
                "numMints": num_mints,
                "floor1h": 0.012,
                "floor24h": -0.035,
                "floor7d": 0.41,
                "sales1h": 14,
                "sales24h": 380,
                "sales7d": 2210,
                "salesAll": 9120,
                "volume1h": "35000000000",
                "volume24h": "940000000000",
                "volume7d": "5100000000000",
                "volumeAll": "21000000000000"
            },
            "firstListDate": "1727740800000",
            "name": "SEND FOMO Keys"
        })
    }

    pub fn success(slug: &str, num_mints: u64, num_listed: u64) -> Value {
        json!({
            "data": {
                "instrumentTV2": Self::collection_stats(slug, num_mints, num_listed)
            }
        })
    }

    pub fn graphql_errors(message: &str) -> Value {
        json!({
            "data": null,
            "errors": [{
                "message": message,
                "path": ["instrumentTV2"]
            }]
        })
    }

    pub fn unknown_collection() -> Value {
        json!({
            "data": {
                "instrumentTV2": null
            }
        })
    }
}

pub struct MockDashboardResponses;

impl MockDashboardResponses {
    pub fn mint_action(disabled: bool) -> Value {
        json!({
            "icon": "https://sendfomo.com/key.png",
            "title": "Win the $12,345.67 pool",
            "description": "Game ends in 5 hrs 30 mins. Last minter wins the pool.",
            "label": "Mint",
            "links": {
                "actions": [{
                    "label": "Mint key for 0.25 SOL",
                    "href": "https://sendfomo.com/api/actions/mint?amount=1"
                }]
            },
            "disabled": disabled
        })
    }

    pub fn burn_action() -> Value {
        json!({
            "icon": "https://sendfomo.com/burn.png",
            "title": "Burn a key for $42.50 in SEND",
            "description": "Burn your key and claim rewards.",
            "label": "Burn",
            "links": {
                "actions": [{
                    "label": "Burn key",
                    "href": "https://sendfomo.com/api/actions/burn"
                }]
            }
        })
    }

    pub fn prices(send_mint: &str, sol_mint: &str, send_price: &str, sol_price: &str) -> Value {
        let mut data = serde_json::Map::new();
        data.insert(
            send_mint.to_string(),
            json!({ "id": send_mint, "type": "derivedPrice", "price": send_price }),
        );
        data.insert(
            sol_mint.to_string(),
            json!({ "id": sol_mint, "type": "derivedPrice", "price": sol_price }),
        );

        json!({
            "data": data,
            "timeTaken": 0.004
        })
    }
}
