use std::env;
use tracing::warn;

pub const DEFAULT_TENSOR_API_URL: &str = "https://api.tensor.so/graphql";
pub const DEFAULT_COLLECTION_SLUG: &str = "sendfomo";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tensor_api_key: String,
    pub tensor_api_url: String,
    pub collection_slug: String,
    pub upstream_timeout_secs: u64,
    pub mint_action_url: String,
    pub burn_action_url: String,
    pub price_api_url: String,
    pub send_token_mint: String,
    pub sol_token_mint: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tensor_api_key: String::new(),
            tensor_api_url: DEFAULT_TENSOR_API_URL.to_string(),
            collection_slug: DEFAULT_COLLECTION_SLUG.to_string(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            mint_action_url: "https://sendfomo.com/api/actions/mint".to_string(),
            burn_action_url: "https://sendfomo.com/api/actions/burn".to_string(),
            price_api_url: "https://api.jup.ag/price/v2".to_string(),
            send_token_mint: "SENDdRQtYMWaQrBroBrJ2Q53fgVuq95CV9UPGEvpCxa".to_string(),
            sol_token_mint: "So11111111111111111111111111111111111111112".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            // An empty key is forwarded as-is; upstream rejects it.
            tensor_api_key: env::var("TENSOR_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("TENSOR_API_KEY not set, using empty value");
                    String::new()
                }),
            tensor_api_url: env::var("TENSOR_API_URL")
                .unwrap_or(defaults.tensor_api_url),
            collection_slug: env::var("COLLECTION_SLUG")
                .unwrap_or(defaults.collection_slug),
            upstream_timeout_secs: parse_or_default(
                "UPSTREAM_TIMEOUT_SECS",
                defaults.upstream_timeout_secs,
            ),
            mint_action_url: env::var("MINT_ACTION_URL")
                .unwrap_or(defaults.mint_action_url),
            burn_action_url: env::var("BURN_ACTION_URL")
                .unwrap_or(defaults.burn_action_url),
            price_api_url: env::var("PRICE_API_URL")
                .unwrap_or(defaults.price_api_url),
            send_token_mint: env::var("SEND_TOKEN_MINT")
                .unwrap_or(defaults.send_token_mint),
            sol_token_mint: env::var("SOL_TOKEN_MINT")
                .unwrap_or(defaults.sol_token_mint),
            port: parse_or_default("PORT", defaults.port),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.tensor_api_key.is_empty()
            && !self.tensor_api_url.is_empty()
            && !self.collection_slug.is_empty()
    }
}

fn parse_or_default<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_tensor() {
        let config = AppConfig::default();
        assert_eq!(config.tensor_api_url, DEFAULT_TENSOR_API_URL);
        assert_eq!(config.collection_slug, "sendfomo");
        assert_eq!(config.upstream_timeout_secs, 10);
        assert!(!config.is_configured());
    }

    #[test]
    fn configured_once_key_is_present() {
        let config = AppConfig {
            tensor_api_key: "key".to_string(),
            ..AppConfig::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn invalid_numeric_env_falls_back() {
        env::set_var("STATS_TEST_BAD_TIMEOUT", "soon");
        assert_eq!(parse_or_default("STATS_TEST_BAD_TIMEOUT", 7u64), 7);
        env::set_var("STATS_TEST_GOOD_TIMEOUT", " 3 ");
        assert_eq!(parse_or_default("STATS_TEST_GOOD_TIMEOUT", 7u64), 3);
    }
}
