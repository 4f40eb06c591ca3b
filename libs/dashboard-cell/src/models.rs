use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// ACTION API TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionLinks {
    #[serde(default)]
    pub actions: Vec<ActionLink>,
}

/// Response of the mint action endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintAction {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub links: ActionLinks,
    #[serde(default)]
    pub disabled: bool,
}

/// Response of the burn action endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnAction {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub links: ActionLinks,
}

// ==============================================================================
// PRICE API TYPES
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct PriceResponse {
    #[serde(default)]
    pub data: HashMap<String, Option<PriceEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct PriceEntry {
    #[serde(default)]
    pub id: Option<String>,
    /// Decimal string in practice, occasionally a bare number.
    pub price: serde_json::Value,
}

impl PriceEntry {
    pub fn price_usd(&self) -> Option<f64> {
        match &self.price {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenPrices {
    pub send_usd: Option<f64>,
    pub sol_usd: Option<f64>,
}

// ==============================================================================
// DASHBOARD SUMMARY
// ==============================================================================

/// Everything the dashboard shows. Each field is `None` when its source
/// could not be reached or parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub time_left_seconds: Option<u64>,
    pub countdown: Option<String>,
    pub mint_enabled: Option<bool>,
    pub mint_price: Option<String>,
    pub mint_href: Option<String>,
    pub winner_pool_usd: Option<f64>,
    pub burn_claim_value_usd: Option<f64>,
    pub floor_price_sol: Option<f64>,
    pub floor_price_usd: Option<f64>,
    pub send_price_usd: Option<f64>,
    pub sol_price_usd: Option<f64>,
    pub total_keys_minted: Option<u64>,
    pub keys_in_circulation: Option<u64>,
    pub current_mint_number: Option<u64>,
    pub generated_at: DateTime<Utc>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{source_name} request failed (status {status:?}): {message}")]
    Upstream {
        source_name: &'static str,
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to parse {source_name} response: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },
}
