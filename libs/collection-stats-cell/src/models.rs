use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// COLLECTION STATS PAYLOAD
// ==============================================================================

/// Statistics for one collection as returned by Tensor's `instrumentTV2`.
///
/// The same camelCase shape is served back to dashboard clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub slug_me: Option<String>,
    #[serde(default)]
    pub slug_display: Option<String>,
    pub stats_v2: CollectionStatsV2,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub first_list_date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Prices and volumes are in lamports; upstream sends them either as
/// JSON numbers or as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStatsV2 {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub buy_now_price: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub buy_now_price_net_fees: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub sell_now_price: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub sell_now_price_net_fees: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_u64")]
    pub num_listed: Option<u64>,
    #[serde(default, deserialize_with = "flexible::opt_u64")]
    pub num_mints: Option<u64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub floor1h: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub floor24h: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub floor7d: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_u64")]
    pub sales1h: Option<u64>,
    #[serde(default, deserialize_with = "flexible::opt_u64")]
    pub sales24h: Option<u64>,
    #[serde(default, deserialize_with = "flexible::opt_u64")]
    pub sales7d: Option<u64>,
    #[serde(default, deserialize_with = "flexible::opt_u64")]
    pub sales_all: Option<u64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub volume1h: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub volume24h: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub volume7d: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_f64")]
    pub volume_all: Option<f64>,
}

// ==============================================================================
// GRAPHQL WIRE TYPES
// ==============================================================================

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: CollectionStatsVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct CollectionStatsVariables<'a> {
    pub slug: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<CollectionStatsData>,
    #[serde(default)]
    pub errors: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionStatsData {
    #[serde(rename = "instrumentTV2", default)]
    pub instrument_tv2: Option<CollectionStats>,
}

// ==============================================================================
// CACHE TYPES
// ==============================================================================

/// Most recent successful fetch for one collection key.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: String,
    /// Milliseconds since the Unix epoch at which the fetch completed.
    pub fetched_at: i64,
    pub value: CollectionStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub coalesced: u64,
    pub upstream_errors: u64,
    pub total_entries: u64,
    pub hit_rate: f64,
}

// ==============================================================================
// ERRORS
// ==============================================================================

/// Any failure to obtain a valid payload from Tensor.
#[derive(Debug, Clone, Error)]
pub enum StatsError {
    #[error("Tensor API error (status {status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Tensor GraphQL errors: {}", error_messages(.errors))]
    GraphQl { errors: Vec<serde_json::Value> },
}

fn error_messages(errors: &[serde_json::Value]) -> String {
    errors
        .iter()
        .map(|err| match err.get("message").and_then(|m| m.as_str()) {
            Some(message) => message.to_string(),
            None => err.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl StatsError {
    pub fn is_upstream(&self) -> bool {
        matches!(self, StatsError::Upstream { .. } | StatsError::GraphQl { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            StatsError::Upstream { status, .. } => *status,
            StatsError::GraphQl { .. } => None,
        }
    }
}

impl From<reqwest::Error> for StatsError {
    fn from(err: reqwest::Error) -> Self {
        StatsError::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

mod flexible {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Unsigned(u64),
        Float(f64),
        Text(String),
    }

    pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Unsigned(n)) => Ok(Some(n as f64)),
            Some(Raw::Float(n)) => Ok(Some(n)),
            Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        }
    }

    pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Unsigned(n)) => Ok(Some(n)),
            Some(Raw::Float(n)) if n >= 0.0 && n.fract() == 0.0 => Ok(Some(n as u64)),
            Some(Raw::Float(n)) => Err(de::Error::custom(format!("expected a count, got {}", n))),
            Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        }
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
            Raw::Unsigned(n) => n.to_string(),
            Raw::Float(n) => n.to_string(),
            Raw::Text(s) => s,
        }))
    }
}
