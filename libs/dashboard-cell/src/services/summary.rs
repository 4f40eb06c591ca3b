use std::sync::Arc;

use chrono::Utc;
use tracing::{instrument, warn};

use collection_stats_cell::{CollectionStats, StatsCacheService};
use shared_config::AppConfig;

use crate::models::{BurnAction, DashboardSummary, MintAction, TokenPrices};
use crate::services::actions::ActionsClient;
use crate::services::parsing::{
    current_mint_number, floor_price_usd, format_countdown, lamports_to_sol,
    parse_dollar_amount, parse_mint_price, parse_time_left,
};
use crate::services::prices::PriceClient;

pub struct DashboardService {
    actions: ActionsClient,
    prices: PriceClient,
    stats: Arc<StatsCacheService>,
    collection_slug: String,
}

impl DashboardService {
    pub fn new(config: &AppConfig, stats: Arc<StatsCacheService>) -> Self {
        Self {
            actions: ActionsClient::new(config),
            prices: PriceClient::new(config),
            stats,
            collection_slug: config.collection_slug.clone(),
        }
    }

    /// Gathers every source concurrently. A failing source is logged and
    /// leaves its fields empty; this never fails as a whole.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> DashboardSummary {
        let (mint, burn, prices, stats) = tokio::join!(
            self.actions.fetch_mint_action(),
            self.actions.fetch_burn_action(),
            self.prices.fetch_prices(),
            self.stats.get_stats(&self.collection_slug),
        );

        let mint = mint
            .map_err(|e| warn!("Error fetching mint data: {}", e))
            .ok();
        let burn = burn
            .map_err(|e| warn!("Error fetching burn data: {}", e))
            .ok();
        let prices = prices
            .map_err(|e| warn!("Error fetching token prices: {}", e))
            .ok()
            .unwrap_or_default();
        let stats = stats
            .map_err(|e| warn!("Error fetching collection stats: {}", e))
            .ok();

        build_summary(mint.as_ref(), burn.as_ref(), prices, stats.as_ref())
    }
}

pub fn build_summary(
    mint: Option<&MintAction>,
    burn: Option<&BurnAction>,
    prices: TokenPrices,
    stats: Option<&CollectionStats>,
) -> DashboardSummary {
    let time_left_seconds = mint.and_then(|m| {
        let parsed = parse_time_left(&m.description);
        if parsed.is_none() {
            warn!("Time left format is incorrect: {}", m.description);
        }
        parsed
    });
    let first_mint_link = mint.and_then(|m| m.links.actions.first());

    let stats_v2 = stats.map(|s| &s.stats_v2);
    let buy_now_price = stats_v2.and_then(|s| s.buy_now_price);
    let num_mints = stats_v2.and_then(|s| s.num_mints);

    DashboardSummary {
        time_left_seconds,
        countdown: time_left_seconds.map(format_countdown),
        mint_enabled: mint.map(|m| !m.disabled),
        mint_price: first_mint_link.and_then(|link| parse_mint_price(&link.label)),
        mint_href: first_mint_link.map(|link| link.href.clone()),
        winner_pool_usd: mint.and_then(|m| parse_dollar_amount(&m.title)),
        burn_claim_value_usd: burn.and_then(|b| parse_dollar_amount(&b.title)),
        floor_price_sol: buy_now_price.map(lamports_to_sol),
        floor_price_usd: buy_now_price
            .zip(prices.sol_usd)
            .map(|(lamports, sol_usd)| floor_price_usd(lamports, sol_usd)),
        send_price_usd: prices.send_usd,
        sol_price_usd: prices.sol_usd,
        total_keys_minted: num_mints,
        keys_in_circulation: stats_v2.and_then(|s| s.num_listed),
        current_mint_number: num_mints.map(current_mint_number),
        generated_at: Utc::now(),
    }
}
