//! # Dashboard Cell
//!
//! Shapes the data behind the mint dashboard: countdown, mint price,
//! prize pool and burn value from the action endpoints, token prices
//! from Jupiter, and key counts plus floor price from the shared
//! collection stats cache.
//!
//! ## API Endpoints
//!
//! - `GET /dashboard` - Combined summary; sources that fail are `null`

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{DashboardError, DashboardSummary, TokenPrices};
pub use router::dashboard_routes;
pub use services::DashboardService;
