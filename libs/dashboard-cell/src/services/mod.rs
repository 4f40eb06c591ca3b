pub mod actions;
mod http;
pub mod parsing;
pub mod prices;
pub mod summary;

pub use actions::ActionsClient;
pub use prices::PriceClient;
pub use summary::DashboardService;
