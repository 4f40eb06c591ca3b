pub mod cache;
pub mod clock;
pub mod tensor;

pub use cache::{StatsCacheService, FRESHNESS_WINDOW_MS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use tensor::{StatsFetcher, TensorClient, COLLECTION_STATS_QUERY};
