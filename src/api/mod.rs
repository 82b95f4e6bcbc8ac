//! MLB data access
//!
//! DataSource trait -> MlbClient (HTTP + ResponseCache) | MemorySource

pub mod cache;
pub mod client;
pub mod memory;
pub mod source;
pub mod types;

pub use cache::ResponseCache;
pub use client::MlbClient;
pub use memory::MemorySource;
pub use source::{DataSource, LeaderboardQuery, ScheduleQuery, SeasonScope};
pub use types::StatCategory;
