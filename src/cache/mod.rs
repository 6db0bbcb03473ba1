//! Cache Module
//!
//! Provides in-memory key/value caching with per-entry TTL expiration.

use std::time::Duration;

mod entry;
mod stats;
mod store;
mod value;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::StatsSnapshot;
pub use store::Cache;
pub use value::{CacheValue, ValueKind};

pub(crate) use stats::CacheStats;

// == Public Constants ==
/// Default minimum delay between expired-entry sweep passes (five minutes)
pub const DEFAULT_CLEAN_INTERVAL: Duration = Duration::from_secs(5 * 60);
