//! TTL Cache - A thread-safe in-process key/value store
//!
//! Provides typed key/value storage with per-entry TTL expiration and a
//! throttled background sweep for reclaiming expired entries.

pub mod cache;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheEntry, CacheValue, StatsSnapshot, ValueKind, DEFAULT_CLEAN_INTERVAL};
pub use error::TypeMismatch;
pub use tasks::spawn_cleanup_task;
