//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and sweep
//! activity.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Lock-free counters updated on the cache's hot paths.
///
/// Counters live outside the store lock so that recording a hit never
/// upgrades a shared lock into an exclusive one. Reads use relaxed
/// ordering; the counters are monotonic and a snapshot only needs to be
/// approximately consistent under concurrency.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sweeps: AtomicU64,
    swept_entries: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Sweep ==
    /// Records one completed sweep pass and the number of entries it removed.
    pub fn record_sweep(&self, removed: usize) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
        self.swept_entries.fetch_add(removed as u64, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Captures the current counter values alongside the entry count.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            swept_entries: self.swept_entries.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Stats Snapshot ==
/// A point-in-time view of the cache counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found, expired, or of the
    /// wrong type)
    pub misses: u64,
    /// Number of completed sweep passes
    pub sweeps: u64,
    /// Total number of entries physically removed by sweep passes
    pub swept_entries: u64,
    /// Current number of entries in the cache, counting expired entries
    /// that have not been swept yet
    pub total_entries: usize,
}

impl StatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
