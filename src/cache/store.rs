//! Cache Store Module
//!
//! Main cache engine: a HashMap behind a single reader/writer lock, with
//! per-entry TTL expiration and a throttled sweep for reclaiming expired
//! entries.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, CacheValue, StatsSnapshot, DEFAULT_CLEAN_INTERVAL};

// == Store ==
/// Lock-guarded state: the entry map plus sweep bookkeeping.
#[derive(Debug)]
struct Store {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Minimum delay between full sweep passes
    clean_interval: Duration,
    /// When the last full sweep pass completed
    last_clean_at: Instant,
}

// == Cache Inner ==
/// State shared by all clones of a cache handle.
#[derive(Debug)]
struct CacheInner {
    /// Entry map and sweep bookkeeping, behind one reader/writer lock
    store: RwLock<Store>,
    /// Set while a background sweep task is outstanding, coalescing the
    /// triggers fired by individual operations into at most one task
    sweep_pending: AtomicBool,
    /// Lock-free performance counters
    stats: CacheStats,
}

impl CacheInner {
    // == Is Time To Clean ==
    /// Gate check for the sweep throttle.
    fn is_time_to_clean(&self) -> bool {
        let store = self.store.read();
        store.last_clean_at.elapsed() >= store.clean_interval
    }

    // == Sweep ==
    /// Scans the whole map under the exclusive lock, removes every expired
    /// entry, and re-arms the throttle. Returns the number removed.
    ///
    /// `last_clean_at` advances after every full pass, including one that
    /// removed nothing, so the next pass waits out a full interval.
    fn sweep(&self) -> usize {
        let mut store = self.store.write();
        let before = store.entries.len();
        store.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - store.entries.len();
        store.last_clean_at = Instant::now();
        drop(store);

        self.stats.record_sweep(removed);
        if removed > 0 {
            debug!(removed, "sweep removed expired entries");
        } else {
            trace!("sweep found no expired entries");
        }

        removed
    }

    // == Clean Expired Data ==
    /// The throttled sweep: runs a full pass only when the gate allows one.
    fn clean_expired_data(&self) -> usize {
        if self.is_time_to_clean() {
            self.sweep()
        } else {
            0
        }
    }
}

// == Cache ==
/// Thread-safe key/value cache with per-entry TTL expiration.
///
/// Cloning is cheap and all clones share the same storage. Reads take the
/// lock in shared mode; writes and sweeps take it exclusively. An entry
/// whose TTL has elapsed is invisible to every read immediately, whether or
/// not it has been physically reclaimed yet; reclamation happens in
/// throttled sweep passes that ordinary operations schedule opportunistically
/// in the background.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use ttl_cache::Cache;
///
/// let cache = Cache::default();
/// cache.set("answer", 42, Duration::from_secs(60));
/// assert_eq!(cache.get_int("answer"), Some(42));
/// assert_eq!(cache.get_bool("answer"), None); // wrong type reads as a miss
/// ```
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<CacheInner>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache with the given sweep throttle interval.
    ///
    /// # Arguments
    /// * `clean_interval` - Minimum delay between full sweep passes
    pub fn new(clean_interval: Duration) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                store: RwLock::new(Store {
                    entries: HashMap::new(),
                    clean_interval,
                    last_clean_at: Instant::now(),
                }),
                sweep_pending: AtomicBool::new(false),
                stats: CacheStats::new(),
            }),
        }
    }

    // == With Clean Interval ==
    /// Builder-style override of the sweep throttle interval.
    ///
    /// Intended for use right after construction, before the cache is shared
    /// across threads.
    pub fn with_clean_interval(self, clean_interval: Duration) -> Self {
        self.inner.store.write().clean_interval = clean_interval;
        self
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired. An expired entry is a
    /// miss even when it has not been physically swept yet.
    pub fn get(&self, key: &str) -> Option<CacheValue> {
        let value = self.get_raw(key);
        self.record_lookup(value.is_some());
        self.trigger_sweep();
        value
    }

    // == Typed Getters ==
    /// Retrieves a boolean by key.
    ///
    /// A stored value of any other type is a miss, not an error.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_as(key)
    }

    /// Retrieves an integer by key.
    ///
    /// A stored value of any other type is a miss, not an error.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_as(key)
    }

    /// Retrieves a string by key.
    ///
    /// A stored value of any other type is a miss, not an error.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_as(key)
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any existing entry unconditionally. A zero `ttl` stores an
    /// entry that is already expired: it misses on the very next `get` and
    /// is reclaimed by the next sweep.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - Anything convertible into a cache value
    /// * `ttl` - Time from now until the entry expires
    pub fn set(&self, key: impl Into<String>, value: impl Into<CacheValue>, ttl: Duration) {
        self.insert(key.into(), CacheEntry::new(value.into(), ttl));
    }

    // == Set With Expiry Time ==
    /// Stores a value under `key` with an absolute expiration instant.
    ///
    /// An `expires_at` in the past stores an already-expired entry.
    pub fn set_with_expiry_time(
        &self,
        key: impl Into<String>,
        value: impl Into<CacheValue>,
        expires_at: Instant,
    ) {
        self.insert(key.into(), CacheEntry::with_expiry_time(value.into(), expires_at));
    }

    // == Delete ==
    /// Removes an entry by key. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) {
        self.inner.store.write().entries.remove(key);
        self.trigger_sweep();
    }

    // == Remove All ==
    /// Discards every entry, replacing the map with a fresh one.
    ///
    /// Leaves `last_clean_at` untouched: clearing the map is not a sweep
    /// pass and must not re-arm the throttle.
    pub fn remove_all(&self) {
        let mut store = self.inner.store.write();
        store.entries = HashMap::new();
    }

    // == Force Clean ==
    /// Runs a full sweep pass immediately, bypassing the throttle.
    ///
    /// Returns the number of entries removed. Pairs with
    /// [`is_time_to_clean`](Cache::is_time_to_clean) for caller-driven sweep
    /// scheduling.
    pub fn force_clean(&self) -> usize {
        self.inner.sweep()
    }

    // == Is Time To Clean ==
    /// Whether the sweep throttle would allow a pass right now.
    pub fn is_time_to_clean(&self) -> bool {
        self.inner.is_time_to_clean()
    }

    // == Length ==
    /// Returns the physical entry count, counting expired entries that have
    /// not been swept yet.
    pub fn len(&self) -> usize {
        self.inner.store.read().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.inner.store.read().entries.is_empty()
    }

    // == Contains Key ==
    /// Returns true if `key` is present and not expired.
    ///
    /// Does not count as a hit or a miss and does not schedule a sweep.
    pub fn contains_key(&self, key: &str) -> bool {
        let store = self.inner.store.read();
        store
            .entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the cache counters.
    pub fn stats(&self) -> StatsSnapshot {
        let total_entries = self.len();
        self.inner.stats.snapshot(total_entries)
    }

    // == Internals ==
    /// Looks up a fresh entry's value under the shared lock, recording
    /// nothing.
    fn get_raw(&self, key: &str) -> Option<CacheValue> {
        let store = self.inner.store.read();
        store
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    /// Looks up a key and converts the value, treating a conversion failure
    /// as a miss so the counters see what the caller saw.
    fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: TryFrom<CacheValue>,
    {
        let value = self.get_raw(key).and_then(|value| T::try_from(value).ok());
        self.record_lookup(value.is_some());
        self.trigger_sweep();
        value
    }

    fn record_lookup(&self, hit: bool) {
        if hit {
            self.inner.stats.record_hit();
        } else {
            self.inner.stats.record_miss();
        }
    }

    fn insert(&self, key: String, entry: CacheEntry) {
        self.inner.store.write().entries.insert(key, entry);
        self.trigger_sweep();
    }

    // == Trigger Sweep ==
    /// Fire-and-forget sweep attempt, called after every get, set and
    /// delete.
    ///
    /// Never blocks the calling operation. The gate check is a cheap shared
    /// read; at most one background task is outstanding at a time; and
    /// without a tokio runtime on the calling thread the trigger simply
    /// skips. Skipping is safe: expired entries stay invisible to reads
    /// either way, and `force_clean` remains available for reclamation.
    fn trigger_sweep(&self) {
        if !self.inner.is_time_to_clean() {
            return;
        }

        // Claim the single outstanding-sweep slot.
        if self.inner.sweep_pending.swap(true, Ordering::AcqRel) {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let inner = Arc::clone(&self.inner);
                handle.spawn(async move {
                    // Re-check the gate: a pass may have raced ahead of us,
                    // in which case this one degrades to a no-op.
                    inner.clean_expired_data();
                    inner.sweep_pending.store(false, Ordering::Release);
                });
            }
            Err(_) => {
                self.inner.sweep_pending.store(false, Ordering::Release);
                trace!("no async runtime available, skipping background sweep");
            }
        }
    }
}

impl Default for Cache {
    /// Creates a cache with the default five-minute sweep throttle.
    fn default() -> Self {
        Self::new(DEFAULT_CLEAN_INTERVAL)
    }
}
