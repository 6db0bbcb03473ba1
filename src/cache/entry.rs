//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use crate::cache::CacheValue;

/// Cap applied to relative TTLs so that expiry arithmetic on the monotonic
/// clock cannot overflow for absurd inputs (roughly one hundred years).
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A single cache entry: the stored value plus its expiration instant.
///
/// Expiry is tracked on the monotonic clock (`Instant`), never wall-clock
/// time, so system clock adjustments cannot revive or kill entries.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: CacheValue,
    /// The instant at which this entry expires
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// A zero `ttl` produces an entry that is already expired on creation.
    /// Oversized TTLs are capped rather than allowed to overflow.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time from now until the entry expires
    pub fn new(value: CacheValue, ttl: Duration) -> Self {
        let now = Instant::now();
        let expires_at = now.checked_add(ttl).unwrap_or(now + MAX_TTL);

        Self { value, expires_at }
    }

    // == With Expiry Time ==
    /// Creates a new cache entry with an absolute expiration instant.
    ///
    /// An `expires_at` in the past produces an entry that is already expired.
    pub fn with_expiry_time(value: CacheValue, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration instant, so a
    /// zero-TTL entry is expired from the moment it is created.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or `Duration::ZERO` if the entry has
    /// expired.
    ///
    /// This method is useful for debugging and statistics purposes.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
