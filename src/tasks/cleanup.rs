//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between passes and forcing a full sweep on each one, regardless of the
/// cache's own throttle. The cache stays fully usable without this task
/// (expired entries are invisible to reads either way); what the task adds
/// is memory reclamation on a schedule independent of call volume, which
/// matters for caches that go idle for long stretches.
///
/// # Arguments
/// * `cache` - Cache handle to sweep (clones share storage)
/// * `interval` - Delay between sweep passes
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Cache::default();
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Cache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.force_clean();

            // Log cleanup statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        // Throttle far in the future so only the periodic task sweeps.
        let cache = Cache::new(Duration::from_secs(3600));

        cache.set("expire_soon", "value", Duration::from_millis(50));

        // Spawn cleanup task with a short interval
        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(100));

        // Wait for the entry to expire and a pass to run
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(cache.len(), 0, "Expired entry should have been cleaned up");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Cache::new(Duration::from_secs(3600));

        cache.set("long_lived", "value", Duration::from_secs(3600));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));

        // Wait for a few passes to run
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.get_string("long_lived"), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = Cache::default();

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
