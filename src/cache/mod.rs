//! Cache Module
//!
//! A time-bounded, in-memory payload cache. Entries older than the TTL are
//! purged by a background reaper task rather than on access.

mod entry;
mod shared;
mod stats;
mod store;


use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::time::Instant;

// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use store::CacheStore;

// == Public Constants ==
/// Shortest sweep interval the reaper will run at
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// Every store operation leaves the map consistent, so a panic in another
// holder does not make the data unusable.
pub(crate) fn read_store(store: &RwLock<CacheStore>) -> RwLockReadGuard<'_, CacheStore> {
    store.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_store(store: &RwLock<CacheStore>) -> RwLockWriteGuard<'_, CacheStore> {
    store.write().unwrap_or_else(PoisonError::into_inner)
}

/// Runs one sweep pass over the shared store under the write lock.
pub(crate) fn sweep(store: &Arc<RwLock<CacheStore>>, ttl: Duration) -> usize {
    write_store(store).remove_stale(ttl, Instant::now())
}
