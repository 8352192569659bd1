//! Shared Cache Handle
//!
//! Thread-safe front of the cache store that owns the reaper task.

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::debug;

use crate::cache::{
    read_store, sweep, write_store, CacheStatsSnapshot, CacheStore, MIN_SWEEP_INTERVAL,
};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache ==
/// Time-bounded payload cache keyed by request identifier.
///
/// Entries are removed by a background sweep once their age exceeds the TTL,
/// so a reader may observe an entry up to one sweep interval past its TTL.
/// Lookups take the shared lock; inserts and sweeps take the exclusive lock.
///
/// The cache is `Send + Sync`; share it across tasks behind an `Arc`. The
/// reaper stops when [`Cache::shutdown`] is awaited or the cache is dropped.
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
    sweep_interval: Duration,
    reaper: Option<ReaperHandle>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose sweep runs every `ttl`.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Creates a cache with a sweep period decoupled from the TTL.
    ///
    /// A shorter interval tightens the staleness bound to `ttl + sweep_interval`.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        let sweep_interval = sweep_interval.max(MIN_SWEEP_INTERVAL);
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reaper(store.clone(), ttl, sweep_interval);

        Self {
            store,
            ttl,
            sweep_interval,
            reaper: Some(reaper),
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and resetting its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        debug!(key = %key, "cache add");
        write_store(&self.store).insert(key, value.into());
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` if there is none.
    ///
    /// Does not remove the entry or change its age.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        read_store(&self.store).get(key)
    }

    // == Sweep Now ==
    /// Runs a sweep pass immediately instead of waiting for the next tick.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_now(&self) -> usize {
        sweep(&self.store, self.ttl)
    }

    /// Returns the current counters.
    pub fn stats(&self) -> CacheStatsSnapshot {
        read_store(&self.store).stats()
    }

    pub fn len(&self) -> usize {
        read_store(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        read_store(&self.store).is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    // == Shutdown ==
    /// Stops the reaper task and waits for it to exit.
    pub async fn shutdown(mut self) {
        if let Some(reaper) = self.reaper.take() {
            reaper.stop().await;
        }
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("ttl", &self.ttl)
            .field("sweep_interval", &self.sweep_interval)
            .field("entries", &self.len())
            .finish()
    }
}

// Dropping the cache drops the ReaperHandle, which aborts the task.
