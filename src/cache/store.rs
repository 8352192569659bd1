//! Cache Store Module
//!
//! The unsynchronized key to entry map. Callers wrap it in a lock; see
//! [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats, CacheStatsSnapshot};

// == Cache Store ==
/// Payload storage keyed by request identifier.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and sweep counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry for the key is replaced and its age resets to zero.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.insert_at(key, value, Instant::now());
    }

    /// Stores `value` under `key` with an explicit insertion time.
    pub fn insert_at(&mut self, key: String, value: Vec<u8>, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at(value, now));
        self.stats.record_insertion();
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Lookups never remove entries or touch their age.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove Stale ==
    /// Deletes every entry older than `ttl` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_stale(&mut self, ttl: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(ttl, now));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current counters plus the entry count.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
