//! Cache Entry Module
//!
//! Defines a single cached payload and the timestamp it was stored at.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload together with its insertion time.
///
/// The payload is never modified after insertion; a later insert under the
/// same key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw payload bytes
    pub value: Vec<u8>,
    /// When the entry was inserted (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry stamped with an explicit insertion time.
    pub fn created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has been stored as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Returns true once the entry's age strictly exceeds `ttl`.
    ///
    /// An entry whose age is exactly `ttl` is still valid.
    pub fn is_stale(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}
