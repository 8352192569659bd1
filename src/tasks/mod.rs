//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Cache reaper: removes entries older than the TTL at a fixed interval

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
