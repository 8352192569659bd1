//! Cache Reaper Task
//!
//! Background task that periodically deletes cache entries older than the TTL.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::{sweep, CacheStore};

// == Reaper Handle ==
/// Owns a running reaper task.
///
/// [`ReaperHandle::stop`] shuts the task down and waits for it. Dropping the
/// handle without stopping aborts the task.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ReaperHandle {
    // == Stop ==
    /// Signals the task to exit and waits until it has.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            // The task may already be gone, in which case there is nobody to tell
            let _ = shutdown.send(());
        }

        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Spawns a task that sweeps `store` every `interval`, removing entries older than `ttl`.
///
/// The first sweep runs one full interval after the call. Must be called from
/// within a Tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(300), Duration::from_secs(300));
/// // Later, during shutdown:
/// reaper.stop().await;
/// ```
pub fn spawn_reaper(
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
    interval: Duration,
) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        info!(
            "Starting cache reaper: ttl={:?}, interval={:?}",
            ttl, interval
        );

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    debug!("Cache reaper received shutdown");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = sweep(&store, ttl);
                    if removed > 0 {
                        debug!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    });

    ReaperHandle {
        shutdown: Some(shutdown_tx),
        task: Some(task),
    }
}
