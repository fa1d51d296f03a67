//! Background cache sweeping
//!
//! Runs an optional tokio task that periodically evicts expired entries
//! from the caches, so long-idle keys do not linger until the next read.
//! The task is stoppable on shutdown so no timer leaks past process exit.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cache::TtlCache;

/// Anything a sweeper can evict expired entries from
pub trait Sweepable: Send + Sync {
    /// Removes expired entries, returning how many were evicted
    fn sweep(&self) -> usize;
}

impl<V: Clone + Send + Sync> Sweepable for TtlCache<V> {
    fn sweep(&self) -> usize {
        TtlCache::sweep(self)
    }
}

/// Configuration for the background sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// Interval between sweeps
    pub interval: Duration,
    /// Whether the sweeper runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            enabled: true,
        }
    }
}

/// Handle for controlling the background sweeper task
pub struct SweeperHandle {
    /// Signals the task to stop
    shutdown_tx: mpsc::Sender<()>,
}

impl SweeperHandle {
    /// Spawns the sweeper over the given caches
    ///
    /// With `enabled = false` no task is spawned and the handle is inert.
    pub fn spawn(config: SweeperConfig, targets: Vec<Arc<dyn Sweepable>>) -> Self {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        if config.enabled {
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(config.interval);
                // Skip the first tick (immediate)
                interval.tick().await;

                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let evicted: usize = targets.iter().map(|cache| cache.sweep()).sum();
                            if evicted > 0 {
                                debug!(evicted, "cache sweep evicted expired entries");
                            }
                        }
                        _ = shutdown_rx.recv() => {
                            break;
                        }
                    }
                }
            });
        }

        Self { shutdown_tx }
    }

    /// Stops the background task
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use chrono::Utc;

    #[tokio::test]
    async fn test_disabled_sweeper_spawns_no_task() {
        let handle = SweeperHandle::spawn(
            SweeperConfig {
                enabled: false,
                ..Default::default()
            },
            Vec::new(),
        );
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_sweeper_evicts_expired_entries_across_caches() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let cache: Arc<TtlCache<u32>> = Arc::new(TtlCache::with_clock(clock.clone()));
        cache.set("a", 1, 5).unwrap();
        cache.set("b", 2, 500).unwrap();
        clock.advance(chrono::Duration::seconds(10));

        let handle = SweeperHandle::spawn(
            SweeperConfig {
                interval: Duration::from_millis(10),
                enabled: true,
            },
            vec![cache.clone() as Arc<dyn Sweepable>],
        );

        // Give the sweeper a couple of ticks
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.shutdown().await;

        let stats = cache.stats();
        assert_eq!(stats.current_size, 1);
        assert_eq!(stats.eviction_count, 1);
    }

    #[test]
    fn test_sweepable_trait_delegates_to_cache_sweep() {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let cache: TtlCache<u32> = TtlCache::with_clock(clock.clone());
        cache.set("k", 7, 5).unwrap();
        clock.advance(chrono::Duration::seconds(6));

        let sweepable: &dyn Sweepable = &cache;
        assert_eq!(sweepable.sweep(), 1);
    }
}
