//! In-memory TTL cache
//!
//! Provides a [`TtlCache`] that maps string keys to values with per-entry
//! expiration. Expired entries are treated as absent: a `get` that finds a
//! stale entry removes it and reports a miss. An optional capacity bound
//! evicts the soonest-expiring entry when a new key would exceed it.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use super::clock::{Clock, SystemClock};

/// Errors that can occur when writing to the cache
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    /// A non-positive TTL was supplied to `set`
    #[error("TTL must be positive, got {0} seconds")]
    InvalidTtl(i64),
}

/// Point-in-time cache statistics
///
/// Hit, miss, and eviction counters only ever grow; `current_size` tracks
/// the number of live entries exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of `get` calls that returned a fresh value
    pub hit_count: u64,
    /// Number of `get` calls that found nothing usable
    pub miss_count: u64,
    /// Number of entries removed due to expiry or capacity pressure
    pub eviction_count: u64,
    /// Number of live entries right now
    pub current_size: usize,
}

/// A stored value plus its lifetime bookkeeping
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Map plus stats, guarded together by one mutex
#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

/// Thread-safe in-memory cache with per-entry TTL
///
/// The cache has no knowledge of what it stores; callers supply the TTL on
/// every `set`, so different data classes (disease info, suppliers, prices)
/// can live side by side in differently-typed instances with their own
/// lifetimes. Callers receive clones of stored values, never references
/// into the map, so eviction can never invalidate a value already handed
/// out.
///
/// All operations are O(1) map accesses serialized by a single mutex; no
/// I/O ever happens under the lock.
pub struct TtlCache<V> {
    inner: Mutex<Inner<V>>,
    clock: Arc<dyn Clock>,
    max_entries: Option<usize>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates an unbounded cache on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an unbounded cache with a custom clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::default(),
            }),
            clock,
            max_entries: None,
        }
    }

    /// Bounds the cache to at most `limit` live entries
    ///
    /// When a `set` on a new key would exceed the bound, the entry with
    /// the soonest `expires_at` is evicted first (tie-break: earliest
    /// `created_at`).
    pub fn with_max_entries(mut self, limit: usize) -> Self {
        self.max_entries = Some(limit);
        self
    }

    fn locked(&self) -> MutexGuard<'_, Inner<V>> {
        // The cache never panics while holding the lock, so poisoning
        // indicates a bug elsewhere.
        self.inner.lock().expect("cache lock poisoned")
    }

    /// Returns the stored value if present and unexpired
    ///
    /// A present-but-expired entry is removed as a side effect and counted
    /// as both an eviction and a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut inner = self.locked();

        let expired = match inner.entries.get(key) {
            None => {
                inner.stats.miss_count += 1;
                return None;
            }
            Some(entry) => now > entry.expires_at,
        };

        if expired {
            inner.entries.remove(key);
            inner.stats.eviction_count += 1;
            inner.stats.miss_count += 1;
            inner.stats.current_size = inner.entries.len();
            return None;
        }

        inner.stats.hit_count += 1;
        inner.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Inserts or overwrites an entry that expires `ttl_seconds` from now
    ///
    /// Fails fast with [`CacheError::InvalidTtl`] when `ttl_seconds` is not
    /// positive; that is a programmer error, not a runtime condition.
    pub fn set(&self, key: impl Into<String>, value: V, ttl_seconds: i64) -> Result<(), CacheError> {
        if ttl_seconds <= 0 {
            return Err(CacheError::InvalidTtl(ttl_seconds));
        }

        let key = key.into();
        let now = self.clock.now();
        let mut inner = self.locked();

        if let Some(limit) = self.max_entries {
            let is_new_key = !inner.entries.contains_key(&key);
            if is_new_key && inner.entries.len() >= limit {
                self.evict_soonest(&mut inner);
            }
        }

        inner.entries.insert(
            key,
            CacheEntry {
                value,
                created_at: now,
                expires_at: now + Duration::seconds(ttl_seconds),
            },
        );
        inner.stats.current_size = inner.entries.len();
        Ok(())
    }

    /// Removes an entry if present; absent keys are not an error
    pub fn invalidate(&self, key: &str) {
        let mut inner = self.locked();
        if inner.entries.remove(key).is_some() {
            inner.stats.eviction_count += 1;
            inner.stats.current_size = inner.entries.len();
        }
    }

    /// Returns a snapshot of the cache statistics
    pub fn stats(&self) -> CacheStats {
        self.locked().stats
    }

    /// Scans all entries and removes the expired ones
    ///
    /// Returns the number of entries evicted. Safe to call from a
    /// background task; it takes the same lock as foreground operations.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut inner = self.locked();

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| now <= entry.expires_at);
        let evicted = before - inner.entries.len();

        inner.stats.eviction_count += evicted as u64;
        inner.stats.current_size = inner.entries.len();
        evicted
    }

    /// Evicts the entry closest to expiry, breaking ties on creation time
    fn evict_soonest(&self, inner: &mut Inner<V>) {
        let victim = inner
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.expires_at, entry.created_at))
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            inner.entries.remove(&key);
            inner.stats.eviction_count += 1;
            inner.stats.current_size = inner.entries.len();
        }
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
