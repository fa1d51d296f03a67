//! In-memory TTL cache
//!
//! This module provides a generic key-value store with per-entry expiration,
//! an injected clock for deterministic testing, hit/miss/eviction statistics,
//! and an optional capacity bound. Expiry is lazy on read, with an optional
//! periodic sweep driven by [`crate::sweep`].

mod clock;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{CacheError, CacheStats, TtlCache};
