//! Bounded LRU storage for generation responses

use super::types::{AtomicCacheStats, CacheEntry, CacheKey, CacheStats};
use crate::utils::error::{GatewayError, Result};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::Ordering;
use tracing::debug;

/// Fixed-capacity response cache with least-recently-used eviction
///
/// The map and its recency order live behind a single mutex: a lookup with
/// its recency promotion, and an insert with any eviction it triggers, are
/// each one atomic critical section. Concurrent misses for the same key may
/// both reach the backend, but the cache itself never double-evicts or
/// exposes a half-updated state. The lock is never held across I/O.
pub struct ResponseCache {
    entries: Mutex<LruCache<CacheKey, CacheEntry>>,
    stats: AtomicCacheStats,
}

impl ResponseCache {
    /// Create a cache holding at most `max_entries` responses
    ///
    /// Capacity is fixed for the lifetime of the cache.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            GatewayError::Config("cache.max_entries must be greater than 0".to_string())
        })?;

        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            stats: AtomicCacheStats::default(),
        })
    }

    /// Look up a cached response, promoting it to most-recently-used
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.clone())
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert or overwrite a response
    ///
    /// Inserting a new key at capacity evicts the least-recently-touched
    /// entry first (ties broken by insertion order). Overwriting an existing
    /// key refreshes its value and recency without changing the size.
    pub fn put(&self, key: CacheKey, entry: CacheEntry) {
        let mut entries = self.entries.lock();
        if let Some((displaced, _)) = entries.push(key.clone(), entry) {
            // push reports the displaced pair for both same-key replacement
            // and capacity eviction; only the latter counts as an eviction
            if displaced != key {
                self.stats.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(key = %displaced, "evicted least-recently-used entry");
            }
        }
    }

    /// Current number of cached responses
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of responses the cache can hold
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    /// Counter snapshot for logs and diagnostics
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}
