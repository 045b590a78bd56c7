//! Cache type definitions
//!
//! Keys, entries, and statistics for the response cache.

use crate::core::metrics::MetricsSnapshot;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

/// Key identifying a unique generation request
///
/// Two requests with identical prompt, token limit, and temperature always
/// map to the same key; a difference in any field yields a different key.
/// The fields are hashed over a length-prefixed encoding, so a prompt that
/// happens to contain separator characters or digits cannot alias another
/// request's field boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a generation request
    pub fn from_request(prompt: &str, max_tokens: u32, temperature: f32) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((prompt.len() as u64).to_le_bytes());
        hasher.update(prompt.as_bytes());
        hasher.update(max_tokens.to_le_bytes());
        hasher.update(temperature.to_bits().to_le_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Hex digest form of the key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cached generation result
///
/// Stored once after a successful backend call and returned verbatim on
/// every later hit. The embedded metrics describe the original computation,
/// not the cache retrieval. Entries are replaced wholesale on overwrite,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Generated text from the inference engine
    pub response: String,
    /// Metrics recorded when the response was produced
    pub metrics: MetricsSnapshot,
}

/// Cache counters (lock-free atomics for the hot path)
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub evictions: AtomicU64,
}

impl AtomicCacheStats {
    /// Take a point-in-time snapshot of the counters
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of the cache counters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries removed by capacity pressure
    pub evictions: u64,
}
