//! Request-deduplication response cache
//!
//! This module provides the bounded in-memory cache that serves repeated
//! generation requests without touching the inference engine: deterministic
//! request keys, immutable cached entries, and a fixed-capacity store with
//! least-recently-used eviction.

pub mod store;
pub mod types;


pub use store::ResponseCache;
pub use types::{CacheEntry, CacheKey, CacheStats};
