//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::cache::ResponseCache;
use crate::core::inference::InferenceClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across workers. The
/// cache is constructed here once, at process start, and lives until
/// shutdown; handlers receive it by injection rather than through a global.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Deduplication cache for generation responses
    pub cache: Arc<ResponseCache>,
    /// Client for the inference engine
    pub client: Arc<InferenceClient>,
}

impl AppState {
    /// Create state from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let cache = ResponseCache::new(config.cache().max_entries)?;
        let client = InferenceClient::new(config.backend())?;

        Ok(Self {
            config: Arc::new(config),
            cache: Arc::new(cache),
            client: Arc::new(client),
        })
    }
}
