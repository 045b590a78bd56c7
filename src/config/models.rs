//! Configuration data models
//!
//! Serde-backed sections of the gateway configuration. Every field has a
//! default so a partial YAML file or an empty environment still yields a
//! runnable configuration.

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Top-level gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Inference backend settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Response cache settings
    #[serde(default)]
    pub cache: CacheSettings,
}

impl GatewayConfig {
    /// Build configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("GATEWAY_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("GATEWAY_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| GatewayError::Config(format!("Invalid GATEWAY_PORT: {}", port)))?;
        }
        if let Ok(workers) = std::env::var("GATEWAY_WORKERS") {
            config.server.workers = Some(workers.parse().map_err(|_| {
                GatewayError::Config(format!("Invalid GATEWAY_WORKERS: {}", workers))
            })?);
        }
        if let Ok(url) = std::env::var("BACKEND_URL") {
            config.backend.base_url = url;
        }
        if let Ok(model) = std::env::var("BACKEND_MODEL") {
            config.backend.model = model;
        }
        if let Ok(timeout) = std::env::var("BACKEND_TIMEOUT_SECS") {
            config.backend.timeout_secs = timeout.parse().map_err(|_| {
                GatewayError::Config(format!("Invalid BACKEND_TIMEOUT_SECS: {}", timeout))
            })?;
        }
        if let Ok(entries) = std::env::var("CACHE_MAX_ENTRIES") {
            config.cache.max_entries = entries.parse().map_err(|_| {
                GatewayError::Config(format!("Invalid CACHE_MAX_ENTRIES: {}", entries))
            })?;
        }

        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads (actix default when unset)
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

/// Inference backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the local inference engine
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    /// Model name passed on every generation call
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Response cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Maximum number of cached responses
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_backend_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama2".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_entries() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so concurrent tests never observe each other's env mutations
    #[test]
    fn env_overrides_apply_on_top_of_defaults() {
        unsafe {
            std::env::set_var("BACKEND_MODEL", "llama3:8b");
            std::env::set_var("CACHE_MAX_ENTRIES", "250");
        }

        let config = GatewayConfig::from_env().expect("env config");
        assert_eq!(config.backend.model, "llama3:8b");
        assert_eq!(config.cache.max_entries, 250);
        assert_eq!(config.server.port, 8000);

        unsafe {
            std::env::set_var("BACKEND_TIMEOUT_SECS", "soon");
        }
        assert!(GatewayConfig::from_env().is_err());

        unsafe {
            std::env::remove_var("BACKEND_MODEL");
            std::env::remove_var("CACHE_MAX_ENTRIES");
            std::env::remove_var("BACKEND_TIMEOUT_SECS");
        }
    }
}
