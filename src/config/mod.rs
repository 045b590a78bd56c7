//! Configuration management for the gateway
//!
//! This module handles loading and validation of the gateway configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let gateway = GatewayConfig::from_env()?;
        let config = Self { gateway };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get inference backend configuration
    pub fn backend(&self) -> &BackendConfig {
        &self.gateway.backend
    }

    /// Get response cache configuration
    pub fn cache(&self) -> &CacheSettings {
        &self.gateway.cache
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.gateway.server.host.is_empty() {
            return Err(GatewayError::config("server.host must not be empty"));
        }
        if self.gateway.backend.base_url.is_empty() {
            return Err(GatewayError::config("backend.base_url must not be empty"));
        }
        if !self.gateway.backend.base_url.starts_with("http://")
            && !self.gateway.backend.base_url.starts_with("https://")
        {
            return Err(GatewayError::config(
                "backend.base_url must be an http(s) URL",
            ));
        }
        if self.gateway.backend.timeout_secs == 0 {
            return Err(GatewayError::config(
                "backend.timeout_secs must be greater than 0",
            ));
        }
        if self.gateway.cache.max_entries == 0 {
            return Err(GatewayError::config(
                "cache.max_entries must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 8000);
        assert_eq!(config.backend().base_url, "http://localhost:11434");
        assert_eq!(config.backend().model, "llama2");
        assert_eq!(config.backend().timeout_secs, 60);
        assert_eq!(config.cache().max_entries, 1000);
    }

    #[tokio::test]
    async fn loads_yaml_file_with_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "server:\n  port: 9100\nbackend:\n  model: \"llama3\"\ncache:\n  max_entries: 32"
        )
        .expect("write config");

        let config = Config::from_file(file.path()).await.expect("load config");
        assert_eq!(config.server().port, 9100);
        // Unset fields keep their defaults
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.backend().model, "llama3");
        assert_eq!(config.cache().max_entries, 32);
    }

    #[tokio::test]
    async fn missing_file_is_a_config_error() {
        let result = Config::from_file("/nonexistent/gateway.yaml").await;
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn zero_cache_capacity_is_rejected() {
        let mut config = Config::default();
        config.gateway.cache.max_entries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_backend_timeout_is_rejected() {
        let mut config = Config::default();
        config.gateway.backend.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_backend_url_is_rejected() {
        let mut config = Config::default();
        config.gateway.backend.base_url = "localhost:11434".to_string();
        assert!(config.validate().is_err());
    }
}
