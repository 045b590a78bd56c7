//! HTTP client for the inference engine

use super::types::{EngineGenerateRequest, EngineGenerateResponse};
use crate::config::BackendConfig;
use crate::utils::error::{GatewayError, Result};
use std::time::Duration;
use tracing::{debug, error};

/// Client for a single local inference engine
///
/// One reqwest client carrying the configured per-call timeout; every
/// failure is translated into a gateway error before it reaches a handler.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl InferenceClient {
    /// Build a client from the backend configuration
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            timeout,
        })
    }

    /// Ask the engine to generate text for a prompt
    ///
    /// Transport failures, non-success statuses, timeouts, and undecodable
    /// replies each map to their own error variant; all of them surface to
    /// the caller as a 5xx generation failure.
    pub async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<EngineGenerateResponse> {
        let body = EngineGenerateRequest {
            model: &self.model,
            prompt,
            max_tokens,
            temperature,
            stream: false,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "Calling inference engine");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Inference engine timed out after {:?}", self.timeout);
                    GatewayError::Timeout(format!("no response within {:?}", self.timeout))
                } else {
                    error!("Error calling inference engine: {}", e);
                    GatewayError::BackendUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Inference engine returned an error status");
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<EngineGenerateResponse>()
            .await
            .map_err(|e| {
                error!("Failed to decode inference engine response: {}", e);
                GatewayError::MalformedResponse(e.to_string())
            })
    }
}
