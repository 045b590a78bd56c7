//! Text generation endpoint
//!
//! POST /generate deduplicates identical requests through the response cache
//! and forwards misses to the inference engine.

use crate::core::cache::{CacheEntry, CacheKey};
use crate::core::metrics::MetricsRecorder;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Configure generation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::post().to(generate_text));
}

/// Inbound generation request
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Prompt forwarded to the engine
    pub prompt: String,
    /// Maximum number of tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    100
}

fn default_temperature() -> f32 {
    0.7
}

/// Text generation endpoint
///
/// Requests with identical prompt, token limit, and temperature are served
/// from the cache together with their originally recorded metrics; no
/// re-measurement happens on a hit. A backend failure surfaces as a 5xx
/// error envelope and leaves the cache untouched.
pub async fn generate_text(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, GatewayError> {
    let key = CacheKey::from_request(&request.prompt, request.max_tokens, request.temperature);

    if let Some(entry) = state.cache.get(&key) {
        info!("Cache hit");
        return Ok(HttpResponse::Ok().json(entry));
    }

    let recorder = MetricsRecorder::start();
    let reply = state
        .client
        .generate(&request.prompt, request.max_tokens, request.temperature)
        .await?;
    let metrics = recorder.finish(&request.prompt, &reply.response);

    let entry = CacheEntry {
        response: reply.response,
        metrics,
    };
    state.cache.put(key, entry.clone());
    info!(cache_size = state.cache.len(), "Cache miss - stored new response");

    Ok(HttpResponse::Ok().json(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt": "Test prompt"}"#).unwrap();
        assert_eq!(request.prompt, "Test prompt");
        assert_eq!(request.max_tokens, 100);
        assert_eq!(request.temperature, 0.7);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt": "p", "max_tokens": 5, "temperature": 1.2}"#)
                .unwrap();
        assert_eq!(request.max_tokens, 5);
        assert_eq!(request.temperature, 1.2);
    }

    #[test]
    fn missing_prompt_is_rejected() {
        let result = serde_json::from_str::<GenerateRequest>(r#"{"max_tokens": 5}"#);
        assert!(result.is_err());
    }
}
