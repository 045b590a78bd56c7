//! Wire types for the inference engine API

use serde::{Deserialize, Serialize};

/// Request body for the engine's generate endpoint
#[derive(Debug, Serialize)]
pub struct EngineGenerateRequest<'a> {
    /// Model to generate with
    pub model: &'a str,
    /// Prompt text
    pub prompt: &'a str,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Always false; the reply must be a single JSON document
    pub stream: bool,
}

/// Reply from the engine's generate endpoint
///
/// Only the generated text matters to the gateway. A decodable reply that
/// lacks the field is treated as an empty generation rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineGenerateResponse {
    /// Generated text
    #[serde(default)]
    pub response: String,
    /// Engine-reported completion flag
    #[serde(default)]
    pub done: bool,
}
