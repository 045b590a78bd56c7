//! Client for the local inference engine
//!
//! This module provides the HTTP client the gateway delegates actual text
//! generation to, together with the wire types of the engine API.

pub mod client;
pub mod types;

pub use client::InferenceClient;
pub use types::EngineGenerateResponse;
