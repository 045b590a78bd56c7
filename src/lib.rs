//! # Llama Gateway
//!
//! A caching reverse proxy in front of a local text-generation inference
//! engine. Identical generation requests are deduplicated through a bounded
//! in-memory LRU cache; misses are forwarded to the engine and recorded with
//! per-request latency and host resource metrics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use llama_gateway::config::Config;
//! use llama_gateway::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let server = HttpServer::new(&config)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints
//!
//! - `POST /generate` - cached text generation with metrics
//! - `GET /health` - liveness and current cache size

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use utils::error::{GatewayError, Result};
