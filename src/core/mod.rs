//! Core functionality for the gateway
//!
//! This module contains the request-deduplication cache, the metrics
//! recorder, and the inference engine client.

pub mod cache;
pub mod inference;
pub mod metrics;
