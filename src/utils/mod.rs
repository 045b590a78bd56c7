//! Utility modules for the gateway
//!
//! Shared plumbing that does not belong to a single core component.

pub mod error; // Error handling
