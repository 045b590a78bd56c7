//! Error handling for the gateway
//!
//! This module defines all error types used throughout the gateway and the
//! HTTP mapping that turns them into error envelopes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inference engine could not be reached at all
    #[error("Error communicating with inference engine: {0}")]
    BackendUnavailable(String),

    /// Inference engine answered with a non-success status
    #[error("Inference engine returned status {status}: {message}")]
    Backend { status: u16, message: String },

    /// Inference engine reply could not be decoded
    #[error("Malformed inference engine response: {0}")]
    MalformedResponse(String),

    /// Inference engine did not answer within the configured timeout
    #[error("Inference engine timed out: {0}")]
    Timeout(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Config(_) | GatewayError::Io(_) | GatewayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Backend { .. } | GatewayError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            detail: self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
