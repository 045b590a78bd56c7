//! Health check endpoint
//!
//! This module provides the health check used by load balancers and the
//! operational scripts.

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Basic health check endpoint
///
/// Reports liveness and the current number of cached responses.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        cache_size: state.cache.len(),
    };

    HttpResponse::Ok().json(health_status)
}

/// Basic health status
#[derive(Debug, Clone, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    cache_size: usize,
}
