//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod generate;
pub mod health;

use actix_web::web;

/// Register all gateway routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    generate::configure_routes(cfg);
    health::configure_routes(cfg);
}
