//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::Config;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::new(config.clone())?;
        Ok(Self { state })
    }

    /// Start serving until shutdown
    pub async fn start(self) -> Result<()> {
        let server_config = self.state.config.server().clone();
        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(Logger::default())
                .configure(routes::configure_routes)
        })
        .bind((server_config.host.as_str(), server_config.port))?;

        if let Some(workers) = server_config.workers {
            server = server.workers(workers);
        }

        server.run().await?;
        Ok(())
    }
}
