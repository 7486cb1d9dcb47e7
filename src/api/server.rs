//! # API server
//!
//! Axum HTTP server wiring: shared state, middleware layers and the serve
//! loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::auth::JwtManager;
use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt: Arc<JwtManager>,
}

impl AppState {
    #[must_use]
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            db: Arc::new(db),
            jwt: Arc::new(JwtManager::new(
                &config.auth.jwt_secret,
                config.auth.token_expires_in,
            )),
        }
    }
}

/// HTTP API server.
pub struct ApiServer {
    config: AppConfig,
    router: Router,
}

impl ApiServer {
    /// Assemble the router with all routes and layers.
    #[must_use]
    pub fn new(config: AppConfig, state: AppState) -> Self {
        let mut app = super::routes::create_routes(state);

        let service_builder = ServiceBuilder::new().layer(TraceLayer::new_for_http());

        if config.server.enable_cors {
            let mut cors_layer = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::ACCEPT,
                ]);

            if config.server.cors_origins.iter().any(|o| o == "*") {
                cors_layer = cors_layer.allow_origin(Any);
            } else {
                let origins: std::result::Result<Vec<HeaderValue>, _> = config
                    .server
                    .cors_origins
                    .iter()
                    .map(|origin| origin.parse::<HeaderValue>())
                    .collect();
                match origins {
                    Ok(origins) => cors_layer = cors_layer.allow_origin(origins),
                    Err(e) => {
                        warn!("invalid CORS origin configuration: {e}, allowing any origin");
                        cors_layer = cors_layer.allow_origin(Any);
                    }
                }
            }

            app = app.layer(service_builder.layer(cors_layer));
        } else {
            app = app.layer(service_builder);
        }

        Self {
            config,
            router: app,
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> Result<()> {
        let ip = self
            .config
            .server
            .bind_address
            .parse::<std::net::IpAddr>()
            .map_err(|e| {
                AppError::config(format!(
                    "invalid bind address '{}': {e}",
                    self.config.server.bind_address
                ))
            })?;
        let addr = SocketAddr::new(ip, self.config.server.port);

        info!("starting API server on {addr}");
        let listener = TcpListener::bind(&addr).await?;

        axum::serve(listener, self.router)
            .await
            .map_err(|e| AppError::internal(format!("server error: {e}")))?;

        Ok(())
    }
}
