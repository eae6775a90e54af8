//! HTTP Server configuration and startup.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use forex_types::RateStore;

use super::handlers::{self, AppState};
use crate::RateService;
use crate::openapi::ApiDoc;

/// Directory served for paths no route matches.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// HTTP Server for the forex rates pages and API.
pub struct HttpServer<S: RateStore> {
    state: Arc<AppState<S>>,
    static_dir: PathBuf,
}

impl<S: RateStore> HttpServer<S> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: RateService<S>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Serves static assets from `dir` instead of the default directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Returns the service behind the server.
    pub fn service(&self) -> &RateService<S> {
        &self.state.service
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/", get(handlers::rates_page::<S>))
            .route("/admin", get(handlers::admin_page::<S>))
            .route("/add-currency", post(handlers::add_currency::<S>))
            .route("/update-currency/{id}", put(handlers::update_currency::<S>))
            .route("/delete-currency/{id}", delete(handlers::delete_currency::<S>))
            .route("/api/rates", get(handlers::list_rates::<S>))
            .route("/health", get(handlers::health))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(metrics)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server running at http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
