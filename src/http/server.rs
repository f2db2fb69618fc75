//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, limits, request ID, hit counting)
//! - Serve the static site under `/app`
//! - Bind the server to a listener and run until shutdown
//!
//! # Design Decisions
//! - The route table is fixed at startup; no reload
//! - The hit counter wraps only the static sub-router, as an explicit
//!   middleware composition rather than logic inside the file handler

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::api;
use crate::config::ChirpyConfig;
use crate::http::middleware::{hit_counter, request_metrics};
use crate::http::request::MakeRequestUuid;
use crate::observability::hits::HitCounter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub hits: Arc<HitCounter>,
}

/// HTTP server for the Chirpy API.
pub struct HttpServer {
    router: Router,
    config: ChirpyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ChirpyConfig) -> Self {
        let state = AppState {
            hits: Arc::new(HitCounter::new()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ChirpyConfig, state: AppState) -> Router {
        // Static site: every request through here counts as a hit,
        // including misses that ServeDir turns into 404s.
        let serve_dir = ServeDir::new(&config.static_assets.dir);
        let static_site = Router::new()
            .route_service("/", serve_dir.clone())
            .route_service("/{*path}", serve_dir)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                hit_counter::track_hits,
            ));

        Router::new()
            .route("/healthz", get(api::handlers::healthz))
            .route("/api/validate_chirp", post(api::handlers::validate_chirp))
            .merge(admin::admin_router())
            .nest("/app", static_site)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(middleware::from_fn(request_metrics::track_metrics))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ChirpyConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
