//! Chirpy API Server
//!
//! A small HTTP API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────┐
//!                       │                   CHIRPY SERVER                   │
//!     Client Request    │                                                   │
//!     ──────────────────┼─▶ http::server (Axum router + middleware stack)   │
//!                       │       │                                           │
//!                       │       ├─ GET  /healthz ──────▶ readiness          │
//!                       │       ├─ GET  /app/* ───┬───▶ static files        │
//!                       │       │                 └──── hit counter         │
//!                       │       ├─ GET  /admin/metrics ▶ hit count page     │
//!                       │       ├─ POST /admin/reset ──▶ counter reset      │
//!                       │       └─ POST /api/validate_chirp                 │
//!                       │                 └────────────▶ chirp::validator   │
//!                       │                                                   │
//!                       │  ┌─────────────────────────────────────────────┐ │
//!                       │  │           Cross-Cutting Concerns             │ │
//!                       │  │  ┌────────┐ ┌──────────────┐ ┌────────────┐ │ │
//!                       │  │  │ config │ │observability │ │ request ID │ │ │
//!                       │  │  └────────┘ └──────────────┘ └────────────┘ │ │
//!                       │  └─────────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chirpy::config::{load_config, ChirpyConfig};
use chirpy::http::HttpServer;

#[derive(Parser)]
#[command(name = "chirpy")]
#[command(about = "Chirpy API server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("chirpy v0.1.0 starting");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ChirpyConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        static_dir = %config.static_assets.dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            chirpy::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
