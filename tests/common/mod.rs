//! Shared utilities for integration testing.

use chirpy::config::ChirpyConfig;
use chirpy::http::HttpServer;
use tokio::net::TcpListener;

/// Spawn a server on an ephemeral port and return its base URL.
///
/// Each caller gets its own server and hit counter, so tests can run in
/// parallel without sharing state. The Prometheus exporter is disabled:
/// it installs a process-wide recorder and only one test could win.
pub async fn spawn_server() -> String {
    let mut config = ChirpyConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.observability.metrics_enabled = false;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}
