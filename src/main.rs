//! Peercache - A distributed-aware in-process cache server
//!
//! Serves byte-budgeted LRU cache groups to other processes over HTTP.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use peercache::{create_router, AppState, Config, Loader, PeerServer, Registry};

/// Loader backed by an in-memory table, standing in for a real source
/// such as a database or an upstream service.
struct MapSource {
    records: HashMap<String, String>,
}

#[async_trait]
impl Loader for MapSource {
    async fn load(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        debug!(key, "consulting sample source");
        self.records
            .get(key)
            .map(|value| value.clone().into_bytes())
            .ok_or_else(|| anyhow::anyhow!("no record for key {key}"))
    }
}

fn sample_source() -> MapSource {
    let records = [("ada", "91"), ("lin", "87"), ("sam", "75")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    MapSource { records }
}

/// Main entry point for the Peercache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the group registry and register the sample group
/// 4. Create the peer server and Axum router
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "peercache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Peercache server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_budget_bytes={}, port={}, base_path={}",
        config.cache_budget_bytes, config.server_port, config.base_path
    );

    // The registry is owned here and handed to the peer server explicitly.
    let registry = Arc::new(Registry::new());
    registry
        .new_group("scores", config.cache_budget_bytes, Arc::new(sample_source()))
        .await;
    info!("Registered group \"scores\"");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let server = PeerServer::with_base_path(
        addr.to_string(),
        config.base_path.clone(),
        Arc::clone(&registry),
    );
    let app = create_router(AppState::new(server));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Peer endpoint listening on http://{}{}", addr, config.base_path);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
