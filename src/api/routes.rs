//! API Routes
//!
//! Configures the Axum router for the peer endpoint.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::server::{health_handler, serve_value, stats_handler, AppState};

/// Creates the peer-facing router.
///
/// # Endpoints
/// - `GET {base_path}{group}/{key}` - Serve raw cached bytes
/// - `GET /stats/:group` - Per-group cache statistics
/// - `GET /health` - Health check endpoint
///
/// The cache path is the fallback route: the peer server validates the
/// base-path prefix itself, so any path outside the reserved routes and
/// the configured prefix answers `400 bad request`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/stats/:group", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(serve_value)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
