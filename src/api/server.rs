//! Peer Server
//!
//! The wire-level endpoint serving cached values to other processes.
//! A request path `{base_path}{group}/{key}` resolves the group through
//! the registry and answers with the raw cached bytes; the key segment
//! may itself contain further `/` characters.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::error::{CacheError, Result};
use crate::group::Registry;
use crate::models::{HealthResponse, StatsResponse};

/// Path prefix served by default.
pub const DEFAULT_BASE_PATH: &str = "/_cache/";

// == Peer Server ==
/// Translates `{group}/{key}` wire paths into registry lookups.
pub struct PeerServer {
    /// This peer's own address; identification in logs only
    self_addr: String,
    /// Prefix every served path must carry
    base_path: String,
    /// The application-owned group table
    registry: Arc<Registry>,
}

impl PeerServer {
    // == Constructors ==
    /// Creates a server on the default base path.
    pub fn new(self_addr: impl Into<String>, registry: Arc<Registry>) -> Self {
        Self::with_base_path(self_addr, DEFAULT_BASE_PATH, registry)
    }

    /// Creates a server validating paths against a custom prefix.
    pub fn with_base_path(
        self_addr: impl Into<String>,
        base_path: impl Into<String>,
        registry: Arc<Registry>,
    ) -> Self {
        Self {
            self_addr: self_addr.into(),
            base_path: base_path.into(),
            registry,
        }
    }

    /// Returns this peer's advertised address.
    pub fn self_addr(&self) -> &str {
        &self.self_addr
    }

    // == Path Split ==
    /// Validates the prefix and splits the remainder into group and key.
    ///
    /// Both segments must be non-empty; only the first `/` after the
    /// prefix separates them. Anything else is a malformed request —
    /// including a wrong prefix, which is a client error here, never a
    /// reason to abort the serving task.
    fn split_path<'a>(&self, path: &'a str) -> Result<(&'a str, &'a str)> {
        let rest = path.strip_prefix(&self.base_path).ok_or(CacheError::BadRequest)?;
        let (group, key) = rest.split_once('/').ok_or(CacheError::BadRequest)?;
        if group.is_empty() || key.is_empty() {
            return Err(CacheError::BadRequest);
        }
        Ok((group, key))
    }
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub server: Arc<PeerServer>,
}

impl AppState {
    /// Creates the shared state from a configured peer server.
    pub fn new(server: PeerServer) -> Self {
        Self {
            server: Arc::new(server),
        }
    }
}

// == Handlers ==

/// Fallback handler for `GET {base_path}{group}/{key}`.
///
/// Success: 200 with the raw cached bytes as `application/octet-stream`.
/// Failures map per [`CacheError`]'s response conversion.
pub async fn serve_value(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response> {
    let server = &state.server;
    let (group_name, key) = match server.split_path(uri.path()) {
        Ok(parts) => parts,
        Err(err) => {
            warn!(peer = %server.self_addr, path = %uri.path(), "rejecting malformed cache path");
            return Err(err);
        }
    };

    info!(peer = %server.self_addr, %method, group = group_name, key, "serving cache lookup");

    let group = server
        .registry
        .get(group_name)
        .await
        .ok_or_else(|| CacheError::NoSuchGroup(group_name.to_string()))?;

    let view = group.get(key).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        view.to_vec(),
    )
        .into_response())
}

/// Handler for GET /stats/:group
///
/// Reports the named group's hit/miss/eviction counters as JSON.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(group_name): Path<String>,
) -> Result<Json<StatsResponse>> {
    let group = state
        .server
        .registry
        .get(&group_name)
        .await
        .ok_or_else(|| CacheError::NoSuchGroup(group_name.clone()))?;

    let stats = group.stats().await;
    Ok(Json(StatsResponse::new(group_name, stats)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> PeerServer {
        PeerServer::new("127.0.0.1:3000", Arc::new(Registry::new()))
    }

    #[test]
    fn test_split_path_two_segments() {
        let server = test_server();
        let (group, key) = server.split_path("/_cache/scores/daz").unwrap();
        assert_eq!(group, "scores");
        assert_eq!(key, "daz");
    }

    #[test]
    fn test_split_path_key_keeps_extra_slashes() {
        let server = test_server();
        let (group, key) = server.split_path("/_cache/blobs/user/42/avatar").unwrap();
        assert_eq!(group, "blobs");
        assert_eq!(key, "user/42/avatar");
    }

    #[test]
    fn test_split_path_rejects_wrong_prefix() {
        let server = test_server();
        assert!(matches!(
            server.split_path("/other/scores/daz"),
            Err(CacheError::BadRequest)
        ));
    }

    #[test]
    fn test_split_path_rejects_missing_or_empty_segments() {
        let server = test_server();
        assert!(matches!(server.split_path("/_cache/scores"), Err(CacheError::BadRequest)));
        assert!(matches!(server.split_path("/_cache/scores/"), Err(CacheError::BadRequest)));
        assert!(matches!(server.split_path("/_cache//daz"), Err(CacheError::BadRequest)));
    }

    #[test]
    fn test_custom_base_path() {
        let server =
            PeerServer::with_base_path("127.0.0.1:3000", "/peers/", Arc::new(Registry::new()));
        assert!(server.split_path("/peers/scores/daz").is_ok());
        assert!(server.split_path("/_cache/scores/daz").is_err());
    }
}
