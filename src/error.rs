//! Error types for the cache
//!
//! One taxonomy for the whole crate, mapped onto wire responses at the
//! HTTP boundary. Bodies stay plain text: the peer protocol serves raw
//! bytes on success and bare messages on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache lookups and the peer wire endpoint.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Lookup with an empty key; the loader is never consulted
    #[error("key is required")]
    EmptyKey,

    /// No group registered under the requested name
    #[error("no such group: {0}")]
    NoSuchGroup(String),

    /// Loader failure, carried verbatim
    #[error(transparent)]
    Load(#[from] anyhow::Error),

    /// Malformed wire path or wrong base-path prefix
    #[error("bad request")]
    BadRequest,
}

// == IntoResponse Implementation ==
/// Maps the taxonomy onto the wire: 400 for client mistakes, 404 for
/// unknown groups, 500 carrying the loader's own message.
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::EmptyKey | CacheError::BadRequest => StatusCode::BAD_REQUEST,
            CacheError::NoSuchGroup(_) => StatusCode::NOT_FOUND,
            CacheError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (CacheError::EmptyKey, StatusCode::BAD_REQUEST),
            (CacheError::BadRequest, StatusCode::BAD_REQUEST),
            (
                CacheError::NoSuchGroup("scores".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                CacheError::Load(anyhow::anyhow!("db down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(CacheError::BadRequest.to_string(), "bad request");
        assert_eq!(
            CacheError::NoSuchGroup("scores".to_string()).to_string(),
            "no such group: scores"
        );
        assert_eq!(
            CacheError::Load(anyhow::anyhow!("db down")).to_string(),
            "db down"
        );
    }
}
