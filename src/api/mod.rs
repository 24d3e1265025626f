//! API Module
//!
//! The HTTP surface of the cache: the peer server that answers
//! `{base_path}{group}/{key}` lookups with raw bytes, plus stats and
//! health endpoints.

pub mod routes;
pub mod server;

pub use routes::create_router;
pub use server::{AppState, PeerServer, DEFAULT_BASE_PATH};
