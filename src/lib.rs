//! Peercache - A distributed-aware in-process cache
//!
//! Byte-budgeted LRU cache groups with load-through miss handling, a
//! consistent-hash ring for peer selection, and an HTTP endpoint serving
//! cached values to other processes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod group;
pub mod models;
pub mod ring;

pub use api::{create_router, AppState, PeerServer};
pub use cache::{CacheStats, ConcurrentCache, LruStore, ValueView};
pub use config::Config;
pub use error::CacheError;
pub use group::{Group, Loader, LoaderFn, Registry};
pub use ring::HashRing;
