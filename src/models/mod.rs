//! Response models for the peer server's JSON endpoints

pub mod responses;

// Re-export commonly used types
pub use responses::{HealthResponse, StatsResponse};
