//! Group Module
//!
//! Named cache namespaces with pluggable cache-miss loading, and the
//! registry that owns them.

#[allow(clippy::module_inception)]
mod group;
mod loader;
mod registry;

// Re-export public types
pub use group::Group;
pub use loader::{Loader, LoaderFn};
pub use registry::Registry;
