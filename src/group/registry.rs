//! Registry Module
//!
//! The application-owned name→group table. Callers create one registry,
//! register groups on it, and hand it to whatever needs lookups (the peer
//! server, request handlers). Groups live for the registry's lifetime and
//! are never removed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::group::{Group, Loader};

// == Registry ==
/// Reader/writer-locked mapping of group name to group.
///
/// Lookups take the read lock and run in parallel; registration takes the
/// write lock. Registering a name twice replaces the earlier group —
/// last writer wins.
#[derive(Debug, Default)]
pub struct Registry {
    groups: RwLock<HashMap<String, Arc<Group>>>,
}

impl Registry {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // == New Group ==
    /// Creates a group and registers it under `name`.
    ///
    /// `cache_bytes` is the group's byte budget (0 = unbounded). The
    /// returned handle is the same one later lookups will see.
    pub async fn new_group(
        &self,
        name: impl Into<String>,
        cache_bytes: u64,
        loader: Arc<dyn Loader>,
    ) -> Arc<Group> {
        let name = name.into();
        let group = Arc::new(Group::new(name.clone(), cache_bytes, loader));
        let mut groups = self.groups.write().await;
        groups.insert(name, Arc::clone(&group));
        group
    }

    // == Get ==
    /// Looks up a previously registered group.
    pub async fn get(&self, name: &str) -> Option<Arc<Group>> {
        let groups = self.groups.read().await;
        groups.get(name).cloned()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::LoaderFn;

    fn static_loader(value: &'static str) -> Arc<dyn Loader> {
        Arc::new(LoaderFn::new(move |_key: &str| Ok(value.as_bytes().to_vec())))
    }

    #[tokio::test]
    async fn test_registry_lookup() {
        let registry = Registry::new();
        registry.new_group("scores", 1024, static_loader("60")).await;

        let group = registry.get("scores").await.expect("scores should be registered");
        assert_eq!(group.name(), "scores");
    }

    #[tokio::test]
    async fn test_registry_unknown_name() {
        let registry = Registry::new();
        assert!(registry.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_registry_last_writer_wins() {
        let registry = Registry::new();
        registry.new_group("scores", 1024, static_loader("old")).await;
        registry.new_group("scores", 1024, static_loader("new")).await;

        let group = registry.get("scores").await.unwrap();
        let value = group.get("any").await.unwrap();
        assert_eq!(value.to_string_lossy(), "new");
    }
}
