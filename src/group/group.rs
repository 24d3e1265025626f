//! Group Module
//!
//! A named cache namespace: one concurrent cache plus the loader invoked
//! to fill it on a miss.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, ConcurrentCache, ValueView};
use crate::error::CacheError;
use crate::group::Loader;

// == Group ==
/// A cache namespace with load-through miss handling.
///
/// Concurrent misses for the same key are not deduplicated: racing
/// callers may each invoke the loader, and the last write wins.
pub struct Group {
    name: String,
    loader: Arc<dyn Loader>,
    cache: ConcurrentCache,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>, cache_bytes: u64, loader: Arc<dyn Loader>) -> Self {
        Self {
            name: name.into(),
            loader,
            cache: ConcurrentCache::new(cache_bytes),
        }
    }

    /// Returns the group's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Get ==
    /// Returns the cached value for `key`, loading it on a miss.
    ///
    /// An empty key is a validation error; the loader is never consulted
    /// for it. A cache hit never invokes the loader. A failed load is
    /// propagated verbatim and nothing is cached for the key, so a later
    /// call retries the loader fresh.
    pub async fn get(&self, key: &str) -> Result<ValueView, CacheError> {
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }

        if let Some(value) = self.cache.get(key).await {
            debug!(group = %self.name, key, "cache hit");
            return Ok(value);
        }

        self.load(key).await
    }

    // == Stats ==
    /// Returns a snapshot of the group's cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    // TODO: consult a consistent-hash ring here and fetch from the owning
    // peer before falling back to the local loader.
    async fn load(&self, key: &str) -> Result<ValueView, CacheError> {
        self.load_locally(key).await
    }

    async fn load_locally(&self, key: &str) -> Result<ValueView, CacheError> {
        debug!(group = %self.name, key, "loading value from source");
        let bytes = self.loader.load(key).await?;
        let value = ValueView::from(bytes);
        self.cache.add(key.to_string(), value.clone()).await;
        Ok(value)
    }
}

impl std::fmt::Debug for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group").field("name", &self.name).finish()
    }
}
