//! Concurrent Cache Module
//!
//! Lock-guarded wrapper that makes one [`LruStore`] safe for concurrent
//! callers. The inner store is built lazily on the first write, using the
//! byte budget captured at construction.

use tokio::sync::Mutex;

use crate::cache::{CacheStats, LruStore, ValueView};

// == Concurrent Cache ==
/// Concurrency-safe facade over a lazily-initialized [`LruStore`].
///
/// Each `add`/`get` is atomic with respect to other calls on the same
/// instance; the lock is scoped to exactly one call, so nothing is ever
/// held across a loader invocation. No guarantee spans multiple calls.
#[derive(Debug)]
pub struct ConcurrentCache {
    /// Budget handed to the store when it is first created
    max_bytes: u64,
    /// The store itself; absent until the first `add`
    store: Mutex<Option<LruStore>>,
}

impl ConcurrentCache {
    // == Constructor ==
    /// Creates an empty cache that will enforce `max_bytes` once written.
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            store: Mutex::new(None),
        }
    }

    // == Add ==
    /// Inserts or replaces an entry, constructing the store if needed.
    pub async fn add(&self, key: String, value: ValueView) {
        let mut guard = self.store.lock().await;
        let store = guard.get_or_insert_with(|| LruStore::new(self.max_bytes));
        store.add(key, value);
    }

    // == Get ==
    /// Looks up a key; a cache that was never written always misses.
    pub async fn get(&self, key: &str) -> Option<ValueView> {
        let mut guard = self.store.lock().await;
        guard.as_mut()?.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the inner store's counters.
    pub async fn stats(&self) -> CacheStats {
        let guard = self.store.lock().await;
        match guard.as_ref() {
            Some(store) => store.stats(),
            None => CacheStats::new(),
        }
    }
}
