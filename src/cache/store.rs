//! LRU Store Module
//!
//! The single-writer eviction core: a recency-ordered key-value store
//! bounded by a byte budget rather than an entry count. Not safe for
//! concurrent use; see [`ConcurrentCache`](crate::cache::ConcurrentCache) for the
//! lock-guarded wrapper.

use std::collections::{HashMap, VecDeque};

use crate::cache::{CacheStats, ValueView};

/// Callback invoked with the evicted key and value whenever an entry is
/// removed by the eviction policy.
pub type EvictionHook = Box<dyn Fn(&str, &ValueView) + Send>;

// == LRU Store ==
/// Byte-budgeted LRU cache core.
///
/// `used_bytes` is the sum of key length plus value length over all live
/// entries. Whenever an insert or update pushes `used_bytes` past
/// `max_bytes`, least-recently-used entries are evicted until the store
/// fits again. A `max_bytes` of 0 disables eviction entirely.
pub struct LruStore {
    /// Key-value storage
    entries: HashMap<String, ValueView>,
    /// Recency order: front = most recently used, back = eviction candidate
    order: VecDeque<String>,
    /// Byte budget; 0 means unbounded
    max_bytes: u64,
    /// Σ(key length + value length) over live entries
    used_bytes: u64,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Optional eviction notification
    on_evict: Option<EvictionHook>,
}

impl std::fmt::Debug for LruStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruStore")
            .field("entries", &self.entries.len())
            .field("max_bytes", &self.max_bytes)
            .field("used_bytes", &self.used_bytes)
            .finish()
    }
}

impl LruStore {
    // == Constructors ==
    /// Creates a store with the given byte budget and no eviction hook.
    pub fn new(max_bytes: u64) -> Self {
        Self::with_eviction_hook(max_bytes, None)
    }

    /// Creates a store that calls `on_evict` for every evicted entry.
    pub fn with_eviction_hook(max_bytes: u64, on_evict: Option<EvictionHook>) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_bytes,
            used_bytes: 0,
            stats: CacheStats::new(),
            on_evict,
        }
    }

    // == Get ==
    /// Looks up a key, promoting it to most-recently-used on a hit.
    ///
    /// Returns a clone of the stored view. A miss has no side effect on
    /// the recency order or the stored entries.
    pub fn get(&mut self, key: &str) -> Option<ValueView> {
        if let Some(value) = self.entries.get(key) {
            let value = value.clone();
            self.stats.record_hit();
            self.touch(key);
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Add ==
    /// Inserts or replaces an entry and promotes it to most-recently-used.
    ///
    /// A replace adjusts `used_bytes` by the value-length delta; an insert
    /// adds the full key+value length. Afterwards, least-recently-used
    /// entries are evicted while the store is over budget.
    pub fn add(&mut self, key: String, value: ValueView) {
        if let Some(old) = self.entries.get_mut(&key) {
            self.used_bytes = self.used_bytes - old.len() as u64 + value.len() as u64;
            *old = value;
            self.touch(&key);
        } else {
            self.used_bytes += (key.len() + value.len()) as u64;
            self.touch(&key);
            self.entries.insert(key, value);
        }

        while self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            self.remove_oldest();
        }
    }

    // == Remove Oldest ==
    /// Evicts the least-recently-used entry; no-op on an empty store.
    ///
    /// The eviction hook, if any, is invoked with the removed key and
    /// value after the store's own bookkeeping is done.
    pub fn remove_oldest(&mut self) {
        let Some(key) = self.order.pop_back() else {
            return;
        };
        if let Some(value) = self.entries.remove(&key) {
            self.used_bytes -= (key.len() + value.len()) as u64;
            self.stats.record_eviction();
            if let Some(hook) = &self.on_evict {
                hook(&key, &value);
            }
        }
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the current byte usage.
    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    /// Returns the configured byte budget (0 = unbounded).
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    // == Stats ==
    /// Returns a snapshot of the store's counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats;
        stats.entries = self.entries.len();
        stats.used_bytes = self.used_bytes;
        stats
    }

    /// Moves `key` to the most-recently-used position.
    fn touch(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }
}
