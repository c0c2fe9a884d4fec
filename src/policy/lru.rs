//! Least Recently Used (LRU) cache over a hash index and a sentinel-bounded
//! recency list.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V>                         │
//!   │                                                              │
//!   │   ┌────────────────────────────────────────────────────┐    │
//!   │   │  FxHashMap<K, SlotId>  (index into RecencyList)    │    │
//!   │   └──────────────────────────┬─────────────────────────┘    │
//!   │                              │                               │
//!   │   ┌──────────────────────────▼─────────────────────────┐    │
//!   │   │  RecencyList<Entry<K, V>>                          │    │
//!   │   │                                                    │    │
//!   │   │  [head] ◄──► [MRU] ◄──► ... ◄──► [LRU] ◄──► [tail] │    │
//!   │   └────────────────────────────────────────────────────┘    │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index is the single source of truth for key existence; every node
//! mutation goes through an index lookup, never through list traversal.
//! Index and list are updated in lock-step by every mutating operation, so
//! the index key set always equals the set of keys in the list.
//!
//! ## Operations
//!
//! | Operation       | Complexity | Description                              |
//! |-----------------|------------|------------------------------------------|
//! | `new(capacity)` | O(1)       | Fallible; rejects zero capacity          |
//! | `put(k, v)`     | O(1)       | Insert or update, may evict LRU          |
//! | `get(&k)`       | O(1)       | Lookup, moves entry to MRU position      |
//! | `peek(&k)`      | O(1)       | Lookup without recency update            |
//! | `touch(&k)`     | O(1)       | Recency refresh without value return     |
//! | `pop_lru()`     | O(1)       | Remove and return least recently used    |
//! | `iter()`        | O(n)       | Entries from MRU to LRU                  |
//!
//! ## Eviction
//!
//! `put` of an absent key at full capacity evicts exactly the tail entry
//! before inserting. The list enforces a strict total recency order, so the
//! eviction candidate is always unambiguous. Updates of a present key never
//! evict.
//!
//! ## Thread Safety
//!
//! - `LruCache`: **NOT thread-safe**; single-threaded, synchronous, no
//!   operation blocks.
//! - `ConcurrentLruCache` (feature `concurrent`): one coarse
//!   `parking_lot::Mutex` around the whole cache, held for the duration of
//!   each call. Every hit reorders the list, so a read/write split buys
//!   nothing here.

use std::hash::Hash;

#[cfg(feature = "concurrent")]
use std::sync::Arc;

#[cfg(feature = "concurrent")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::ConfigError;
use crate::traits::{CoreCache, LruCacheTrait};

/// A cached key-value pair; the list node payload.
///
/// The key is immutable after creation and is carried in the node so that
/// tail eviction can remove the matching index entry without a scan.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// # Example
///
/// ```
/// use bookcache::policy::lru::LruCache;
/// use bookcache::traits::CoreCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.put("1234", "dune");
/// cache.put("1235", "hyperion");
///
/// assert_eq!(cache.get(&"1234"), Some(&"dune"));
///
/// // "1235" is now least recently used and gets evicted
/// cache.put("1236", "foundation");
/// assert!(!cache.contains(&"1235"));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, SlotId>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero: a cache that can never
    /// hold an entry violates the capacity contract and is rejected at
    /// construction instead of silently accepted.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be >= 1"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Looks up a value without recording an access.
    ///
    /// Unlike [`get`](CoreCache::get), the entry keeps its position in the
    /// recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates `(key, value)` pairs from least to most recently used.
    pub fn iter_rev(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter_rev().map(|entry| (&entry.key, &entry.value))
    }

    /// Evicts the tail entry, if any, removing it from list and index.
    fn evict_tail(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        trace!("evicted least recently used entry");
        Some((entry.key, entry.value))
    }

    /// Validates index/list agreement (debug builds only).
    fn validate_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(self.index.len() <= self.capacity);
            debug_assert_eq!(self.index.len(), self.list.len());
            for (key, &id) in &self.index {
                let entry = self.list.get(id).expect("index points at removed node");
                debug_assert!(entry.key == *key, "index and node key disagree");
            }
            self.list.debug_validate_invariants();
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts or updates a key, refreshing it to most-recently-used.
    ///
    /// An update replaces the value in place and never evicts. A fresh
    /// insert at full capacity first evicts the tail entry from both the
    /// list and the index.
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            let previous = self
                .list
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            self.list.move_to_front(id);
            self.validate_invariants();
            return previous;
        }

        if self.index.len() == self.capacity {
            self.evict_tail();
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        self.validate_invariants();
        None
    }

    /// Looks up a value, moving the entry to the most-recently-used
    /// position on a hit. A miss returns `None` and mutates nothing.
    fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.validate_invariants();
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        let popped = self.evict_tail();
        self.validate_invariants();
        popped
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        let id = self.list.back_id()?;
        self.list.get(id).map(|entry| (&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_front(id),
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// ConcurrentLruCache
// ---------------------------------------------------------------------------

/// Thread-safe LRU cache: one coarse lock around [`LruCache`].
///
/// Values are stored as `Arc<V>` so `get` hands out owned handles that stay
/// valid after the entry is evicted.
#[cfg(feature = "concurrent")]
#[derive(Debug)]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Mutex<LruCache<K, Arc<V>>>,
}

#[cfg(feature = "concurrent")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)?),
        })
    }

    /// Inserts a value, wrapping it in an `Arc`.
    pub fn put(&self, key: K, value: V) -> Option<Arc<V>> {
        self.inner.lock().put(key, Arc::new(value))
    }

    /// Inserts a pre-wrapped `Arc<V>`.
    pub fn put_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        self.inner.lock().put(key, value)
    }

    /// Looks up a value, refreshing recency on a hit.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.inner.lock().get(key).cloned()
    }

    /// Looks up a value without a recency update.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.inner.lock().peek(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Removes and returns the least-recently-used entry.
    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        self.inner.lock().pop_lru()
    }

    /// Refreshes a key to most-recently-used; `true` if it was present.
    pub fn touch(&self, key: &K) -> bool {
        self.inner.lock().touch(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
