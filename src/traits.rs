//! Cache trait seam.
//!
//! This crate ships a single eviction policy, but callers that only need
//! the get/put contract can stay policy-agnostic by bounding on these
//! traits:
//!
//! | Trait           | Extends     | Purpose                              |
//! |-----------------|-------------|--------------------------------------|
//! | `CoreCache`     | -           | Universal get/put cache operations   |
//! | `LruCacheTrait` | `CoreCache` | Recency-specific eviction operations |

/// Core cache operations every cache supports, regardless of policy.
///
/// # Example
///
/// ```
/// use bookcache::traits::CoreCache;
/// use bookcache::policy::lru::LruCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(10).unwrap();
/// warm(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    ///
    /// A present key is updated in place and refreshed to most-recently-used;
    /// an absent key may first evict an entry per the cache's policy.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up a value by key, recording the access.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if the key is present. Does not record an access.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of entries currently cached.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Recency-specific operations for LRU caches.
pub trait LruCacheTrait<K, V>: CoreCache<K, V> {
    /// Removes and returns the least-recently-used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least-recently-used entry without removing it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Refreshes a key to most-recently-used without returning its value.
    ///
    /// Returns `true` if the key was present.
    fn touch(&mut self, key: &K) -> bool;
}
