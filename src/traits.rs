//! # Cache Contract
//!
//! [`CoreCache`] is the interface every recency cache in this crate exposes,
//! whatever its eviction policy. Generic code written against it works with
//! [`LruCache`](crate::policy::LruCache), [`MruCache`](crate::policy::MruCache)
//! and runtime-selected [`RecencyCache`](crate::cache::RecencyCache)s alike.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  put(&mut, K, V) → Option<V>            │
//!   │  contains(&, &K) → bool                 │
//!   │  flush(&mut)                            │
//!   │  capacity(&) → usize                    │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool          (default)  │
//!   │  is_at_capacity(&) → bool    (default)  │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! Implementations are not required to be thread-safe. `get` takes
//! `&mut self` because a hit changes recency order.

/// Operations every fixed-capacity cache supports.
///
/// # Example
///
/// ```
/// use rucache::traits::CoreCache;
/// use rucache::policy::{LruCache, MruCache};
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         cache.put(*key, value.to_string());
///     }
/// }
///
/// let mut lru = LruCache::new(2);
/// let mut mru = MruCache::new(2);
/// warm(&mut lru, &[(1, "one"), (2, "two"), (3, "three")]);
/// warm(&mut mru, &[(1, "one"), (2, "two"), (3, "three")]);
///
/// assert!(!lru.contains(&1));
/// assert!(!mru.contains(&2));
/// ```
pub trait CoreCache<K, V> {
    /// Returns the value for `key`, updating recency on a hit.
    ///
    /// Use [`contains`](Self::contains) to test membership without
    /// affecting eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Stores a key-value pair and returns the displaced value, if any.
    ///
    /// The displaced value is either the previous value for `key` or the
    /// value of the entry evicted to make room; callers cannot tell which.
    ///
    /// ```
    /// use rucache::traits::CoreCache;
    /// use rucache::policy::LruCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// assert_eq!(CoreCache::put(&mut cache, 1, "first"), None);
    /// assert_eq!(CoreCache::put(&mut cache, 1, "second"), Some("first"));
    /// ```
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Removes all entries. Capacity is unchanged.
    fn flush(&mut self);

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_at_capacity(&self) -> bool {
        self.len() == self.capacity()
    }
}
