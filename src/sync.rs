//! Shared access to one [`RecencyCache`] behind a single exclusive lock.
//!
//! The engine itself has no synchronization. Every call here takes a
//! `parking_lot::Mutex` for its whole duration, which is exactly the
//! "one lock around the whole engine" discipline the core requires from
//! callers. A read/write lock would not help: `get` reorders the recency
//! list, so every operation needs exclusive access.
//!
//! Values are returned by clone (or through a closure) because references
//! cannot outlive the guard.
//!
//! ```
//! use std::sync::Arc;
//! use rucache::sync::ConcurrentRecencyCache;
//! use rucache::policy::Lru;
//!
//! let cache = Arc::new(ConcurrentRecencyCache::<u64, String, Lru>::new(64));
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         std::thread::spawn(move || {
//!             cache.put(t, format!("thread-{t}"));
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert_eq!(cache.len(), 4);
//! ```

use std::hash::Hash;

use parking_lot::Mutex;

use crate::cache::RecencyCache;
use crate::policy::EvictionPolicy;

/// Thread-safe wrapper around [`RecencyCache`] using a `parking_lot::Mutex`.
pub struct ConcurrentRecencyCache<K, V, P> {
    inner: Mutex<RecencyCache<K, V, P>>,
}

impl<K, V, P> std::fmt::Debug for ConcurrentRecencyCache<K, V, P>
where
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentRecencyCache")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<K, V, P> ConcurrentRecencyCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy + Default,
{
    /// Creates a shared cache; capacity 0 is coerced to 1.
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(RecencyCache::new(capacity))
    }
}

impl<K, V, P> ConcurrentRecencyCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    /// Creates a shared cache with an explicit policy value.
    pub fn with_policy(capacity: usize, policy: P) -> Self {
        Self::from_cache(RecencyCache::with_policy(capacity, policy))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: RecencyCache<K, V, P>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> RecencyCache<K, V, P> {
        self.inner.into_inner()
    }

    /// Returns a clone of the value for `key`, bumping its recency.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.lock();
        cache.get(key).cloned()
    }

    /// Runs `f` on the value for `key`, bumping its recency.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let mut cache = self.inner.lock();
        cache.get(key).map(f)
    }

    /// Stores a pair and returns the displaced value, if any.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.inner.lock();
        cache.put(key, value)
    }

    /// Tries to store a pair without blocking.
    ///
    /// Returns `Err((key, value))` if the lock is held elsewhere.
    pub fn try_put(&self, key: K, value: V) -> Result<Option<V>, (K, V)> {
        match self.inner.try_lock() {
            Some(mut cache) => Ok(cache.put(key, value)),
            None => Err((key, value)),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.lock();
        cache.contains(key)
    }

    pub fn flush(&self) {
        let mut cache = self.inner.lock();
        cache.flush();
    }

    pub fn capacity(&self) -> usize {
        let cache = self.inner.lock();
        cache.capacity()
    }

    pub fn len(&self) -> usize {
        let cache = self.inner.lock();
        cache.len()
    }

    pub fn is_empty(&self) -> bool {
        let cache = self.inner.lock();
        cache.is_empty()
    }

    pub fn is_at_capacity(&self) -> bool {
        let cache = self.inner.lock();
        cache.is_at_capacity()
    }

    /// Runs `f` with the lock held, for compound operations that must not
    /// interleave with other callers.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut RecencyCache<K, V, P>) -> R) -> R {
        let mut cache = self.inner.lock();
        f(&mut cache)
    }
}
