//! Builder for recency caches.
//!
//! Collects capacity, policy and allocation settings, then produces a
//! [`RecencyCache`] whose policy is chosen at runtime through
//! [`RecencyPolicy`], or one with a static policy via
//! [`build_with`](CacheBuilder::build_with).
//!
//! ## Example
//!
//! ```rust
//! use rucache::builder::CacheBuilder;
//! use rucache::policy::RecencyPolicy;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .policy(RecencyPolicy::Mru)
//!     .build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::cache::RecencyCache;
use crate::policy::{EvictionPolicy, RecencyPolicy};

/// Builder for creating cache instances.
///
/// | Setting    | Default | Description                                 |
/// |------------|---------|---------------------------------------------|
/// | `capacity` | -       | Maximum entries; 0 is coerced to 1          |
/// | `policy`   | `Lru`   | Victim selection for `build`                |
/// | `prealloc` | `true`  | Reserve index and arena storage up front    |
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
    policy: RecencyPolicy,
    prealloc: bool,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: RecencyPolicy::default(),
            prealloc: true,
        }
    }

    /// Sets the policy used by [`build`](Self::build).
    pub fn policy(mut self, policy: RecencyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Controls whether storage for `capacity` entries is reserved at build
    /// time. Turn it off for large, sparsely filled caches.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.prealloc = prealloc;
        self
    }

    /// Build a cache with the configured runtime policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rucache::builder::CacheBuilder;
    /// use rucache::policy::RecencyPolicy;
    ///
    /// let cache = CacheBuilder::new(0).build::<u64, String>();
    /// assert_eq!(cache.capacity(), 1);
    /// assert_eq!(*cache.policy(), RecencyPolicy::Lru);
    /// ```
    pub fn build<K, V>(self) -> RecencyCache<K, V, RecencyPolicy>
    where
        K: Eq + Hash + Clone,
    {
        let policy = self.policy;
        self.build_with(policy)
    }

    /// Build a cache with a statically chosen policy value.
    ///
    /// ```rust
    /// use rucache::builder::CacheBuilder;
    /// use rucache::policy::Mru;
    ///
    /// let mut cache = CacheBuilder::new(2).prealloc(false).build_with(Mru);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    /// assert!(!cache.contains(&"b"));
    /// ```
    pub fn build_with<K, V, P>(self, policy: P) -> RecencyCache<K, V, P>
    where
        K: Eq + Hash + Clone,
        P: EvictionPolicy,
    {
        if self.prealloc {
            RecencyCache::with_policy(self.capacity, policy)
        } else {
            RecencyCache::with_policy_lazy(self.capacity, policy)
        }
    }
}
