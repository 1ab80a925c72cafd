//! Capacity-bounded recency cache with a pluggable victim policy.
//!
//! [`RecencyCache`] owns two structures that must agree after every call:
//! an index from key to list handle, and a [`RecencyList`] holding the
//! entries in recency order. The policy only decides *which* entry goes; the
//! cache does the splicing.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      RecencyCache<K, V, P>                           │
//!   │                                                                      │
//!   │   index: FxHashMap<K, SlotId>          list: RecencyList<K, V>       │
//!   │   ┌─────────┬────────┐                                               │
//!   │   │ "page1" │ id_0   │─────────┐                                     │
//!   │   │ "page2" │ id_1   │──────┐  │                                     │
//!   │   │ "page3" │ id_2   │──┐   │  │                                     │
//!   │   └─────────┴────────┘  ▼   ▼  ▼                                     │
//!   │                 head ─► [id_2] ◄─► [id_1] ◄─► [id_0] ◄─ tail          │
//!   │                                                                      │
//!   │   capacity: usize (>= 1)          policy: P: EvictionPolicy           │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Put Flow
//!
//! ```text
//!   put(key, value):
//!     key in index          → detach, swap value, attach at head   (update)
//!     len == capacity       → victim = policy.select_victim(list)
//!                             detach victim, overwrite key + value,
//!                             attach at head, re-key the index       (reuse)
//!     otherwise             → allocate entry at head, index it       (insert)
//! ```
//!
//! Eviction never frees and reallocates: the victim's slot is overwritten in
//! place and keeps its [`SlotId`]. Once a cache has filled up, the arena
//! stops growing.
//!
//! ## Operations
//!
//! | Operation          | Time | Notes                                    |
//! |--------------------|------|------------------------------------------|
//! | `get`              | O(1) | Moves the entry to the head              |
//! | `peek`             | O(1) | No recency change                        |
//! | `put`              | O(1) | Update, reuse-evict, or insert           |
//! | `contains`         | O(1) | Index lookup only                        |
//! | `flush`            | O(n) | Drops every entry; capacity unchanged    |
//! | `check_invariants` | O(n) | Full index/list walk                     |
//!
//! ## Thread Safety
//!
//! Not thread-safe. Wrap it in a lock held for each call, or enable the
//! `concurrency` feature and use `ConcurrentRecencyCache`.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{RecencyList, SlotId};
use crate::error::InvariantError;
use crate::policy::{EvictionPolicy, Lru};
use crate::traits::CoreCache;

/// Fixed-capacity key-value cache whose victim is chosen by `P`.
///
/// Use the [`LruCache`](crate::policy::LruCache) and
/// [`MruCache`](crate::policy::MruCache) aliases for a statically chosen
/// policy, or [`RecencyPolicy`](crate::policy::RecencyPolicy) to pick one at
/// runtime.
///
/// # Example
///
/// ```
/// use rucache::policy::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
///
/// // "b" is now least recently used
/// assert_eq!(cache.put("c", 3), Some(2));
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// ```
pub struct RecencyCache<K, V, P = Lru> {
    index: FxHashMap<K, SlotId>,
    list: RecencyList<K, V>,
    capacity: usize,
    policy: P,
}

impl<K, V, P> RecencyCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy + Default,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 is coerced to 1.
    ///
    /// ```
    /// use rucache::policy::MruCache;
    ///
    /// let cache: MruCache<u32, u32> = MruCache::new(0);
    /// assert_eq!(cache.capacity(), 1);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, P::default())
    }
}

impl<K, V, P> RecencyCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    /// Creates a cache with an explicit policy value.
    ///
    /// Storage for up to [`MAX_PREALLOC`] entries is reserved up front; larger
    /// caches grow on demand up to `capacity`.
    pub fn with_policy(capacity: usize, policy: P) -> Self {
        let capacity = coerce_capacity(capacity);
        let reserve = capacity.min(MAX_PREALLOC);
        Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            list: RecencyList::with_capacity(reserve),
            capacity,
            policy,
        }
    }

    /// Like [`with_policy`](Self::with_policy) but without reserving storage.
    pub(crate) fn with_policy_lazy(capacity: usize, policy: P) -> Self {
        Self {
            index: FxHashMap::default(),
            list: RecencyList::new(),
            capacity: coerce_capacity(capacity),
            policy,
        }
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss has no side effect.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.move_to_front(id);
        self.list.value(id)
    }

    /// Returns the value for `key` without touching recency order.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.value(id)
    }

    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// Returns the displaced value: the old value when `key` was already
    /// present, or the evicted entry's value when the cache was full. The
    /// two cases are not distinguished.
    ///
    /// ```
    /// use rucache::policy::LruCache;
    ///
    /// let mut cache = LruCache::new(1);
    /// assert_eq!(cache.put("a", 1), None);
    /// assert_eq!(cache.put("a", 2), Some(1)); // update
    /// assert_eq!(cache.put("b", 3), Some(2)); // eviction of "a"
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            self.list.detach(id);
            let old = self.list.replace_value(id, value);
            self.list.attach_front(id);
            return Some(old);
        }

        if self.is_at_capacity() {
            return Some(self.evict_into(key, value));
        }

        let id = self.list.push_front(key.clone(), value);
        self.index.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        None
    }

    /// Overwrites the policy's victim with `key`/`value` and returns the
    /// victim's value.
    fn evict_into(&mut self, key: K, value: V) -> V {
        let victim = match self.policy.select_victim(&self.list) {
            Some(id) => id,
            None => panic!(
                "{} policy returned no victim for a full cache of {} entries",
                self.policy.name(),
                self.list.len()
            ),
        };

        self.list.detach(victim);
        let (old_key, old_value) = self.list.replace(victim, key.clone(), value);
        self.list.attach_front(victim);

        self.index.remove(&old_key);
        self.index.insert(key, victim);

        trace!(
            policy = self.policy.name(),
            slot = victim.index(),
            "reused evicted entry"
        );

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();
        old_value
    }

    /// Returns `true` if `key` is stored. Recency order is not changed.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Removes every entry. Capacity and policy are kept.
    pub fn flush(&mut self) {
        let dropped = self.index.len();
        self.index.clear();
        self.list.clear();
        debug!(dropped, capacity = self.capacity, "flushed cache");
    }

    /// Returns the key and value the policy would evict next.
    pub fn peek_victim(&self) -> Option<(&K, &V)> {
        let id = self.policy.select_victim(&self.list)?;
        self.list.entry(id)
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> crate::ds::recency_list::Iter<'_, K, V> {
        self.list.iter()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn is_at_capacity(&self) -> bool {
        self.index.len() == self.capacity
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Checks that the index and the recency list describe the same entries.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] naming the first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "index holds {} entries, capacity is {}",
                self.index.len(),
                self.capacity
            )));
        }
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index size {} != list length {}",
                self.index.len(),
                self.list.len()
            )));
        }

        let linked = self.list.check_links()?;
        if linked != self.index.len() {
            return Err(InvariantError::new(format!(
                "{} linked entries, index holds {}",
                linked,
                self.index.len()
            )));
        }

        for id in self.list.iter_ids() {
            let key = self
                .list
                .key(id)
                .ok_or_else(|| InvariantError::new(format!("list yields stale {id:?}")))?;
            match self.index.get(key) {
                Some(&mapped) if mapped == id => {},
                Some(&mapped) => {
                    return Err(InvariantError::new(format!(
                        "entry {id:?} is indexed under {mapped:?}"
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "entry {id:?} has no index mapping"
                    )));
                },
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate_invariants(&self) {
        debug_assert_eq!(self.index.len(), self.list.len());
        debug_assert!(self.index.len() <= self.capacity);
    }

    // Arena slots in use; only `push_front` allocates one.
    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.list.len()
    }

    #[cfg(test)]
    fn handle_of(&self, key: &K) -> Option<SlotId> {
        self.index.get(key).copied()
    }
}

/// Upper bound on the entries reserved at construction.
pub const MAX_PREALLOC: usize = 1 << 16;

fn coerce_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        debug!("capacity 0 requested, using 1");
        1
    } else {
        capacity
    }
}

impl<K, V, P> fmt::Debug for RecencyCache<K, V, P>
where
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyCache")
            .field("policy", &self.policy.name())
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .finish_non_exhaustive()
    }
}

impl<K, V, P> CoreCache<K, V> for RecencyCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        RecencyCache::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        RecencyCache::put(self, key, value)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        RecencyCache::contains(self, key)
    }

    fn flush(&mut self) {
        RecencyCache::flush(self);
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }
}

impl<'a, K, V, P> IntoIterator for &'a RecencyCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    type Item = (&'a K, &'a V);
    type IntoIter = crate::ds::recency_list::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
