//! Victim selection for [`RecencyCache`](crate::cache::RecencyCache).
//!
//! A policy sees the recency list and names the entry to overwrite when a new
//! key arrives at a full cache. It never mutates anything; the engine does the
//! detach, overwrite and re-splice itself.
//!
//! ```text
//!   head ──► [D] ◄──► [C] ◄──► [B] ◄──► [A] ◄── tail
//!            ▲                                 ▲
//!            Mru::select_victim                Lru::select_victim
//! ```
//!
//! | Policy            | Victim | Dispatch                      |
//! |-------------------|--------|-------------------------------|
//! | [`Lru`]           | tail   | static (type parameter)       |
//! | [`Mru`]           | head   | static (type parameter)       |
//! | [`RecencyPolicy`] | either | `match` on a runtime value    |
//!
//! Policies that need more than the two list ends (e.g. uniform random over
//! every entry) would need an extra index or an O(n) walk and are not offered.

pub mod lru;
pub mod mru;

pub use lru::{Lru, LruCache};
pub use mru::{Mru, MruCache};

use crate::ds::{RecencyList, SlotId};

/// Picks the entry to evict from a full cache.
///
/// Implementations must be O(1) and side-effect free. Returning `None` is
/// only valid for an empty list.
pub trait EvictionPolicy {
    /// Returns the handle of the entry to evict.
    fn select_victim<K, V>(&self, list: &RecencyList<K, V>) -> Option<SlotId>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// Runtime-selected recency policy.
///
/// Lets callers choose LRU or MRU from configuration while keeping a single
/// concrete cache type.
///
/// # Example
///
/// ```
/// use rucache::cache::RecencyCache;
/// use rucache::policy::RecencyPolicy;
///
/// let mut cache = RecencyCache::with_policy(2, RecencyPolicy::Mru);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.put("c", 3), Some(2));
/// assert!(!cache.contains(&"b"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecencyPolicy {
    /// Evict the least recently used entry.
    #[default]
    Lru,
    /// Evict the most recently used entry.
    Mru,
}

impl EvictionPolicy for RecencyPolicy {
    #[inline]
    fn select_victim<K, V>(&self, list: &RecencyList<K, V>) -> Option<SlotId> {
        match self {
            RecencyPolicy::Lru => Lru.select_victim(list),
            RecencyPolicy::Mru => Mru.select_victim(list),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RecencyPolicy::Lru => Lru.name(),
            RecencyPolicy::Mru => Mru.name(),
        }
    }
}

impl std::fmt::Display for RecencyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
