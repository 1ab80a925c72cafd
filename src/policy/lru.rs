//! LRU (Least Recently Used) victim selection.
//!
//! Evicts the entry that has gone longest without a `get` or `put`. That
//! entry sits at the tail of the recency list, so selection is O(1).
//!
//! ```text
//!   INSERT new item (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════
//!
//!   Before:
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!              MRU                LRU
//!
//!   put(D):
//!     1. victim = tail = [C]
//!     2. detach [C], overwrite it with D
//!     3. attach at head
//!
//!   After:
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!   ═══════════════════════════════════════════════════════════════
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use rucache::policy::LruCache;
//!
//! let mut cache = LruCache::new(3);
//! cache.put(1, "one");
//! cache.put(2, "two");
//! cache.put(3, "three");
//!
//! cache.get(&1);
//! cache.put(4, "four");
//!
//! // 2 was the least recently used
//! assert!(!cache.contains(&2));
//! assert!(cache.contains(&1));
//! ```

use crate::cache::RecencyCache;
use crate::ds::{RecencyList, SlotId};
use crate::policy::EvictionPolicy;

/// Selects the tail of the recency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lru;

impl EvictionPolicy for Lru {
    #[inline]
    fn select_victim<K, V>(&self, list: &RecencyList<K, V>) -> Option<SlotId> {
        list.back_id()
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}

/// Recency cache that evicts the least recently used entry.
pub type LruCache<K, V> = RecencyCache<K, V, Lru>;
