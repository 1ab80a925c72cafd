//! MRU (Most Recently Used) victim selection.
//!
//! Evicts the entry touched last, the head of the recency list. The opposite
//! of LRU, and only a good fit for cyclic or sequential access where the
//! newest item is the least likely to be read again soon.
//!
//! ```text
//!   head (EVICT FROM HERE)                  tail (keep)
//!     ▼                                       ▼
//!    [C] ◄──► [B] ◄──► [A]
//!   newest    middle   oldest
//!
//!   • New items enter at head
//!   • Accessed items move to head
//!   • Eviction takes the head: the newest item
//! ```
//!
//! ## When to Use
//!
//! **Use MRU when:**
//! - Access patterns are cyclic and predictable
//! - Recently accessed items are unlikely to be accessed again soon
//!
//! **Avoid MRU when:**
//! - General-purpose caching (use LRU instead)
//! - Temporal locality matters
//!
//! ## Example Usage
//!
//! ```
//! use rucache::policy::MruCache;
//!
//! let mut cache = MruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! // "b" was touched last, so it goes
//! assert_eq!(cache.put("c", 3), Some(2));
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```

use crate::cache::RecencyCache;
use crate::ds::{RecencyList, SlotId};
use crate::policy::EvictionPolicy;

/// Selects the head of the recency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mru;

impl EvictionPolicy for Mru {
    #[inline]
    fn select_victim<K, V>(&self, list: &RecencyList<K, V>) -> Option<SlotId> {
        list.front_id()
    }

    fn name(&self) -> &'static str {
        "mru"
    }
}

/// Recency cache that evicts the most recently used entry.
pub type MruCache<K, V> = RecencyCache<K, V, Mru>;
