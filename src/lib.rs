//! rucache: fixed-capacity recency caches over a shared eviction engine.
//!
//! [`RecencyCache`](cache::RecencyCache) keeps an index and an arena-backed
//! recency list in lockstep; an [`EvictionPolicy`](policy::EvictionPolicy)
//! names the entry to overwrite when the cache is full.
//!
//! ```
//! use rucache::prelude::*;
//!
//! let mut lru = LruCache::new(2);
//! lru.put("a", 1);
//! lru.put("b", 2);
//! lru.get(&"a");
//! lru.put("c", 3);
//! assert!(!lru.contains(&"b"));
//! ```

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

#[cfg(feature = "concurrency")]
pub mod sync;
