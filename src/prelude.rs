pub use crate::builder::CacheBuilder;
pub use crate::cache::RecencyCache;
pub use crate::error::InvariantError;
pub use crate::policy::{EvictionPolicy, Lru, LruCache, Mru, MruCache, RecencyPolicy};
pub use crate::traits::CoreCache;

#[cfg(feature = "concurrency")]
pub use crate::sync::ConcurrentRecencyCache;
