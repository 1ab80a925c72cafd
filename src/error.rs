//! Error types for rucache.
//!
//! Cache operations themselves never fail: misses are `None`, a zero
//! capacity is coerced to one, and flushing an empty cache is a no-op. The
//! only error value in the crate reports a broken internal invariant.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned by
//!   [`RecencyCache::check_invariants`](crate::cache::RecencyCache::check_invariants)
//!   when the index and the recency list disagree.
//!
//! ## Example Usage
//!
//! ```
//! use rucache::policy::LruCache;
//!
//! let mut cache = LruCache::new(4);
//! cache.put(1, "one");
//! cache.put(2, "two");
//! assert!(cache.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
