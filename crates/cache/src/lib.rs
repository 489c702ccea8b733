//! Bounded least-recently-used caching for catalog objects.
//!
//! [`LruCache`] keeps at most `capacity` entries, evicting the entry that has
//! gone the longest without being read or written when a write would exceed
//! that bound. Recency order lives in intrusive links between slots of a
//! stable-index arena rather than in heap-allocated list nodes, so every
//! operation is a couple of index updates.
//!
//! The cache is synchronous and unsynchronized. Hosts with more than one
//! logical thread wrap it in a lock.

mod error;
mod lru;

pub use error::CacheError;
pub use lru::{DEFAULT_CAPACITY, Iter, LruCache};
