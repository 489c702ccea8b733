use thiserror::Error;

/// Precondition violations surfaced by the cache.
///
/// A miss on [`read`](crate::LruCache::read) or [`remove`](crate::LruCache::remove)
/// is a normal outcome, not an error; only operations that would corrupt the
/// key-to-slot mapping are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
	/// The key is already present; a second slot for it would orphan the first.
	#[error("key is already present in the cache")]
	DuplicateKey,
}
