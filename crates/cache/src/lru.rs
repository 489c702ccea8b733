use std::hash::Hash;

use rustc_hash::FxHashMap as HashMap;
use slab::Slab;

use crate::CacheError;

/// Capacity used by [`LruCache::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// One cached entry plus its recency links.
///
/// `prev` points toward the head (more recently used), `next` toward the tail.
#[derive(Debug)]
struct Slot<K, V> {
	key: K,
	value: V,
	prev: Option<usize>,
	next: Option<usize>,
}

/// Fixed-capacity key/value cache with least-recently-used eviction.
///
/// Entries live in a [`Slab`] arena whose indices stay stable for the life of
/// the entry; the recency list is threaded through the slots as index links,
/// with a side map from key to slot for O(1) lookup. Head is the most recently
/// touched entry, tail the least.
///
/// Invariants:
/// - `len() <= capacity()` at all times; a write into a full cache evicts
///   exactly one entry.
/// - Every key in the index maps to exactly one live slot and vice versa.
#[derive(Debug)]
pub struct LruCache<K, V> {
	slots: Slab<Slot<K, V>>,
	index: HashMap<K, usize>,
	head: Option<usize>,
	tail: Option<usize>,
	capacity: usize,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
	/// Creates a cache holding up to [`DEFAULT_CAPACITY`] entries.
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Creates a cache holding up to `capacity` entries.
	///
	/// # Panics
	///
	/// Panics if `capacity` is zero.
	pub fn with_capacity(capacity: usize) -> Self {
		assert!(capacity > 0, "cache capacity must be positive");
		Self {
			slots: Slab::with_capacity(capacity),
			index: HashMap::default(),
			head: None,
			tail: None,
			capacity,
		}
	}

	/// Inserts `value` under `key` as the most-recently-used entry.
	///
	/// If the cache is full, the least-recently-used entry is evicted first,
	/// so the size never exceeds the capacity. Writing a key that is already
	/// present returns [`CacheError::DuplicateKey`] and leaves the cache
	/// untouched; use [`remove`](Self::remove) first to replace a value.
	pub fn write(&mut self, key: K, value: V) -> Result<(), CacheError> {
		if self.index.contains_key(&key) {
			return Err(CacheError::DuplicateKey);
		}
		if self.slots.len() == self.capacity {
			self.evict_tail();
		}
		let idx = self.slots.insert(Slot {
			key: key.clone(),
			value,
			prev: None,
			next: None,
		});
		self.attach_front(idx);
		self.index.insert(key, idx);
		Ok(())
	}

	/// Returns the value for `key` and promotes the entry to most-recently-used.
	///
	/// An absent key is a normal miss, not an error. Note that a hit mutates
	/// recency order; use [`peek`](Self::peek) to read without promoting.
	pub fn read(&mut self, key: &K) -> Option<&V> {
		let idx = *self.index.get(key)?;
		if self.head != Some(idx) {
			self.detach(idx);
			self.attach_front(idx);
		}
		Some(&self.slots[idx].value)
	}

	/// Returns the value for `key` without touching recency order.
	pub fn peek(&self, key: &K) -> Option<&V> {
		let idx = *self.index.get(key)?;
		Some(&self.slots[idx].value)
	}

	/// Removes the entry for `key`, returning its value.
	///
	/// Removing an absent key is a no-op returning `None`.
	pub fn remove(&mut self, key: &K) -> Option<V> {
		let idx = self.index.remove(key)?;
		self.detach(idx);
		Some(self.slots.remove(idx).value)
	}

	/// Drops every entry, keeping the configured capacity.
	pub fn clear(&mut self) {
		self.slots.clear();
		self.index.clear();
		self.head = None;
		self.tail = None;
	}

	/// Number of cached entries.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns true if no entries are cached.
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Maximum number of entries, fixed at construction.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Iterates entries from most to least recently used.
	///
	/// Iteration does not promote; `iter().enumerate()` yields each entry with
	/// its recency ordinal for diagnostics.
	pub fn iter(&self) -> Iter<'_, K, V> {
		Iter {
			cache: self,
			cursor: self.head,
		}
	}

	fn evict_tail(&mut self) {
		let Some(idx) = self.tail else { return };
		self.detach(idx);
		let slot = self.slots.remove(idx);
		self.index.remove(&slot.key);
		tracing::trace!(len = self.slots.len(), "evicted least-recently-used entry");
	}

	/// Unlinks the slot at `idx` from the recency list, fixing its neighbors.
	fn detach(&mut self, idx: usize) {
		let slot = &mut self.slots[idx];
		let (prev, next) = (slot.prev.take(), slot.next.take());
		match prev {
			Some(p) => self.slots[p].next = next,
			None => self.head = next,
		}
		match next {
			Some(n) => self.slots[n].prev = prev,
			None => self.tail = prev,
		}
	}

	/// Links the detached slot at `idx` in as the new head.
	fn attach_front(&mut self, idx: usize) {
		self.slots[idx].next = self.head;
		if let Some(old_head) = self.head {
			self.slots[old_head].prev = Some(idx);
		}
		self.head = Some(idx);
		if self.tail.is_none() {
			self.tail = Some(idx);
		}
	}
}

impl<K: Eq + Hash + Clone, V> Default for LruCache<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

/// Head-to-tail iterator over cache entries.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
	cache: &'a LruCache<K, V>,
	cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
	type Item = (&'a K, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		let idx = self.cursor?;
		let slot = &self.cache.slots[idx];
		self.cursor = slot.next;
		Some((&slot.key, &slot.value))
	}
}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a LruCache<K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
