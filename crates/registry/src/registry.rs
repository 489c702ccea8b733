use rustc_hash::FxHashMap as HashMap;

use crate::Tagged;

/// Namespace used when a lookup or registration names none.
pub const DEFAULT_NAMESPACE: &str = "";

/// Dispatch table from type tags to handlers.
///
/// The registry is agnostic to the handler's shape; `H` is typically a render
/// function or component constructor. Namespaces partition the table into
/// independent sub-tables (default view, edit view, ...) selected by a name
/// string, with [`DEFAULT_NAMESPACE`] naming the unqualified one.
///
/// Within one namespace at most one handler is registered per exact tag; a
/// repeat registration silently displaces the previous handler. Lookups never
/// fail: an unknown namespace or an object with no matching tag resolves to
/// the fallback, which is `None` unless one was installed.
#[derive(Debug)]
pub struct ViewRegistry<H> {
	namespaces: HashMap<Box<str>, HashMap<Box<str>, H>>,
	fallback: Option<H>,
}

impl<H> ViewRegistry<H> {
	/// Creates an empty registry with no fallback.
	pub fn new() -> Self {
		Self {
			namespaces: HashMap::default(),
			fallback: None,
		}
	}

	/// Creates an empty registry that resolves unmatched lookups to `fallback`.
	pub fn with_fallback(fallback: H) -> Self {
		Self {
			namespaces: HashMap::default(),
			fallback: Some(fallback),
		}
	}

	/// Installs or replaces the fallback handler.
	pub fn set_fallback(&mut self, fallback: H) {
		self.fallback = Some(fallback);
	}

	/// The handler unmatched lookups resolve to.
	pub fn fallback(&self) -> Option<&H> {
		self.fallback.as_ref()
	}

	/// Registers `handler` for `tag` in the default namespace.
	pub fn register(&mut self, tag: &str, handler: H) -> Option<H> {
		self.register_in(DEFAULT_NAMESPACE, tag, handler)
	}

	/// Registers `handler` under `(namespace, tag)`.
	///
	/// Returns the displaced handler when the tag was already registered in
	/// that namespace. Never fails.
	pub fn register_in(&mut self, namespace: &str, tag: &str, handler: H) -> Option<H> {
		let table = self.namespaces.entry(namespace.into()).or_default();
		let displaced = table.insert(tag.into(), handler);
		if displaced.is_some() {
			tracing::debug!(namespace, tag, "replacing registered handler");
		}
		displaced
	}

	/// Removes the `tag` entry from the default namespace.
	pub fn unregister(&mut self, tag: &str) -> Option<H> {
		self.unregister_in(DEFAULT_NAMESPACE, tag)
	}

	/// Removes the `(namespace, tag)` entry, returning it if present.
	///
	/// Unregistering an absent tag or namespace is a no-op.
	pub fn unregister_in(&mut self, namespace: &str, tag: &str) -> Option<H> {
		self.namespaces.get_mut(namespace)?.remove(tag)
	}

	/// Resolves the handler for `obj` in the default namespace.
	pub fn lookup<T: Tagged + ?Sized>(&self, obj: &T) -> Option<&H> {
		self.lookup_in(DEFAULT_NAMESPACE, obj)
	}

	/// Resolves the handler for `obj` in `namespace`.
	///
	/// Scans the object's tags in its own order, most specific first, and
	/// returns the first registered handler. When the namespace is unknown or
	/// no tag matches, resolves to the fallback.
	pub fn lookup_in<T: Tagged + ?Sized>(&self, namespace: &str, obj: &T) -> Option<&H> {
		if let Some(table) = self.namespaces.get(namespace) {
			for tag in obj.type_tags() {
				if let Some(handler) = table.get(tag) {
					return Some(handler);
				}
			}
		}
		tracing::trace!(namespace, "no handler matched, resolving to fallback");
		self.fallback.as_ref()
	}

	/// Exact-tag accessor: no tag scan, no fallback.
	pub fn get(&self, namespace: &str, tag: &str) -> Option<&H> {
		self.namespaces.get(namespace)?.get(tag)
	}

	/// Returns true if `(namespace, tag)` has a registered handler.
	pub fn contains(&self, namespace: &str, tag: &str) -> bool {
		self.get(namespace, tag).is_some()
	}

	/// The full tag-to-handler table of one namespace, for introspection.
	///
	/// An unknown namespace yields an empty iterator.
	pub fn entries(&self, namespace: &str) -> impl Iterator<Item = (&str, &H)> {
		self.namespaces
			.get(namespace)
			.into_iter()
			.flat_map(|table| table.iter().map(|(tag, handler)| (tag.as_ref(), handler)))
	}

	/// Number of registered handlers in `namespace`.
	pub fn len(&self, namespace: &str) -> usize {
		self.namespaces.get(namespace).map_or(0, |table| table.len())
	}

	/// Returns true if no handler is registered in any namespace.
	pub fn is_empty(&self) -> bool {
		self.namespaces.values().all(|table| table.is_empty())
	}
}

impl<H> Default for ViewRegistry<H> {
	fn default() -> Self {
		Self::new()
	}
}
