use std::sync::Arc;

use parking_lot::RwLock;

use crate::ViewRegistry;

/// Thread-safe handle to a registry.
///
/// The registry itself is unsynchronized; hosts with more than one logical
/// thread share it behind a lock instead.
pub type SharedViewRegistry<H> = Arc<RwLock<ViewRegistry<H>>>;

impl<H> ViewRegistry<H> {
	/// Moves the registry behind a lock for shared use.
	pub fn into_shared(self) -> SharedViewRegistry<H> {
		Arc::new(RwLock::new(self))
	}
}
