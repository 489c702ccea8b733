//! Runtime view dispatch for typed catalog objects.
//!
//! Objects in the portal carry an ordered list of type tags, most specific
//! first (for example `["AntibodyLot", "Item"]`). A [`ViewRegistry`] maps a
//! tag, within an optional namespace such as the edit view, to an arbitrary
//! handler value and resolves lookups by scanning the object's own tag order:
//! the first registered tag wins, and when nothing matches the lookup degrades
//! to the registry's fallback rather than failing.
//!
//! The registry is an explicit instance constructed once at program start and
//! handed to consumers; it performs no locking of its own. See
//! [`SharedViewRegistry`] for multi-threaded hosts.

mod registry;
mod shared;
mod tagged;

#[cfg(feature = "json")]
mod json;

pub use registry::{DEFAULT_NAMESPACE, ViewRegistry};
pub use shared::SharedViewRegistry;
pub use tagged::Tagged;
