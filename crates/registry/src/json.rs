use serde_json::Value;

use crate::Tagged;

/// Conventional member holding a catalog object's ordered type tags.
const TYPE_MEMBER: &str = "@type";

/// Raw catalog objects expose their tags through the `@type` array.
///
/// A missing member, a non-array member, or non-string elements contribute no
/// tags, so malformed objects dispatch to the fallback rather than erroring.
impl Tagged for Value {
	fn type_tags(&self) -> impl Iterator<Item = &str> {
		self.get(TYPE_MEMBER)
			.and_then(Value::as_array)
			.into_iter()
			.flatten()
			.filter_map(Value::as_str)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::ViewRegistry;

	#[test]
	fn test_json_object_dispatches_on_type_member() {
		let mut registry = ViewRegistry::new();
		registry.register("AntibodyLot", "antibody-view");
		registry.register("Item", "item-view");

		let lot = json!({"@type": ["AntibodyLot", "Item"], "accession": "ENCAB000ABC"});
		assert_eq!(registry.lookup(&lot), Some(&"antibody-view"));

		let other = json!({"@type": ["Document", "Item"]});
		assert_eq!(registry.lookup(&other), Some(&"item-view"));
	}

	#[test]
	fn test_malformed_objects_resolve_to_fallback() {
		let mut registry = ViewRegistry::with_fallback("fallback-view");
		registry.register("Item", "item-view");

		// No @type member at all.
		let bare = json!({"accession": "ENCSR000AAA"});
		assert_eq!(registry.lookup(&bare), Some(&"fallback-view"));

		// @type present but not an array.
		let scalar = json!({"@type": "Item"});
		assert_eq!(registry.lookup(&scalar), Some(&"fallback-view"));

		// Non-string elements are skipped, string ones still dispatch.
		let mixed = json!({"@type": [42, "Item"]});
		assert_eq!(registry.lookup(&mixed), Some(&"item-view"));
	}
}
