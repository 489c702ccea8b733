/// Accessor for the ordered type tags an object satisfies.
///
/// Tags are yielded in dispatch order, most specific first; dispatch scans
/// them in this order and stops at the first registered tag. An object that
/// yields no tags always takes the fallback path.
pub trait Tagged {
	/// The object's type tags, most specific first.
	fn type_tags(&self) -> impl Iterator<Item = &str>;
}

impl<S: AsRef<str>> Tagged for [S] {
	fn type_tags(&self) -> impl Iterator<Item = &str> {
		self.iter().map(AsRef::as_ref)
	}
}

impl<S: AsRef<str>, const N: usize> Tagged for [S; N] {
	fn type_tags(&self) -> impl Iterator<Item = &str> {
		self.as_slice().type_tags()
	}
}

impl<S: AsRef<str>> Tagged for Vec<S> {
	fn type_tags(&self) -> impl Iterator<Item = &str> {
		self.as_slice().type_tags()
	}
}

impl<T: Tagged + ?Sized> Tagged for &T {
	fn type_tags(&self) -> impl Iterator<Item = &str> {
		(**self).type_tags()
	}
}
