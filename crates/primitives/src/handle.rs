use serde::{Deserialize, Serialize};

/// Opaque reference to a host-framework renderable.
///
/// Registries store, compare, and return handles; they never invoke or
/// introspect the component behind one. The host resolves a handle back to
/// its renderable when it mounts the UI tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentHandle(Box<str>);

impl ComponentHandle {
	pub fn new(reference: impl Into<Box<str>>) -> Self {
		Self(reference.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ComponentHandle {
	fn from(reference: &str) -> Self {
		Self::new(reference)
	}
}

impl std::fmt::Display for ComponentHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
