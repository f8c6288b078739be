/// Registration errors raised synchronously by [`SacredRegistry`].
///
/// [`SacredRegistry`]: crate::SacredRegistry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtectError {
	/// A component declares full protection and role-wrapping allowance at
	/// once; full protection forbids role wrapping.
	#[error("component {id}: full protection forbids role wrapping")]
	IncompatibleProtection { id: Box<str> },
	/// A mount point declares no sacred components.
	#[error("mount point {id} declares no sacred components")]
	EmptyMountPoint { id: Box<str> },
	/// A component id is already registered (`DuplicatePolicy::Reject`).
	#[error("component {id} already registered")]
	DuplicateComponent { id: Box<str> },
	/// A mount point id is already registered (`DuplicatePolicy::Reject`).
	#[error("mount point {id} already registered")]
	DuplicateMountPoint { id: Box<str> },
}
