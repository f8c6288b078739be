use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::component::{ProtectionLevel, SacredComponent};
use crate::error::ProtectError;
use crate::mount::MountPoint;

/// Resolution for a second registration under an id already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// The newest declaration replaces the stored one.
	#[default]
	LastWins,
	/// Re-registration is an error.
	Reject,
}

/// Result of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
	/// Id was new; declaration inserted.
	Inserted,
	/// Id existed; declaration replaced under `LastWins`.
	Replaced,
}

/// Host-supplied prop validation seam.
pub trait PropValidator: Send + Sync {
	/// Checks a component's current props against its declaration.
	fn validate(&self, component: &SacredComponent, props: &serde_json::Value) -> bool;
}

/// Default prop validation: accepts everything.
///
/// No structural prop diffing happens here, even when `preserve_props` is
/// set; hosts that need real diffing supply their own [`PropValidator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllProps;

impl PropValidator for AcceptAllProps {
	fn validate(&self, _component: &SacredComponent, _props: &serde_json::Value) -> bool {
		true
	}
}

/// Registry of sacred components and the mount points that own them.
///
/// Enforces the protection-level invariants at registration time;
/// afterwards answers the queries role-wrapping tooling consults before
/// touching a component. Lookups never error on absence.
pub struct SacredRegistry {
	policy: DuplicatePolicy,
	props: Box<dyn PropValidator>,
	state: RwLock<SacredState>,
}

#[derive(Default)]
struct SacredState {
	components: FxHashMap<Box<str>, SacredComponent>,
	mounts: FxHashMap<Box<str>, MountPoint>,
}

impl Default for SacredRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl SacredRegistry {
	/// Creates a registry with the default `LastWins` duplicate policy and
	/// accept-all prop validation.
	pub fn new() -> Self {
		Self::with_policy(DuplicatePolicy::default())
	}

	/// Creates a registry with an explicit duplicate policy.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			policy,
			props: Box::new(AcceptAllProps),
			state: RwLock::new(SacredState::default()),
		}
	}

	/// Creates a registry with a host-supplied prop validation strategy.
	pub fn with_prop_validator(policy: DuplicatePolicy, props: impl PropValidator + 'static) -> Self {
		Self {
			policy,
			props: Box::new(props),
			state: RwLock::new(SacredState::default()),
		}
	}

	/// Registers a sacred component.
	///
	/// Rejects declarations combining full protection with role-wrapping
	/// allowance. Duplicate ids resolve per the registry's
	/// [`DuplicatePolicy`].
	pub fn register(&self, component: SacredComponent) -> Result<InsertOutcome, ProtectError> {
		if !component.protection_compatible() {
			tracing::warn!(
				id = %component.id,
				protection = %component.protection,
				"sacred component rejected: full protection forbids role wrapping"
			);
			return Err(ProtectError::IncompatibleProtection { id: component.id });
		}

		let mut state = self.state.write();
		let existed = state.components.contains_key(&component.id);
		if existed && self.policy == DuplicatePolicy::Reject {
			return Err(ProtectError::DuplicateComponent { id: component.id });
		}

		tracing::debug!(
			id = %component.id,
			protection = %component.protection,
			mount_point = %component.mount_point,
			environment = %component.environment,
			replaced = existed,
			"sacred component registered"
		);
		state.components.insert(component.id.clone(), component);
		Ok(if existed { InsertOutcome::Replaced } else { InsertOutcome::Inserted })
	}

	/// Removes a component registration. Absent ids are a no-op.
	pub fn unregister(&self, id: &str) -> bool {
		let removed = self.state.write().components.remove(id).is_some();
		if removed {
			tracing::debug!(id, "sacred component unregistered");
		}
		removed
	}

	/// Registers a mount point.
	///
	/// Every mount point must own at least one sacred component.
	/// Duplicate ids resolve per the registry's [`DuplicatePolicy`].
	pub fn create_mount_point(&self, mount: MountPoint) -> Result<InsertOutcome, ProtectError> {
		if mount.sacred.is_empty() {
			tracing::warn!(id = %mount.id, "mount point rejected: no sacred components");
			return Err(ProtectError::EmptyMountPoint { id: mount.id });
		}

		let mut state = self.state.write();
		let existed = state.mounts.contains_key(&mount.id);
		if existed && self.policy == DuplicatePolicy::Reject {
			return Err(ProtectError::DuplicateMountPoint { id: mount.id });
		}

		tracing::debug!(
			id = %mount.id,
			path = %mount.path,
			sacred = mount.sacred.len(),
			replaced = existed,
			"mount point registered"
		);
		state.mounts.insert(mount.id.clone(), mount);
		Ok(if existed { InsertOutcome::Replaced } else { InsertOutcome::Inserted })
	}

	/// Looks up a component by id.
	pub fn component(&self, id: &str) -> Option<SacredComponent> {
		self.state.read().components.get(id).cloned()
	}

	/// Looks up a mount point by id.
	pub fn mount_point(&self, id: &str) -> Option<MountPoint> {
		self.state.read().mounts.get(id).cloned()
	}

	/// Validates a component's current props through the configured
	/// [`PropValidator`]. Unknown ids are `false`.
	pub fn validate_component(&self, id: &str, props: &serde_json::Value) -> bool {
		let state = self.state.read();
		let Some(component) = state.components.get(id) else {
			return false;
		};
		self.props.validate(component, props)
	}

	/// `true` exactly for components registered with full protection.
	pub fn is_protected(&self, id: &str) -> bool {
		self.state
			.read()
			.components
			.get(id)
			.is_some_and(|component| component.protection == ProtectionLevel::Full)
	}

	/// Whether role-wrapping tooling may wrap the component. Unknown ids
	/// are `false`.
	pub fn can_wrap_with_role(&self, id: &str) -> bool {
		self.state
			.read()
			.components
			.get(id)
			.is_some_and(|component| component.rules.allow_role_wrapping)
	}

	/// Snapshot of every registered component.
	pub fn components(&self) -> Vec<SacredComponent> {
		self.state.read().components.values().cloned().collect()
	}

	/// Snapshot of every registered mount point.
	pub fn mount_points(&self) -> Vec<MountPoint> {
		self.state.read().mounts.values().cloned().collect()
	}
}
