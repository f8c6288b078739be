use serde::{Deserialize, Serialize};
use strata_primitives::ComponentHandle;

use crate::component::SacredComponent;

/// Mount-level protection switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountProtection {
	pub isolated: bool,
	pub preserve_context: bool,
	pub validate_mount: bool,
}

impl Default for MountProtection {
	fn default() -> Self {
		Self {
			isolated: false,
			preserve_context: true,
			validate_mount: true,
		}
	}
}

/// A named logical attachment point in the UI tree.
///
/// Every mount point owns at least one [`SacredComponent`]; the registry
/// rejects declarations with none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoint {
	pub id: Box<str>,
	/// Logical UI path, e.g. `root/drawer/settings`.
	pub path: Box<str>,
	pub component: ComponentHandle,
	pub sacred: Vec<SacredComponent>,
	pub protection: MountProtection,
}
