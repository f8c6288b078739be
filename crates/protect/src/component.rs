use serde::{Deserialize, Serialize};
use strata_primitives::{ComponentHandle, EnvScope};

/// How strongly tooling must keep its hands off a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionLevel {
	/// The component must not be altered or wrapped at all.
	Full,
	/// The component tolerates limited, rule-gated alteration.
	Partial,
	/// Registered for bookkeeping only.
	None,
}

impl ProtectionLevel {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Full => "full",
			Self::Partial => "partial",
			Self::None => "none",
		}
	}
}

impl std::fmt::Display for ProtectionLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Per-component validation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SacredRules {
	pub preserve_props: bool,
	pub preserve_behavior: bool,
	pub allow_role_wrapping: bool,
}

/// A component declared protected from mutation or wrapping by automated
/// tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SacredComponent {
	pub id: Box<str>,
	pub component: ComponentHandle,
	pub protection: ProtectionLevel,
	/// Id of the [`MountPoint`] this component attaches to.
	///
	/// [`MountPoint`]: crate::MountPoint
	pub mount_point: Box<str>,
	pub environment: EnvScope,
	pub rules: SacredRules,
}

impl SacredComponent {
	/// Full protection forbids role wrapping.
	pub(crate) fn protection_compatible(&self) -> bool {
		!(self.protection == ProtectionLevel::Full && self.rules.allow_role_wrapping)
	}
}
