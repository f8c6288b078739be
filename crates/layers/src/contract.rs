use serde::{Deserialize, Serialize};
use strata_primitives::Environment;

/// Stacking category a contract claims its z-index within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
	Background,
	Content,
	Overlay,
	Modal,
	Floating,
	Notification,
}

impl LayerKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Background => "background",
			Self::Content => "content",
			Self::Overlay => "overlay",
			Self::Modal => "modal",
			Self::Floating => "floating",
			Self::Notification => "notification",
		}
	}
}

impl std::fmt::Display for LayerKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One scoping triple restricting when a contract applies.
///
/// Conditions are stored in declaration order and surfaced to callers;
/// the registry does not evaluate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
	pub feature: Box<str>,
	pub version: Box<str>,
	pub screen: Box<str>,
}

/// Validation rules a contract carries for its own z-index claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRules {
	pub min_z_index: i32,
	pub max_z_index: i32,
	/// Contract ids this contract declares itself in conflict with.
	/// Stored and surfaced; the enforced rule is stacking-tuple
	/// uniqueness.
	#[serde(default)]
	pub conflicts: Vec<Box<str>>,
}

impl ContractRules {
	/// Rules with an inclusive z-index range and no declared conflicts.
	pub fn range(min_z_index: i32, max_z_index: i32) -> Self {
		Self {
			min_z_index,
			max_z_index,
			conflicts: Vec::new(),
		}
	}
}

/// Declarative claim on a z-index value for a given layer and environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZIndexContract {
	pub id: Box<str>,
	pub z_index: i32,
	pub layer: LayerKind,
	pub environment: Environment,
	#[serde(default)]
	pub conditions: Vec<Condition>,
	pub rules: ContractRules,
}

impl ZIndexContract {
	/// The tuple no two stored contracts may share.
	pub fn stacking_key(&self) -> (i32, LayerKind, Environment) {
		(self.z_index, self.layer, self.environment)
	}

	/// Whether the claimed z-index sits inside the contract's own range.
	pub fn in_range(&self) -> bool {
		(self.rules.min_z_index..=self.rules.max_z_index).contains(&self.z_index)
	}
}
