use strata_primitives::Environment;

use crate::contract::LayerKind;

/// Axis named by a dimension violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
	Width,
	Height,
}

impl std::fmt::Display for Dimension {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Self::Width => "width",
			Self::Height => "height",
		})
	}
}

/// Registration errors raised synchronously by [`LayerRegistry`].
///
/// These are configuration programmer errors: retrying with the same
/// values cannot succeed.
///
/// [`LayerRegistry`]: crate::LayerRegistry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayerError {
	/// A contract claims a z-index outside its own declared range.
	#[error("contract {id}: z-index {z_index} outside [{min}, {max}]")]
	RangeViolation {
		id: Box<str>,
		z_index: i32,
		min: i32,
		max: i32,
	},
	/// An existing contract already claims the same stacking tuple.
	#[error("contract {id} collides with {existing} on (z={z_index}, layer={layer}, env={environment})")]
	ConflictViolation {
		id: Box<str>,
		existing: Box<str>,
		z_index: i32,
		layer: LayerKind,
		environment: Environment,
	},
	/// A shell's width or height falls outside its declared constraints.
	#[error("shell {id}: {dimension} {value} outside [{min}, {max}]")]
	DimensionViolation {
		id: Box<str>,
		dimension: Dimension,
		value: u32,
		min: u32,
		max: u32,
	},
}
