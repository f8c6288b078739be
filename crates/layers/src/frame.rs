use serde::{Deserialize, Serialize};
use strata_primitives::Environment;

/// Placement of a safe frame inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramePosition {
	Center,
	Bottom,
	Top,
	Full,
}

impl FramePosition {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Center => "center",
			Self::Bottom => "bottom",
			Self::Top => "top",
			Self::Full => "full",
		}
	}
}

impl std::fmt::Display for FramePosition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Inner padding of a safe frame, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
	pub top: u32,
	pub bottom: u32,
	pub left: u32,
	pub right: u32,
}

impl Padding {
	pub const fn uniform(amount: u32) -> Self {
		Self {
			top: amount,
			bottom: amount,
			left: amount,
			right: amount,
		}
	}
}

/// Inclusive dimensional bounds a frame's width and height must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConstraints {
	pub min_width: u32,
	pub max_width: u32,
	pub min_height: u32,
	pub max_height: u32,
}

/// Frame-level validation rules.
///
/// `aspect_ratio` is stored and surfaced; the registry checks only the
/// dimensional bounds in [`FrameConstraints`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRules {
	#[serde(default)]
	pub aspect_ratio: Option<f32>,
	pub safe_area: bool,
	pub responsive: bool,
}

impl Default for FrameRules {
	fn default() -> Self {
		Self {
			aspect_ratio: None,
			safe_area: true,
			responsive: true,
		}
	}
}

/// Declarative claim on a rectangular region's dimensions and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeFrameShell {
	pub id: Box<str>,
	pub width: u32,
	pub height: u32,
	pub position: FramePosition,
	pub z_index: i32,
	pub environment: Environment,
	#[serde(default)]
	pub padding: Padding,
	pub constraints: FrameConstraints,
	#[serde(default)]
	pub rules: FrameRules,
}
