use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique id generated for each submitted patch execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionId(Uuid);

impl ExecutionId {
	pub(crate) fn generate() -> Self {
		Self(Uuid::new_v4())
	}
}

impl std::fmt::Display for ExecutionId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

/// Opaque descriptor for one unit of patch work.
///
/// The runner never interprets a descriptor; the configured strategies
/// resolve it to real build/validation steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSource {
	pub name: Box<str>,
	#[serde(default)]
	pub detail: Option<Box<str>>,
}

impl PatchSource {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			detail: None,
		}
	}
}

/// Validation step classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
	Parse,
	Typecheck,
	Lint,
	Test,
	Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
	Pass,
	Fail,
}

/// One validator finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
	pub kind: ValidationKind,
	pub status: ValidationStatus,
	#[serde(default)]
	pub message: Option<Box<str>>,
	#[serde(default)]
	pub details: Option<Box<str>>,
}

impl ValidationResult {
	pub fn pass(kind: ValidationKind) -> Self {
		Self {
			kind,
			status: ValidationStatus::Pass,
			message: None,
			details: None,
		}
	}

	pub fn fail(kind: ValidationKind, message: impl Into<Box<str>>) -> Self {
		Self {
			kind,
			status: ValidationStatus::Fail,
			message: Some(message.into()),
			details: None,
		}
	}

	pub fn is_fail(&self) -> bool {
		self.status == ValidationStatus::Fail
	}
}

/// Per-execution state machine.
///
/// Transitions are driven solely by the runner:
/// `Pending -> Executing -> Completed | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
	Pending,
	Executing,
	Completed,
	Failed,
}

impl PatchStatus {
	pub const fn is_terminal(self) -> bool {
		matches!(self, Self::Completed | Self::Failed)
	}
}

/// Failure captured into an execution record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchFailure {
	/// Pre-execution validation reported at least one failing result.
	#[error("validation failed: {0}")]
	Validation(Box<str>),
	/// The patch body returned an error.
	#[error("patch body failed: {0}")]
	Execution(Box<str>),
	/// The patch body outlived the configured timeout.
	#[error("patch timed out after {0:?}")]
	Timeout(Duration),
}

/// Tracking record for one submitted patch.
///
/// Records persist in memory for the process lifetime;
/// [`PatchRunner::clear`] empties the store.
///
/// [`PatchRunner::clear`]: crate::PatchRunner::clear
#[derive(Debug, Clone)]
pub struct PatchExecution {
	pub id: ExecutionId,
	pub patch: PatchSource,
	pub status: PatchStatus,
	pub started_at: Option<Instant>,
	pub finished_at: Option<Instant>,
	pub error: Option<PatchFailure>,
	pub validation: Vec<ValidationResult>,
}

impl PatchExecution {
	pub(crate) fn pending(patch: PatchSource) -> Self {
		Self {
			id: ExecutionId::generate(),
			patch,
			status: PatchStatus::Pending,
			started_at: None,
			finished_at: None,
			error: None,
			validation: Vec::new(),
		}
	}
}
