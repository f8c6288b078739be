use async_trait::async_trait;

use crate::execution::{PatchFailure, PatchSource, ValidationKind, ValidationResult};

/// Pre-execution validation seam.
#[async_trait]
pub trait PatchValidator: Send + Sync {
	/// Validates `patch` before its body runs. Any failing result aborts
	/// the execution.
	async fn validate(&self, patch: &PatchSource) -> Vec<ValidationResult>;
}

/// Patch body seam: performs the externally-defined build/validation
/// steps a descriptor references.
#[async_trait]
pub trait PatchExecutor: Send + Sync {
	async fn run(&self, patch: &PatchSource) -> Result<(), PatchFailure>;
}

/// Compensation seam invoked after a failed execution.
///
/// Invocation is attempted, never guaranteed to compensate; what rollback
/// means is defined by the host's patch type.
#[async_trait]
pub trait PatchRollback: Send + Sync {
	async fn rollback(&self, patch: &PatchSource, error: &PatchFailure);
}

/// Default validator: reports one passing custom result.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassValidator;

#[async_trait]
impl PatchValidator for PassValidator {
	async fn validate(&self, _patch: &PatchSource) -> Vec<ValidationResult> {
		vec![ValidationResult::pass(ValidationKind::Custom)]
	}
}

/// Default executor: completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExecutor;

#[async_trait]
impl PatchExecutor for NoopExecutor {
	async fn run(&self, _patch: &PatchSource) -> Result<(), PatchFailure> {
		Ok(())
	}
}

/// Default rollback: records the attempt in the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRollback;

#[async_trait]
impl PatchRollback for LogRollback {
	async fn rollback(&self, patch: &PatchSource, error: &PatchFailure) {
		tracing::warn!(
			patch = %patch.name,
			%error,
			"patch rollback attempted; no compensating action configured"
		);
	}
}
