//! Serialized patch execution queue.
//!
//! Hosts submit opaque [`PatchSource`] descriptors; the runner executes
//! them strictly in submission order, one at a time, recording per-patch
//! validation results, timing, and failures into in-memory
//! [`PatchExecution`] records. Validation, the patch body, and rollback
//! are host-supplied strategies; the defaults mirror a bare bootstrap
//! (validation passes, the body completes immediately, rollback only
//! logs).
//!
//! Failures are captured into the execution record rather than returned
//! to the submitter; submission is decoupled from execution, so callers
//! observe outcomes through [`PatchRunner::execution`] and friends.

mod config;
mod error;
mod execution;
mod runner;
mod spawn;
mod strategy;

pub use config::{RunnerConfig, RunnerConfigUpdate};
pub use error::RunnerError;
pub use execution::{
	ExecutionId, PatchExecution, PatchFailure, PatchSource, PatchStatus, ValidationKind,
	ValidationResult, ValidationStatus,
};
pub use runner::PatchRunner;
pub use strategy::{
	LogRollback, NoopExecutor, PassValidator, PatchExecutor, PatchRollback, PatchValidator,
};
