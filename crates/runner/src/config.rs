use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Runner behavior knobs.
///
/// `max_concurrent` is declared configuration: the drain loop executes one
/// patch at a time regardless, and that single-worker FIFO ordering is the
/// component's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
	pub max_concurrent: usize,
	pub validate_before_execute: bool,
	pub rollback_on_failure: bool,
	pub auto_execute: bool,
	/// Upper bound on one patch body; `None` leaves the body unbounded.
	pub timeout: Option<Duration>,
}

impl Default for RunnerConfig {
	fn default() -> Self {
		Self {
			max_concurrent: 1,
			validate_before_execute: true,
			rollback_on_failure: true,
			auto_execute: true,
			timeout: None,
		}
	}
}

/// Partial update merged into a [`RunnerConfig`] by
/// [`PatchRunner::update_config`].
///
/// Unset fields leave the current value untouched. The merged config takes
/// effect for executions that start after the merge; an in-flight
/// execution keeps the snapshot it started with.
///
/// [`PatchRunner::update_config`]: crate::PatchRunner::update_config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfigUpdate {
	pub max_concurrent: Option<usize>,
	pub validate_before_execute: Option<bool>,
	pub rollback_on_failure: Option<bool>,
	pub auto_execute: Option<bool>,
	pub timeout: Option<Option<Duration>>,
}

impl RunnerConfig {
	/// Merges `update`, leaving unset fields untouched.
	pub fn merge(&mut self, update: RunnerConfigUpdate) {
		if let Some(max_concurrent) = update.max_concurrent {
			self.max_concurrent = max_concurrent;
		}
		if let Some(validate) = update.validate_before_execute {
			self.validate_before_execute = validate;
		}
		if let Some(rollback) = update.rollback_on_failure {
			self.rollback_on_failure = rollback;
		}
		if let Some(auto) = update.auto_execute {
			self.auto_execute = auto;
		}
		if let Some(timeout) = update.timeout {
			self.timeout = timeout;
		}
	}
}
