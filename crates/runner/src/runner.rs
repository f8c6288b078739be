use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::config::{RunnerConfig, RunnerConfigUpdate};
use crate::error::RunnerError;
use crate::execution::{ExecutionId, PatchExecution, PatchFailure, PatchSource, PatchStatus};
use crate::spawn;
use crate::strategy::{
	LogRollback, NoopExecutor, PassValidator, PatchExecutor, PatchRollback, PatchValidator,
};

/// Serialized patch queue.
///
/// Submitted patches execute strictly in submission order, one at a time,
/// on a single drain task. Failures are captured into the execution
/// record rather than returned to the submitter; callers observe them
/// through [`PatchRunner::execution`], [`PatchRunner::failed`] and
/// friends.
///
/// Cloning is cheap and shares the underlying queue and history.
#[derive(Clone)]
pub struct PatchRunner {
	inner: Arc<RunnerInner>,
}

struct RunnerInner {
	config: Mutex<RunnerConfig>,
	state: Mutex<RunnerState>,
	draining: AtomicBool,
	validator: Box<dyn PatchValidator>,
	executor: Box<dyn PatchExecutor>,
	rollback: Box<dyn PatchRollback>,
}

#[derive(Default)]
struct RunnerState {
	executions: FxHashMap<ExecutionId, PatchExecution>,
	/// Submission order, for stable history listings.
	order: Vec<ExecutionId>,
	queue: VecDeque<ExecutionId>,
}

impl Default for PatchRunner {
	fn default() -> Self {
		Self::new(RunnerConfig::default())
	}
}

impl PatchRunner {
	/// Creates a runner with the default stub strategies.
	pub fn new(config: RunnerConfig) -> Self {
		Self::with_strategies(config, PassValidator, NoopExecutor, LogRollback)
	}

	/// Creates a runner with host-supplied strategies.
	pub fn with_strategies(
		config: RunnerConfig,
		validator: impl PatchValidator + 'static,
		executor: impl PatchExecutor + 'static,
		rollback: impl PatchRollback + 'static,
	) -> Self {
		Self {
			inner: Arc::new(RunnerInner {
				config: Mutex::new(config),
				state: Mutex::new(RunnerState::default()),
				draining: AtomicBool::new(false),
				validator: Box::new(validator),
				executor: Box::new(executor),
				rollback: Box::new(rollback),
			}),
		}
	}

	/// Submits one patch and returns its tracking record.
	///
	/// The returned snapshot may still be [`PatchStatus::Pending`];
	/// execution is asynchronous. With `auto_execute` on, submission
	/// spawns the drain task unless one is already in flight.
	pub fn submit(&self, patch: PatchSource) -> PatchExecution {
		let record = PatchExecution::pending(patch);
		let snapshot = record.clone();
		{
			let mut state = self.inner.state.lock();
			state.order.push(record.id);
			state.queue.push_back(record.id);
			state.executions.insert(record.id, record);
		}
		tracing::debug!(execution = %snapshot.id, patch = %snapshot.patch.name, "patch queued");

		if self.inner.config.lock().auto_execute {
			self.spawn_drain_if_idle();
		}
		snapshot
	}

	fn spawn_drain_if_idle(&self) {
		if self
			.inner
			.draining
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.is_ok()
		{
			let inner = Arc::clone(&self.inner);
			spawn::spawn(async move { drain_loop(&inner).await });
		}
	}

	/// Drains the pending queue to completion on the calling task.
	///
	/// No-op when another drain is already in flight; intended for hosts
	/// running with `auto_execute` off.
	pub async fn drain(&self) {
		if self
			.inner
			.draining
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.is_ok()
		{
			drain_loop(&self.inner).await;
		}
	}

	/// Whether a drain is currently in flight.
	pub fn is_draining(&self) -> bool {
		self.inner.draining.load(Ordering::Acquire)
	}

	/// Looks up one execution record.
	pub fn execution(&self, id: ExecutionId) -> Option<PatchExecution> {
		self.inner.state.lock().executions.get(&id).cloned()
	}

	/// All execution records, in submission order.
	pub fn executions(&self) -> Vec<PatchExecution> {
		let state = self.inner.state.lock();
		state
			.order
			.iter()
			.filter_map(|id| state.executions.get(id))
			.cloned()
			.collect()
	}

	/// Records still waiting to execute.
	pub fn pending(&self) -> Vec<PatchExecution> {
		self.by_status(PatchStatus::Pending)
	}

	/// Records that reached the failed terminal state.
	pub fn failed(&self) -> Vec<PatchExecution> {
		self.by_status(PatchStatus::Failed)
	}

	fn by_status(&self, status: PatchStatus) -> Vec<PatchExecution> {
		let state = self.inner.state.lock();
		state
			.order
			.iter()
			.filter_map(|id| state.executions.get(id))
			.filter(|execution| execution.status == status)
			.cloned()
			.collect()
	}

	/// Empties the execution history and the pending queue.
	///
	/// Rejected while a drain is in flight: clearing then would drop the
	/// tracking record of the execution being drained.
	pub fn clear(&self) -> Result<(), RunnerError> {
		if self.inner.draining.load(Ordering::Acquire) {
			return Err(RunnerError::DrainInFlight);
		}
		let mut state = self.inner.state.lock();
		state.executions.clear();
		state.order.clear();
		state.queue.clear();
		tracing::debug!("execution history cleared");
		Ok(())
	}

	/// Merges a partial config update.
	///
	/// Takes effect for executions that start after the merge; an
	/// in-flight execution keeps the snapshot it started with.
	pub fn update_config(&self, update: RunnerConfigUpdate) {
		self.inner.config.lock().merge(update);
	}

	/// Current configuration snapshot.
	pub fn config(&self) -> RunnerConfig {
		self.inner.config.lock().clone()
	}
}

async fn drain_loop(inner: &RunnerInner) {
	loop {
		let next = inner.state.lock().queue.pop_front();
		match next {
			Some(id) => execute_single(inner, id).await,
			None => {
				inner.draining.store(false, Ordering::Release);
				// A submit can land between the empty pop and the flag
				// store; reclaim the drain if so, otherwise stop.
				if inner.state.lock().queue.is_empty() {
					return;
				}
				if inner
					.draining
					.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
					.is_err()
				{
					return;
				}
			}
		}
	}
}

async fn execute_single(inner: &RunnerInner, id: ExecutionId) {
	let config = inner.config.lock().clone();
	let Some(patch) = inner.with_execution(id, |execution| {
		execution.status = PatchStatus::Executing;
		execution.started_at = Some(Instant::now());
		execution.patch.clone()
	}) else {
		return;
	};
	tracing::trace!(execution = %id, patch = %patch.name, "patch executing");

	if config.validate_before_execute {
		let results = inner.validator.validate(&patch).await;
		let failure = results.iter().any(|result| result.is_fail()).then(|| {
			let message = results
				.iter()
				.filter(|result| result.is_fail())
				.find_map(|result| result.message.clone())
				.unwrap_or_else(|| Box::from("validation reported failure"));
			PatchFailure::Validation(message)
		});
		inner.with_execution(id, |execution| execution.validation = results);
		if let Some(failure) = failure {
			finish_failed(inner, id, &patch, failure, &config).await;
			return;
		}
	}

	let body = inner.executor.run(&patch);
	let outcome = match config.timeout {
		Some(limit) => match tokio::time::timeout(limit, body).await {
			Ok(result) => result,
			Err(_) => Err(PatchFailure::Timeout(limit)),
		},
		None => body.await,
	};

	match outcome {
		Ok(()) => {
			inner.with_execution(id, |execution| {
				execution.status = PatchStatus::Completed;
				execution.finished_at = Some(Instant::now());
			});
			tracing::debug!(execution = %id, patch = %patch.name, "patch completed");
		}
		Err(failure) => finish_failed(inner, id, &patch, failure, &config).await,
	}
}

async fn finish_failed(
	inner: &RunnerInner,
	id: ExecutionId,
	patch: &PatchSource,
	failure: PatchFailure,
	config: &RunnerConfig,
) {
	tracing::warn!(execution = %id, patch = %patch.name, error = %failure, "patch failed");
	inner.with_execution(id, |execution| {
		execution.status = PatchStatus::Failed;
		execution.error = Some(failure.clone());
		execution.finished_at = Some(Instant::now());
	});
	if config.rollback_on_failure {
		inner.rollback.rollback(patch, &failure).await;
	}
}

impl RunnerInner {
	fn with_execution<R>(&self, id: ExecutionId, f: impl FnOnce(&mut PatchExecution) -> R) -> Option<R> {
		let mut state = self.state.lock();
		state.executions.get_mut(&id).map(f)
	}
}
