/// Synchronous runner API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RunnerError {
	/// `clear` was called while the drain task was executing patches;
	/// clearing then would drop the tracking record of an in-flight
	/// execution.
	#[error("cannot clear execution history while a drain is in flight")]
	DrainInFlight,
}
