use std::future::Future;
use std::sync::OnceLock;

use tokio::task::JoinHandle;

/// Resolves the ambient tokio handle, falling back to a process-global
/// runtime so synchronous hosts can still submit patches.
fn runtime_handle() -> tokio::runtime::Handle {
	if let Ok(handle) = tokio::runtime::Handle::try_current() {
		return handle;
	}

	static GLOBAL_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = GLOBAL_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(1)
			.thread_name("strata-runner-global")
			.build()
			.expect("failed to build strata-runner global tokio runtime")
	});
	runtime.handle().clone()
}

/// Spawns the drain task on the resolved runtime.
pub(crate) fn spawn<F>(fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!("runner.spawn_drain");
	runtime_handle().spawn(fut)
}
