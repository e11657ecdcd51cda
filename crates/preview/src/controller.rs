use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::toolchain::Compile;

/// Outcome of one preview job, consumed once by the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
	/// Rendered image, or `None` when the job failed.
	pub image: Option<PathBuf>,
	/// Status text describing the outcome.
	pub message: String,
}

impl JobResult {
	fn failed(message: impl Into<String>) -> Self {
		Self {
			image: None,
			message: message.into(),
		}
	}
}

#[derive(Debug, Default)]
struct JobState {
	running: bool,
	queued: Option<String>,
	result: Option<JobResult>,
}

/// Runs preview compilation off the UI thread.
///
/// At most one job runs at a time. Requests made while a job is running
/// replace any earlier queued request, so once the current job finishes the
/// worker moves straight to the most recent snippet and skips the ones in
/// between. There is no cancellation of a running job.
pub struct PreviewJobs {
	compiler: Arc<dyn Compile>,
	state: Arc<Mutex<JobState>>,
}

impl PreviewJobs {
	pub fn new(compiler: Arc<dyn Compile>) -> Self {
		Self {
			compiler,
			state: Arc::default(),
		}
	}

	/// Asks for a preview of `snippet`.
	pub fn request(&self, snippet: impl Into<String>) {
		let snippet = snippet.into();
		{
			let mut state = self.state.lock();
			if state.running {
				if state.queued.replace(snippet).is_some() {
					debug!("preview.request.coalesced");
				}
				return;
			}
			state.running = true;
		}
		self.spawn_worker(snippet);
	}

	/// Takes the latest finished result, if one arrived since the last call.
	pub fn fetch_result(&self) -> Option<JobResult> {
		self.state.lock().result.take()
	}

	/// Whether a job is running or queued.
	pub fn is_busy(&self) -> bool {
		self.state.lock().running
	}

	fn spawn_worker(&self, snippet: String) {
		let compiler = Arc::clone(&self.compiler);
		let state = Arc::clone(&self.state);
		let spawned = thread::Builder::new()
			.name("wick-preview".into())
			.spawn(move || run_jobs(compiler.as_ref(), &state, snippet));

		if let Err(err) = spawned {
			warn!(error = %err, "preview.worker.spawn_failed");
			let mut state = self.state.lock();
			state.running = false;
			state.queued = None;
			state.result = Some(JobResult::failed(format!("Could not start preview worker: {err}")));
		}
	}
}

/// Worker loop: renders `snippet`, publishes the result, then continues with
/// the queued request if there is one. The running flag is only cleared while
/// holding the lock with an empty queue.
fn run_jobs(compiler: &dyn Compile, state: &Mutex<JobState>, mut snippet: String) {
	loop {
		let result = render(compiler, &snippet);
		let mut guard = state.lock();
		guard.result = Some(result);
		match guard.queued.take() {
			Some(next) => snippet = next,
			None => {
				guard.running = false;
				return;
			}
		}
	}
}

fn render(compiler: &dyn Compile, snippet: &str) -> JobResult {
	if snippet.trim().is_empty() {
		return JobResult::failed("Add operators before generating a preview.");
	}
	info!(len = snippet.len(), "preview.job.start");
	match compiler.compile(snippet) {
		Ok(image) => {
			info!(image = %image.display(), "preview.job.done");
			JobResult {
				image: Some(image),
				message: "Preview updated.".to_string(),
			}
		}
		Err(err) => {
			warn!(stage = ?err.stage, error = %err, "preview.job.failed");
			JobResult::failed(err.to_string())
		}
	}
}

#[cfg(test)]
mod tests;
