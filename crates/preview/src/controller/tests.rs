use std::sync::mpsc;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::*;
use crate::error::{CompileError, CompileStage};

/// Compiler that records every snippet and blocks until released.
struct GatedCompiler {
	calls: Mutex<Vec<String>>,
	gate: Mutex<mpsc::Receiver<()>>,
}

impl GatedCompiler {
	fn new() -> (Arc<Self>, mpsc::Sender<()>) {
		let (tx, rx) = mpsc::channel();
		let compiler = Arc::new(Self {
			calls: Mutex::new(Vec::new()),
			gate: Mutex::new(rx),
		});
		(compiler, tx)
	}

	fn calls(&self) -> Vec<String> {
		self.calls.lock().clone()
	}
}

impl Compile for GatedCompiler {
	fn compile(&self, snippet: &str) -> Result<PathBuf, CompileError> {
		self.calls.lock().push(snippet.to_string());
		let _ = self.gate.lock().recv_timeout(Duration::from_secs(10));
		if snippet == "broken" {
			return Err(CompileError::new(CompileStage::ToPdf, "LaTeX compilation failed"));
		}
		Ok(PathBuf::from(format!("/tmp/{snippet}.png")))
	}
}

fn wait_until(mut done: impl FnMut() -> bool) {
	let deadline = Instant::now() + Duration::from_secs(10);
	while !done() {
		assert!(Instant::now() < deadline, "timed out waiting for preview worker");
		thread::sleep(Duration::from_millis(5));
	}
}

#[test]
fn requests_while_busy_coalesce_to_latest() {
	let (compiler, release) = GatedCompiler::new();
	let jobs = PreviewJobs::new(compiler.clone());

	jobs.request("T1");
	wait_until(|| compiler.calls().len() == 1);
	assert!(jobs.is_busy());

	jobs.request("T2");
	jobs.request("T3");
	release.send(()).unwrap();
	release.send(()).unwrap();
	wait_until(|| !jobs.is_busy());

	assert_eq!(compiler.calls(), ["T1", "T3"]);
	assert_eq!(
		jobs.fetch_result(),
		Some(JobResult {
			image: Some(PathBuf::from("/tmp/T3.png")),
			message: "Preview updated.".to_string(),
		})
	);
	assert_eq!(jobs.fetch_result(), None);
}

#[test]
fn idle_controller_starts_immediately() {
	let (compiler, release) = GatedCompiler::new();
	let jobs = PreviewJobs::new(compiler.clone());
	release.send(()).unwrap();

	jobs.request("a");
	wait_until(|| !jobs.is_busy());
	assert_eq!(jobs.fetch_result().and_then(|r| r.image), Some(PathBuf::from("/tmp/a.png")));

	release.send(()).unwrap();
	jobs.request("b");
	wait_until(|| !jobs.is_busy());
	assert_eq!(compiler.calls(), ["a", "b"]);
}

#[test]
fn compile_failures_become_messages() {
	let (compiler, release) = GatedCompiler::new();
	let jobs = PreviewJobs::new(compiler);
	release.send(()).unwrap();

	jobs.request("broken");
	wait_until(|| !jobs.is_busy());
	assert_eq!(
		jobs.fetch_result(),
		Some(JobResult {
			image: None,
			message: "LaTeX compilation failed".to_string(),
		})
	);
}

#[test]
fn blank_snippet_skips_compiler() {
	let (compiler, _release) = GatedCompiler::new();
	let jobs = PreviewJobs::new(compiler.clone());

	jobs.request("  ");
	wait_until(|| !jobs.is_busy());
	assert!(compiler.calls().is_empty());
	assert_eq!(
		jobs.fetch_result().map(|r| r.message),
		Some("Add operators before generating a preview.".to_string())
	);
}
