use thiserror::Error;

/// Longest slice of tool stderr carried into a status message.
pub const DIAGNOSTIC_LIMIT: usize = 200;

/// Step of the LaTeX → PDF → PNG pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStage {
	/// Required executables are not on `PATH`.
	Unavailable,
	/// Writing the `.tex` document.
	ToTex,
	/// Running `latexmk`.
	ToPdf,
	/// Running `pdftoppm`.
	ToImage,
}

/// Failure from a [`Compile`](crate::Compile) implementation. The message is
/// shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct CompileError {
	pub stage: CompileStage,
	pub detail: String,
}

impl CompileError {
	pub fn new(stage: CompileStage, detail: impl Into<String>) -> Self {
		Self {
			stage,
			detail: detail.into(),
		}
	}
}

/// Failure to place an image on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
	#[error("Not enough space to display the preview.")]
	NoSpace,
	#[error("kitty executable not found.")]
	Missing,
	#[error("Kitty preview failed (exit {0}).")]
	Failed(i32),
	#[error("Kitty preview failed: {0}")]
	Io(String),
}

/// Trims `text` and cuts it to [`DIAGNOSTIC_LIMIT`] characters.
pub(crate) fn truncate_diagnostic(text: &str) -> String {
	text.trim().chars().take(DIAGNOSTIC_LIMIT).collect()
}
