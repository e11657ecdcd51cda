use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

/// Copies text to the system clipboard.
pub trait Clipboard {
	fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
	#[error("Nothing to copy.")]
	Empty,
	#[error("No clipboard tool found (tried pbcopy/xclip/xsel/clip.exe).")]
	NoTool,
}

/// Candidate clipboard commands, tried in order.
const TOOLS: &[&[&str]] = &[
	&["pbcopy"],
	&["xclip", "-selection", "clipboard"],
	&["xsel", "--clipboard", "--input"],
	&["clip.exe"],
];

/// Pipes text into the first clipboard tool on `PATH` that accepts it.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
	tools: Vec<Vec<String>>,
}

impl Default for SystemClipboard {
	fn default() -> Self {
		Self::with_tools(TOOLS.iter().map(|tool| tool.iter().map(|s| s.to_string()).collect()).collect())
	}
}

impl SystemClipboard {
	/// Uses `tools` (program followed by its arguments) instead of the defaults.
	pub fn with_tools(tools: Vec<Vec<String>>) -> Self {
		Self { tools }
	}

	fn try_tool(program: &str, args: &[String], text: &str) -> std::io::Result<bool> {
		let mut child = Command::new(program)
			.args(args)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()?;
		// The pipe closes at the end of the match so the tool sees EOF.
		let written = match child.stdin.take() {
			Some(mut stdin) => stdin.write_all(text.as_bytes()),
			None => Ok(()),
		};
		let status = child.wait()?;
		written?;
		Ok(status.success())
	}
}

impl Clipboard for SystemClipboard {
	fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
		if text.trim().is_empty() {
			return Err(ClipboardError::Empty);
		}
		for tool in &self.tools {
			let Some((program, args)) = tool.split_first() else {
				continue;
			};
			if which::which(program).is_err() {
				continue;
			}
			match Self::try_tool(program, args, text) {
				Ok(true) => {
					info!(tool = %program, "clipboard.copied");
					return Ok(());
				}
				Ok(false) => debug!(tool = %program, "clipboard.tool_rejected"),
				Err(err) => debug!(tool = %program, error = %err, "clipboard.tool_failed"),
			}
		}
		Err(ClipboardError::NoTool)
	}
}
