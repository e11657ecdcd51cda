use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};
use ratatui::layout::Rect;

use crate::controller::JobResult;
use crate::error::DisplayError;

/// Places a raster image inside a terminal cell region.
pub trait ImageDisplay {
	/// Whether images can be shown at all in this terminal.
	fn available(&self) -> bool;
	fn show(&self, image: &Path, region: Rect) -> Result<(), DisplayError>;
	/// Removes any displayed image. Failures are ignored.
	fn clear(&self);
}

/// Inline images through kitty's `icat` kitten.
#[derive(Debug, Clone)]
pub struct KittyDisplay {
	program: PathBuf,
	available: bool,
}

impl KittyDisplay {
	/// Detects kitty from `KITTY_WINDOW_ID` and the `kitty` executable on `PATH`.
	pub fn detect() -> Self {
		let in_kitty = std::env::var_os("KITTY_WINDOW_ID").is_some_and(|id| !id.is_empty());
		match which::which("kitty") {
			Ok(program) => Self {
				program,
				available: in_kitty,
			},
			Err(_) => Self {
				program: PathBuf::from("kitty"),
				available: false,
			},
		}
	}

	fn icat(&self) -> Command {
		let mut command = Command::new(&self.program);
		command.args(["+kitten", "icat"]).stdin(Stdio::null());
		command
	}
}

impl ImageDisplay for KittyDisplay {
	fn available(&self) -> bool {
		self.available
	}

	fn show(&self, image: &Path, region: Rect) -> Result<(), DisplayError> {
		if region.is_empty() {
			return Err(DisplayError::NoSpace);
		}
		self.clear();
		let place = format!("--place={}x{}@{}x{}", region.width, region.height, region.x, region.y);
		debug!(image = %image.display(), %place, "preview.display.show");
		let status = self
			.icat()
			.arg("--transfer-mode=file")
			.arg(place)
			.arg(image)
			.status()
			.map_err(|err| match err.kind() {
				io::ErrorKind::NotFound => DisplayError::Missing,
				_ => DisplayError::Io(err.to_string()),
			})?;
		if !status.success() {
			return Err(DisplayError::Failed(status.code().unwrap_or(-1)));
		}
		Ok(())
	}

	fn clear(&self) {
		if !self.available {
			return;
		}
		if let Err(err) = self.icat().arg("--clear").status() {
			debug!(error = %err, "preview.display.clear_failed");
		}
	}
}

/// What the preview area currently shows and whether it must be redrawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
	image: Option<PathBuf>,
	visible: bool,
	needs_refresh: bool,
	region: Rect,
}

impl PreviewState {
	pub fn image(&self) -> Option<&Path> {
		self.image.as_deref()
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn region(&self) -> Rect {
		self.region
	}

	/// Records the region computed for this frame. A visible image is redrawn
	/// when the region moved or changed size.
	pub fn update_region(&mut self, region: Rect) {
		if region != self.region {
			self.region = region;
			if self.visible {
				self.needs_refresh = true;
			}
		}
	}

	/// Applies a finished job and returns the status message to show.
	pub fn apply_result(&mut self, result: JobResult, display: &dyn ImageDisplay) -> String {
		match result.image {
			Some(image) => {
				self.image = Some(image);
				self.visible = true;
				self.needs_refresh = true;
			}
			None => self.hide(display),
		}
		result.message
	}

	pub fn hide(&mut self, display: &dyn ImageDisplay) {
		if self.visible {
			display.clear();
		}
		self.visible = false;
		self.needs_refresh = false;
	}

	/// Draws the image if it is pending a refresh. Returns a status message when
	/// the preview had to be hidden.
	pub fn process(&mut self, display: &dyn ImageDisplay) -> Option<String> {
		let image = match (&self.image, self.visible) {
			(Some(image), true) => image.clone(),
			_ => return None,
		};
		if self.region.is_empty() {
			self.hide(display);
			return Some("Terminal too small to show the preview.".to_string());
		}
		if !self.needs_refresh {
			return None;
		}
		if let Err(err) = display.show(&image, self.region) {
			warn!(error = %err, "preview.display.failed");
			self.hide(display);
			return Some(err.to_string());
		}
		self.needs_refresh = false;
		None
	}
}

#[cfg(test)]
mod tests;
