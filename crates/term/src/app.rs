use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event, KeyEvent};
use tracing::{debug, info, warn};
use wick_editor::{EditError, Session};
use wick_layout::Palette;
use wick_preview::{ImageDisplay, KittyDisplay, LatexToolchain, PreviewJobs, PreviewState};
use ratatui::buffer::Buffer;
use wick_primitives::OperatorId;

use crate::backend::TerminalSession;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::keys::{Action, PromptKey, action_for, prompt_key_for};
use crate::render::{FrameLayout, draw_frame};

/// Redraw interval while a preview job is running.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the loop keeps going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

/// Session plus the collaborators commands reach out to.
pub struct App {
	session: Session,
	jobs: PreviewJobs,
	preview: PreviewState,
	display: Box<dyn ImageDisplay>,
	clipboard: Box<dyn Clipboard>,
	palette: Palette,
}

impl App {
	pub fn new(
		session: Session,
		jobs: PreviewJobs,
		display: Box<dyn ImageDisplay>,
		clipboard: Box<dyn Clipboard>,
		palette: Palette,
	) -> Self {
		Self {
			session,
			jobs,
			preview: PreviewState::default(),
			display,
			clipboard,
			palette,
		}
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn into_session(self) -> Session {
		self.session
	}

	/// Whether the loop should wake up on its own to pick up a preview.
	pub fn is_waiting(&self) -> bool {
		self.jobs.is_busy()
	}

	/// Draws the frame and records the preview region it leaves free.
	pub fn compose(&mut self, buf: &mut Buffer) -> FrameLayout {
		let layout = draw_frame(buf, &self.session, &self.palette);
		self.preview.update_region(layout.preview);
		layout
	}

	/// Applies a finished preview job, if any.
	pub fn collect_preview(&mut self) {
		if let Some(result) = self.jobs.fetch_result() {
			let message = self.preview.apply_result(result, self.display.as_ref());
			self.session.set_status(message);
		}
	}

	/// Shows or hides the preview image after a frame was presented. Returns
	/// true when the status changed and the frame should be redrawn.
	pub fn refresh_preview(&mut self) -> bool {
		match self.preview.process(self.display.as_ref()) {
			Some(message) => {
				self.session.set_status(message);
				true
			}
			None => false,
		}
	}

	pub fn handle_key(&mut self, key: &KeyEvent) -> Flow {
		if self.session.prompt().is_open() {
			match prompt_key_for(key) {
				Some(PromptKey::Insert(ch)) => self.session.prompt_insert(ch),
				Some(PromptKey::Backspace) => self.session.prompt_backspace(),
				Some(PromptKey::Submit) => {
					let outcome = self.session.prompt_submit();
					debug!(?outcome, "app.prompt_submit");
				}
				Some(PromptKey::Cancel) => self.session.prompt_cancel(),
				None => {}
			}
			return Flow::Continue;
		}
		match action_for(key) {
			Some(action) => self.dispatch(action),
			None => Flow::Continue,
		}
	}

	pub fn dispatch(&mut self, action: Action) -> Flow {
		debug!(?action, "app.dispatch");
		match action {
			Action::Move(direction) => self.session.move_selection(direction),
			Action::Pair => {
				if let Some(id) = self.selected_id() {
					rejected(self.session.begin_or_complete_pair(id));
				}
			}
			Action::Unpair => {
				if let Some(id) = self.selected_id() {
					rejected(self.session.remove_contraction_for(id));
				}
			}
			Action::Edit => rejected(self.session.open_edit_prompt()),
			Action::Yank => rejected(self.session.copy_selected()),
			Action::Paste => rejected(self.session.paste_into_selected()),
			Action::CopyNotation => {
				let message = match self.clipboard.copy_text(&self.session.notation()) {
					Ok(()) => "LaTeX snippet copied to clipboard.".to_string(),
					Err(err) => err.to_string(),
				};
				self.session.set_status(message);
			}
			Action::Preview => self.request_preview(),
			Action::ClearAll => self.session.clear_all_contractions(),
			Action::ResizeCounts => self.session.open_counts_prompt(),
			Action::Quit => return Flow::Quit,
		}
		Flow::Continue
	}

	/// Clears any displayed image.
	pub fn shutdown(&mut self) {
		self.preview.hide(self.display.as_ref());
		self.display.clear();
	}

	fn request_preview(&mut self) {
		if !self.display.available() {
			self.session
				.set_status("Kitty inline preview is only available inside the kitty terminal.");
			return;
		}
		self.jobs.request(self.session.notation());
		self.session.set_status("Rendering preview...");
	}

	fn selected_id(&self) -> Option<OperatorId> {
		self.session.selected().map(|node| node.id)
	}
}

/// Rejected commands already carry their message in the status bar.
fn rejected<T>(outcome: Result<T, EditError>) {
	if let Err(err) = outcome {
		debug!(error = %err, "app.command_rejected");
	}
}

fn truecolor() -> bool {
	std::env::var("COLORTERM").is_ok_and(|value| matches!(value.as_str(), "truecolor" | "24bit"))
}

/// Runs the interactive editor until the user quits and returns the final
/// session.
pub fn run(session: Session) -> anyhow::Result<Session> {
	let workdir = tempfile::Builder::new()
		.prefix("wick_preview_")
		.tempdir()
		.context("failed to create preview directory")?;
	info!(workdir = %workdir.path().display(), "app.start");

	let jobs = PreviewJobs::new(Arc::new(LatexToolchain::new(workdir.path())));
	let mut app = App::new(
		session,
		jobs,
		Box::new(KittyDisplay::detect()),
		Box::new(SystemClipboard::default()),
		Palette::new(truecolor()),
	);

	let outcome = event_loop(&mut app);
	app.shutdown();
	info!(contractions = app.session().contractions().len(), "app.quit");
	if let Err(err) = workdir.close() {
		warn!(error = %err, "app.workdir_cleanup_failed");
	}
	outcome.map(|()| app.into_session())
}

fn event_loop(app: &mut App) -> anyhow::Result<()> {
	let mut terminal = TerminalSession::new().context("failed to initialize terminal")?;

	loop {
		app.collect_preview();
		terminal.draw(|frame| {
			let layout = app.compose(frame.buffer_mut());
			if let Some(cursor) = layout.cursor {
				frame.set_cursor_position(cursor);
			}
		})?;
		if app.refresh_preview() {
			continue;
		}

		let timeout = app.is_waiting().then_some(POLL_INTERVAL);
		if let Some(Event::Key(key)) = terminal.next_event(timeout)?
			&& app.handle_key(&key) == Flow::Quit
		{
			return Ok(());
		}
	}
}

/// Text printed after the UI closes.
pub fn exit_summary(session: &Session) -> String {
	let mut out = String::from("\nFinal contractions:\n");
	if session.contractions().is_empty() {
		out.push_str("  (none)\n");
	}
	for (index, pair) in session.contractions().iter().enumerate() {
		let _ = writeln!(out, "  {}. {} -> {}", index + 1, pair.first, pair.second);
	}
	out.push_str("\nLaTeX snippet:\n");
	let notation = session.notation();
	if notation.is_empty() {
		out.push_str("(no operators configured)\n");
	} else {
		let _ = writeln!(out, "{notation}");
	}
	out
}
