use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Full-screen terminal session.
///
/// Raw mode and the alternate screen are entered on creation and restored on
/// drop, so early returns and panics unwinding through the loop leave the
/// terminal usable.
pub struct TerminalSession {
	terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
	pub fn new() -> io::Result<Self> {
		terminal::enable_raw_mode()?;
		let mut out = io::stdout();
		if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
			let _ = terminal::disable_raw_mode();
			return Err(err);
		}
		let terminal = match Terminal::new(CrosstermBackend::new(out)) {
			Ok(terminal) => terminal,
			Err(err) => {
				restore();
				return Err(err);
			}
		};
		tracing::debug!("terminal.enter");
		Ok(Self { terminal })
	}

	/// Renders one frame. Only cells that changed since the last frame are
	/// written, and a resized terminal is redrawn in full.
	pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> io::Result<()> {
		self.terminal.draw(render).map(|_| ())
	}

	/// Waits for the next event. `None` blocks; a timeout yields `Ok(None)`.
	pub fn next_event(&self, timeout: Option<Duration>) -> io::Result<Option<Event>> {
		if let Some(timeout) = timeout
			&& !event::poll(timeout)?
		{
			return Ok(None);
		}
		event::read().map(Some)
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		restore();
		tracing::debug!("terminal.leave");
	}
}

fn restore() {
	let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
	let _ = terminal::disable_raw_mode();
}
