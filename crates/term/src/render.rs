//! Frame composition.
//!
//! Everything is drawn into a ratatui [`Buffer`], so the same code renders the
//! terminal frame and test buffers.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthChar;
use wick_editor::Session;
use wick_layout::{Palette, layout, paint_connector, route_connections};

pub const INSTRUCTIONS: &str = "Arrows: move  Enter: pair  i: edit  y: yank  p: paste  c: copy LaTeX  v: preview (kitty)  d: clear  r: resize counts  q: quit";

/// Left edge of every text row.
const TEXT_X: u16 = 2;

/// Narrowest preview region handed to the image display.
const MIN_PREVIEW_WIDTH: u16 = 10;

/// Where things ended up in a composed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
	/// Free space between the arcs and the notation panel.
	pub preview: Rect,
	/// Cursor position while a prompt is open.
	pub cursor: Option<Position>,
}

/// Draws one frame of `session` into `buf`.
pub fn draw_frame(buf: &mut Buffer, session: &Session, palette: &Palette) -> FrameLayout {
	let area = buf.area;
	let (width, height) = (area.width, area.height);
	let text_width = width.saturating_sub(2 * TEXT_X) as usize;
	let nodes = session.nodes();

	let placement = layout(nodes, width, height);
	for connector in route_connections(nodes, &placement, session.contractions().as_slice()) {
		paint_connector(buf, &connector, palette.style_for(connector.index));
	}

	for (index, (node, pos)) in nodes.iter().zip(&placement.positions).enumerate() {
		let mut style = Style::new();
		if index == session.selected_index() {
			style = style.add_modifier(Modifier::REVERSED);
		}
		if session.pending() == Some(node.id) {
			style = style.add_modifier(Modifier::BOLD);
		}
		if session.contractions().contains(node.id) {
			style = style.add_modifier(Modifier::DIM);
		}
		let room = width.saturating_sub(pos.x).saturating_sub(1) as usize;
		put_clipped(buf, *pos, &node.display_text(), room, style);
	}

	let notation_top = draw_notation(buf, &session.notation(), text_width);

	put_clipped(buf, Position::new(TEXT_X, 1), INSTRUCTIONS, text_width, Style::new());
	put_clipped(buf, Position::new(TEXT_X, 2), &session.counts().to_string(), text_width, Style::new());

	if let Some(row) = height.checked_sub(4) {
		let status = format!("Status: {}", session.status());
		put_clipped(buf, Position::new(TEXT_X, row), &status, text_width, Style::new());
	}

	let cursor = match (session.prompt().active(), height.checked_sub(3)) {
		(Some(prompt), Some(row)) => {
			let line = format!("{}{}", prompt.label(), prompt.input());
			put_clipped(buf, Position::new(TEXT_X, row), &" ".repeat(text_width), text_width, Style::new());
			let end = put_clipped(buf, Position::new(TEXT_X, row), &line, text_width, Style::new());
			Some(Position::new(end, row))
		}
		_ => None,
	};

	FrameLayout {
		preview: preview_region(placement.baseline, notation_top, width),
		cursor,
	}
}

/// Region left for the rendered image: below the arcs and two rows above the
/// notation panel.
pub fn preview_region(baseline: u16, notation_top: u16, width: u16) -> Rect {
	let top = baseline.saturating_add(4).max(4);
	let bottom = top.max(notation_top.saturating_sub(2));
	Rect::new(
		TEXT_X,
		top,
		width.saturating_sub(2 * TEXT_X).max(MIN_PREVIEW_WIDTH),
		bottom - top,
	)
}

/// Draws the wrapped notation panel anchored to the bottom of the screen and
/// returns its first row.
fn draw_notation(buf: &mut Buffer, notation: &str, text_width: usize) -> u16 {
	let text = if notation.is_empty() {
		"LaTeX: (add fields to start)".to_string()
	} else {
		format!("LaTeX: {notation}")
	};
	let lines = wrap(&text, text_width.max(1));

	let height = buf.area.height as usize;
	let top = height.saturating_sub(lines.len() + 2).max(2) as u16;
	for (offset, line) in lines.iter().enumerate() {
		let pos = Position::new(TEXT_X, top.saturating_add(offset as u16));
		put_clipped(buf, pos, line, text_width, Style::new());
	}
	top
}

/// Splits `text` into lines of at most `width` terminal columns.
fn wrap(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut line = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let w = ch.width().unwrap_or(0);
		if used + w > width && !line.is_empty() {
			lines.push(std::mem::take(&mut line));
			used = 0;
		}
		line.push(ch);
		used += w;
	}
	if !line.is_empty() {
		lines.push(line);
	}
	lines
}

/// Draws at most `limit` columns of `text` and returns the column after it.
/// Text starting outside the buffer is dropped.
fn put_clipped(buf: &mut Buffer, pos: Position, text: &str, limit: usize, style: Style) -> u16 {
	let area = buf.area;
	if pos.y >= area.bottom() || pos.x >= area.right() {
		return pos.x;
	}
	buf.set_stringn(pos.x, pos.y, text, limit, style).0
}
