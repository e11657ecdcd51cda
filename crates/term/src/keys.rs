//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wick_editor::Direction;

/// A command bound to a key in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Move(Direction),
	Pair,
	Unpair,
	Edit,
	Yank,
	Paste,
	CopyNotation,
	Preview,
	ClearAll,
	ResizeCounts,
	Quit,
}

/// Line editing input while a prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
	Insert(char),
	Backspace,
	Submit,
	Cancel,
}

fn is_press(key: &KeyEvent) -> bool {
	key.kind != KeyEventKind::Release
}

fn is_interrupt(key: &KeyEvent) -> bool {
	key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C'))
}

/// Normal-mode binding for `key`. Letter bindings accept either case.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
	if !is_press(key) {
		return None;
	}
	if is_interrupt(key) {
		return Some(Action::Quit);
	}
	let action = match key.code {
		KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
		KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
		KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
		KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
		KeyCode::Enter | KeyCode::Char(' ' | '\n' | '\r') => Action::Pair,
		KeyCode::Backspace | KeyCode::Delete => Action::Unpair,
		KeyCode::Char(c) => match c.to_ascii_lowercase() {
			'i' => Action::Edit,
			'y' => Action::Yank,
			'p' => Action::Paste,
			'c' => Action::CopyNotation,
			'v' => Action::Preview,
			'd' => Action::ClearAll,
			'r' => Action::ResizeCounts,
			'q' => Action::Quit,
			_ => return None,
		},
		_ => return None,
	};
	Some(action)
}

/// Prompt-mode interpretation of `key`.
pub fn prompt_key_for(key: &KeyEvent) -> Option<PromptKey> {
	if !is_press(key) {
		return None;
	}
	if is_interrupt(key) {
		return Some(PromptKey::Cancel);
	}
	match key.code {
		KeyCode::Enter => Some(PromptKey::Submit),
		KeyCode::Esc => Some(PromptKey::Cancel),
		KeyCode::Backspace => Some(PromptKey::Backspace),
		KeyCode::Char(c) => Some(PromptKey::Insert(c)),
		_ => None,
	}
}
