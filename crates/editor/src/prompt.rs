use tracing::debug;
use wick_primitives::{Category, OperatorCounts, OperatorId};

use crate::session::Session;

/// Longest accepted count entry.
const COUNT_INPUT_LEN: usize = 6;

/// Longest accepted operator content.
const CONTENT_INPUT_LEN: usize = 256;

/// What the open prompt is collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
	/// New LaTeX content for one operator.
	EditContent { target: OperatorId },
	/// Per-category counts, asked one category at a time.
	Counts {
		step: usize,
		current: OperatorCounts,
		collected: OperatorCounts,
	},
}

impl PromptKind {
	pub(crate) fn counts(current: OperatorCounts) -> Self {
		PromptKind::Counts {
			step: 0,
			current,
			collected: current,
		}
	}
}

/// An open single-line prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
	pub kind: PromptKind,
	input: String,
}

impl Prompt {
	/// Text shown before the input.
	pub fn label(&self) -> String {
		match &self.kind {
			PromptKind::EditContent { .. } => "New contents: ".to_string(),
			PromptKind::Counts { step, current, .. } => {
				let category = Category::ALL[*step];
				format!("{} ({}): ", category.name(), current.get(category))
			}
		}
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	fn max_len(&self) -> usize {
		match self.kind {
			PromptKind::EditContent { .. } => CONTENT_INPUT_LEN,
			PromptKind::Counts { .. } => COUNT_INPUT_LEN,
		}
	}
}

/// Whether a prompt is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum PromptState {
	#[default]
	Closed,
	Open(Prompt),
}

impl PromptState {
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Open(_))
	}

	pub fn active(&self) -> Option<&Prompt> {
		match self {
			Self::Open(prompt) => Some(prompt),
			Self::Closed => None,
		}
	}

	pub(crate) fn open(&mut self, kind: PromptKind) {
		*self = Self::Open(Prompt {
			kind,
			input: String::new(),
		});
	}

	fn take(&mut self) -> Option<Prompt> {
		match std::mem::take(self) {
			Self::Open(prompt) => Some(prompt),
			Self::Closed => None,
		}
	}
}

/// Result of feeding a key to the open prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
	/// The prompt is still collecting input.
	Continue,
	/// The prompt closed.
	Closed,
	/// The prompt closed but its value was refused. The status says why.
	Rejected,
}

impl Session {
	/// Appends `ch` to the prompt input, ignoring control characters and
	/// input past the prompt's length limit.
	pub fn prompt_insert(&mut self, ch: char) {
		if let PromptState::Open(prompt) = self.prompt_mut()
			&& !ch.is_control()
			&& prompt.input.chars().count() < prompt.max_len()
		{
			prompt.input.push(ch);
		}
	}

	pub fn prompt_backspace(&mut self) {
		if let PromptState::Open(prompt) = self.prompt_mut() {
			prompt.input.pop();
		}
	}

	/// Abandons the prompt without applying anything.
	pub fn prompt_cancel(&mut self) {
		let Some(prompt) = self.prompt_mut().take() else {
			return;
		};
		let message = match prompt.kind {
			PromptKind::EditContent { target } => match self.nodes().iter().find(|n| n.id == target) {
				Some(node) => format!("Kept previous {}.", node.describe().to_lowercase()),
				None => "Canceled.".to_string(),
			},
			PromptKind::Counts { .. } => "Kept previous counts.".to_string(),
		};
		self.set_status(message);
	}

	/// Submits the current input.
	///
	/// Content prompts apply immediately. Count prompts move on to the next
	/// category; blank keeps that category's current count, and anything that
	/// is not a whole number is discarded so the same category is asked again.
	/// After the last category the collected counts are applied.
	pub fn prompt_submit(&mut self) -> PromptOutcome {
		let Some(prompt) = self.prompt_mut().take() else {
			return PromptOutcome::Closed;
		};
		let text = prompt.input.trim().to_string();

		match prompt.kind {
			PromptKind::EditContent { target } => {
				match self.set_content(target, &text) {
					Ok(_) => PromptOutcome::Closed,
					Err(err) => {
						debug!(error = %err, %target, "prompt.content_rejected");
						PromptOutcome::Rejected
					}
				}
			}
			PromptKind::Counts {
				step,
				current,
				mut collected,
			} => {
				let category = Category::ALL[step];
				let value = if text.is_empty() {
					Some(current.get(category))
				} else if text.chars().all(|c| c.is_ascii_digit()) {
					text.parse::<usize>().ok()
				} else {
					None
				};

				let Some(value) = value else {
					self.prompt_mut().open(PromptKind::Counts { step, current, collected });
					return PromptOutcome::Continue;
				};
				collected.set(category, value);

				if step + 1 < Category::ALL.len() {
					self.prompt_mut().open(PromptKind::Counts {
						step: step + 1,
						current,
						collected,
					});
					return PromptOutcome::Continue;
				}

				match self.apply_new_counts(collected) {
					Ok(()) => PromptOutcome::Closed,
					Err(err) => {
						debug!(error = %err, "prompt.counts_rejected");
						PromptOutcome::Rejected
					}
				}
			}
		}
	}
}
