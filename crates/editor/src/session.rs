use tracing::{debug, info};
use wick_primitives::{Contraction, Contractions, Operator, OperatorCounts, OperatorId, rebuild};

use crate::error::{EditError, Result};
use crate::prompt::{PromptKind, PromptState};

/// Status shown before the first command.
pub const INITIAL_STATUS: &str = "Use arrows to move, Enter to start a contraction.";

/// Selection movement. The operators sit on a single row, so up/left and
/// down/right are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
	Up,
	Down,
}

/// What [`Session::begin_or_complete_pair`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
	/// The operator is now waiting for a partner.
	Pending(OperatorId),
	/// The pending operator was picked again, cancelling the gesture.
	Cancelled,
	/// A contraction was appended at this sequence index.
	Added(usize),
}

/// Editor state for one run.
#[derive(Debug)]
pub struct Session {
	counts: OperatorCounts,
	nodes: Vec<Operator>,
	contractions: Contractions,
	selected: usize,
	pending: Option<OperatorId>,
	register: String,
	status: String,
	prompt: PromptState,
}

impl Session {
	/// Starts a session with fresh, empty operators.
	pub fn new(counts: OperatorCounts) -> Result<Self> {
		if counts.total() == 0 {
			return Err(EditError::NoOperators);
		}
		info!(inputs = counts.inputs, interactions = counts.interactions, externals = counts.externals, "session.start");
		Ok(Self {
			counts,
			nodes: rebuild(&counts, &[]),
			contractions: Contractions::new(),
			selected: 0,
			pending: None,
			register: String::new(),
			status: INITIAL_STATUS.to_string(),
			prompt: PromptState::Closed,
		})
	}

	pub fn counts(&self) -> OperatorCounts {
		self.counts
	}

	pub fn nodes(&self) -> &[Operator] {
		&self.nodes
	}

	pub fn contractions(&self) -> &Contractions {
		&self.contractions
	}

	pub fn selected_index(&self) -> usize {
		self.selected
	}

	pub fn selected(&self) -> Option<&Operator> {
		self.nodes.get(self.selected)
	}

	pub fn pending(&self) -> Option<OperatorId> {
		self.pending
	}

	pub fn register(&self) -> &str {
		&self.register
	}

	pub fn status(&self) -> &str {
		&self.status
	}

	/// Replaces the status message; used for collaborator feedback such as
	/// preview and clipboard results.
	pub fn set_status(&mut self, message: impl Into<String>) {
		self.status = message.into();
	}

	pub fn prompt(&self) -> &PromptState {
		&self.prompt
	}

	pub fn prompt_mut(&mut self) -> &mut PromptState {
		&mut self.prompt
	}

	/// Current LaTeX snippet.
	pub fn notation(&self) -> String {
		wick_notation::generate(&self.nodes, self.contractions.as_slice())
	}

	/// Moves the selection one step, clamped to the operator list.
	pub fn move_selection(&mut self, direction: Direction) {
		if self.nodes.is_empty() {
			return;
		}
		self.selected = match direction {
			Direction::Left | Direction::Up => self.selected.saturating_sub(1),
			Direction::Right | Direction::Down => (self.selected + 1).min(self.nodes.len() - 1),
		};
	}

	/// Pairing gesture on `id`.
	///
	/// The first call marks `id` as pending, picking it again cancels, and
	/// picking a different operator commits the pair. Operators that already
	/// belong to a contraction are refused.
	pub fn begin_or_complete_pair(&mut self, id: OperatorId) -> Result<PairOutcome> {
		let outcome = self.pair_inner(id);
		self.status = match &outcome {
			Ok(PairOutcome::Pending(_)) => format!("Selected {}; pick a partner.", self.describe(id)),
			Ok(PairOutcome::Cancelled) => "Canceled pending selection.".to_string(),
			Ok(PairOutcome::Added(_)) => "Added contraction.".to_string(),
			Err(err) => err.to_string(),
		};
		outcome
	}

	fn pair_inner(&mut self, id: OperatorId) -> Result<PairOutcome> {
		let desc = self.describe_known(id)?;
		if self.contractions.contains(id) {
			return Err(EditError::AlreadyPaired(desc));
		}
		match self.pending {
			None => {
				self.pending = Some(id);
				Ok(PairOutcome::Pending(id))
			}
			Some(pending) if pending == id => {
				self.pending = None;
				Ok(PairOutcome::Cancelled)
			}
			Some(pending) => {
				let index = self.contractions.insert(pending, id)?;
				self.pending = None;
				debug!(first = %pending, second = %id, index, "session.pair_added");
				Ok(PairOutcome::Added(index))
			}
		}
	}

	/// Removes the contraction `id` belongs to and clears any pending pick.
	pub fn remove_contraction_for(&mut self, id: OperatorId) -> Result<Contraction> {
		let outcome = self.describe_known(id).and_then(|desc| {
			let removed = self.contractions.remove_for(id).ok_or(EditError::NothingToRemove(desc))?;
			self.pending = None;
			debug!(first = %removed.first, second = %removed.second, "session.pair_removed");
			Ok(removed)
		});
		self.status = match &outcome {
			Ok(_) => "Removed contraction.".to_string(),
			Err(err) => err.to_string(),
		};
		outcome
	}

	pub fn clear_all_contractions(&mut self) {
		self.contractions.clear();
		self.pending = None;
		self.status = "Cleared all contractions.".to_string();
		debug!("session.pairs_cleared");
	}

	/// Replaces the content of `id`. Blank text keeps the current content;
	/// returns whether anything changed.
	pub fn set_content(&mut self, id: OperatorId, text: &str) -> Result<bool> {
		let desc = self.describe_known(id).inspect_err(|err| self.status = err.to_string())?;
		let text = text.trim();
		let changed = !text.is_empty();
		if changed && let Some(node) = self.node_mut(id) {
			node.content = text.to_string();
		}
		self.status = if changed {
			format!("Updated {desc}.")
		} else {
			format!("Kept previous {}.", desc.to_lowercase())
		};
		Ok(changed)
	}

	/// Rebuilds the operator list for `counts`.
	///
	/// Content is carried over by identity. Contractions and the pending pick
	/// are always dropped because the old pairing no longer matches the new
	/// topology. A zero total is refused without touching anything.
	pub fn apply_new_counts(&mut self, counts: OperatorCounts) -> Result<()> {
		if counts.total() == 0 {
			self.status = EditError::NoOperators.to_string();
			return Err(EditError::NoOperators);
		}
		self.nodes = rebuild(&counts, &self.nodes);
		self.counts = counts;
		self.contractions.clear();
		self.pending = None;
		self.selected = 0;
		self.status = "Rebuilt layout with new counts.".to_string();
		info!(inputs = counts.inputs, interactions = counts.interactions, externals = counts.externals, "session.rebuild");
		Ok(())
	}

	/// Copies the selected operator's content into the scratch register.
	pub fn copy_selected(&mut self) -> Result<String> {
		let Some(node) = self.selected() else {
			self.status = EditError::NothingSelected.to_string();
			return Err(EditError::NothingSelected);
		};
		let (content, desc) = (node.content.clone(), node.describe());
		self.register = content.clone();
		self.status = format!("Copied {desc}.");
		Ok(content)
	}

	/// Overwrites the selected operator's content with the scratch register.
	pub fn paste_into_selected(&mut self) -> Result<()> {
		let outcome = if self.register.is_empty() {
			Err(EditError::EmptyRegister)
		} else if let Some(node) = self.nodes.get_mut(self.selected) {
			node.content = self.register.clone();
			Ok(node.describe())
		} else {
			Err(EditError::NothingSelected)
		};
		match outcome {
			Ok(desc) => {
				self.status = format!("Pasted into {desc}.");
				Ok(())
			}
			Err(err) => {
				self.status = err.to_string();
				Err(err)
			}
		}
	}

	/// Opens the content prompt for the selected operator.
	pub fn open_edit_prompt(&mut self) -> Result<()> {
		let Some(node) = self.selected() else {
			self.status = EditError::NothingSelected.to_string();
			return Err(EditError::NothingSelected);
		};
		let target = node.id;
		self.status = format!("{} value (blank keeps current):", node.describe());
		self.prompt.open(PromptKind::EditContent { target });
		Ok(())
	}

	/// Opens the count prompt, starting with the first category.
	pub fn open_counts_prompt(&mut self) {
		self.status = "Enter operator counts (blank keeps current).".to_string();
		self.prompt.open(PromptKind::counts(self.counts));
	}

	fn describe(&self, id: OperatorId) -> String {
		self.describe_known(id).unwrap_or_else(|_| id.to_string())
	}

	fn describe_known(&self, id: OperatorId) -> Result<String> {
		self.nodes
			.iter()
			.find(|n| n.id == id)
			.map(Operator::describe)
			.ok_or(EditError::UnknownOperator(id))
	}

	fn node_mut(&mut self, id: OperatorId) -> Option<&mut Operator> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}
}
