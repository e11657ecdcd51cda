use std::collections::HashMap;
use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Operator category.
///
/// Categories have a fixed order which drives node placement and the grouping
/// of tokens in generated notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// Incoming states.
	Input,
	/// Interaction vertices.
	Interaction,
	/// Outgoing states.
	External,
}

impl Category {
	/// All categories in their fixed order.
	pub const ALL: [Category; 3] = [Category::Input, Category::Interaction, Category::External];

	/// Human readable row name.
	pub const fn name(self) -> &'static str {
		match self {
			Category::Input => "Input States",
			Category::Interaction => "Interaction Terms",
			Category::External => "External States",
		}
	}

	/// Single letter used in compact operator identities.
	pub const fn prefix(self) -> char {
		match self {
			Category::Input => 'I',
			Category::Interaction => 'V',
			Category::External => 'E',
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Stable identity of an operator slot.
///
/// Identity survives a count change as long as the slot still exists; the
/// ordinal is 1-based within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorId {
	pub category: Category,
	pub ordinal: usize,
}

impl OperatorId {
	pub const fn new(category: Category, ordinal: usize) -> Self {
		Self { category, ordinal }
	}
}

impl fmt::Display for OperatorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.category.prefix(), self.ordinal)
	}
}

/// One editable operator slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
	pub id: OperatorId,
	/// Free-form LaTeX content. Empty until edited.
	pub content: String,
}

impl Operator {
	pub fn new(id: OperatorId) -> Self {
		Self {
			id,
			content: String::new(),
		}
	}

	/// Bracketed display text. Empty content renders as a single space so the
	/// slot stays visible.
	pub fn display_text(&self) -> String {
		if self.content.is_empty() {
			"[ ]".to_string()
		} else {
			format!("[{}]", self.content)
		}
	}

	/// Terminal column width of [`Self::display_text`].
	pub fn display_width(&self) -> usize {
		self.display_text().width()
	}

	/// Status-line description, e.g. `Input States #2`.
	pub fn describe(&self) -> String {
		format!("{} #{}", self.id.category.name(), self.id.ordinal)
	}
}

/// Number of operators requested per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorCounts {
	pub inputs: usize,
	pub interactions: usize,
	pub externals: usize,
}

impl Default for OperatorCounts {
	fn default() -> Self {
		Self {
			inputs: 2,
			interactions: 6,
			externals: 2,
		}
	}
}

impl OperatorCounts {
	pub const fn new(inputs: usize, interactions: usize, externals: usize) -> Self {
		Self {
			inputs,
			interactions,
			externals,
		}
	}

	pub const fn get(&self, category: Category) -> usize {
		match category {
			Category::Input => self.inputs,
			Category::Interaction => self.interactions,
			Category::External => self.externals,
		}
	}

	pub fn set(&mut self, category: Category, count: usize) {
		match category {
			Category::Input => self.inputs = count,
			Category::Interaction => self.interactions = count,
			Category::External => self.externals = count,
		}
	}

	pub const fn total(&self) -> usize {
		self.inputs + self.interactions + self.externals
	}
}

impl fmt::Display for OperatorCounts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, category) in Category::ALL.into_iter().enumerate() {
			if i > 0 {
				f.write_str(" / ")?;
			}
			write!(f, "{}: {}", category.name(), self.get(category))?;
		}
		Ok(())
	}
}

/// Builds the operator list for `counts`, carrying over content from
/// `previous` for every identity present in both.
pub fn rebuild(counts: &OperatorCounts, previous: &[Operator]) -> Vec<Operator> {
	let carried: HashMap<OperatorId, &str> = previous
		.iter()
		.map(|op| (op.id, op.content.as_str()))
		.collect();

	let mut nodes = Vec::with_capacity(counts.total());
	for category in Category::ALL {
		for ordinal in 1..=counts.get(category) {
			let id = OperatorId::new(category, ordinal);
			let content = carried.get(&id).copied().unwrap_or_default().to_string();
			nodes.push(Operator { id, content });
		}
	}
	nodes
}

#[cfg(test)]
mod tests;
