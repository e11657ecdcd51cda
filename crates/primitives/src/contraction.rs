use std::collections::HashMap;

use thiserror::Error;

use crate::operator::OperatorId;

/// A committed pairing between two distinct operators.
///
/// The pair is unordered for lookup purposes; `first` is the operator that was
/// picked first and is kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contraction {
	pub first: OperatorId,
	pub second: OperatorId,
}

/// Reasons a pair cannot be added to a [`Contractions`] sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractionError {
	#[error("{0} cannot be contracted with itself")]
	SelfPair(OperatorId),
	#[error("{0} already participates in a contraction")]
	AlreadyPaired(OperatorId),
}

/// Insertion-ordered contraction sequence.
///
/// Every operator appears in at most one pair. [`Contractions::insert`] is the
/// only way to add a pair and rejects anything that would break that rule.
#[derive(Debug, Clone, Default)]
pub struct Contractions {
	pairs: Vec<Contraction>,
	lookup: HashMap<OperatorId, usize>,
}

impl Contractions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `(first, second)` and returns its sequence index.
	pub fn insert(&mut self, first: OperatorId, second: OperatorId) -> Result<usize, ContractionError> {
		if first == second {
			return Err(ContractionError::SelfPair(first));
		}
		for id in [first, second] {
			if self.lookup.contains_key(&id) {
				return Err(ContractionError::AlreadyPaired(id));
			}
		}

		let index = self.pairs.len();
		self.pairs.push(Contraction { first, second });
		self.lookup.insert(first, index);
		self.lookup.insert(second, index);
		tracing::trace!(%first, %second, index, "contraction.insert");
		Ok(index)
	}

	/// Removes the pair containing `id`, shifting later pairs down by one.
	pub fn remove_for(&mut self, id: OperatorId) -> Option<Contraction> {
		let index = self.lookup.get(&id).copied()?;
		let removed = self.pairs.remove(index);
		self.rebuild_lookup();
		tracing::trace!(first = %removed.first, second = %removed.second, index, "contraction.remove");
		Some(removed)
	}

	pub fn clear(&mut self) {
		self.pairs.clear();
		self.lookup.clear();
	}

	/// Sequence index of the pair containing `id`.
	pub fn index_of(&self, id: OperatorId) -> Option<usize> {
		self.lookup.get(&id).copied()
	}

	pub fn contains(&self, id: OperatorId) -> bool {
		self.lookup.contains_key(&id)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Contraction> {
		self.pairs.iter()
	}

	pub fn as_slice(&self) -> &[Contraction] {
		&self.pairs
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	fn rebuild_lookup(&mut self) {
		self.lookup.clear();
		for (index, pair) in self.pairs.iter().enumerate() {
			self.lookup.insert(pair.first, index);
			self.lookup.insert(pair.second, index);
		}
	}
}

impl<'a> IntoIterator for &'a Contractions {
	type Item = &'a Contraction;
	type IntoIter = std::slice::Iter<'a, Contraction>;

	fn into_iter(self) -> Self::IntoIter {
		self.pairs.iter()
	}
}
