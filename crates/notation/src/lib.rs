//! LaTeX generation for contraction diagrams.
//!
//! Output targets the `simpler-wick` package: every contracted operator is
//! wrapped as `\c<label>{...}` and the whole expression is placed inside
//! `\braket{ \wick{ ... } }`, with one `|`-separated group per category.

use std::collections::HashMap;

use wick_primitives::{Category, Contraction, Operator, OperatorId};

/// Highest contraction label supported by `simpler-wick`; labels wrap after it.
pub const MAX_LABEL: usize = 9;

/// Separator placed between category groups.
pub const GROUP_SEPARATOR: &str = " | ";

/// Label used for the contraction at 0-based sequence `index`.
pub const fn label_for(index: usize) -> usize {
	index % MAX_LABEL + 1
}

/// Builds the LaTeX snippet for `nodes` and `contractions`.
///
/// Returns an empty string when there are no operators. Pairs naming an
/// operator that is not in `nodes` are skipped.
pub fn generate(nodes: &[Operator], contractions: &[Contraction]) -> String {
	if nodes.is_empty() {
		return String::new();
	}

	let position: HashMap<OperatorId, usize> = nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
	let mut tokens: Vec<String> = nodes.iter().map(|n| n.content.clone()).collect();

	for (index, pair) in contractions.iter().enumerate() {
		let (Some(&a), Some(&b)) = (position.get(&pair.first), position.get(&pair.second)) else {
			tracing::debug!(first = %pair.first, second = %pair.second, "notation.skip_stale_pair");
			continue;
		};
		let label = label_for(index);
		for i in [a.min(b), a.max(b)] {
			tokens[i] = format!("\\c{label}{{{}}}", tokens[i]);
		}
	}

	let mut groups = Vec::with_capacity(Category::ALL.len());
	for category in Category::ALL {
		let group: Vec<&str> = nodes
			.iter()
			.zip(&tokens)
			.filter(|(node, _)| node.id.category == category)
			.map(|(_, token)| if token.trim().is_empty() { " " } else { token.as_str() })
			.collect();
		if !group.is_empty() {
			groups.push(group.join(" "));
		}
	}

	let inner = if groups.is_empty() {
		" ".to_string()
	} else {
		groups.join(GROUP_SEPARATOR)
	};
	format!("\\braket{{ \\wick{{ {inner} }} }}")
}

#[cfg(test)]
mod tests;
