use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Style;
use wick_primitives::{Contraction, Operator, OperatorId};

use crate::placement::Placement;

pub const VERTICAL: char = '|';
pub const HORIZONTAL: char = '-';
pub const CORNER: char = '+';

/// Geometry of one contraction arc.
///
/// The arc rises from `baseline - 1` to `top` at both `left` and `right`, and
/// the two risers are joined by a horizontal run on row `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
	/// Position of the contraction in the sequence; selects the color.
	pub index: usize,
	pub left: u16,
	pub right: u16,
	pub baseline: u16,
	pub top: u16,
	pub level: u16,
}

/// Number of distinct arc heights that fit above `baseline`.
pub fn max_levels(baseline: u16) -> u16 {
	(baseline.saturating_sub(2).max(1) / 2).max(1)
}

/// Computes an arc for every drawable contraction.
///
/// Pairs whose operators are missing or whose centers coincide produce no arc.
/// Levels cycle through [`max_levels`], so arcs may share a height once there
/// are more contractions than levels.
pub fn route_connections(nodes: &[Operator], placement: &Placement, contractions: &[Contraction]) -> Vec<Connector> {
	let baseline = placement.baseline;
	if baseline <= 1 || contractions.is_empty() {
		return Vec::new();
	}

	let index_of: HashMap<OperatorId, usize> = nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
	let levels = max_levels(baseline);

	contractions
		.iter()
		.enumerate()
		.filter_map(|(index, pair)| {
			let a = placement.center_of(nodes, *index_of.get(&pair.first)?)?;
			let b = placement.center_of(nodes, *index_of.get(&pair.second)?)?;
			if a == b {
				return None;
			}
			let level = (index % levels as usize) as u16;
			let top = baseline.saturating_sub(2 + level * 2).max(1);
			Some(Connector {
				index,
				left: a.min(b),
				right: a.max(b),
				baseline,
				top,
				level,
			})
		})
		.collect()
}

/// Draws `connector` into `buf`. Cells outside the buffer are skipped.
pub fn paint_connector(buf: &mut Buffer, connector: &Connector, style: Style) {
	let mut put = |x: u16, y: u16, ch: char| {
		if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
			cell.set_char(ch).set_style(style);
		}
	};

	for x in [connector.left, connector.right] {
		for y in connector.top..connector.baseline {
			put(x, y, VERTICAL);
		}
	}

	let y = connector.top;
	if connector.left == connector.right {
		put(connector.left, y, HORIZONTAL);
		return;
	}
	put(connector.left, y, CORNER);
	put(connector.right, y, CORNER);
	for x in connector.left + 1..connector.right {
		put(x, y, HORIZONTAL);
	}
}
