use ratatui::layout::Position;
use wick_primitives::Operator;

/// Columns kept free on each side of the operator row.
pub const MARGIN_X: u16 = 4;

/// Smallest usable width, even on very narrow terminals.
const MIN_USABLE_WIDTH: u16 = 10;

/// Lowest row the baseline may sit on, leaving room for at least one arc.
const MIN_BASELINE: u16 = 4;

/// Screen placement of one frame's operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
	/// Top-left of each operator's display text, parallel to the node list.
	pub positions: Vec<Position>,
	/// Row every operator is drawn on.
	pub baseline: u16,
}

impl Placement {
	/// Column of the middle of node `index`'s display text.
	pub fn center_of(&self, nodes: &[Operator], index: usize) -> Option<u16> {
		let pos = self.positions.get(index)?;
		let node = nodes.get(index)?;
		Some(pos.x + (node.display_width() / 2) as u16)
	}
}

/// Places `nodes` on one row of a `width` x `height` viewport.
///
/// The usable width is split into equal slots and each operator is centered in
/// its slot.
pub fn layout(nodes: &[Operator], width: u16, height: u16) -> Placement {
	if nodes.is_empty() {
		return Placement {
			positions: Vec::new(),
			baseline: (height / 2).max(3),
		};
	}

	let usable = width.saturating_sub(2 * MARGIN_X).max(MIN_USABLE_WIDTH) as usize;
	let baseline = (height / 2).max(MIN_BASELINE);
	let slots = nodes.len();

	let positions = nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let center = MARGIN_X as usize + (2 * i + 1) * usable / (2 * slots);
			let x = center.saturating_sub(node.display_width() / 2).max(1);
			Position::new(x.min(u16::MAX as usize) as u16, baseline)
		})
		.collect();

	Placement { positions, baseline }
}

#[cfg(test)]
mod tests;
