use pretty_assertions::assert_eq;

use super::*;

fn with_content(nodes: &mut [Operator], id: OperatorId, content: &str) {
	let node = nodes.iter_mut().find(|n| n.id == id).expect("node exists");
	node.content = content.to_string();
}

#[test]
fn rebuild_orders_by_category_then_ordinal() {
	let nodes = rebuild(&OperatorCounts::new(2, 1, 1), &[]);
	let ids: Vec<String> = nodes.iter().map(|n| n.id.to_string()).collect();
	assert_eq!(ids, ["I1", "I2", "V1", "E1"]);
	assert!(nodes.iter().all(|n| n.content.is_empty()));
}

#[test]
fn rebuild_skips_empty_categories() {
	let nodes = rebuild(&OperatorCounts::new(0, 2, 0), &[]);
	assert_eq!(nodes.len(), 2);
	assert!(nodes.iter().all(|n| n.id.category == Category::Interaction));
}

#[test]
fn rebuild_carries_content_for_surviving_ids() {
	let mut nodes = rebuild(&OperatorCounts::new(2, 2, 1), &[]);
	with_content(&mut nodes, OperatorId::new(Category::Input, 1), "a");
	with_content(&mut nodes, OperatorId::new(Category::Interaction, 2), "b");

	let grown = rebuild(&OperatorCounts::new(3, 2, 2), &nodes);
	assert_eq!(grown.len(), 7);
	assert_eq!(grown[0].content, "a");
	assert_eq!(grown[4].id, OperatorId::new(Category::Interaction, 2));
	assert_eq!(grown[4].content, "b");
	assert_eq!(grown[2].content, "");
}

#[test]
fn shrinking_then_regrowing_drops_content() {
	let mut nodes = rebuild(&OperatorCounts::new(3, 0, 0), &[]);
	with_content(&mut nodes, OperatorId::new(Category::Input, 2), "x");
	with_content(&mut nodes, OperatorId::new(Category::Input, 3), "y");

	let shrunk = rebuild(&OperatorCounts::new(1, 0, 0), &nodes);
	let regrown = rebuild(&OperatorCounts::new(3, 0, 0), &shrunk);
	assert!(regrown.iter().all(|n| n.content.is_empty()));
}

#[test]
fn empty_content_renders_as_bracketed_space() {
	let mut op = Operator::new(OperatorId::new(Category::External, 1));
	assert_eq!(op.display_text(), "[ ]");
	assert_eq!(op.display_width(), 3);
	op.content = "\\psi".to_string();
	assert_eq!(op.display_text(), "[\\psi]");
	assert_eq!(op.display_width(), 6);
}

#[test]
fn describe_uses_row_name() {
	let op = Operator::new(OperatorId::new(Category::Interaction, 4));
	assert_eq!(op.describe(), "Interaction Terms #4");
}

#[test]
fn counts_display_lists_every_category() {
	assert_eq!(
		OperatorCounts::default().to_string(),
		"Input States: 2 / Interaction Terms: 6 / External States: 2"
	);
}
