use wick_primitives::{OperatorCounts, rebuild};

use super::*;

#[test]
fn empty_node_list_only_returns_baseline() {
	let placement = layout(&[], 80, 24);
	assert!(placement.positions.is_empty());
	assert_eq!(placement.baseline, 12);
	assert_eq!(layout(&[], 80, 2).baseline, 3);
}

#[test]
fn baseline_is_half_height_with_floor() {
	let nodes = rebuild(&OperatorCounts::new(1, 0, 0), &[]);
	assert_eq!(layout(&nodes, 80, 30).baseline, 15);
	assert_eq!(layout(&nodes, 80, 5).baseline, 4);
}

#[test]
fn nodes_are_centered_in_equal_slots() {
	let nodes = rebuild(&OperatorCounts::new(2, 1, 1), &[]);
	let placement = layout(&nodes, 48, 20);
	let xs: Vec<u16> = placement.positions.iter().map(|p| p.x).collect();
	assert_eq!(xs, [8, 18, 28, 38]);
	assert!(placement.positions.iter().all(|p| p.y == 10));
	assert_eq!(placement.center_of(&nodes, 0), Some(9));
}

#[test]
fn wide_content_shifts_left_edge() {
	let mut nodes = rebuild(&OperatorCounts::new(2, 0, 0), &[]);
	nodes[1].content = "abcdefg".into();
	let placement = layout(&nodes, 48, 20);
	// slot center 34, text "[abcdefg]" is 9 wide
	assert_eq!(placement.positions[1].x, 30);
	assert_eq!(placement.center_of(&nodes, 1), Some(34));
}

#[test]
fn left_edge_never_reaches_column_zero() {
	let mut nodes = rebuild(&OperatorCounts::new(1, 0, 0), &[]);
	nodes[0].content = "a very long operator body".into();
	let placement = layout(&nodes, 12, 10);
	assert_eq!(placement.positions[0].x, 1);
}
