use pretty_assertions::assert_eq;
use wick_primitives::{Contractions, OperatorCounts, rebuild};

use super::*;

fn id(category: Category, ordinal: usize) -> OperatorId {
	OperatorId::new(category, ordinal)
}

fn wrap(inner: &str) -> String {
	format!("\\braket{{ \\wick{{ {inner} }} }}")
}

#[test]
fn no_operators_yields_empty_string() {
	assert_eq!(generate(&[], &[]), "");
}

#[test]
fn blank_operators_render_as_spaces() {
	let nodes = rebuild(&OperatorCounts::new(2, 1, 1), &[]);
	let inputs = [" ", " "].join(" ");
	let expected = wrap(&[inputs.as_str(), " ", " "].join(GROUP_SEPARATOR));
	assert_eq!(generate(&nodes, &[]), expected);
}

#[test]
fn contracting_two_inputs_labels_both_with_one() {
	let mut nodes = rebuild(&OperatorCounts::new(2, 1, 1), &[]);
	nodes[0].content = "a".into();
	nodes[1].content = "b".into();
	let mut pairs = Contractions::new();
	pairs.insert(id(Category::Input, 2), id(Category::Input, 1)).unwrap();

	let expected = wrap(&["\\c1{a} \\c1{b}", " ", " "].join(GROUP_SEPARATOR));
	assert_eq!(generate(&nodes, pairs.as_slice()), expected);
}

#[test]
fn contracted_blank_operator_keeps_empty_braces() {
	let nodes = rebuild(&OperatorCounts::new(1, 1, 0), &[]);
	let mut pairs = Contractions::new();
	pairs.insert(id(Category::Input, 1), id(Category::Interaction, 1)).unwrap();
	assert_eq!(
		generate(&nodes, pairs.as_slice()),
		wrap(&["\\c1{}", "\\c1{}"].join(GROUP_SEPARATOR))
	);
}

#[test]
fn empty_categories_are_omitted() {
	let mut nodes = rebuild(&OperatorCounts::new(0, 2, 0), &[]);
	nodes[0].content = "x".into();
	nodes[1].content = "y".into();
	assert_eq!(generate(&nodes, &[]), wrap("x y"));
}

#[test]
fn separators_match_non_empty_categories() {
	for counts in [
		OperatorCounts::new(1, 0, 0),
		OperatorCounts::new(1, 0, 3),
		OperatorCounts::new(2, 6, 2),
		OperatorCounts::new(0, 4, 1),
	] {
		let mut nodes = rebuild(&counts, &[]);
		for node in &mut nodes {
			node.content = node.id.to_string();
		}
		let text = generate(&nodes, &[]);
		let non_empty = Category::ALL.iter().filter(|c| counts.get(**c) > 0).count();
		assert_eq!(text.matches("\\braket{").count(), 1, "{text}");
		assert_eq!(text.matches(GROUP_SEPARATOR).count(), non_empty - 1, "{text}");
	}
}

#[test]
fn labels_wrap_after_nine() {
	assert_eq!(label_for(0), 1);
	assert_eq!(label_for(8), 9);
	assert_eq!(label_for(9), 1);
	assert_eq!(label_for(19), 2);

	let mut nodes = rebuild(&OperatorCounts::new(0, 20, 0), &[]);
	for node in &mut nodes {
		node.content = format!("o{}", node.id.ordinal);
	}
	let mut pairs = Contractions::new();
	for n in 0..10 {
		pairs
			.insert(id(Category::Interaction, 2 * n + 1), id(Category::Interaction, 2 * n + 2))
			.unwrap();
	}

	let text = generate(&nodes, pairs.as_slice());
	assert!(text.contains("\\c9{o17} \\c9{o18}"), "{text}");
	assert!(text.contains("\\c1{o19} \\c1{o20}"), "{text}");
	assert_eq!(text, generate(&nodes, pairs.as_slice()));
}

#[test]
fn stale_pairs_are_skipped() {
	let mut nodes = rebuild(&OperatorCounts::new(2, 0, 0), &[]);
	nodes[0].content = "a".into();
	nodes[1].content = "b".into();
	let stale = [
		Contraction {
			first: id(Category::Input, 1),
			second: id(Category::External, 4),
		},
		Contraction {
			first: id(Category::Input, 1),
			second: id(Category::Input, 2),
		},
	];
	assert_eq!(generate(&nodes, &stale), wrap("\\c2{a} \\c2{b}"));
}
