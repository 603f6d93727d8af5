//! Property-based tests for path parsing and the path operations.

use crate::ops::{filter, unify};
use crate::path::PathSequence;
use crate::pattern::EntryPattern;
use crate::reorder::{ReorderSpec, apply_rules};
use proptest::prelude::*;
use std::collections::HashSet;

// Short entries from a tiny alphabet so duplicates and regex hits are common
fn entries_strategy() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("/[a-c]{0,2}", 0..12)
}

fn selector_strategy() -> impl Strategy<Value = &'static str> {
	prop::sample::select(vec!["/a", "/b", "/a.*", "/.", ".*", "/[ab]+"])
}

fn action_strategy() -> impl Strategy<Value = &'static str> {
	prop::sample::select(vec!["1", "$", "</a", "</b", ">/c", ">/.*", "<.*"])
}

fn sorted(mut entries: Vec<String>) -> Vec<String> {
	entries.sort();
	entries
}

proptest! {
	#![proptest_config(ProptestConfig {
		cases: 2000,
		.. ProptestConfig::default()
	})]

	// serialize(parse(s)) == s for any string
	#[test]
	fn path_round_trip_any_string(input in ".*") {
		prop_assert_eq!(PathSequence::parse(&input).serialize(), input);
	}

	// Same, with many separators and empty entries
	#[test]
	fn path_round_trip_colon_heavy(input in "[a/:]{0,40}") {
		prop_assert_eq!(PathSequence::parse(&input).serialize(), input);
	}

	// unify(unify(p)) == unify(p)
	#[test]
	fn unify_idempotent(entries in entries_strategy()) {
		let seq = PathSequence::from(entries);
		let once = unify(&seq);
		prop_assert_eq!(unify(&once), once);
	}

	// unify keeps exactly the first occurrence of each entry, in order
	#[test]
	fn unify_keeps_first_occurrences(entries in entries_strategy()) {
		let expected: Vec<String> = entries
			.iter()
			.enumerate()
			.filter(|(i, entry)| entries.iter().position(|e| e == *entry) == Some(*i))
			.map(|(_, entry)| entry.clone())
			.collect();

		let unified = unify(&PathSequence::from(entries));
		prop_assert_eq!(unified.entries(), expected.as_slice());

		let distinct: HashSet<_> = unified.iter().collect();
		prop_assert_eq!(distinct.len(), unified.len());
	}

	// A pattern that matches nothing leaves the sequence untouched
	#[test]
	fn filter_without_match_is_identity(entries in entries_strategy()) {
		let seq = PathSequence::from(entries);
		let full = EntryPattern::full("/x+").unwrap();
		let search = EntryPattern::search("x").unwrap();

		prop_assert_eq!(filter(&seq, &full), seq.clone());
		prop_assert_eq!(filter(&seq, &search), seq);
	}

	// Filtering never keeps a matching entry and never reorders the rest
	#[test]
	fn filter_removes_exactly_matches(entries in entries_strategy()) {
		let seq = PathSequence::from(entries.clone());
		let pattern = EntryPattern::full("/a.?").unwrap();
		let expected: Vec<String> = entries
			.into_iter()
			.filter(|entry| !pattern.is_match(entry))
			.collect();

		let filtered = filter(&seq, &pattern);
		prop_assert_eq!(filtered.entries(), expected.as_slice());
	}

	// Reordering only moves entries: the multiset is preserved
	#[test]
	fn reorder_preserves_entries(
		entries in entries_strategy(),
		rules in prop::collection::vec((selector_strategy(), action_strategy()), 1..4),
	) {
		let spec_text = rules
			.iter()
			.map(|(selector, action)| format!("{selector}:{action}"))
			.collect::<Vec<_>>()
			.join(";");
		let spec = ReorderSpec::parse(&spec_text).unwrap();
		let seq = PathSequence::from(entries.clone());

		if let Ok(reordered) = apply_rules(&seq, &spec) {
			prop_assert_eq!(sorted(reordered.entries().to_vec()), sorted(entries));
		}
	}

	// A rule whose selector matches nothing is a no-op
	#[test]
	fn reorder_unmatched_selector_is_noop(entries in entries_strategy()) {
		let seq = PathSequence::from(entries);
		let spec = ReorderSpec::parse("/x+:1;/x+:</nope").unwrap();
		prop_assert_eq!(apply_rules(&seq, &spec).unwrap(), seq);
	}
}
