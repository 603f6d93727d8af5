use crate::error::{PathModError, Result};
use crate::path::PathSequence;
use crate::pattern::EntryPattern;
use crate::reorder::parser::{Action, ReorderRule, ReorderSpec};
use tracing::debug;

/// Apply every rule of `spec` to `seq`, in order.
///
/// Each rule sees the sequence as left by the previous one. Within a rule,
/// all entries matched by the selector are lifted out as one block (keeping
/// their relative order), the target position is computed on the remaining
/// entries, and the block is inserted there.
pub fn apply_rules(seq: &PathSequence, spec: &ReorderSpec) -> Result<PathSequence> {
	let mut entries = seq.entries().to_vec();

	for rule in &spec.rules {
		entries = apply_rule(entries, rule)?;
	}

	Ok(PathSequence::from(entries))
}

/// Apply a single rule to a list of entries.
fn apply_rule(entries: Vec<String>, rule: &ReorderRule) -> Result<Vec<String>> {
	let (moved, mut rest): (Vec<String>, Vec<String>) = entries
		.into_iter()
		.partition(|entry| rule.selector.is_match(entry));

	if moved.is_empty() {
		debug!("rule '{}': no entry matches, skipped", rule.source);
		// Nothing was lifted out, so `rest` is the unchanged input
		return Ok(rest);
	}

	let position = match &rule.action {
		Action::MoveFirst => 0,
		Action::MoveLast => rest.len(),
		Action::MoveBefore(target) => first_match(&rest, target)
			.ok_or_else(|| target_not_found(rule, target))?,
		Action::MoveAfter(target) => last_match(&rest, target)
			.map(|index| index + 1)
			.ok_or_else(|| target_not_found(rule, target))?,
	};

	debug!(
		"rule '{}': moving {:?} to position {}",
		rule.source, moved, position
	);

	rest.splice(position..position, moved);
	Ok(rest)
}

fn first_match(entries: &[String], target: &EntryPattern) -> Option<usize> {
	entries.iter().position(|entry| target.is_match(entry))
}

fn last_match(entries: &[String], target: &EntryPattern) -> Option<usize> {
	entries.iter().rposition(|entry| target.is_match(entry))
}

fn target_not_found(rule: &ReorderRule, target: &EntryPattern) -> PathModError {
	PathModError::ReorderTargetNotFound {
		rule: rule.source.clone(),
		target: target.as_str().to_string(),
	}
}
