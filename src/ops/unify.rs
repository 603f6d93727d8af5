use crate::path::PathSequence;
use std::collections::HashSet;
use tracing::debug;

/// Drop repeated entries, keeping the first occurrence of each.
///
/// Entries are compared by exact string equality.
pub fn unify(seq: &PathSequence) -> PathSequence {
	let mut seen = HashSet::new();

	seq.iter()
		.filter(|entry| {
			let first = seen.insert(entry.as_str());
			if first {
				debug!("+{entry}");
			} else {
				debug!("-{entry}");
			}
			first
		})
		.cloned()
		.collect()
}
