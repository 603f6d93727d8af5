use crate::path::PathSequence;
use crate::pattern::EntryPattern;
use tracing::debug;

/// Remove every entry matched by `pattern`, keeping the order of the rest.
///
/// Whether a match must cover the whole entry is decided by the pattern's
/// [`MatchMode`](crate::pattern::MatchMode).
pub fn filter(seq: &PathSequence, pattern: &EntryPattern) -> PathSequence {
	seq.iter()
		.filter(|entry| {
			let drop = pattern.is_match(entry);
			if drop {
				debug!("-{entry}");
			} else {
				debug!("+{entry}");
			}
			!drop
		})
		.cloned()
		.collect()
}
