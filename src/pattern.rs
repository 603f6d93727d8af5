use crate::error::{PathModError, Result};
use regex::Regex;
use regex_syntax::hir::{Hir, Look};

/// How a pattern is matched against an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
	/// The pattern must match the whole entry.
	Full,
	/// The pattern may match anywhere inside the entry.
	Search,
}

/// A compiled regex bound to a match mode.
///
/// Full-match patterns are anchored on their parsed syntax tree, so flags
/// and comments in the user's text cannot interfere. The text itself is
/// kept as-is for display and errors.
#[derive(Debug, Clone)]
pub struct EntryPattern {
	source: String,
	regex: Regex,
	mode: MatchMode,
}

impl EntryPattern {
	/// Compile a pattern for the given mode.
	pub fn new(pattern: &str, mode: MatchMode) -> Result<Self> {
		let raw = compile_regex(pattern)?;
		let regex = match mode {
			MatchMode::Search => raw,
			MatchMode::Full => {
				Regex::new(&anchored(pattern)?).map_err(|source| PathModError::InvalidPattern {
					pattern: pattern.to_string(),
					source,
				})?
			}
		};

		Ok(EntryPattern {
			source: pattern.to_string(),
			regex,
			mode,
		})
	}

	/// Shorthand for a [`MatchMode::Full`] pattern.
	pub fn full(pattern: &str) -> Result<Self> {
		Self::new(pattern, MatchMode::Full)
	}

	/// Shorthand for a [`MatchMode::Search`] pattern.
	pub fn search(pattern: &str) -> Result<Self> {
		Self::new(pattern, MatchMode::Search)
	}

	pub fn is_match(&self, entry: &str) -> bool {
		self.regex.is_match(entry)
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	pub fn mode(&self) -> MatchMode {
		self.mode
	}
}

fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| PathModError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

/// Render `pattern` as an equivalent regex that only matches whole input.
fn anchored(pattern: &str) -> Result<String> {
	let hir = regex_syntax::Parser::new()
		.parse(pattern)
		.map_err(|e| invalid_pattern(pattern, &e.to_string()))?;

	Ok(Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]).to_string())
}

fn invalid_pattern(pattern: &str, reason: &str) -> PathModError {
	PathModError::InvalidPattern {
		pattern: pattern.to_string(),
		source: regex::Error::Syntax(reason.to_string()),
	}
}
