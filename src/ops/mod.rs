//! Path operations.
//!
//! This module handles:
//! - Removing duplicate entries (`unify`)
//! - Removing entries matching a regex (`filter`)
//! - Dispatching to the reorder engine (`reorder`)

pub mod filter;
pub mod unify;

pub use filter::filter;
pub use unify::unify;

use crate::error::{PathModError, Result};
use crate::path::PathSequence;
use crate::pattern::{EntryPattern, MatchMode};
use crate::reorder::{ReorderSpec, apply_rules};
use std::fmt;
use std::str::FromStr;

/// Names of the supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
	Unify,
	Filter,
	Reorder,
}

impl FromStr for OperationKind {
	type Err = PathModError;

	/// Accepts `unify` (or `unique`), `filter` and `reorder`.
	fn from_str(name: &str) -> Result<Self> {
		match name {
			"unify" | "unique" => Ok(OperationKind::Unify),
			"filter" => Ok(OperationKind::Filter),
			"reorder" => Ok(OperationKind::Reorder),
			_ => Err(PathModError::UnknownOperation {
				name: name.to_string(),
			}),
		}
	}
}

impl fmt::Display for OperationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OperationKind::Unify => write!(f, "unify"),
			OperationKind::Filter => write!(f, "filter"),
			OperationKind::Reorder => write!(f, "reorder"),
		}
	}
}

/// A fully prepared operation: all patterns are compiled.
#[derive(Debug, Clone)]
pub enum Operation {
	Unify,
	Filter { pattern: EntryPattern },
	Reorder { spec: ReorderSpec },
}

impl Operation {
	/// Build a filter operation. `lazy` selects substring search instead of
	/// full-match.
	pub fn filter(regex: &str, lazy: bool) -> Result<Self> {
		let mode = if lazy {
			MatchMode::Search
		} else {
			MatchMode::Full
		};
		Ok(Operation::Filter {
			pattern: EntryPattern::new(regex, mode)?,
		})
	}

	/// Build a reorder operation from a spec string.
	pub fn reorder(spec: &str) -> Result<Self> {
		Ok(Operation::Reorder {
			spec: spec.parse()?,
		})
	}

	/// Build an operation from its name and the string parameters the
	/// command line provides.
	///
	/// `argument` is the regex for `filter` and the spec for `reorder`;
	/// `unify` ignores it.
	pub fn from_name(name: &str, argument: &str, lazy: bool) -> Result<Self> {
		match name.parse::<OperationKind>()? {
			OperationKind::Unify => Ok(Operation::Unify),
			OperationKind::Filter => Self::filter(argument, lazy),
			OperationKind::Reorder => Self::reorder(argument),
		}
	}

	pub fn kind(&self) -> OperationKind {
		match self {
			Operation::Unify => OperationKind::Unify,
			Operation::Filter { .. } => OperationKind::Filter,
			Operation::Reorder { .. } => OperationKind::Reorder,
		}
	}

	/// Apply this operation to a path sequence.
	pub fn apply(&self, seq: &PathSequence) -> Result<PathSequence> {
		match self {
			Operation::Unify => Ok(unify(seq)),
			Operation::Filter { pattern } => Ok(filter(seq, pattern)),
			Operation::Reorder { spec } => apply_rules(seq, spec),
		}
	}
}
