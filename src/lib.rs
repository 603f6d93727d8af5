//! Pathmod - CLI tool for editing colon-separated search paths such as `$PATH`.
//!
//! This library provides the core functionality for pathmod, including:
//! - Parsing and serializing colon-separated path strings
//! - Removing duplicate entries while keeping the first occurrence
//! - Filtering entries by regex, as a full match or a substring search
//! - Reordering entries with a small rule language
//! - Logging configuration
//!
//! # Example
//!
//! ```
//! use pathmod_cli::{Operation, run};
//!
//! let op = Operation::reorder("/opt/java/bin:1").unwrap();
//! let path = run("/usr/bin:/opt/java/bin:/bin", &op).unwrap();
//! assert_eq!(path, "/opt/java/bin:/usr/bin:/bin");
//!
//! let op = Operation::filter("/usr/.*", false).unwrap();
//! assert_eq!(run(&path, &op).unwrap(), "/opt/java/bin:/bin");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod ops;
pub mod path;
pub mod pattern;
pub mod reorder;

#[cfg(test)]
mod proptests;

pub use error::{PathModError, Result};
pub use ops::{Operation, OperationKind};
pub use path::PathSequence;
pub use pattern::{EntryPattern, MatchMode};
pub use reorder::ReorderSpec;

use tracing::debug;

/// Parse `path`, apply `op`, and serialize the result.
pub fn run(path: &str, op: &Operation) -> Result<String> {
	let seq = PathSequence::parse(path);
	debug!("run {} on {} entries", op.kind(), seq.len());

	let result = op.apply(&seq)?;
	Ok(result.serialize())
}
