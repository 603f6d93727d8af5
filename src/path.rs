//! Colon-separated search path handling.

use std::fmt;

/// Separator between entries of a search path.
pub const SEPARATOR: &str = ":";

/// An ordered sequence of search path entries.
///
/// Entries are kept verbatim: no normalization, duplicates allowed.
/// An entry can never contain [`SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSequence {
	entries: Vec<String>,
}

impl PathSequence {
	/// Split a path string on `:`.
	///
	/// Like a plain split, the empty string yields a single empty entry, so
	/// that `parse(s).serialize() == s` holds for every input.
	pub fn parse(input: &str) -> Self {
		PathSequence {
			entries: input.split(SEPARATOR).map(str::to_string).collect(),
		}
	}

	/// Join the entries back with `:`.
	pub fn serialize(&self) -> String {
		self.entries.join(SEPARATOR)
	}

	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, String> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl From<Vec<String>> for PathSequence {
	fn from(entries: Vec<String>) -> Self {
		PathSequence { entries }
	}
}

impl FromIterator<String> for PathSequence {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		PathSequence {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a PathSequence {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl fmt::Display for PathSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.serialize())
	}
}
