use crate::error::{PathModError, Result};
use crate::pattern::EntryPattern;
use std::str::FromStr;

/// Separator between rules of a spec.
pub const RULE_SEPARATOR: char = ';';

/// Separator between selector and action of a rule.
pub const ACTION_SEPARATOR: char = ':';

/// Where a rule moves the entries its selector matches.
#[derive(Debug, Clone)]
pub enum Action {
	/// `1`: to the front.
	MoveFirst,
	/// `$`: to the end.
	MoveLast,
	/// `<REGEX`: right before the first entry matching REGEX.
	MoveBefore(EntryPattern),
	/// `>REGEX`: right after the last entry matching REGEX.
	MoveAfter(EntryPattern),
}

/// A single parsed `<selector>:<action>` rule.
#[derive(Debug, Clone)]
pub struct ReorderRule {
	/// Full-match pattern selecting the entries to move.
	pub selector: EntryPattern,

	/// The movement to perform.
	pub action: Action,

	/// The rule text as written (for logging and errors).
	pub source: String,
}

impl ReorderRule {
	/// Parse one rule. `spec` is the complete spec, used for error messages.
	fn parse(rule: &str, spec: &str) -> Result<Self> {
		if rule.is_empty() {
			return Err(invalid_spec(spec, "empty rule"));
		}

		let (selector, action) = match split_top_level(rule, ACTION_SEPARATOR, false)[..] {
			[selector, action] => (selector, action),
			_ => {
				return Err(invalid_spec(
					spec,
					&format!("rule '{rule}' is missing the ':' separator"),
				));
			}
		};

		if selector.is_empty() {
			return Err(invalid_spec(
				spec,
				&format!("rule '{rule}' has an empty selector"),
			));
		}

		// Validate the action before compiling any regex so grammar errors
		// win over pattern errors
		let action = parse_action(action, rule, spec)?;
		let selector = EntryPattern::full(selector)?;

		Ok(ReorderRule {
			selector,
			action: action.compile()?,
			source: rule.to_string(),
		})
	}
}

/// An action token that has been recognized but not yet compiled.
#[derive(Clone, Copy)]
enum ActionToken<'a> {
	First,
	Last,
	Before(&'a str),
	After(&'a str),
}

impl ActionToken<'_> {
	fn compile(self) -> Result<Action> {
		Ok(match self {
			ActionToken::First => Action::MoveFirst,
			ActionToken::Last => Action::MoveLast,
			ActionToken::Before(target) => Action::MoveBefore(EntryPattern::full(target)?),
			ActionToken::After(target) => Action::MoveAfter(EntryPattern::full(target)?),
		})
	}
}

fn parse_action<'a>(action: &'a str, rule: &str, spec: &str) -> Result<ActionToken<'a>> {
	let token = match action {
		"1" => ActionToken::First,
		"$" => ActionToken::Last,
		_ => {
			if let Some(target) = action.strip_prefix('<') {
				ActionToken::Before(target)
			} else if let Some(target) = action.strip_prefix('>') {
				ActionToken::After(target)
			} else {
				return Err(invalid_spec(
					spec,
					&format!(
						"rule '{rule}' has unknown action '{action}' (expected 1, $, <REGEX or >REGEX)"
					),
				));
			}
		}
	};

	if let ActionToken::Before(target) | ActionToken::After(target) = token
		&& target.is_empty()
	{
		return Err(invalid_spec(
			spec,
			&format!("rule '{rule}' has an empty target pattern"),
		));
	}

	Ok(token)
}

/// An ordered list of reorder rules, applied one after another.
#[derive(Debug, Clone)]
pub struct ReorderSpec {
	pub rules: Vec<ReorderRule>,
}

impl ReorderSpec {
	/// Parse a spec of the form `rule(;rule)*` where each rule is
	/// `SELECTOR:ACTION` and ACTION is one of `1`, `$`, `<REGEX`, `>REGEX`.
	///
	/// Separators only count outside of escapes, `[...]` classes and
	/// `(...)` groups, so patterns like `(?:a|b)` or `[[:alpha:]]` work.
	pub fn parse(spec: &str) -> Result<Self> {
		let rules = split_top_level(spec, RULE_SEPARATOR, true)
			.into_iter()
			.map(|rule| ReorderRule::parse(rule, spec))
			.collect::<Result<Vec<_>>>()?;

		Ok(ReorderSpec { rules })
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

impl FromStr for ReorderSpec {
	type Err = PathModError;

	fn from_str(spec: &str) -> Result<Self> {
		Self::parse(spec)
	}
}

/// Split `input` on `delimiter` where it appears outside of regex syntax.
///
/// With `all == false` only the first top-level delimiter splits, giving at
/// most two parts.
fn split_top_level(input: &str, delimiter: char, all: bool) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut start = 0;
	let mut group_depth = 0usize;
	let mut class_depth = 0usize;
	let mut chars = input.char_indices().peekable();

	while let Some((i, c)) = chars.next() {
		match c {
			'\\' => {
				chars.next();
			}
			'[' if class_depth > 0 && chars.peek().map(|(_, c)| *c) == Some(':') => {
				// POSIX class such as [[:alpha:]]
				for (_, c) in chars.by_ref() {
					if c == ']' {
						break;
					}
				}
			}
			'[' => {
				class_depth += 1;
				// A leading ']' (or '^]') is a literal inside the class
				if chars.peek().map(|(_, c)| *c) == Some('^') {
					chars.next();
				}
				if chars.peek().map(|(_, c)| *c) == Some(']') {
					chars.next();
				}
			}
			']' if class_depth > 0 => class_depth -= 1,
			'(' if class_depth == 0 => group_depth += 1,
			')' if class_depth == 0 => group_depth = group_depth.saturating_sub(1),
			c if c == delimiter && class_depth == 0 && group_depth == 0 => {
				parts.push(&input[start..i]);
				start = i + c.len_utf8();
				if !all {
					break;
				}
			}
			_ => {}
		}
	}

	parts.push(&input[start..]);
	parts
}

fn invalid_spec(spec: &str, reason: &str) -> PathModError {
	PathModError::InvalidReorderSpec {
		spec: spec.to_string(),
		reason: reason.to_string(),
	}
}
