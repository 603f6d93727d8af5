use crate::error::{PathModError, Result};
use std::env::VarError;

/// Environment variable read when no path is given explicitly.
pub const PATH_VAR: &str = "PATH";

/// Return the path to operate on: the explicit one if given, else `$PATH`.
pub fn resolve_path(explicit: Option<String>) -> Result<String> {
	resolve_path_from(explicit, std::env::var(PATH_VAR))
}

fn resolve_path_from(
	explicit: Option<String>,
	inherited: std::result::Result<String, VarError>,
) -> Result<String> {
	if let Some(path) = explicit {
		return Ok(path);
	}

	match inherited {
		Ok(path) => Ok(path),
		Err(VarError::NotPresent) => Err(PathModError::PathNotSet),
		Err(VarError::NotUnicode(_)) => Err(PathModError::PathNotUnicode),
	}
}
