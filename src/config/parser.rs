use crate::config::types::LogConfig;
use crate::error::{PathModError, Result};
use std::path::Path;

/// Parse a log config file from the given path.
pub fn parse_log_config_file(path: &Path) -> Result<LogConfig> {
	let content = std::fs::read_to_string(path).map_err(|source| PathModError::LogConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_log_config_str(&content, path)
}

/// Parse a log config from a string (useful for testing).
pub fn parse_log_config_str(content: &str, path: &Path) -> Result<LogConfig> {
	let config: LogConfig =
		toml::from_str(content).map_err(|source| PathModError::LogConfigParse {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate()?;

	Ok(config)
}
