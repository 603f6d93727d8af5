use std::path::PathBuf;

/// Library-level structured errors for pathmod.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PathModError {
	#[error("Invalid regex pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid reorder spec '{spec}': {reason}")]
	InvalidReorderSpec { spec: String, reason: String },

	#[error("Reorder target not found: no entry matches '{target}' (rule '{rule}')")]
	ReorderTargetNotFound { rule: String, target: String },

	#[error("Unknown operation: {name}")]
	UnknownOperation { name: String },

	#[error("Failed to read log config file: {path}")]
	LogConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse log config file: {path}")]
	LogConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid log filter '{directive}': {reason}")]
	InvalidLogFilter { directive: String, reason: String },

	#[error("Failed to initialize logging: {reason}")]
	LoggingInit { reason: String },

	#[error("No path given and PATH is not set")]
	PathNotSet,

	#[error("PATH is set but is not valid UTF-8")]
	PathNotUnicode,
}

/// Result type alias using PathModError.
pub type Result<T> = std::result::Result<T, PathModError>;
