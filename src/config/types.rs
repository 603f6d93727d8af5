use crate::error::{PathModError, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Logging configuration, either built from `--debug` or loaded from a
/// `--log-cfg` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LogConfig {
	/// Maximum level to emit. Ignored when `filter` is set.
	#[serde(default)]
	pub level: LogLevel,

	/// EnvFilter directive string, e.g. `"pathmod_cli=debug,warn"`.
	#[serde(default)]
	pub filter: Option<String>,

	/// Output layout of each event.
	#[serde(default)]
	pub format: LogFormat,

	/// Emit ANSI colors.
	#[serde(default)]
	pub ansi: bool,

	/// Prefix events with their module target.
	#[serde(default)]
	pub target: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Trace,
	Debug,
	#[default]
	Info,
	Warn,
	Error,
}

/// Event layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	/// Message only.
	#[default]
	Bare,
	/// `LEVEL message`.
	Level,
	/// Timestamp, level and message.
	Full,
}

impl LogLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			LogLevel::Trace => "trace",
			LogLevel::Debug => "debug",
			LogLevel::Info => "info",
			LogLevel::Warn => "warn",
			LogLevel::Error => "error",
		}
	}
}

impl LogConfig {
	/// The configuration used when no log config file is given.
	///
	/// Without `--debug` only the bare messages at info level are shown;
	/// with it, debug events are shown prefixed by their level.
	pub fn from_debug(debug: bool) -> Self {
		if debug {
			LogConfig {
				level: LogLevel::Debug,
				format: LogFormat::Level,
				..Default::default()
			}
		} else {
			LogConfig::default()
		}
	}

	/// The directive string the subscriber filter is built from.
	pub fn directive(&self) -> &str {
		self.filter.as_deref().unwrap_or(self.level.as_str())
	}

	/// Build the EnvFilter for this configuration.
	pub fn env_filter(&self) -> Result<EnvFilter> {
		let directive = self.directive();
		EnvFilter::try_new(directive).map_err(|e| PathModError::InvalidLogFilter {
			directive: directive.to_string(),
			reason: e.to_string(),
		})
	}

	/// Validate that the filter directive parses.
	pub fn validate(&self) -> Result<()> {
		self.env_filter().map(|_| ())
	}
}
