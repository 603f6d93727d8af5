//! Logging initialization.
//!
//! Events always go to stderr; stdout only carries the resulting path.

use crate::config::{LogConfig, LogFormat};
use crate::error::{PathModError, Result};

/// Install the global tracing subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> Result<()> {
	let builder = tracing_subscriber::fmt()
		.with_env_filter(config.env_filter()?)
		.with_writer(std::io::stderr)
		.with_ansi(config.ansi)
		.with_target(config.target);

	let result = match config.format {
		LogFormat::Bare => builder.without_time().with_level(false).try_init(),
		LogFormat::Level => builder.without_time().with_level(true).try_init(),
		LogFormat::Full => builder.with_level(true).try_init(),
	};

	result.map_err(|e| PathModError::LoggingInit {
		reason: e.to_string(),
	})
}
