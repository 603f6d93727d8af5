//! Configuration for pathmod.
//!
//! This module handles:
//! - Logging configuration (from `--debug` or a TOML file)
//! - Resolving the path to operate on

pub mod env;
pub mod parser;
pub mod types;

pub use env::resolve_path;
pub use parser::{parse_log_config_file, parse_log_config_str};
pub use types::{LogConfig, LogFormat, LogLevel};
