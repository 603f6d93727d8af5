use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pathmod_cli::config::{LogConfig, parse_log_config_file, resolve_path};
use pathmod_cli::logging::init_logging;
use pathmod_cli::{Operation, run};

/// Exit code for any failure after the command line was accepted.
const ABORT_EXIT_CODE: u8 = 3;

const REORDER_SPEC_HELP: &str = "\
The reorder definition(s), separated by ';'.
Each definition is a regex selecting path entries and an action, separated by ':'.
Allowed actions:
  1       move the entries to the first position
  $       move the entries to the last position
  <REGEX  move the entries before the first entry matching REGEX
  >REGEX  move the entries after the last entry matching REGEX
Regexes must match the whole entry.
Examples: \"/opt/java/bin:1\" (move entry to the front);
          \"/opt/java/bin:<.*openjdk.*\" (move entry before the OpenJDK entry)";

#[derive(Parser)]
#[command(name = "pathmod")]
#[command(
	author,
	version,
	about = "Perform several $PATH modifications: unify, filter and reorder entries"
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// The path to be modified (default: $PATH)
	#[arg(long, global = true)]
	path: Option<String>,

	/// Enable debug log level
	#[arg(long, global = true, conflicts_with = "log_cfg")]
	debug: bool,

	/// Optional logging config in TOML format
	#[arg(long, alias = "log_cfg", global = true, value_name = "FILE")]
	log_cfg: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Delete redundant entries (keep order)
	#[command(alias = "unique")]
	Unify,

	/// Filter out entries specified by regex
	Filter {
		/// Regex specifying the entries to be filtered out
		regex: String,

		/// Regex may match anywhere in the entry instead of the whole entry
		#[arg(long)]
		lazy: bool,
	},

	/// Reorder entries by spec
	Reorder {
		#[arg(help = "Reorder definition(s), e.g. \"/opt/java/bin:1\"", long_help = REORDER_SPEC_HELP)]
		spec: String,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	match run_cli(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::from(ABORT_EXIT_CODE)
		}
	}
}

fn run_cli(cli: Cli) -> Result<()> {
	let log_config = load_log_config(cli.debug, cli.log_cfg.as_deref())?;
	init_logging(&log_config).context("Failed to set up logging")?;

	let operation = build_operation(cli.command)?;
	let path = resolve_path(cli.path).context("Failed to determine the path to modify")?;

	let new_path = run(&path, &operation)
		.with_context(|| format!("Failed to {} path", operation.kind()))?;

	println!("{}", new_path);
	Ok(())
}

fn load_log_config(debug: bool, log_cfg: Option<&Path>) -> Result<LogConfig> {
	match log_cfg {
		Some(path) => parse_log_config_file(path)
			.with_context(|| format!("Failed to load log config: {}", path.display())),
		None => Ok(LogConfig::from_debug(debug)),
	}
}

/// Turn the parsed subcommand into a ready-to-run operation, compiling all
/// patterns up front.
fn build_operation(command: Commands) -> Result<Operation> {
	match command {
		Commands::Unify => Ok(Operation::Unify),
		Commands::Filter { regex, lazy } => Operation::filter(&regex, lazy)
			.with_context(|| format!("Invalid filter regex: {}", regex)),
		Commands::Reorder { spec } => {
			Operation::reorder(&spec).with_context(|| format!("Invalid reorder spec: {}", spec))
		}
	}
}
