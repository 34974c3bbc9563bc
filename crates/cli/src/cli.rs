use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::styles::cli_styles;

/// Strategy for deciding whether an add-on path must be uploaded first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FileDetectorKind {
	/// Upload only if the path exists on this machine
	#[default]
	Local,
	/// Upload every path
	AssumeLocal,
	/// Never upload; paths are resolved by the remote end
	Remote,
}

#[derive(Parser, Debug)]
#[command(name = "wd")]
#[command(about = "WebDriver CLI - Vendor capabilities for remote browser sessions")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: json (default), ndjson, or text
	#[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
	pub format: OutputFormat,

	/// WebDriver server URL
	#[arg(long, global = true, env = "WD_SERVER_URL", default_value = "http://localhost:4444", value_name = "URL")]
	pub server: String,

	/// Id of an existing session on the server
	#[arg(long, global = true, env = "WD_SESSION_ID", value_name = "ID")]
	pub session: Option<String>,

	/// Browser the session is running (its `browserName` capability)
	#[arg(short, long, global = true, env = "WD_BROWSER", default_value = "firefox", value_name = "NAME")]
	pub browser: String,

	/// Per-request timeout in milliseconds
	#[arg(long, global = true, env = "WD_TIMEOUT_MS", value_name = "MS")]
	pub timeout: Option<u64>,

	/// How to decide whether an add-on path is local
	#[arg(long, global = true, env = "WD_FILE_DETECTOR", value_enum, default_value = "local")]
	pub file_detector: FileDetectorKind,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Manage browser add-ons in the session
	#[command(subcommand)]
	Addon(AddonCommand),

	/// List the remote commands known to this client
	Commands,
}

impl Commands {
	/// Name used in the output envelope.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Addon(AddonCommand::Install { .. }) => "addon.install",
			Commands::Addon(AddonCommand::Uninstall { .. }) => "addon.uninstall",
			Commands::Commands => "commands",
		}
	}
}

#[derive(Subcommand, Debug)]
pub enum AddonCommand {
	/// Install an add-on (.xpi file or unpacked directory) and print its id
	Install {
		/// Local path, or a path the remote end can resolve
		path: PathBuf,
	},

	/// Uninstall an add-on by id
	#[command(alias = "remove")]
	Uninstall {
		/// Add-on id returned by install
		id: String,
	},
}
