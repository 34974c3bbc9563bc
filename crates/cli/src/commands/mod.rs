mod addon;
mod table;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputFormat;

pub async fn dispatch(cli: Cli, format: OutputFormat) -> Result<()> {
	let config = Config::from_cli(&cli)?;

	match cli.command {
		Commands::Addon(cmd) => addon::execute(cmd, &config, format).await,
		Commands::Commands => table::execute(format),
	}
}
