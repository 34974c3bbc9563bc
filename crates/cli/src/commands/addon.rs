use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use wd::{Augmenter, HasExtensions, HttpCommandExecutor, RemoteSession};

use crate::cli::AddonCommand;
use crate::config::Config;
use crate::error::{Result, WdError};
use crate::output::{
	AddonInstallData, AddonUninstallData, CommandInputs, OutputFormat, ResultBuilder, print_result,
};

pub async fn execute(cmd: AddonCommand, config: &Config, format: OutputFormat) -> Result<()> {
	let extensions = connect(config)?;
	let mut inputs = CommandInputs {
		server: Some(config.server.clone()),
		session_id: config.session.clone(),
		..Default::default()
	};

	match cmd {
		AddonCommand::Install { path } => {
			inputs.path = Some(path.clone());
			let id = install(extensions.as_ref(), &path).await?;
			emit("addon.install", inputs, AddonInstallData { id, path }, format);
		}
		AddonCommand::Uninstall { id } => {
			inputs.id = Some(id.clone());
			extensions.uninstall_extension(&id).await?;
			tracing::info!(id = %id, "add-on uninstalled");
			emit("addon.uninstall", inputs, AddonUninstallData { id }, format);
		}
	}

	Ok(())
}

/// Attaches to the configured session and resolves its extensions capability.
fn connect(config: &Config) -> Result<Arc<dyn HasExtensions>> {
	let session_id = config.require_session()?;

	let mut executor = HttpCommandExecutor::builder(config.server.as_str());
	if let Some(timeout) = config.timeout {
		executor = executor.timeout(timeout);
	}
	let executor = executor.build()?;

	let session = RemoteSession::builder(session_id, Arc::new(executor))
		.capabilities(config.capabilities())
		.file_detector(config.file_detector())
		.build()?;

	Augmenter::with_defaults()
		.augment(&session)
		.extensions()
		.ok_or_else(|| WdError::Unsupported {
			capability: "extensions",
			browser: config.browser.clone(),
		})
}

async fn install(extensions: &dyn HasExtensions, path: &Path) -> Result<String> {
	let id = extensions.install_extension(path).await?;
	tracing::info!(id = %id, path = %path.display(), "add-on installed");
	Ok(id)
}

fn emit<T: Serialize>(command: &str, inputs: CommandInputs, data: T, format: OutputFormat) {
	let result = ResultBuilder::new(command).inputs(inputs).data(data).build();
	print_result(&result, format);
}
