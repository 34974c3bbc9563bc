//! Firefox add-on management.
//!
//! [`AddHasExtensions`] registers the `moz/addon` vendor commands and, for
//! Firefox sessions, hands out a [`FirefoxExtensions`] implementation of
//! [`HasExtensions`].
//!
//! Installing a path the session's [`FileDetector`] considers local goes
//! through three steps: the path is packed by the [`Archiver`], uploaded with
//! `uploadFile`, and the returned remote path is passed to the install
//! command. Any other path is handed to the install command unchanged.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;

use wd_protocol::{
	Browser, Capabilities, CommandDescriptor, INSTALL_EXTENSION, InstallAddonParams, UNINSTALL_EXTENSION,
	UninstallAddonParams,
};
use wd_runtime::{Error, ExecuteMethod, Result, decode_result};

use crate::archive::{Archiver, ZipArchiver};
use crate::augment::{AugmenterProvider, Capability, CapabilityKind};
use crate::file_detector::FileDetector;
use crate::upload::upload;

/// Boxed future returned by [`HasExtensions`] methods.
pub type ExtensionFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Install and uninstall browser add-ons in a live session.
pub trait HasExtensions: Send + Sync {
	/// Installs the add-on at `path` and returns its id.
	fn install_extension<'a>(&'a self, path: &'a Path) -> ExtensionFuture<'a, String>;

	/// Uninstalls a previously installed add-on.
	fn uninstall_extension<'a>(&'a self, extension_id: &'a str) -> ExtensionFuture<'a, ()>;
}

/// Vendor commands contributed by [`AddHasExtensions`].
pub fn extension_commands() -> Vec<CommandDescriptor> {
	vec![
		CommandDescriptor::post(INSTALL_EXTENSION, "/session/{sessionId}/moz/addon/install"),
		CommandDescriptor::post(UNINSTALL_EXTENSION, "/session/{sessionId}/moz/addon/uninstall"),
	]
}

/// Provider attaching [`HasExtensions`] to Firefox sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddHasExtensions;

impl AugmenterProvider for AddHasExtensions {
	fn additional_commands(&self) -> Vec<CommandDescriptor> {
		extension_commands()
	}

	fn is_applicable(&self, capabilities: &Capabilities) -> bool {
		Browser::Firefox.is(capabilities)
	}

	fn described_capability(&self) -> CapabilityKind {
		CapabilityKind::Extensions
	}

	fn implementation(
		&self,
		_capabilities: &Capabilities,
		executor: Arc<dyn ExecuteMethod>,
		file_detector: Arc<dyn FileDetector>,
	) -> Capability {
		Capability::Extensions(Arc::new(FirefoxExtensions::new(executor, file_detector)))
	}
}

/// [`HasExtensions`] over the Firefox `moz/addon` endpoints.
///
/// Stateless between calls; holds only the session's executor, file
/// detector, and archiver.
#[derive(Clone)]
pub struct FirefoxExtensions {
	executor: Arc<dyn ExecuteMethod>,
	file_detector: Arc<dyn FileDetector>,
	archiver: Arc<dyn Archiver>,
}

impl FirefoxExtensions {
	pub fn new(executor: Arc<dyn ExecuteMethod>, file_detector: Arc<dyn FileDetector>) -> Self {
		Self {
			executor,
			file_detector,
			archiver: Arc::new(ZipArchiver),
		}
	}

	/// Replaces the default [`ZipArchiver`].
	pub fn with_archiver(mut self, archiver: Arc<dyn Archiver>) -> Self {
		self.archiver = archiver;
		self
	}

	/// Installs the add-on at `path`, uploading it first if it is local.
	pub async fn install(&self, path: &Path) -> Result<String> {
		if path.as_os_str().is_empty() {
			return Err(Error::InvalidArgument("extension path must not be empty".to_string()));
		}
		let path_str = path.to_str().ok_or_else(|| {
			Error::InvalidArgument(format!("extension path is not valid UTF-8: {}", path.display()))
		})?;

		let Some(local) = self.file_detector.local_file(path_str) else {
			return self.install_at_path(path_str).await;
		};

		let blob = self
			.archiver
			.pack(&local)
			.map_err(|source| Error::Upload { path: local.clone(), source })?;
		let remote_path = upload(self.executor.as_ref(), blob).await?;
		tracing::debug!(local = %local.display(), remote = %remote_path, "Staged add-on");

		self.install_at_path(&remote_path).await
	}

	/// Uninstalls the add-on with `extension_id`.
	///
	/// Unknown ids are the remote end's business; nothing is checked locally.
	pub async fn uninstall(&self, extension_id: &str) -> Result<()> {
		if extension_id.is_empty() {
			return Err(Error::InvalidArgument("extension id must not be empty".to_string()));
		}

		let params = serde_json::to_value(UninstallAddonParams {
			id: extension_id.to_string(),
		})?;
		self.executor.execute(UNINSTALL_EXTENSION, params).await?;
		tracing::info!(id = extension_id, "Uninstalled add-on");
		Ok(())
	}

	async fn install_at_path(&self, path: &str) -> Result<String> {
		let params = serde_json::to_value(InstallAddonParams {
			path: path.to_string(),
			temporary: false,
		})?;
		let value = self.executor.execute(INSTALL_EXTENSION, params).await?;
		let id: String = decode_result(INSTALL_EXTENSION, value)?;
		tracing::info!(id = %id, path, "Installed add-on");
		Ok(id)
	}
}

impl HasExtensions for FirefoxExtensions {
	fn install_extension<'a>(&'a self, path: &'a Path) -> ExtensionFuture<'a, String> {
		Box::pin(self.install(path))
	}

	fn uninstall_extension<'a>(&'a self, extension_id: &'a str) -> ExtensionFuture<'a, ()> {
		Box::pin(self.uninstall(extension_id))
	}
}
