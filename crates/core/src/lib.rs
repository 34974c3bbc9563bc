//! wd: capability augmentation for remote WebDriver sessions.
//!
//! A base WebDriver client speaks a fixed command set. Vendor features such
//! as Firefox add-on installation live behind extra endpoints and, when they
//! take a local file, need that file shipped to the remote end first. This
//! crate provides:
//!
//! - [`Augmenter`]: a registry of [`AugmenterProvider`]s that attach typed
//!   capabilities to sessions whose capabilities match
//! - [`HasExtensions`]: add-on install/uninstall, implemented for Firefox by
//!   [`FirefoxExtensions`]
//! - [`FileDetector`], [`Archiver`], and [`upload`] for staging local files
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wd::{Augmenter, Capabilities, RemoteSession, BROWSER_NAME};
//!
//! #[tokio::main]
//! async fn main() -> wd::Result<()> {
//!     let caps = Capabilities::new().with(BROWSER_NAME, "firefox");
//!     let session = RemoteSession::attach("http://localhost:4444", "8d1c...", caps)?;
//!
//!     let augmented = Augmenter::with_defaults().augment(&session);
//!     if let Some(ext) = augmented.extensions() {
//!         let id = ext.install_extension(Path::new("./my-addon.xpi")).await?;
//!         ext.uninstall_extension(&id).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod augment;
pub mod extensions;
pub mod file_detector;
pub mod session;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{ArchiveBlob, Archiver, ZipArchiver};
pub use augment::{AugmentedSession, Augmenter, AugmenterProvider, Capability, CapabilityKind};
pub use extensions::{AddHasExtensions, ExtensionFuture, FirefoxExtensions, HasExtensions, extension_commands};
pub use file_detector::{AssumeLocalFileDetector, FileDetector, LocalFileDetector, UselessFileDetector};
pub use session::{RemoteSession, RemoteSessionBuilder};
pub use upload::upload;

pub use wd_protocol::{
	BROWSER_NAME, BROWSER_VERSION, Browser, Capabilities, CommandDescriptor, HttpMethod, INSTALL_EXTENSION,
	PLATFORM_NAME, UNINSTALL_EXTENSION, UPLOAD_FILE,
};
pub use wd_runtime::{
	Channel, CommandDispatcher, CommandTable, Error, ExecuteMethod, HttpCommandExecutor, Result,
};
