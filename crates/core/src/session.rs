//! Remote session handle.
//!
//! A [`RemoteSession`] is an already-created session: its id, the
//! capabilities it reported, the channel used to reach it, and the
//! [`FileDetector`] that decides which paths need uploading.

use std::sync::Arc;

use parking_lot::RwLock;
use wd_protocol::Capabilities;
use wd_runtime::{Channel, CommandDispatcher, ExecuteMethod, HttpCommandExecutor, Result};

use crate::file_detector::{FileDetector, LocalFileDetector};

/// Builder for [`RemoteSession`].
pub struct RemoteSessionBuilder {
	session_id: String,
	dispatcher: Arc<dyn CommandDispatcher>,
	capabilities: Capabilities,
	file_detector: Arc<dyn FileDetector>,
}

impl RemoteSessionBuilder {
	pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
		self.capabilities = capabilities;
		self
	}

	pub fn file_detector(mut self, file_detector: Arc<dyn FileDetector>) -> Self {
		self.file_detector = file_detector;
		self
	}

	pub fn build(self) -> Result<RemoteSession> {
		let channel = Channel::new(self.session_id, self.dispatcher)?;
		Ok(RemoteSession {
			channel: Arc::new(channel),
			capabilities: self.capabilities,
			file_detector: RwLock::new(self.file_detector),
		})
	}
}

/// Handle to a live remote session.
pub struct RemoteSession {
	channel: Arc<Channel>,
	capabilities: Capabilities,
	file_detector: RwLock<Arc<dyn FileDetector>>,
}

impl RemoteSession {
	/// Starts building a session bound to `dispatcher`.
	///
	/// Defaults: empty capabilities, [`LocalFileDetector`].
	pub fn builder(session_id: impl Into<String>, dispatcher: Arc<dyn CommandDispatcher>) -> RemoteSessionBuilder {
		RemoteSessionBuilder {
			session_id: session_id.into(),
			dispatcher,
			capabilities: Capabilities::default(),
			file_detector: Arc::new(LocalFileDetector),
		}
	}

	/// Attaches to an existing session on a WebDriver server over HTTP.
	pub fn attach(server_url: &str, session_id: impl Into<String>, capabilities: Capabilities) -> Result<Self> {
		let executor = HttpCommandExecutor::new(server_url)?;
		Self::builder(session_id, Arc::new(executor))
			.capabilities(capabilities)
			.build()
	}

	pub fn session_id(&self) -> &str {
		self.channel.session_id()
	}

	pub fn capabilities(&self) -> &Capabilities {
		&self.capabilities
	}

	pub fn channel(&self) -> &Arc<Channel> {
		&self.channel
	}

	/// The session's command executor, for capability implementations.
	pub fn executor(&self) -> Arc<dyn ExecuteMethod> {
		self.channel.clone()
	}

	pub fn file_detector(&self) -> Arc<dyn FileDetector> {
		self.file_detector.read().clone()
	}

	/// Swaps the file detector. Capabilities built afterwards use the new one.
	pub fn set_file_detector(&self, file_detector: Arc<dyn FileDetector>) {
		*self.file_detector.write() = file_detector;
	}
}

impl std::fmt::Debug for RemoteSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RemoteSession")
			.field("session_id", &self.session_id())
			.field("capabilities", &self.capabilities)
			.field("file_detector", &self.file_detector())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file_detector::UselessFileDetector;
	use wd_protocol::BROWSER_NAME;

	fn executor() -> Arc<dyn CommandDispatcher> {
		Arc::new(HttpCommandExecutor::new("http://localhost:4444").unwrap())
	}

	#[test]
	fn test_builder_defaults() {
		let session = RemoteSession::builder("abc", executor()).build().unwrap();
		assert_eq!(session.session_id(), "abc");
		assert!(session.capabilities().is_empty());
		assert!(format!("{:?}", session.file_detector()).contains("LocalFileDetector"));
	}

	#[test]
	fn test_empty_session_id_rejected() {
		let err = RemoteSession::builder("", executor()).build().unwrap_err();
		assert!(err.is_invalid_argument());
	}

	#[test]
	fn test_set_file_detector() {
		let session = RemoteSession::attach(
			"http://localhost:4444",
			"abc",
			Capabilities::new().with(BROWSER_NAME, "firefox"),
		)
		.unwrap();
		session.set_file_detector(Arc::new(UselessFileDetector));
		assert!(format!("{:?}", session.file_detector()).contains("UselessFileDetector"));
		assert_eq!(session.capabilities().browser_name(), Some("firefox"));
	}
}
