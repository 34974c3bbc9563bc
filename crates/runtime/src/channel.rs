//! Channel - session-scoped command proxy.
//!
//! The Channel binds a session id to a dispatcher; capability implementations
//! execute commands through it without knowing the id.

use std::sync::Arc;

use serde_json::Value;
use wd_protocol::CommandDescriptor;

use crate::dispatcher::{AsyncValueResult, CommandDispatcher, ExecuteMethod};
use crate::error::{Error, Result};

/// Channel provides command execution for a single session.
#[derive(Clone)]
pub struct Channel {
	session_id: Arc<str>,
	dispatcher: Arc<dyn CommandDispatcher>,
}

impl Channel {
	/// Creates a new Channel for the given session id.
	///
	/// An empty session id is a programming error and is rejected up front.
	pub fn new(session_id: impl Into<Arc<str>>, dispatcher: Arc<dyn CommandDispatcher>) -> Result<Self> {
		let session_id = session_id.into();
		if session_id.is_empty() {
			return Err(Error::InvalidArgument("session id must not be empty".to_string()));
		}
		Ok(Self { session_id, dispatcher })
	}

	/// Registers additional commands on the underlying dispatcher.
	pub fn define_commands(&self, descriptors: impl IntoIterator<Item = CommandDescriptor>) {
		for descriptor in descriptors {
			self.dispatcher.define_command(descriptor);
		}
	}

	/// Returns the session id this channel represents.
	pub fn session_id(&self) -> &str {
		&self.session_id
	}

	pub fn dispatcher(&self) -> &Arc<dyn CommandDispatcher> {
		&self.dispatcher
	}
}

impl ExecuteMethod for Channel {
	fn execute(&self, command: &str, params: Value) -> AsyncValueResult<'_> {
		let command = command.to_string();
		Box::pin(async move { self.dispatcher.dispatch(&self.session_id, &command, params).await })
	}
}

impl std::fmt::Debug for Channel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Channel")
			.field("session_id", &self.session_id)
			.finish_non_exhaustive()
	}
}
