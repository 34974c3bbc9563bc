//! Command execution seams.
//!
//! Two traits separate "who knows how to reach the remote end" from "who
//! issues commands for one session":
//!
//! - [`CommandDispatcher`] sends a named command for any session id and owns
//!   the command table (implemented by [`HttpCommandExecutor`]).
//! - [`ExecuteMethod`] is bound to a single session and is what capability
//!   implementations close over (implemented by [`Channel`]).
//!
//! [`HttpCommandExecutor`]: crate::HttpCommandExecutor
//! [`Channel`]: crate::Channel

use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;
use wd_protocol::CommandDescriptor;

use crate::error::{Error, Result};

/// Type alias for the boxed future returned by command execution.
pub type AsyncValueResult<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Server-level command sender.
pub trait CommandDispatcher: Send + Sync {
	/// Sends `command` with `params` on behalf of `session_id` and returns the
	/// decoded `value` of the response.
	fn dispatch(&self, session_id: &str, command: &str, params: Value) -> AsyncValueResult<'_>;

	/// Registers an additional command.
	fn define_command(&self, descriptor: CommandDescriptor);

	/// Looks up a command by name.
	fn command(&self, name: &str) -> Option<CommandDescriptor>;
}

/// Session-bound command execution.
///
/// No timeouts, retries, or ordering are added at this level; whatever the
/// underlying dispatcher does is what the caller gets.
pub trait ExecuteMethod: Send + Sync {
	fn execute(&self, command: &str, params: Value) -> AsyncValueResult<'_>;
}

/// Decodes a command result into `R`, reporting shape mismatches as
/// [`Error::Protocol`].
pub fn decode_result<R: DeserializeOwned>(command: &str, value: Value) -> Result<R> {
	serde_json::from_value(value)
		.map_err(|e| Error::Protocol(format!("Unexpected result for '{command}': {e}")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_decode_result_string() {
		let id: String = decode_result("installExtension", json!("addon@example.com")).unwrap();
		assert_eq!(id, "addon@example.com");
	}

	#[test]
	fn test_decode_result_mismatch_is_protocol_error() {
		let err = decode_result::<String>("uploadFile", json!({"path": 1})).unwrap_err();
		match err {
			Error::Protocol(msg) => assert!(msg.contains("uploadFile"), "got: {msg}"),
			other => panic!("Expected Protocol error, got: {other:?}"),
		}
	}
}
