//! Error types for the WebDriver runtime.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while executing remote commands.
#[derive(Debug, Error)]
pub enum Error {
	/// Invalid argument provided by the caller; nothing was sent.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A local resource could not be packaged for upload.
	#[error("Cannot upload {}: {source}", path.display())]
	Upload {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Channel-level failure (connection refused, session gone, client error).
	#[error("Transport error: {0}")]
	Transport(String),

	/// Response did not have the expected shape.
	#[error("Protocol error: {0}")]
	Protocol(String),

	/// Remote end rejected the command with a W3C error.
	#[error("{error}: {message}")]
	Remote {
		/// W3C error code (e.g., "unknown error", "invalid argument")
		error: String,
		/// Human-readable error message
		message: String,
		/// Remote stack trace (if provided)
		stacktrace: Option<String>,
	},

	/// Command name not present in the command table.
	#[error("Unknown command: {0}")]
	UnknownCommand(String),

	/// The HTTP client gave up waiting for a response.
	#[error("Timeout: {0}")]
	Timeout(String),

	/// I/O error.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Returns the W3C error code if this is a Remote error.
	pub fn error_code(&self) -> Option<&str> {
		match self {
			Error::Remote { error, .. } => Some(error),
			_ => None,
		}
	}

	/// Returns the stack trace if this is a Remote error with one.
	pub fn stack_trace(&self) -> Option<&str> {
		match self {
			Error::Remote { stacktrace, .. } => stacktrace.as_deref(),
			_ => None,
		}
	}

	/// Returns true if the remote end rejected the command.
	pub fn is_remote(&self) -> bool {
		matches!(self, Error::Remote { .. })
	}

	/// Returns true if the caller supplied a bad argument.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Error::InvalidArgument(_))
	}

	/// Returns true if this is a timeout error.
	pub fn is_timeout(&self) -> bool {
		match self {
			Error::Timeout(_) => true,
			Error::Remote { error, .. } => error == "timeout" || error == "script timeout",
			_ => false,
		}
	}
}
