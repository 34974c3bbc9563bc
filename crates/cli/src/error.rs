use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, WdError>;

#[derive(Debug, Error)]
pub enum WdError {
	#[error("configuration error: {0}")]
	Config(String),

	#[error("no session id given (use --session or WD_SESSION_ID)")]
	MissingSession,

	#[error("session does not support {capability} (browserName: {browser})")]
	Unsupported { capability: &'static str, browser: String },

	#[error(transparent)]
	Wd(#[from] wd::Error),
}

impl WdError {
	/// Convert this error to a CommandError for structured output
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			WdError::Config(msg) => (ErrorCode::InvalidInput, msg.clone(), None),
			WdError::MissingSession => (ErrorCode::InvalidInput, self.to_string(), None),
			WdError::Unsupported { capability, browser } => (
				ErrorCode::Unsupported,
				self.to_string(),
				Some(serde_json::json!({ "capability": capability, "browserName": browser })),
			),
			WdError::Wd(err) => classify_wd_error(err),
		};

		CommandError {
			code,
			message,
			details,
		}
	}
}

fn classify_wd_error(err: &wd::Error) -> (ErrorCode, String, Option<serde_json::Value>) {
	let message = err.to_string();
	match err {
		wd::Error::InvalidArgument(_) => (ErrorCode::InvalidInput, message, None),
		wd::Error::Upload { path, .. } => (ErrorCode::IoError, message, Some(serde_json::json!({ "path": path }))),
		wd::Error::Transport(_) => (ErrorCode::TransportError, message, None),
		wd::Error::Timeout(_) => (ErrorCode::Timeout, message, None),
		wd::Error::Remote { error, .. } => (
			ErrorCode::RemoteError,
			message,
			Some(serde_json::json!({ "error": error })),
		),
		wd::Error::Protocol(_) | wd::Error::UnknownCommand(_) | wd::Error::Json(_) => {
			(ErrorCode::ProtocolError, message, None)
		}
		wd::Error::Io(_) => (ErrorCode::IoError, message, None),
	}
}
