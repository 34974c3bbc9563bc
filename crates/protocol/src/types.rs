//! Request payloads and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters of the generic `uploadFile` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFileParams {
	/// Base64-encoded zip archive.
	pub file: String,
}

impl UploadFileParams {
	/// Encodes raw archive bytes into the wire representation.
	pub fn from_bytes(data: &[u8]) -> Self {
		use base64::Engine;
		Self {
			file: base64::engine::general_purpose::STANDARD.encode(data),
		}
	}
}

/// Parameters of the Firefox `installExtension` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallAddonParams {
	/// Path to the add-on as seen by the remote end.
	pub path: String,
	/// Whether the add-on is installed as temporary (removed on restart).
	pub temporary: bool,
}

/// Parameters of the Firefox `uninstallExtension` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallAddonParams {
	/// Add-on id returned by install.
	pub id: String,
}

/// W3C response envelope: every body is `{"value": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
	pub value: Value,
}

/// W3C error payload carried in the `value` of a failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
	/// Error code, e.g. `"unknown error"` or `"invalid argument"`.
	pub error: String,
	/// Human-readable message
	#[serde(default)]
	pub message: String,
	/// Remote stack trace
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stacktrace: Option<String>,
}

impl ErrorPayload {
	/// Extracts an error payload from a response `value`, if it is one.
	pub fn from_value(value: &Value) -> Option<Self> {
		if value.get("error")?.is_string() {
			serde_json::from_value(value.clone()).ok()
		} else {
			None
		}
	}
}
