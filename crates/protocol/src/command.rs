//! Remote command descriptors.
//!
//! A [`CommandDescriptor`] names a remote procedure and says where it lives:
//! an HTTP method plus a path template containing a session-id placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the session id when a path is expanded.
pub const SESSION_ID_PLACEHOLDER: &str = "{sessionId}";

/// Legacy placeholder form still found in older command tables.
const LEGACY_SESSION_ID_PLACEHOLDER: &str = ":sessionId";

/// Generic "upload file" command owned by the base protocol.
pub const UPLOAD_FILE: &str = "uploadFile";

/// Firefox add-on install command.
pub const INSTALL_EXTENSION: &str = "installExtension";

/// Firefox add-on uninstall command.
pub const UNINSTALL_EXTENSION: &str = "uninstallExtension";

/// HTTP method used to send a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	Get,
	Post,
	Delete,
}

impl HttpMethod {
	/// Returns the method name as it appears on the wire.
	pub fn as_str(&self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Delete => "DELETE",
		}
	}

	/// Whether a request with this method carries a JSON body.
	pub fn has_body(&self) -> bool {
		matches!(self, HttpMethod::Post)
	}
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A named remote command: method plus session-scoped path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
	/// Unique command name (e.g. `"installExtension"`).
	pub name: String,
	/// HTTP method.
	pub method: HttpMethod,
	/// Path template, e.g. `/session/{sessionId}/moz/addon/install`.
	pub path_template: String,
}

impl CommandDescriptor {
	pub fn new(name: impl Into<String>, method: HttpMethod, path_template: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			method,
			path_template: path_template.into(),
		}
	}

	/// Shorthand for a POST command.
	pub fn post(name: impl Into<String>, path_template: impl Into<String>) -> Self {
		Self::new(name, HttpMethod::Post, path_template)
	}

	/// Shorthand for a GET command.
	pub fn get(name: impl Into<String>, path_template: impl Into<String>) -> Self {
		Self::new(name, HttpMethod::Get, path_template)
	}

	/// Whether the template is scoped to a session.
	pub fn is_session_scoped(&self) -> bool {
		self.path_template.contains(SESSION_ID_PLACEHOLDER)
			|| self.path_template.contains(LEGACY_SESSION_ID_PLACEHOLDER)
	}

	/// Substitutes the session id into the path template.
	///
	/// Both `{sessionId}` and the legacy `:sessionId` placeholder are accepted.
	pub fn expand_path(&self, session_id: &str) -> String {
		self.path_template
			.replace(SESSION_ID_PLACEHOLDER, session_id)
			.replace(LEGACY_SESSION_ID_PLACEHOLDER, session_id)
	}
}

impl fmt::Display for CommandDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.name, self.method, self.path_template)
	}
}
