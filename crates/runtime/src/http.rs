//! HTTP command executor.
//!
//! Maps a command name to its [`CommandDescriptor`], expands the session-id
//! placeholder, sends the request, and unwraps the W3C `{"value": ...}`
//! envelope. Error envelopes become [`Error::Remote`].
//!
//! # Message Flow
//!
//! 1. Caller invokes `dispatch()` with session id, command name, and params
//! 2. Command is looked up in the [`CommandTable`] (unknown names fail before I/O)
//! 3. Request is built: POST carries the params as JSON, GET/DELETE carry no body
//! 4. Response body is parsed and the `value` field extracted
//! 5. An error payload in `value` is surfaced as a remote error

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use wd_protocol::{CommandDescriptor, ErrorPayload, HttpMethod, ResponseEnvelope};

use crate::command_table::CommandTable;
use crate::dispatcher::{AsyncValueResult, CommandDispatcher};
use crate::error::{Error, Result};

/// Builder for [`HttpCommandExecutor`].
#[derive(Debug, Clone)]
pub struct HttpCommandExecutorBuilder {
	base_url: String,
	timeout: Option<Duration>,
	additional_commands: Vec<CommandDescriptor>,
}

impl HttpCommandExecutorBuilder {
	/// Per-request timeout enforced by the HTTP client.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Commands to register on top of the base command table.
	pub fn additional_commands(mut self, commands: impl IntoIterator<Item = CommandDescriptor>) -> Self {
		self.additional_commands.extend(commands);
		self
	}

	pub fn build(self) -> Result<HttpCommandExecutor> {
		let trimmed = self.base_url.trim_end_matches('/');
		Url::parse(trimmed)
			.map_err(|e| Error::InvalidArgument(format!("invalid server URL '{}': {e}", self.base_url)))?;

		let mut client = Client::builder();
		if let Some(timeout) = self.timeout {
			client = client.timeout(timeout);
		}
		let client = client
			.build()
			.map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;

		let commands = CommandTable::with_base_commands();
		commands.define_all(self.additional_commands);

		Ok(HttpCommandExecutor {
			base_url: trimmed.to_string(),
			client,
			commands,
		})
	}
}

/// Sends commands to a remote end over HTTP.
#[derive(Debug)]
pub struct HttpCommandExecutor {
	base_url: String,
	client: Client,
	commands: CommandTable,
}

impl HttpCommandExecutor {
	pub fn builder(base_url: impl Into<String>) -> HttpCommandExecutorBuilder {
		HttpCommandExecutorBuilder {
			base_url: base_url.into(),
			timeout: None,
			additional_commands: Vec::new(),
		}
	}

	/// Creates an executor with default settings.
	pub fn new(base_url: impl Into<String>) -> Result<Self> {
		Self::builder(base_url).build()
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn commands(&self) -> &CommandTable {
		&self.commands
	}

	fn command_url(&self, descriptor: &CommandDescriptor, session_id: &str) -> Result<Url> {
		if descriptor.is_session_scoped() && session_id.is_empty() {
			return Err(Error::InvalidArgument(format!(
				"command '{}' requires a session id",
				descriptor.name
			)));
		}
		let url = format!("{}{}", self.base_url, descriptor.expand_path(session_id));
		Url::parse(&url).map_err(|e| Error::InvalidArgument(format!("invalid command URL '{url}': {e}")))
	}

	/// Sends a command and returns the unwrapped `value`.
	pub async fn execute(&self, session_id: &str, command: &str, params: Value) -> Result<Value> {
		let descriptor = self
			.commands
			.get(command)
			.ok_or_else(|| Error::UnknownCommand(command.to_string()))?;
		let url = self.command_url(&descriptor, session_id)?;

		tracing::debug!(
			session_id,
			command,
			method = %descriptor.method,
			url = %url,
			"Sending command"
		);

		let request = match descriptor.method {
			HttpMethod::Get => self.client.get(url),
			HttpMethod::Delete => self.client.delete(url),
			HttpMethod::Post => {
				let body = if params.is_null() {
					Value::Object(Default::default())
				} else {
					params
				};
				self.client.post(url).json(&body)
			}
		};

		let response = request.send().await.map_err(|e| transport_error(command, e))?;
		let status = response.status();
		let body = response.text().await.map_err(|e| transport_error(command, e))?;

		tracing::debug!(command, status = status.as_u16(), "Received response");

		decode_response(command, status, &body)
	}
}

impl CommandDispatcher for HttpCommandExecutor {
	fn dispatch(&self, session_id: &str, command: &str, params: Value) -> AsyncValueResult<'_> {
		let session_id = session_id.to_string();
		let command = command.to_string();
		Box::pin(async move { self.execute(&session_id, &command, params).await })
	}

	fn define_command(&self, descriptor: CommandDescriptor) {
		self.commands.define(descriptor);
	}

	fn command(&self, name: &str) -> Option<CommandDescriptor> {
		self.commands.get(name)
	}
}

fn transport_error(command: &str, err: reqwest::Error) -> Error {
	if err.is_timeout() {
		Error::Timeout(format!("'{command}' did not complete: {err}"))
	} else {
		Error::Transport(format!("'{command}' failed: {err}"))
	}
}

/// Unwraps a W3C response body.
fn decode_response(command: &str, status: StatusCode, body: &str) -> Result<Value> {
	let envelope: ResponseEnvelope = serde_json::from_str(body).map_err(|e| {
		Error::Protocol(format!(
			"'{command}' returned HTTP {} with a non-W3C body: {e}",
			status.as_u16()
		))
	})?;

	if let Some(payload) = ErrorPayload::from_value(&envelope.value) {
		tracing::warn!(command, error = %payload.error, "Remote end rejected command");
		return Err(Error::Remote {
			error: payload.error,
			message: payload.message,
			stacktrace: payload.stacktrace.filter(|s| !s.is_empty()),
		});
	}

	if !status.is_success() {
		return Err(Error::Protocol(format!(
			"'{command}' returned HTTP {} without an error payload",
			status.as_u16()
		)));
	}

	Ok(envelope.value)
}
