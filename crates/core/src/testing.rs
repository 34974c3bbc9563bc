//! Test doubles for the execution and archiving seams.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use wd_runtime::{AsyncValueResult, Error, ExecuteMethod};

use crate::archive::{ArchiveBlob, Archiver};

type ErrorFactory = Arc<dyn Fn() -> Error + Send + Sync>;

/// Shared log of every call made through the fakes, in order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// [`ExecuteMethod`] that records calls and answers from a script.
///
/// Commands without a scripted answer return `null`.
#[derive(Default)]
pub struct RecordingExecutor {
	calls: Mutex<Vec<(String, Value)>>,
	responses: HashMap<String, Value>,
	failures: HashMap<String, ErrorFactory>,
	log: Option<CallLog>,
}

impl RecordingExecutor {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn respond(mut self, command: &str, value: Value) -> Self {
		self.responses.insert(command.to_string(), value);
		self
	}

	pub fn fail(mut self, command: &str, error: impl Fn() -> Error + Send + Sync + 'static) -> Self {
		self.failures.insert(command.to_string(), Arc::new(error));
		self
	}

	pub fn with_log(mut self, log: CallLog) -> Self {
		self.log = Some(log);
		self
	}

	pub fn calls(&self) -> Vec<(String, Value)> {
		self.calls.lock().clone()
	}

	pub fn commands(&self) -> Vec<String> {
		self.calls.lock().iter().map(|(c, _)| c.clone()).collect()
	}
}

impl ExecuteMethod for RecordingExecutor {
	fn execute(&self, command: &str, params: Value) -> AsyncValueResult<'_> {
		self.calls.lock().push((command.to_string(), params));
		if let Some(log) = &self.log {
			log.lock().push(command.to_string());
		}
		let result = match self.failures.get(command) {
			Some(make_error) => Err(make_error()),
			None => Ok(self.responses.get(command).cloned().unwrap_or(Value::Null)),
		};
		Box::pin(async move { result })
	}
}

/// [`Archiver`] that records the paths it was asked to pack.
#[derive(Default)]
pub struct RecordingArchiver {
	packed: Mutex<Vec<PathBuf>>,
	fail_with: Option<io::ErrorKind>,
	log: Option<CallLog>,
}

impl RecordingArchiver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing(kind: io::ErrorKind) -> Self {
		Self {
			fail_with: Some(kind),
			..Self::default()
		}
	}

	pub fn with_log(mut self, log: CallLog) -> Self {
		self.log = Some(log);
		self
	}

	pub fn packed(&self) -> Vec<PathBuf> {
		self.packed.lock().clone()
	}
}

impl Archiver for RecordingArchiver {
	fn pack(&self, location: &Path) -> io::Result<ArchiveBlob> {
		self.packed.lock().push(location.to_path_buf());
		if let Some(log) = &self.log {
			log.lock().push("pack".to_string());
		}
		match self.fail_with {
			Some(kind) => Err(io::Error::new(kind, "archive failed")),
			None => Ok(ArchiveBlob::new(b"blob".to_vec())),
		}
	}
}
