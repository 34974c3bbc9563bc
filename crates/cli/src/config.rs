//! Resolved connection settings for one CLI invocation.
//!
//! Flags take precedence over `WD_*` environment variables (clap handles the
//! fallback); this module validates the merged values and turns them into
//! library types.

use std::sync::Arc;
use std::time::Duration;

use wd::{AssumeLocalFileDetector, BROWSER_NAME, Capabilities, FileDetector, LocalFileDetector, UselessFileDetector};

use crate::cli::{Cli, FileDetectorKind};
use crate::error::{Result, WdError};

#[derive(Debug, Clone)]
pub struct Config {
	pub server: String,
	pub session: Option<String>,
	pub browser: String,
	pub timeout: Option<Duration>,
	pub file_detector: FileDetectorKind,
}

impl Config {
	pub fn from_cli(cli: &Cli) -> Result<Self> {
		let server = cli.server.trim();
		if server.is_empty() {
			return Err(WdError::Config("server URL must not be empty".into()));
		}

		let browser = cli.browser.trim();
		if browser.is_empty() {
			return Err(WdError::Config("browser name must not be empty".into()));
		}

		let timeout = match cli.timeout {
			Some(0) => return Err(WdError::Config("timeout must be greater than zero".into())),
			Some(ms) => Some(Duration::from_millis(ms)),
			None => None,
		};

		let session = cli
			.session
			.as_deref()
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(str::to_string);

		Ok(Self {
			server: server.to_string(),
			session,
			browser: browser.to_string(),
			timeout,
			file_detector: cli.file_detector,
		})
	}

	pub fn require_session(&self) -> Result<&str> {
		self.session.as_deref().ok_or(WdError::MissingSession)
	}

	/// Capabilities the attached session is assumed to have.
	pub fn capabilities(&self) -> Capabilities {
		Capabilities::new().with(BROWSER_NAME, self.browser.as_str())
	}

	pub fn file_detector(&self) -> Arc<dyn FileDetector> {
		match self.file_detector {
			FileDetectorKind::Local => Arc::new(LocalFileDetector),
			FileDetectorKind::AssumeLocal => Arc::new(AssumeLocalFileDetector),
			FileDetectorKind::Remote => Arc::new(UselessFileDetector),
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn parse(args: &[&str]) -> Cli {
		let mut argv = vec!["wd"];
		argv.extend_from_slice(args);
		argv.push("commands");
		Cli::try_parse_from(argv).unwrap()
	}

	#[test]
	fn session_is_trimmed_and_required() {
		let config = Config::from_cli(&parse(&["--session", "  abc  "])).unwrap();
		assert_eq!(config.require_session().unwrap(), "abc");

		let config = Config::from_cli(&parse(&["--session", "   "])).unwrap();
		assert!(matches!(config.require_session(), Err(WdError::MissingSession)));
	}

	#[test]
	fn zero_timeout_rejected() {
		let err = Config::from_cli(&parse(&["--timeout", "0"])).unwrap_err();
		assert!(matches!(err, WdError::Config(_)));
	}

	#[test]
	fn timeout_converted_to_duration() {
		let config = Config::from_cli(&parse(&["--timeout", "2500"])).unwrap();
		assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
	}

	#[test]
	fn capabilities_carry_browser_name() {
		let config = Config::from_cli(&parse(&["--browser", "chrome"])).unwrap();
		assert_eq!(config.capabilities().browser_name(), Some("chrome"));
	}

	#[test]
	fn remote_detector_never_reports_local() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().to_str().unwrap();

		let config = Config::from_cli(&parse(&["--file-detector", "remote"])).unwrap();
		assert!(config.file_detector().local_file(path).is_none());

		let config = Config::from_cli(&parse(&["--file-detector", "local"])).unwrap();
		assert!(config.file_detector().local_file(path).is_some());
	}
}
