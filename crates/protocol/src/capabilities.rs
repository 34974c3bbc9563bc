//! Session capabilities.
//!
//! Capabilities are an opaque string-keyed map describing a session (browser
//! name, version, platform, vendor options). This crate only provides typed
//! accessors for the standard keys; everything else is passed through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard capability key for the browser name.
pub const BROWSER_NAME: &str = "browserName";
/// Standard capability key for the browser version.
pub const BROWSER_VERSION: &str = "browserVersion";
/// Standard capability key for the platform name.
pub const PLATFORM_NAME: &str = "platformName";

/// Read-only capability map of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(Map<String, Value>);

impl Capabilities {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style setter, mostly for constructing fixtures.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Returns the raw value for a capability key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns a capability as a string, if present and a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	pub fn browser_name(&self) -> Option<&str> {
		self.get_str(BROWSER_NAME)
	}

	pub fn browser_version(&self) -> Option<&str> {
		self.get_str(BROWSER_VERSION)
	}

	pub fn platform_name(&self) -> Option<&str> {
		self.get_str(PLATFORM_NAME)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}
}

impl From<Map<String, Value>> for Capabilities {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

/// Browsers known to the capability layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
	Firefox,
}

impl Browser {
	/// The `browserName` value this browser reports.
	pub fn browser_name(&self) -> &'static str {
		match self {
			Browser::Firefox => "firefox",
		}
	}

	/// Whether the capabilities declare this browser.
	///
	/// Absent or non-string `browserName` values never match.
	pub fn is(&self, capabilities: &Capabilities) -> bool {
		capabilities.browser_name() == Some(self.browser_name())
	}
}
