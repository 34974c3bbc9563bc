//! Local file detection strategies.
//!
//! A [`FileDetector`] decides whether a path string names something on the
//! calling machine. A local path must be archived and uploaded before the
//! remote end can use it; anything else is sent as-is.

use std::path::{Path, PathBuf};

/// Decides whether a path string refers to a local file.
pub trait FileDetector: Send + Sync + std::fmt::Debug {
	/// Returns the local location when `path` should be uploaded.
	fn local_file(&self, path: &str) -> Option<PathBuf>;
}

/// Treats a path as local only if it exists on this machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileDetector;

impl FileDetector for LocalFileDetector {
	fn local_file(&self, path: &str) -> Option<PathBuf> {
		if path.is_empty() {
			return None;
		}
		let candidate = Path::new(path);
		(candidate.is_file() || candidate.is_dir()).then(|| candidate.to_path_buf())
	}
}

/// Trusts the caller: every non-empty path is local.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeLocalFileDetector;

impl FileDetector for AssumeLocalFileDetector {
	fn local_file(&self, path: &str) -> Option<PathBuf> {
		(!path.is_empty()).then(|| PathBuf::from(path))
	}
}

/// Never uploads; every path is assumed to be meaningful to the remote end.
#[derive(Debug, Clone, Copy, Default)]
pub struct UselessFileDetector;

impl FileDetector for UselessFileDetector {
	fn local_file(&self, _path: &str) -> Option<PathBuf> {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_local_detector_existing_file() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let path = file.path().to_str().unwrap();
		assert_eq!(LocalFileDetector.local_file(path), Some(file.path().to_path_buf()));
	}

	#[test]
	fn test_local_detector_existing_directory() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().to_str().unwrap();
		assert!(LocalFileDetector.local_file(path).is_some());
	}

	#[test]
	fn test_local_detector_missing_path() {
		assert_eq!(LocalFileDetector.local_file("remote://already-there"), None);
		assert_eq!(LocalFileDetector.local_file(""), None);
	}

	#[test]
	fn test_assume_local_detector() {
		assert_eq!(
			AssumeLocalFileDetector.local_file("/does/not/exist.xpi"),
			Some(PathBuf::from("/does/not/exist.xpi"))
		);
		assert_eq!(AssumeLocalFileDetector.local_file(""), None);
	}

	#[test]
	fn test_useless_detector() {
		let file = tempfile::NamedTempFile::new().unwrap();
		assert_eq!(UselessFileDetector.local_file(file.path().to_str().unwrap()), None);
	}
}
