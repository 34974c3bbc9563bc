//! Packaging local files for upload.
//!
//! [`ZipArchiver`] produces byte-identical archives for identical content:
//! entries are sorted, timestamps are pinned to the zip epoch, and
//! permissions are fixed.

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Archive bytes produced by an [`Archiver`], consumed by one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBlob(Vec<u8>);

impl ArchiveBlob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.0
	}
}

/// Packages a local file or directory into a single blob.
pub trait Archiver: Send + Sync {
	fn pack(&self, location: &Path) -> io::Result<ArchiveBlob>;
}

/// Deterministic zip archiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
	fn options() -> SimpleFileOptions {
		SimpleFileOptions::default()
			.compression_method(CompressionMethod::Deflated)
			.last_modified_time(DateTime::default())
			.unix_permissions(0o644)
	}

	fn add_file<W: Write + io::Seek>(writer: &mut ZipWriter<W>, name: String, path: &Path) -> io::Result<()> {
		writer.start_file(name, Self::options()).map_err(io::Error::other)?;
		let mut file = File::open(path)?;
		io::copy(&mut file, writer)?;
		Ok(())
	}
}

impl Archiver for ZipArchiver {
	fn pack(&self, location: &Path) -> io::Result<ArchiveBlob> {
		let metadata = std::fs::metadata(location)?;
		let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

		if metadata.is_file() {
			let name = location
				.file_name()
				.and_then(|n| n.to_str())
				.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "file name is not valid UTF-8"))?
				.to_string();
			Self::add_file(&mut writer, name, location)?;
		} else {
			for entry in WalkDir::new(location)
				.min_depth(1)
				.follow_links(true)
				.sort_by_file_name()
			{
				let entry = entry.map_err(io::Error::other)?;
				let relative = entry
					.path()
					.strip_prefix(location)
					.map_err(io::Error::other)?;
				let name = relative
					.components()
					.map(|c| c.as_os_str().to_string_lossy())
					.collect::<Vec<_>>()
					.join("/");

				if entry.file_type().is_dir() {
					writer
						.add_directory(format!("{name}/"), Self::options().unix_permissions(0o755))
						.map_err(io::Error::other)?;
				} else {
					Self::add_file(&mut writer, name, entry.path())?;
				}
			}
		}

		let bytes = writer.finish().map_err(io::Error::other)?.into_inner();
		tracing::debug!(path = %location.display(), bytes = bytes.len(), "Packed archive");
		Ok(ArchiveBlob::new(bytes))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Read;

	fn entry_names(blob: &ArchiveBlob) -> Vec<String> {
		let archive = zip::ZipArchive::new(Cursor::new(blob.as_bytes().to_vec())).unwrap();
		archive.file_names().map(str::to_string).collect::<Vec<_>>()
	}

	#[test]
	fn test_pack_single_file_uses_file_name() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("ext.xpi");
		std::fs::write(&path, b"addon bytes").unwrap();

		let blob = ZipArchiver.pack(&path).unwrap();
		assert_eq!(entry_names(&blob), vec!["ext.xpi"]);

		let mut archive = zip::ZipArchive::new(Cursor::new(blob.into_bytes())).unwrap();
		let mut contents = String::new();
		archive.by_name("ext.xpi").unwrap().read_to_string(&mut contents).unwrap();
		assert_eq!(contents, "addon bytes");
	}

	#[test]
	fn test_pack_directory_relative_sorted_entries() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("manifest.json"), b"{}").unwrap();
		std::fs::create_dir(dir.path().join("icons")).unwrap();
		std::fs::write(dir.path().join("icons").join("a.png"), b"png").unwrap();
		std::fs::write(dir.path().join("background.js"), b"//").unwrap();

		let blob = ZipArchiver.pack(dir.path()).unwrap();
		let mut names = entry_names(&blob);
		names.sort();
		assert_eq!(names, vec!["background.js", "icons/", "icons/a.png", "manifest.json"]);
	}

	#[test]
	fn test_pack_is_deterministic() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("b.txt"), b"bbb").unwrap();
		std::fs::write(dir.path().join("a.txt"), b"aaa").unwrap();

		let first = ZipArchiver.pack(dir.path()).unwrap();
		let second = ZipArchiver.pack(dir.path()).unwrap();
		assert_eq!(first, second);
		assert!(!first.is_empty());
	}

	#[test]
	fn test_pack_missing_path_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = ZipArchiver.pack(&dir.path().join("missing.xpi")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
