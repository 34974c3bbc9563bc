//! Transfer of archived local resources to the remote end.

use wd_protocol::{UPLOAD_FILE, UploadFileParams};
use wd_runtime::{ExecuteMethod, Result, decode_result};

use crate::archive::ArchiveBlob;

/// Uploads `blob` through the generic `uploadFile` command and returns the
/// remote path the session assigned to it.
///
/// A single request/response exchange; failures are not retried.
pub async fn upload(executor: &dyn ExecuteMethod, blob: ArchiveBlob) -> Result<String> {
	let size = blob.len();
	let params = serde_json::to_value(UploadFileParams::from_bytes(blob.as_bytes()))?;
	drop(blob);

	let value = executor.execute(UPLOAD_FILE, params).await?;
	let remote_path: String = decode_result(UPLOAD_FILE, value)?;

	tracing::debug!(bytes = size, remote_path = %remote_path, "Uploaded archive");
	Ok(remote_path)
}
