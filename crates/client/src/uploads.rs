//! Supporting document uploads.

use std::path::Path;

use ledgerdesk_core::journal::{DocumentError, UploadPolicy};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::info;

use crate::client::{PortalClient, send_unit};
use crate::error::ClientResult;

/// Fallback shown when an upload fails without a server message.
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to upload file";

impl PortalClient {
    /// `POST /api/upload` with the bytes in multipart field `file`.
    pub async fn upload_document(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<()> {
        let size = bytes.len();
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let builder = self
            .request(Method::POST, "/api/upload")
            .multipart(Form::new().part("file", part));
        send_unit(builder, UPLOAD_FALLBACK_MESSAGE).await?;
        info!(filename, size, "supporting document uploaded");
        Ok(())
    }
}

/// Reads a local file after checking it against the policy.
///
/// Returns the bare file name and its contents. Nothing is read when the
/// metadata already violates the policy.
pub async fn read_document(path: &Path, policy: &UploadPolicy) -> ClientResult<(String, Vec<u8>)> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(DocumentError::EmptyName)?
        .to_string();

    let metadata = tokio::fs::metadata(path).await?;
    policy.check(&filename, metadata.len())?;

    let bytes = tokio::fs::read(path).await?;
    Ok((filename, bytes))
}
