//! Extraction of the uploaded CSV file from a multipart form.

use axum::{
    body::Bytes,
    extract::multipart::{Multipart, MultipartError, MultipartRejection},
};
use thiserror::Error;

/// Form field that carries the CSV file.
pub const FILE_FIELD: &str = "file";

/// Failures while pulling the file out of the request.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request is not a usable `multipart/form-data` request.
    #[error(transparent)]
    Rejected(#[from] MultipartRejection),

    /// The multipart body could not be read.
    #[error(transparent)]
    Malformed(#[from] MultipartError),

    #[error("no file field named `{0}` in form")]
    MissingField(&'static str),
}

/// Read the first field named [`FILE_FIELD`] into memory.
///
/// Fields before it are skipped; fields after it are never read.
pub async fn read_file_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Bytes, UploadError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            let data = field.bytes().await?;
            tracing::trace!(bytes = data.len(), "Upload read");
            return Ok(data);
        }
    }

    Err(UploadError::MissingField(FILE_FIELD))
}
