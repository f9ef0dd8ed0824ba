//! Request failures and their response bodies.
//!
//! Every failure is answered with status 200 and an `error`-prefixed text
//! body; clients tell success from failure by the body alone.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError,
};
use thiserror::Error;
use tower::timeout::error::Elapsed;

use crate::codec::DecodeError;
use crate::http::upload::UploadError;
use crate::matrix::MatrixError;

/// Why a CSV request could not be transformed.
///
/// `Display` yields the exact response body.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("error {0}")]
    Upload(#[from] UploadError),

    #[error("error {0}")]
    Decode(#[from] DecodeError),

    #[error("error: Empty CSV file")]
    EmptyFile,

    #[error("error: {0}")]
    NotRectangular(MatrixError),

    /// The request did not finish within the configured timeout.
    #[error("error request timed out")]
    TimedOut,

    /// Any other failure raised by the middleware stack.
    #[error("error {0}")]
    Service(String),
}

impl From<MatrixError> for RequestError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::Empty => RequestError::EmptyFile,
            ragged @ MatrixError::Ragged { .. } => RequestError::NotRectangular(ragged),
        }
    }
}

impl RequestError {
    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            RequestError::Upload(_) => "upload_error",
            RequestError::Decode(_) => "decode_error",
            RequestError::EmptyFile => "empty",
            RequestError::NotRectangular(_) => "not_rectangular",
            RequestError::TimedOut => "timeout",
            RequestError::Service(_) => "service_error",
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.to_string()).into_response()
    }
}

/// Turn a middleware error (the request timeout) into a status-200 body.
pub async fn handle_middleware_error(err: BoxError) -> Response {
    let error = if err.is::<Elapsed>() {
        RequestError::TimedOut
    } else {
        RequestError::Service(err.to_string())
    };
    tracing::warn!(error = %error, "Request aborted by middleware");
    error.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bodies() {
        assert_eq!(RequestError::EmptyFile.to_string(), "error: Empty CSV file");
        assert_eq!(
            RequestError::from(MatrixError::Ragged { row: 2, len: 3, expected: 2 }).to_string(),
            "error: row 2 has 3 columns, expected 2 columns"
        );
        assert_eq!(
            RequestError::from(UploadError::MissingField("file")).to_string(),
            "error no file field named `file` in form"
        );
    }

    #[test]
    fn test_empty_matrix_maps_to_empty_file() {
        assert!(matches!(RequestError::from(MatrixError::Empty), RequestError::EmptyFile));
    }

    #[tokio::test]
    async fn test_timeout_becomes_ok_body() {
        let response = handle_middleware_error(Box::new(Elapsed::new())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"error request timed out");
    }

    #[test]
    fn test_always_status_ok() {
        let response = RequestError::EmptyFile.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
