//! CSV request handler.
//!
//! # Responsibilities
//! - Pull the `file` field out of the multipart body
//! - Decode it as CSV and validate it as a matrix
//! - Run the route's transform and serialize the result
//!
//! # Design Decisions
//! - Every outcome is status 200; failures are `error`-prefixed bodies
//! - The upload buffer is dropped as soon as it is decoded
//! - Transform is bound per route when the router is built

use std::time::Instant;

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::codec;
use crate::http::error::RequestError;
use crate::http::request::request_id;
use crate::http::upload::read_file_field;
use crate::matrix::{Matrix, Transform};
use crate::observability::metrics;

/// Handle one upload for the route bound to `transform`.
pub async fn handle_csv(
    transform: Transform,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);
    let route = transform.name();

    match process(transform, multipart).await {
        Ok(body) => {
            tracing::debug!(
                request_id = %request_id,
                route,
                bytes = body.len(),
                "Transform applied"
            );
            metrics::record_request(route, "ok", start);
            (StatusCode::OK, body).into_response()
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                route,
                error = %e,
                "Request rejected"
            );
            metrics::record_request(route, e.outcome(), start);
            e.into_response()
        }
    }
}

/// Upload → rows → matrix → transform → CSV text.
async fn process(
    transform: Transform,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, RequestError> {
    let upload = read_file_field(multipart).await?;
    let rows = codec::decode(&upload)?;
    drop(upload);

    let matrix = Matrix::new(rows)?;
    tracing::trace!(
        rows = matrix.row_count(),
        columns = matrix.column_count(),
        transform = transform.name(),
        "Matrix decoded"
    );

    let result = transform.apply(matrix);
    Ok(codec::encode(result.rows()))
}
