//! Handler serving stored QR images.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::repositories::BlobRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Serves the QR image stored for a short link.
///
/// # Endpoint
///
/// `GET /qr/{short_id}.svg`
///
/// The `.svg` suffix is stripped before the blob lookup, so both
/// `/qr/abc123.svg` and `/qr/abc123` resolve the same image.
///
/// # Errors
///
/// Returns 404 if no QR image is stored for the ID.
pub async fn qr_image_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let key = short_id.strip_suffix(".svg").unwrap_or(&short_id);

    let blob = state.blobs.get(key).await?.ok_or_else(|| {
        AppError::not_found("QR code not found", json!({ "short_id": key }))
    })?;

    Ok(([(header::CONTENT_TYPE, blob.content_type)], blob.body).into_response())
}
