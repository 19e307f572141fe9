//! Handler for the analytics API endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full stored record for a short link as JSON.
///
/// # Endpoint
///
/// `GET /api/analytics/{short_id}`
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "short_id": "abc123",
///   "original_url": "https://example.com/",
///   "click_count": 17,
///   "created_at": "2026-01-01T00:00:00Z",
///   "last_accessed": "2026-02-01T00:00:00Z",
///   "qr_url": "https://s.example.com/qr/abc123.svg"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with an error envelope for unknown IDs, 503 when the store
/// is unavailable.
pub async fn analytics_api_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let link = state.analytics_service.get(&short_id).await?;

    Ok(Json(AnalyticsResponse::from(link)))
}
