//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found::not_found_page;

/// Redirects a short ID to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Request Flow
///
/// 1. Resolve the short ID (shape gate + store lookup)
/// 2. Queue a click event for the background worker (fire-and-forget)
/// 3. Return 307 Temporary Redirect
///
/// The redirect is never blocked by accounting: the event is handed to a
/// bounded channel with `try_send`, and a full queue drops the click.
///
/// # Errors
///
/// Malformed and unknown short IDs both render the 404 page; they are
/// deliberately indistinguishable. Store failures surface as 503.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let link = match state.link_service.resolve(&short_id).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => return not_found_page(),
        Err(err) => return err.into_response(),
    };

    if state.click_sender.try_send(ClickEvent::for_visit(&link)).is_err() {
        warn!(short_id = %link.short_id, "Click queue full or closed, dropping click");
    }

    Redirect::temporary(&link.original_url).into_response()
}
