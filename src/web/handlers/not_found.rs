//! 404 page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Template for the 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {}

/// Renders the 404 page with its status code.
///
/// Shared by the router fallback and by handlers that answer "not found"
/// for browser-facing routes.
pub fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response()
}

/// Router fallback for unmatched paths.
pub async fn not_found_handler() -> Response {
    not_found_page()
}
