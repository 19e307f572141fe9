//! Router configuration combining web and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`                          - Shortening form (public)
//! - `POST /`                          - Form submission (public)
//! - `GET  /{short_id}`                - Short link redirect (public)
//! - `GET  /analytics/{short_id}`      - HTML analytics view
//! - `GET  /api/analytics/{short_id}`  - JSON analytics record
//! - `GET  /qr/{short_id}.svg`         - Stored QR image
//! - `GET  /health`                    - Health check: DB, click queue
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, answers 429 when exceeded
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    analytics_api_handler, health_handler, qr_image_handler, redirect_handler,
};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web::handlers::{
    analytics_page_handler, home_page_handler, not_found_handler, shorten_form_handler,
};
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit_per_second` / `rate_limit_burst` - token bucket parameters
///   applied to every route; the server must provide peer connect info for
///   the per-IP key extractor
pub fn app_router(
    state: AppState,
    rate_limit_per_second: u64,
    rate_limit_burst: u32,
) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_page_handler).post(shorten_form_handler))
        .route("/health", get(health_handler))
        .route("/{short_id}", get(redirect_handler))
        .route("/analytics/{short_id}", get(analytics_page_handler))
        .route("/api/analytics/{short_id}", get(analytics_api_handler))
        .route("/qr/{short_id}", get(qr_image_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(rate_limit::layer(rate_limit_per_second, rate_limit_burst))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
