//! Analytics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found::not_found_page;

/// Template for the analytics page.
///
/// Renders `templates/analytics.html` with the stored record. Timestamps
/// are pre-formatted here so the template stays plain.
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub short_id: String,
    pub short_url: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: String,
    pub last_accessed: String,
    pub qr_url: String,
}

/// Renders the analytics page for a short link.
///
/// # Endpoint
///
/// `GET /analytics/{short_id}`
///
/// Unknown IDs render the 404 page.
pub async fn analytics_page_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Response {
    let link = match state.analytics_service.get(&short_id).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => return not_found_page(),
        Err(err) => return err.into_response(),
    };

    let short_url = state.link_service.short_url(&link.short_id);

    AnalyticsTemplate {
        short_id: link.short_id,
        short_url,
        original_url: link.original_url,
        click_count: link.click_count,
        created_at: link.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        last_accessed: link
            .last_accessed
            .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Never".to_string()),
        qr_url: link.qr_url,
    }
    .into_response()
}
