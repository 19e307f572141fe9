//! Read-only analytics access to link records.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service exposing stored link records for analytics views.
///
/// No aggregation or derived metrics; the stored `click_count` is the whole
/// story.
pub struct AnalyticsService<L: LinkRepository> {
    links: Arc<L>,
}

impl<L: LinkRepository> AnalyticsService<L> {
    /// Creates a new analytics service.
    pub fn new(links: Arc<L>) -> Self {
        Self { links }
    }

    /// Retrieves the full record for a short ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the short ID.
    /// Returns [`AppError::Unavailable`] on store errors.
    pub async fn get(&self, short_id: &str) -> Result<Link, AppError> {
        self.links
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_id": short_id }))
            })
    }
}
