//! DTOs for the analytics API endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// The full stored record for a short link.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub qr_url: String,
}

impl From<Link> for AnalyticsResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_id: link.short_id,
            original_url: link.original_url,
            click_count: link.click_count,
            created_at: link.created_at,
            last_accessed: link.last_accessed,
            qr_url: link.qr_url,
        }
    }
}
