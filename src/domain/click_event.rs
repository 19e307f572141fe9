//! Click event model for asynchronous visit accounting.

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;

/// An in-memory visit record passed from the redirect handler to the
/// background worker via a channel, decoupling the HTTP response from the
/// accounting write.
///
/// Carries the *new total* computed from the count observed at redirect
/// time, so the worker performs a plain write rather than a re-read.
/// Two concurrent redirects for the same link can observe the same count
/// and lose an update; that is accepted.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    /// `click_count` observed at redirect time, plus one.
    pub new_count: i64,
    pub accessed_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Builds the accounting event for one visit to `link`, stamped now.
    pub fn for_visit(link: &Link) -> Self {
        Self {
            link_id: link.id,
            new_count: link.click_count + 1,
            accessed_at: Utc::now(),
        }
    }
}
