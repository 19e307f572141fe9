//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing short links.
///
/// The store is assumed to provide row-level atomicity for each individual
/// call; no method spans a transaction. Consistency gaps between calls
/// (dedupe check vs. insert, read vs. click update) are accepted by design
/// and documented on the call sites.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its normalized original URL.
    ///
    /// Used for deduplication before allocating a new short ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short ID already exists
    /// (a last-moment allocation race lost at the unique index).
    /// Returns [`AppError::Unavailable`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Writes the click accounting for one visit: the new total and the
    /// access timestamp.
    ///
    /// `new_count` is the count observed at redirect time plus one, so
    /// concurrent visits to the same link can lose updates. Accurate
    /// counting under concurrency is a non-goal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn update_click(
        &self,
        id: i64,
        new_count: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<(), AppError>;
}
