//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Database row mirroring the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_id: String,
    original_url: String,
    qr_url: String,
    click_count: i64,
    created_at: DateTime<Utc>,
    last_accessed: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_id,
            row.original_url,
            row.qr_url,
            row.click_count,
            row.created_at,
            row.last_accessed,
        )
    }
}

const LINK_COLUMNS: &str =
    "id, short_id, original_url, qr_url, click_count, created_at, last_accessed";

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE original_url = $1"
        ))
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_id = $1"
        ))
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (short_id, original_url, qr_url) \
             VALUES ($1, $2, $3) \
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.short_id)
        .bind(&new_link.original_url)
        .bind(&new_link.qr_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Link::from(row))
    }

    async fn update_click(
        &self,
        id: i64,
        new_count: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET click_count = $2, last_accessed = $3 WHERE id = $1")
            .bind(id)
            .bind(new_count)
            .bind(accessed_at)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
