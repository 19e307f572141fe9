//! PostgreSQL implementation of the QR blob repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{BlobRepository, QrBlob};
use crate::error::AppError;

/// Database row mirroring the blob columns of `qr_images`.
#[derive(sqlx::FromRow)]
struct BlobRow {
    content_type: String,
    body: Vec<u8>,
}

/// PostgreSQL repository storing QR images as BYTEA rows.
pub struct PgBlobRepository {
    pool: Arc<PgPool>,
}

impl PgBlobRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Checks database connectivity with a trivial round trip.
    ///
    /// Used by the health endpoint only.
    pub async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}

#[async_trait]
impl BlobRepository for PgBlobRepository {
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO qr_images (short_id, content_type, body) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (short_id) \
             DO UPDATE SET content_type = EXCLUDED.content_type, body = EXCLUDED.body",
        )
        .bind(key)
        .bind(content_type)
        .bind(&body)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<QrBlob>, AppError> {
        let row = sqlx::query_as::<_, BlobRow>(
            "SELECT content_type, body FROM qr_images WHERE short_id = $1",
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| QrBlob {
            content_type: r.content_type,
            body: r.body,
        }))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM qr_images WHERE short_id = $1")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
