//! Repository trait for QR image blob storage.

use crate::error::AppError;
use async_trait::async_trait;

/// A stored blob with its content type.
#[derive(Debug, Clone)]
pub struct QrBlob {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Repository interface for QR image blobs, keyed by short ID.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlobRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// Stores a blob under `key`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on storage errors.
    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<(), AppError>;

    /// Retrieves the blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on storage errors.
    async fn get(&self, key: &str) -> Result<Option<QrBlob>, AppError>;

    /// Deletes the blob stored under `key`. Deleting a missing key is not
    /// an error.
    ///
    /// Unused by the request path (an orphaned blob after a failed insert
    /// is left in place); kept for operational cleanup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on storage errors.
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}
