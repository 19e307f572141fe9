//! Link creation and redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{BlobRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::qr;
use crate::utils::short_id::{generate_short_id, is_valid_shape};
use crate::utils::url_validator::normalize_url;
use serde_json::json;

/// Tunables for the creation workflow, loaded from configuration at startup.
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Public base under which short links are served, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Length of generated short IDs.
    pub short_id_length: usize,
    /// Longest accepted input URL.
    pub max_url_length: usize,
    /// Edge length of one QR module in SVG user units.
    pub qr_module_size: u32,
    /// Width of the QR quiet zone, in modules.
    pub qr_quiet_zone: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            short_id_length: 6,
            max_url_length: 2048,
            qr_module_size: 10,
            qr_quiet_zone: 5,
        }
    }
}

/// Result of a shortening request.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub link: Link,
    pub short_url: String,
    /// `false` when an existing record for the same normalized URL was
    /// reused instead of creating a new one.
    pub created: bool,
}

/// Service for creating short links and resolving redirects.
///
/// The creation workflow runs Validating → Deduping → Allocating → Encoding
/// → Persisting, failing out at each stage with no partial record: a QR
/// encoding or upload failure means no database row is ever written.
pub struct LinkService<L: LinkRepository, B: BlobRepository> {
    links: Arc<L>,
    blobs: Arc<B>,
    settings: ShortenerSettings,
}

impl<L: LinkRepository, B: BlobRepository> LinkService<L, B> {
    /// Creates a new link service.
    pub fn new(links: Arc<L>, blobs: Arc<B>, settings: ShortenerSettings) -> Self {
        Self {
            links,
            blobs,
            settings,
        }
    }

    /// Shortens a raw user-supplied URL.
    ///
    /// # Deduplication
    ///
    /// If the normalized URL is already shortened, the existing record is
    /// returned without any writes (idempotent re-shortening). The dedupe
    /// check and the final insert are separate store calls, so two
    /// concurrent identical submissions can each create a record; the
    /// consistency strength is deliberately left at that.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for rejected input,
    /// [`AppError::AllocationExhausted`] after 10 failed uniqueness
    /// attempts, [`AppError::Internal`] if QR encoding fails, and
    /// [`AppError::Unavailable`] / [`AppError::Conflict`] from the store.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenOutcome, AppError> {
        let original_url = normalize_url(raw_url, self.settings.max_url_length)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

        if let Some(existing) = self.links.find_by_original_url(&original_url).await? {
            let short_url = self.short_url(&existing.short_id);
            return Ok(ShortenOutcome {
                link: existing,
                short_url,
                created: false,
            });
        }

        let short_id = self.allocate_short_id().await?;
        let short_url = self.short_url(&short_id);

        let svg = qr::encode_svg(
            &short_url,
            self.settings.qr_module_size,
            self.settings.qr_quiet_zone,
        )
        .map_err(|e| {
            AppError::internal(
                "Failed to generate QR code",
                json!({ "reason": e.to_string() }),
            )
        })?;

        self.blobs
            .put(&short_id, "image/svg+xml", svg.into_bytes())
            .await?;

        // A failed insert leaves the uploaded QR blob in place; cleanup is
        // an operational concern, not part of the request path.
        let link = self
            .links
            .insert(NewLink {
                qr_url: format!("{}/qr/{}.svg", self.base(), short_id),
                short_id,
                original_url,
            })
            .await?;

        Ok(ShortenOutcome {
            link,
            short_url,
            created: true,
        })
    }

    /// Resolves a short ID for redirecting.
    ///
    /// A candidate that is not alphanumeric or outside the accepted length
    /// bounds is answered exactly like a missing record, so the response
    /// does not leak the ID format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown IDs and
    /// [`AppError::Unavailable`] on store errors.
    pub async fn resolve(&self, short_id: &str) -> Result<Link, AppError> {
        if !is_valid_shape(short_id) {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "short_id": short_id }),
            ));
        }

        self.links
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_id": short_id }))
            })
    }

    /// Constructs the full short URL for a short ID.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base(), short_id)
    }

    fn base(&self) -> &str {
        self.settings.base_url.trim_end_matches('/')
    }

    /// Draws random candidates until one is free in the store.
    ///
    /// Bounded at 10 attempts. The existence check only mitigates races:
    /// two requests can still pick the same candidate between check and
    /// insert, in which case the insert's unique index decides.
    async fn allocate_short_id(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = generate_short_id(self.settings.short_id_length);

            if self.links.find_by_short_id(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::allocation_exhausted(
            "Unable to generate a unique short URL. Please try again.",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
