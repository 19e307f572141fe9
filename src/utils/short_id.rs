//! Short identifier generation and shape validation.
//!
//! Short IDs are uniformly random alphanumeric tokens. Uniqueness is not
//! guaranteed here; callers check the store and retry on collision.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest accepted short-ID length.
pub const MIN_SHORT_ID_LENGTH: usize = 4;

/// Longest accepted short-ID length.
pub const MAX_SHORT_ID_LENGTH: usize = 12;

/// Compiled regex for the accepted short-ID shape.
static SHORT_ID_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4,12}$").unwrap());

/// Draws a random alphanumeric short ID of the given length.
///
/// Characters are sampled uniformly from `[A-Za-z0-9]` (62 symbols), so a
/// 6-character ID covers a space of 62^6 ≈ 56.8 billion values. Collisions
/// are unlikely but possible; the allocator re-checks against the store.
pub fn generate_short_id(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `candidate` looks like a short ID this service could have
/// issued: alphanumeric only, length within the accepted bounds.
///
/// Lookups for candidates failing this gate are answered exactly like a
/// missing record, so callers cannot probe the ID format.
pub fn is_valid_shape(candidate: &str) -> bool {
    SHORT_ID_SHAPE.is_match(candidate)
}
