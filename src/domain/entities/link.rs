//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its visit accounting.
///
/// Records are created once, mutated only by click accounting
/// (`click_count` / `last_accessed`), and never deleted.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub qr_url: String,
    /// Total recorded visits. Monotonically non-decreasing, starts at 0.
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    /// Set on each recorded visit; `None` until the first one.
    pub last_accessed: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        short_id: String,
        original_url: String,
        qr_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        last_accessed: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            short_id,
            original_url,
            qr_url,
            click_count,
            created_at,
            last_accessed,
        }
    }

    /// Returns true if the link has recorded at least one visit.
    pub fn has_been_accessed(&self) -> bool {
        self.last_accessed.is_some()
    }
}

/// Input data for creating a new link.
///
/// `click_count` always starts at 0 and `created_at` is assigned by the
/// store, so neither appears here.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_id: String,
    pub original_url: String,
    pub qr_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com/".to_string(),
            "http://localhost:3000/qr/abc123.svg".to_string(),
            0,
            now,
            None,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_id, "abc123");
        assert_eq!(link.original_url, "https://example.com/");
        assert_eq!(link.click_count, 0);
        assert_eq!(link.created_at, now);
        assert!(!link.has_been_accessed());
    }

    #[test]
    fn test_link_accessed() {
        let link = Link::new(
            5,
            "xyz789".to_string(),
            "https://rust-lang.org/".to_string(),
            "http://localhost:3000/qr/xyz789.svg".to_string(),
            3,
            Utc::now(),
            Some(Utc::now()),
        );

        assert!(link.has_been_accessed());
        assert_eq!(link.click_count, 3);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            short_id: "xyz789".to_string(),
            original_url: "https://rust-lang.org/".to_string(),
            qr_url: "http://localhost:3000/qr/xyz789.svg".to_string(),
        };

        assert_eq!(new_link.short_id, "xyz789");
        assert_eq!(new_link.original_url, "https://rust-lang.org/");
    }
}
