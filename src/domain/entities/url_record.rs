//! Short URL record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored mapping from a short URL to its destination.
///
/// `url` holds the full short URL (`host/identifier`) and is unique across the store.
/// Serializable so it can be stored in the record cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub redirect: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Returns the identifier embedded in the short URL (last path segment).
    pub fn identifier(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub title: String,
    pub description: Option<String>,
    pub redirect: String,
    pub url: String,
}

/// Partial update for an existing record.
///
/// `None` fields are left unchanged.
/// `description: Some(None)` clears the description; `Some(Some(d))` sets it.
#[derive(Debug, Clone, Default)]
pub struct UrlPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub redirect: Option<String>,
}

impl UrlPatch {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.redirect.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> UrlRecord {
        let now = Utc::now();
        UrlRecord {
            id: 1,
            title: "Google".to_string(),
            description: None,
            redirect: "https://google.com".to_string(),
            url: url.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_identifier_from_short_url() {
        assert_eq!(record("localhost:3000/abc123").identifier(), "abc123");
        assert_eq!(record("https://s.example.com/V1StGXR8_Z5jdHi6B-myT").identifier(), "V1StGXR8_Z5jdHi6B-myT");
    }

    #[test]
    fn test_identifier_without_host() {
        assert_eq!(record("abc123").identifier(), "abc123");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(UrlPatch::default().is_empty());

        let patch = UrlPatch {
            description: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
