//! Short identifier generation.
//!
//! Identifiers are random strings over the URL-safe nanoid alphabet
//! (`A-Za-z0-9_-`), so they need no escaping in a path segment.

/// Length used when the caller does not ask for a specific one.
pub const DEFAULT_IDENTIFIER_LENGTH: usize = 21;

/// Source of short identifiers for new records.
#[cfg_attr(test, mockall::automock)]
pub trait IdentifierGenerator: Send + Sync {
    /// Generates a random identifier of `length` characters
    /// ([`DEFAULT_IDENTIFIER_LENGTH`] when `None`).
    fn generate(&self, length: Option<usize>) -> String;
}

/// Identifier generator backed by `nanoid`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NanoIdGenerator;

impl IdentifierGenerator for NanoIdGenerator {
    fn generate(&self, length: Option<usize>) -> String {
        let size = length.unwrap_or(DEFAULT_IDENTIFIER_LENGTH);
        nanoid::nanoid!(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_length() {
        let id = NanoIdGenerator.generate(None);
        assert_eq!(id.len(), DEFAULT_IDENTIFIER_LENGTH);
    }

    #[test]
    fn test_length_from_config_value() {
        let configured: Option<usize> = Some(12);
        assert_eq!(NanoIdGenerator.generate(configured).len(), 12);
    }

    #[test]
    fn test_requested_length() {
        assert_eq!(NanoIdGenerator.generate(Some(8)).len(), 8);
        assert_eq!(NanoIdGenerator.generate(Some(40)).len(), 40);
    }

    #[test]
    fn test_url_safe_characters() {
        let id = NanoIdGenerator.generate(Some(64));
        assert!(
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_produces_unique_identifiers() {
        let ids: HashSet<String> = (0..1000).map(|_| NanoIdGenerator.generate(None)).collect();
        assert_eq!(ids.len(), 1000);
    }
}
