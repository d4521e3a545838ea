//! Authentication service for the static API key.

use sha2::{Digest, Sha256};

use crate::error::AppError;
use serde_json::json;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Verifies requests against the single API key configured at startup.
///
/// Only the SHA-256 digest of the key is kept; presented keys are hashed and
/// compared digest to digest. There are no per-user credentials, sessions or
/// expiry.
pub struct AuthService {
    key_digest: [u8; 32],
}

impl AuthService {
    /// Creates the service from the configured API key.
    pub fn new(api_key: &str) -> Self {
        Self {
            key_digest: digest(api_key),
        }
    }

    /// Checks a presented key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the key is absent or does not match
    /// exactly.
    pub fn authenticate(&self, presented: Option<&str>) -> Result<(), AppError> {
        let Some(key) = presented else {
            return Err(AppError::unauthorized(
                "Invalid API key",
                json!({ "reason": format!("{API_KEY_HEADER} header is missing") }),
            ));
        };

        if digest(key) != self.key_digest {
            return Err(AppError::unauthorized(
                "Invalid API key",
                json!({ "reason": "API key does not match" }),
            ));
        }

        Ok(())
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
