//! Pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Pagination query parameters for `GET /url`.
///
/// Uses `serde_with` to parse numbers from query strings. Negative and zero
/// values parse successfully and are rejected by [`PaginationParams::validate`].
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Validates the parameters and applies defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    ///
    /// # Returns
    ///
    /// `(page, limit)`, with `page >= 1` and `1 <= limit <= 100`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when either value is out of range.
    pub fn validate(&self) -> Result<(i64, i64), AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                format!("Limit must be between 1 and {MAX_LIMIT}"),
                json!({ "limit": limit }),
            ));
        }

        Ok((page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, limit: Option<i64>) -> PaginationParams {
        PaginationParams { page, limit }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(params(None, None).validate().unwrap(), (1, 10));
    }

    #[test]
    fn test_explicit_values() {
        assert_eq!(params(Some(3), Some(25)).validate().unwrap(), (3, 25));
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(matches!(
            params(Some(0), None).validate(),
            Err(AppError::Validation { .. })
        ));
        assert!(params(Some(-2), None).validate().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(None, Some(0)).validate().is_err());
        assert!(params(None, Some(1)).validate().is_ok());
        assert!(params(None, Some(100)).validate().is_ok());
        assert!(params(None, Some(101)).validate().is_err());
    }

    #[test]
    fn test_parses_from_query_strings() {
        let p: PaginationParams =
            serde_json::from_value(serde_json::json!({ "page": "2", "limit": "5" })).unwrap();
        assert_eq!(p.validate().unwrap(), (2, 5));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let result: Result<PaginationParams, _> =
            serde_json::from_value(serde_json::json!({ "page": "two" }));
        assert!(result.is_err());
    }
}
