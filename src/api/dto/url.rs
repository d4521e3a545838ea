//! DTOs for the URL record endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreateUrl;
use crate::domain::entities::{UrlPatch, UrlRecord};

/// Request body for `POST /url`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub redirect: String,
}

impl From<CreateUrlRequest> for CreateUrl {
    fn from(req: CreateUrlRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            redirect: req.redirect,
        }
    }
}

/// Request body for `PATCH /url/{identifier}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `description` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the description
/// - **String** → set a new description
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[validate(url(message = "Invalid URL format"))]
    pub redirect: Option<String>,
}

impl From<UpdateUrlRequest> for UrlPatch {
    fn from(req: UpdateUrlRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            redirect: req.redirect,
        }
    }
}

/// JSON representation of a stored record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub redirect: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            redirect: record.redirect,
            url: record.url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
