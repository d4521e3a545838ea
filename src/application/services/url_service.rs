//! Short URL creation, lookup, listing, update and removal.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlPatch, UrlRecord};
use crate::domain::pagination::{Page, PageMeta};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::identifier::IdentifierGenerator;
use crate::utils::redirect_url::validate_redirect_url;

/// Maximum title length accepted by the service.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Input for creating a short URL.
#[derive(Debug, Clone)]
pub struct CreateUrl {
    pub title: String,
    pub description: Option<String>,
    pub redirect: String,
}

/// Service for managing short URL records.
///
/// Composes short URLs from the configured host and generated identifiers,
/// validates input before touching the store, and keeps the record cache
/// consistent on update and delete.
pub struct UrlService<R: UrlRepository, G: IdentifierGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    cache: Arc<dyn CacheService>,
    host: String,
    identifier_length: Option<usize>,
}

impl<R: UrlRepository, G: IdentifierGenerator> UrlService<R, G> {
    /// Creates a new URL service.
    ///
    /// # Arguments
    ///
    /// - `host` - prefix of every short URL (e.g. `localhost:3000`); a trailing `/` is ignored
    /// - `identifier_length` - length passed to the generator (`None` = generator default)
    pub fn new(
        repository: Arc<R>,
        generator: Arc<G>,
        cache: Arc<dyn CacheService>,
        host: impl Into<String>,
        identifier_length: Option<usize>,
    ) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self {
            repository,
            generator,
            cache,
            host,
            identifier_length,
        }
    }

    /// Composes the full short URL for an identifier.
    pub fn short_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.host, identifier)
    }

    /// Creates a short URL record.
    ///
    /// # Collisions
    ///
    /// A generated identifier is not checked against the store first. If it is
    /// already taken, the insert fails on the unique constraint and the
    /// [`AppError::Conflict`] is returned as-is; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is empty or too long, the
    /// description is present but empty, or the redirect is not a valid URL.
    pub async fn create(&self, input: CreateUrl) -> Result<UrlRecord, AppError> {
        validate_title(&input.title)?;
        if let Some(description) = &input.description {
            validate_description(description)?;
        }
        validate_redirect(&input.redirect)?;

        let identifier = self.generator.generate(self.identifier_length);
        let url = self.short_url(&identifier);

        let record = self
            .repository
            .create(NewUrlRecord {
                title: input.title,
                description: input.description,
                redirect: input.redirect,
                url,
            })
            .await?;

        info!(id = record.id, identifier = %identifier, "Short URL created");

        Ok(record)
    }

    /// Looks up a record by identifier.
    ///
    /// Consults the cache first and populates it on a database hit.
    /// Returns `Ok(None)` when no record matches; absence is not an error.
    pub async fn find_one(&self, identifier: &str) -> Result<Option<UrlRecord>, AppError> {
        match self.cache.get_record(identifier).await {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(e) => warn!(identifier, error = %e, "Cache lookup failed"),
        }

        let record = self
            .repository
            .find_by_url(&self.short_url(identifier))
            .await?;

        if let Some(record) = &record
            && let Err(e) = self.cache.set_record(identifier, record, None).await
        {
            warn!(identifier, error = %e, "Failed to cache record");
        }

        Ok(record)
    }

    /// Resolves an identifier to its record, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this identifier.
    pub async fn resolve(&self, identifier: &str) -> Result<UrlRecord, AppError> {
        self.find_one(identifier).await?.ok_or_else(|| {
            debug!(identifier, "Identifier not found");
            AppError::not_found(
                format!("URL with identifier {identifier} not found"),
                json!({ "identifier": identifier }),
            )
        })
    }

    /// Returns one page of records with pagination metadata.
    ///
    /// `page` is 1-indexed; both arguments are expected to be validated (>= 1).
    /// Pages past the end, however far, come back empty without a store query.
    pub async fn find_all(&self, page: i64, limit: i64) -> Result<Page<UrlRecord>, AppError> {
        let total_count = self.repository.count().await?;

        let offset = (page - 1).checked_mul(limit);
        let data = match offset {
            Some(offset) if offset < total_count => self.repository.list(page, limit).await?,
            _ => Vec::new(),
        };

        Ok(Page {
            data,
            meta: PageMeta::new(total_count, page, limit),
        })
    }

    /// Applies a partial update to a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid fields.
    /// Returns [`AppError::NotFound`] if no record has this `id`.
    pub async fn update(&self, id: i64, patch: UrlPatch) -> Result<UrlRecord, AppError> {
        validate_patch(&patch)?;

        let record = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| record_not_found(id))?;

        self.invalidate(record.identifier()).await;
        info!(id, "Short URL updated");

        Ok(record)
    }

    /// Updates the record behind an identifier.
    ///
    /// The patch is validated before the identifier is looked up, so invalid
    /// input never reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid fields.
    /// Returns [`AppError::NotFound`] if the identifier is unknown.
    pub async fn update_by_identifier(
        &self,
        identifier: &str,
        patch: UrlPatch,
    ) -> Result<UrlRecord, AppError> {
        validate_patch(&patch)?;
        let existing = self.resolve(identifier).await?;
        self.update(existing.id, patch).await
    }

    /// Deletes a record and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this `id`.
    pub async fn remove(&self, id: i64) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| record_not_found(id))?;

        self.invalidate(record.identifier()).await;
        info!(id, "Short URL removed");

        Ok(record)
    }

    /// Total number of stored records. Doubles as a database liveness probe.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn invalidate(&self, identifier: &str) {
        if let Err(e) = self.cache.invalidate(identifier).await {
            warn!(identifier, error = %e, "Failed to invalidate cache");
        }
    }
}

fn record_not_found(id: i64) -> AppError {
    AppError::not_found(format!("URL with id {id} not found"), json!({ "id": id }))
}

fn validate_patch(patch: &UrlPatch) -> Result<(), AppError> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(Some(description)) = &patch.description {
        validate_description(description)?;
    }
    if let Some(redirect) = &patch.redirect {
        validate_redirect(redirect)?;
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::bad_request(
            "Title must not be empty",
            json!({ "field": "title" }),
        ));
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::bad_request(
            format!("Title must be at most {MAX_TITLE_LENGTH} characters"),
            json!({ "field": "title" }),
        ));
    }

    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.trim().is_empty() {
        return Err(AppError::bad_request(
            "Description must not be empty when provided",
            json!({ "field": "description" }),
        ));
    }

    Ok(())
}

fn validate_redirect(redirect: &str) -> Result<(), AppError> {
    validate_redirect_url(redirect).map_err(|e| {
        AppError::bad_request(
            "Invalid redirect URL",
            json!({ "field": "redirect", "reason": e.to_string() }),
        )
    })
}
