//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlPatch, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str = "id, title, description, redirect, url, created_at, updated_at";

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    title: String,
    description: Option<String>,
    redirect: String,
    url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            redirect: row.redirect,
            url: row.url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for short URL records.
///
/// Uses bound parameters throughout; no user input is interpolated into SQL.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            r#"
            INSERT INTO urls (title, description, redirect, url)
            VALUES ($1, $2, $3, $4)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(new_record.title)
        .bind(new_record.description)
        .bind(new_record.redirect)
        .bind(new_record.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls WHERE url = $1"
        ))
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, page: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let Some(offset) = (page - 1).checked_mul(limit) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM urls
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: UrlPatch) -> Result<Option<UrlRecord>, AppError> {
        // Nothing to change: leave updated_at alone.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let set_description = patch.description.is_some();

        let row = sqlx::query_as::<_, UrlRow>(&format!(
            r#"
            UPDATE urls SET
                title       = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                redirect    = COALESCE($5, redirect),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(set_description)
        .bind(patch.description.flatten())
        .bind(patch.redirect)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "DELETE FROM urls WHERE id = $1 RETURNING {RECORD_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
