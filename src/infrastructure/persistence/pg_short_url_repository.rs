//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::db_error::is_unique_violation_on_code;

const SELECT_COLUMNS: &str = "id, original_url, short_code, created_at, last_accessed_at, \
                              click_count, description, active";

/// Row shape of the `short_urls` table.
#[derive(Debug, sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    last_accessed_at: Option<DateTime<Utc>>,
    click_count: i64,
    description: Option<String>,
    active: bool,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(r: ShortUrlRow) -> Self {
        ShortUrl {
            id: r.id,
            original_url: r.original_url,
            short_code: r.short_code,
            created_at: r.created_at,
            last_accessed_at: r.last_accessed_at,
            click_count: r.click_count,
            description: r.description,
            active: r.active,
        }
    }
}

/// PostgreSQL repository for short URL records.
///
/// Code uniqueness is backed by the `short_urls_short_code_key` constraint and
/// click accounting by a single `UPDATE ... SET click_count = click_count + 1`,
/// so neither depends on transaction isolation level.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM short_urls WHERE short_code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM short_urls WHERE short_code = $1 AND active = TRUE"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            INSERT INTO short_urls (original_url, short_code, description)
            VALUES ($1, $2, $3)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&new_url.original_url)
        .bind(&new_url.short_code)
        .bind(&new_url.description)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::conflict(
                    "Short code already exists",
                    json!({ "code": new_url.short_code }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, short_url: &ShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            UPDATE short_urls
            SET description = $2, active = $3
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(short_url.id)
        .bind(&short_url.description)
        .bind(short_url.active)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(ShortUrl::from).ok_or_else(|| {
            AppError::not_found(
                "Short URL not found",
                json!({ "code": short_url.short_code }),
            )
        })
    }

    async fn delete(&self, short_url: &ShortUrl) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE id = $1")
            .bind(short_url.id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrlRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM short_urls ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }

    async fn record_access(
        &self,
        id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        // GREATEST keeps last_accessed_at >= created_at when the app clock
        // lags the database clock.
        let row = sqlx::query_as::<_, ShortUrlRow>(&format!(
            r#"
            UPDATE short_urls
            SET click_count = click_count + 1,
                last_accessed_at = GREATEST($2, created_at)
            WHERE id = $1 AND active = TRUE
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(accessed_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }
}
