//! PostgreSQL implementation of entry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Entry, NewEntry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Row shape shared by every `url_entries` query.
#[derive(sqlx::FromRow)]
struct EntryRow {
    id: i64,
    url_address: String,
    url_alias: Option<String>,
    created_at: DateTime<Utc>,
    total_views: i64,
}

impl From<EntryRow> for Entry {
    fn from(r: EntryRow) -> Self {
        Entry::new(r.id, r.url_address, r.url_alias, r.created_at, r.total_views)
    }
}

/// PostgreSQL repository for URL entries.
///
/// Uniqueness of addresses and aliases is enforced by the `url_entries`
/// unique indexes; violations surface as [`AppError::Conflict`].
pub struct PgEntryRepository {
    pool: Arc<PgPool>,
}

impl PgEntryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    async fn find_by_url_address(&self, url_address: &str) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, url_address, url_alias, created_at, total_views
            FROM url_entries
            WHERE url_address = $1
            "#,
        )
        .bind(url_address)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Entry::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, url_address, url_alias, created_at, total_views
            FROM url_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Entry::from))
    }

    async fn find_by_url_alias(&self, url_alias: &str) -> Result<Option<Entry>, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, url_address, url_alias, created_at, total_views
            FROM url_entries
            WHERE url_alias = $1
            "#,
        )
        .bind(url_alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Entry::from))
    }

    async fn find_by_url_address_or_url_alias(
        &self,
        url_address: &str,
        url_alias: &str,
    ) -> Result<Option<Entry>, AppError> {
        // The address match sorts first when two different rows qualify.
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT id, url_address, url_alias, created_at, total_views
            FROM url_entries
            WHERE url_address = $1 OR url_alias = $2
            ORDER BY (url_address = $1) DESC
            LIMIT 1
            "#,
        )
        .bind(url_address)
        .bind(url_alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Entry::from))
    }

    async fn save(&self, new_entry: NewEntry) -> Result<Entry, AppError> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            INSERT INTO url_entries (url_address, url_alias, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, url_address, url_alias, created_at, total_views
            "#,
        )
        .bind(&new_entry.url_address)
        .bind(&new_entry.url_alias)
        .bind(new_entry.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn increment_views(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE url_entries SET total_views = total_views + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_entries")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
