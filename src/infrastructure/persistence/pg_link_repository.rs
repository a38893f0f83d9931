//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Override maps are stored as JSONB columns so the logical schema
/// round-trips without a join table.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    code: String,
    default_url: String,
    by_country: Json<HashMap<String, String>>,
    by_language: Json<HashMap<String, String>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        LinkRecord {
            id: row.id,
            code: row.code,
            default_url: row.default_url,
            by_country: row.by_country.0,
            by_language: row.by_language.0,
            created_at: row.created_at,
        }
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, code, default_url, by_country, by_language, created_at FROM links";

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, record: LinkRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO links (id, code, default_url, by_country, by_language, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(&record.code)
        .bind(&record.default_url)
        .bind(Json(&record.by_country))
        .bind(Json(&record.by_language))
        .bind(record.created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!("{} WHERE code = $1", SELECT_COLUMNS))
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(LinkRecord::from))
    }

    async fn find_by_default_url(
        &self,
        default_url: &str,
    ) -> Result<Option<LinkRecord>, AppError> {
        let row =
            sqlx::query_as::<_, LinkRow>(&format!("{} WHERE default_url = $1", SELECT_COLUMNS))
                .bind(default_url)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(LinkRecord::from))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
