//! Author database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::source::{CatalogRecord, SqlSource};

const AUTHOR_COLUMNS: &str = "a.id AS id, a.created_at AS created_at, a.updated_at AS updated_at, \
    a.name AS name, a.library_id AS library_id";

/// Author record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AuthorRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    /// Library the author belongs to
    pub library_id: String,
}

impl CatalogRecord for AuthorRecord {
    const TABLE: &'static str = "authors a";
    const COLUMNS: &'static str = AUTHOR_COLUMNS;
    const ID_COLUMN: &'static str = "a.id";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an author by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<AuthorRecord>> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors a WHERE a.id = ?");
        let record = sqlx::query_as::<_, AuthorRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Every author
    pub fn all(&self) -> SqlSource<AuthorRecord> {
        SqlSource::new(
            self.pool.clone(),
            "authors a",
            AUTHOR_COLUMNS,
            "a.created_at, a.id",
        )
    }
}
