//! Genre database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::source::{CatalogRecord, SqlSource};

const GENRE_COLUMNS: &str =
    "g.id AS id, g.created_at AS created_at, g.updated_at AS updated_at, g.name AS name";

const GENRE_ORDER: &str = "g.created_at, g.id";

/// Genre record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct GenreRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
}

impl CatalogRecord for GenreRecord {
    const TABLE: &'static str = "genres g";
    const COLUMNS: &'static str = GENRE_COLUMNS;
    const ID_COLUMN: &'static str = "g.id";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct GenreRepository {
    pool: SqlitePool,
}

impl GenreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a genre by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<GenreRecord>> {
        let sql = format!("SELECT {GENRE_COLUMNS} FROM genres g WHERE g.id = ?");
        let record = sqlx::query_as::<_, GenreRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    fn source(&self, from: &'static str) -> SqlSource<GenreRecord> {
        SqlSource::new(self.pool.clone(), from, GENRE_COLUMNS, GENRE_ORDER)
    }

    /// Every genre
    pub fn all(&self) -> SqlSource<GenreRecord> {
        self.source("genres g")
    }

    /// Genres a book is tagged with
    pub fn by_book(&self, book_id: &str) -> SqlSource<GenreRecord> {
        self.source("genres g JOIN book_genres bg ON bg.genre_id = g.id")
            .filter("bg.book_id = ?", book_id)
    }
}
