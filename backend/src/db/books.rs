//! Book database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::source::{CatalogRecord, SqlSource};

const BOOK_COLUMNS: &str = "b.id AS id, b.created_at AS created_at, b.updated_at AS updated_at, \
    b.title AS title, b.description AS description, b.isbn AS isbn, \
    b.identifier AS identifier, b.author_id AS author_id, b.location_id AS location_id";

const BOOK_ORDER: &str = "b.created_at, b.id";

/// Book record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct BookRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    pub isbn: Option<String>,
    /// Shelf identifier, unique across the catalog
    pub identifier: String,
    pub author_id: String,
    /// Library currently holding the book
    pub location_id: String,
}

impl CatalogRecord for BookRecord {
    const TABLE: &'static str = "books b";
    const COLUMNS: &'static str = BOOK_COLUMNS;
    const ID_COLUMN: &'static str = "b.id";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<BookRecord>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books b WHERE b.id = ?");
        let record = sqlx::query_as::<_, BookRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    fn source(&self, from: &'static str) -> SqlSource<BookRecord> {
        SqlSource::new(self.pool.clone(), from, BOOK_COLUMNS, BOOK_ORDER)
    }

    /// Every book in the catalog
    pub fn all(&self) -> SqlSource<BookRecord> {
        self.source("books b")
    }

    /// Books written by an author
    pub fn by_author(&self, author_id: &str) -> SqlSource<BookRecord> {
        self.source("books b").filter("b.author_id = ?", author_id)
    }

    /// Books currently located in a library
    pub fn by_location(&self, library_id: &str) -> SqlSource<BookRecord> {
        self.source("books b").filter("b.location_id = ?", library_id)
    }

    /// Books tagged with a genre
    pub fn by_genre(&self, genre_id: &str) -> SqlSource<BookRecord> {
        self.source("books b JOIN book_genres bg ON bg.book_id = b.id")
            .filter("bg.genre_id = ?", genre_id)
    }
}
