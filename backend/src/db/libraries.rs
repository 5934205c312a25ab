//! Library database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::source::{CatalogRecord, SqlSource};

const LIBRARY_COLUMNS: &str = "l.id AS id, l.created_at AS created_at, l.updated_at AS updated_at, \
    l.name AS name, l.street AS street, l.additional AS additional, l.city AS city, \
    l.country AS country, l.zip AS zip, l.phone AS phone, l.email AS email";

const LIBRARY_ORDER: &str = "l.created_at, l.id";

/// Library record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LibraryRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub street: String,
    pub additional: Option<String>,
    pub city: String,
    pub country: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl CatalogRecord for LibraryRecord {
    const TABLE: &'static str = "libraries l";
    const COLUMNS: &'static str = LIBRARY_COLUMNS;
    const ID_COLUMN: &'static str = "l.id";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct LibraryRepository {
    pool: SqlitePool,
}

impl LibraryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a library by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<LibraryRecord>> {
        let sql = format!("SELECT {LIBRARY_COLUMNS} FROM libraries l WHERE l.id = ?");
        let record = sqlx::query_as::<_, LibraryRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    fn source(&self, from: &'static str) -> SqlSource<LibraryRecord> {
        SqlSource::new(self.pool.clone(), from, LIBRARY_COLUMNS, LIBRARY_ORDER)
    }

    /// Every library
    pub fn all(&self) -> SqlSource<LibraryRecord> {
        self.source("libraries l")
    }

    /// Libraries a user manages
    pub fn managed_by(&self, user_id: &str) -> SqlSource<LibraryRecord> {
        self.source("libraries l JOIN library_managers lm ON lm.library_id = l.id")
            .filter("lm.user_id = ?", user_id)
    }
}
