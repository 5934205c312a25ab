//! Issue (book loan) database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::source::{CatalogRecord, SqlSource};

const ISSUE_COLUMNS: &str = "i.id AS id, i.created_at AS created_at, i.updated_at AS updated_at, \
    i.due_date AS due_date, i.book_id AS book_id, i.borrower_id AS borrower_id, \
    i.location_id AS location_id";

/// Issue record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct IssueRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub book_id: String,
    pub borrower_id: String,
    /// Library the book was issued from
    pub location_id: String,
}

impl CatalogRecord for IssueRecord {
    const TABLE: &'static str = "issues i";
    const COLUMNS: &'static str = ISSUE_COLUMNS;
    const ID_COLUMN: &'static str = "i.id";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct IssueRepository {
    pool: SqlitePool,
}

impl IssueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an issue by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<IssueRecord>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues i WHERE i.id = ?");
        let record = sqlx::query_as::<_, IssueRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    fn source(&self) -> SqlSource<IssueRecord> {
        SqlSource::new(
            self.pool.clone(),
            "issues i",
            ISSUE_COLUMNS,
            "i.created_at, i.id",
        )
    }

    /// Books issued from a library
    pub fn by_location(&self, library_id: &str) -> SqlSource<IssueRecord> {
        self.source().filter("i.location_id = ?", library_id)
    }

    /// Books borrowed by a user
    pub fn by_borrower(&self, user_id: &str) -> SqlSource<IssueRecord> {
        self.source().filter("i.borrower_id = ?", user_id)
    }
}
