//! User database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::source::{CatalogRecord, SqlSource};

const USER_COLUMNS: &str = "u.id AS id, u.created_at AS created_at, u.updated_at AS updated_at, \
    u.name AS name, u.email AS email, u.phone AS phone, u.street AS street, \
    u.additional AS additional, u.city AS city, u.country AS country, u.zip AS zip";

const USER_ORDER: &str = "u.created_at, u.id";

/// User record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub additional: Option<String>,
    pub city: String,
    pub country: String,
    pub zip: String,
}

impl CatalogRecord for UserRecord {
    const TABLE: &'static str = "users u";
    const COLUMNS: &'static str = USER_COLUMNS;
    const ID_COLUMN: &'static str = "u.id";

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users u WHERE u.id = ?");
        let record = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    fn source(&self, from: &'static str) -> SqlSource<UserRecord> {
        SqlSource::new(self.pool.clone(), from, USER_COLUMNS, USER_ORDER)
    }

    /// Every user
    pub fn all(&self) -> SqlSource<UserRecord> {
        self.source("users u")
    }

    /// People managing a library
    pub fn managing_library(&self, library_id: &str) -> SqlSource<UserRecord> {
        self.source("users u JOIN library_managers lm ON lm.user_id = u.id")
            .filter("lm.library_id = ?", library_id)
    }
}
