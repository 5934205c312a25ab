//! SQL-backed fetch source
//!
//! Turns a static table/join description into the two parameterized
//! statements the pagination engine needs: a `COUNT(*)` and a
//! `LIMIT/OFFSET` select with a stable ordering.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

use crate::pagination::FetchSource;

/// A paginatable list query over one table (optionally joined).
pub struct SqlSource<T> {
    pool: SqlitePool,
    /// `FROM` clause, e.g. `books b JOIN book_genres bg ON bg.book_id = b.id`
    from: &'static str,
    /// Select list, aliased to the record's field names
    columns: &'static str,
    /// `ORDER BY` clause; must be total so offsets are stable
    order_by: &'static str,
    /// Single `WHERE` condition with one `?` placeholder and its value
    filter: Option<(&'static str, String)>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> SqlSource<T> {
    pub fn new(
        pool: SqlitePool,
        from: &'static str,
        columns: &'static str,
        order_by: &'static str,
    ) -> Self {
        Self {
            pool,
            from,
            columns,
            order_by,
            filter: None,
            _phantom: PhantomData,
        }
    }

    /// Restrict the list with a condition such as `b.author_id = ?`.
    pub fn filter(mut self, condition: &'static str, value: impl Into<String>) -> Self {
        self.filter = Some((condition, value.into()));
        self
    }

    fn where_sql(&self) -> String {
        match &self.filter {
            Some((condition, _)) => format!(" WHERE {}", condition),
            None => String::new(),
        }
    }

    /// The count statement
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}{}", self.from, self.where_sql())
    }

    /// The ranged select statement; `LIMIT` and `OFFSET` are bound last.
    pub fn select_sql(&self) -> String {
        format!(
            "SELECT {} FROM {}{} ORDER BY {} LIMIT ? OFFSET ?",
            self.columns,
            self.from,
            self.where_sql(),
            self.order_by
        )
    }
}

#[async_trait]
impl<T> FetchSource for SqlSource<T>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin + 'static,
{
    type Item = T;

    async fn count(&self) -> anyhow::Result<usize> {
        let sql = self.count_sql();
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        if let Some((_, value)) = &self.filter {
            query = query.bind(value.as_str());
        }

        let total = query.fetch_one(&self.pool).await?;
        Ok(usize::try_from(total)?)
    }

    async fn fetch_range(&self, offset: usize, limit: usize) -> anyhow::Result<Vec<T>> {
        let sql = self.select_sql();
        let mut query = sqlx::query_as::<_, T>(&sql);
        if let Some((_, value)) = &self.filter {
            query = query.bind(value.as_str());
        }

        let rows = query
            .bind(i64::try_from(limit)?)
            .bind(i64::try_from(offset)?)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(from = self.from, offset, limit, rows = rows.len(), "Fetched page");
        Ok(rows)
    }
}

/// A record stored in one table and addressed by a string ID.
pub trait CatalogRecord:
    for<'r> sqlx::FromRow<'r, SqliteRow> + Clone + Send + Sync + Unpin + 'static
{
    /// Table with its alias, e.g. `books b`
    const TABLE: &'static str;
    /// Select list, aliased to the record's field names
    const COLUMNS: &'static str;
    /// Qualified ID column, e.g. `b.id`
    const ID_COLUMN: &'static str;

    fn id(&self) -> &str;
}

/// Load every record whose ID is in `ids` with a single `IN (...)` select.
///
/// Unknown IDs are skipped; the result is in no particular order.
pub async fn fetch_by_ids<T: CatalogRecord>(
    pool: &SqlitePool,
    ids: &[String],
) -> Result<Vec<T>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT {} FROM {} WHERE {} IN ({})",
        T::COLUMNS,
        T::TABLE,
        T::ID_COLUMN,
        placeholders
    );

    let mut query = sqlx::query_as::<_, T>(&sql);
    for id in ids {
        query = query.bind(id.as_str());
    }
    query.fetch_all(pool).await
}
