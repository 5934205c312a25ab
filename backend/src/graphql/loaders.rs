//! GraphQL DataLoaders for batching database queries
//!
//! Single-valued relations (`Book.author`, `Issue.borrower`, ...) resolve
//! through an ID-keyed [`RecordLoader`]. Every lookup issued while one page of
//! edges resolves is collected into a single `WHERE id IN (...)` select, so a
//! page costs one query per relation instead of one per edge.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_graphql::Context;
use async_graphql::dataloader::{DataLoader, Loader};

use crate::db::{CatalogRecord, Database, fetch_by_ids};

use super::errors::internal_error;

/// Batches lookups of one record type by ID.
pub struct RecordLoader<T> {
    db: Database,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> RecordLoader<T> {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            _phantom: PhantomData,
        }
    }
}

impl<T: CatalogRecord> Loader<String> for RecordLoader<T> {
    type Value = T;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        tracing::debug!(table = T::TABLE, count = keys.len(), "Batch loading records");

        let records = fetch_by_ids::<T>(self.db.pool(), keys)
            .await
            .map_err(Arc::new)?;

        Ok(records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect())
    }
}

/// Build a loader for one record type, spawning batches on tokio.
pub fn record_loader<T: CatalogRecord>(db: Database) -> DataLoader<RecordLoader<T>> {
    DataLoader::new(RecordLoader::new(db), tokio::spawn)
}

/// Load one record through the loader registered for its type
pub async fn load_record<T: CatalogRecord>(
    ctx: &Context<'_>,
    id: &str,
) -> async_graphql::Result<Option<T>> {
    let Some(loader) = ctx.data_opt::<DataLoader<RecordLoader<T>>>() else {
        return Err(internal_error(anyhow::anyhow!(
            "no loader registered for {}",
            T::TABLE
        )));
    };

    loader
        .load_one(id.to_string())
        .await
        .map_err(|e| internal_error(anyhow::Error::new(e)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::{BookRecord, LibraryRecord};

    async fn seeded() -> Database {
        let db = Database::connect_in_memory().await.unwrap();
        db.migrate().await.unwrap();
        db.seed().await;
        db
    }

    #[tokio::test]
    async fn test_load_batch_skips_unknown_ids() {
        let loader = RecordLoader::<BookRecord>::new(seeded().await);
        let keys = vec![
            "book-hobbit".to_string(),
            "book-emma".to_string(),
            "book-missing".to_string(),
        ];

        let loaded = loader.load(&keys).await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["book-hobbit"].title, "The Hobbit");
        assert_eq!(loaded["book-emma"].author_id, "author-austen");
        assert!(!loaded.contains_key("book-missing"));
    }

    #[tokio::test]
    async fn test_load_many_through_dataloader() {
        let loader = record_loader::<LibraryRecord>(seeded().await);

        let loaded = loader
            .load_many(["lib-central".to_string(), "lib-riverside".to_string()])
            .await
            .unwrap();

        assert_eq!(loaded["lib-central"].name, "Central Library");
        assert_eq!(loaded["lib-riverside"].name, "Riverside Branch");
    }
}
