//! GraphQL schema definition
//!
//! The catalog is read-only, so the schema has no mutations or subscriptions.

use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema, SchemaBuilder};

use crate::db::{AuthorRecord, BookRecord, Database, LibraryRecord, UserRecord};
use crate::pagination::PageLimits;

use super::loaders::record_loader;
use super::node::MetaNode;
use super::queries::{
    AuthorQueries, BookQueries, GenreQueries, LibraryQueries, NodeQueries, UserQueries,
};

/// The GraphQL schema type
pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    BookQueries,
    AuthorQueries,
    LibraryQueries,
    GenreQueries,
    UserQueries,
    NodeQueries,
);

fn builder() -> SchemaBuilder<QueryRoot, EmptyMutation, EmptySubscription> {
    // MetaNode is never returned directly, so it has to be registered by hand
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .register_output_type::<MetaNode>()
}

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database, limits: PageLimits) -> CatalogSchema {
    builder()
        .extension(Tracing)
        .data(record_loader::<LibraryRecord>(db.clone()))
        .data(record_loader::<UserRecord>(db.clone()))
        .data(record_loader::<AuthorRecord>(db.clone()))
        .data(record_loader::<BookRecord>(db.clone()))
        .data(db)
        .data(limits)
        .finish()
}

/// Schema in SDL form
pub fn schema_sdl() -> String {
    builder().finish().sdl()
}
