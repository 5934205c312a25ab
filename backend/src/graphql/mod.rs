//! GraphQL API for the library catalog
//!
//! Every list-valued field is a Relay connection resolved through
//! [`crate::pagination::paginate`]. Entities are addressed by opaque global
//! IDs and exposed through the `Node` and `MetaNode` interfaces.
//!
//! Root query fields live in `queries/`, one struct per entity, merged into
//! [`QueryRoot`] with `#[derive(MergedObject)]`.

pub mod errors;
pub mod loaders;
pub mod node;
pub mod pagination;
pub mod queries;
pub mod scalars;
mod schema;
pub mod types;

pub use node::{GlobalId, MetaNode, NODE_TYPES, Node, NodeType};
pub use schema::{CatalogSchema, QueryRoot, build_schema, schema_sdl};
