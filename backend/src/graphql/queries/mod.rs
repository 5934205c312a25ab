pub mod authors;
pub mod books;
pub mod genres;
pub mod libraries;
pub mod node;
pub mod users;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use genres::GenreQueries;
pub use libraries::LibraryQueries;
pub use node::NodeQueries;
pub use users::UserQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::graphql::errors::{db, internal_error, resolve_connection};
    pub(crate) use crate::graphql::node::{GlobalId, NodeType};
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::pagination::PaginationArgs;
}
