//! Error codes and resolver helpers
//!
//! Errors reaching clients carry a stable `extensions.code`. Store failures
//! are logged in full and reported as `INTERNAL` without their details.

use async_graphql::{Context, ErrorExtensions};

use crate::db::Database;
use crate::pagination::{
    Connection, FetchSource, PageLimits, PaginationArgs, PaginationError, paginate,
};

pub const INVALID_ID: &str = "INVALID_ID";
pub const INTERNAL: &str = "INTERNAL";

impl ErrorExtensions for PaginationError {
    fn extend(&self) -> async_graphql::Error {
        let message = if self.is_client_error() {
            tracing::debug!(error = %self, "Rejected pagination arguments");
            self.to_string()
        } else {
            tracing::error!(error = %self, "Failed to fetch page");
            "Internal server error".to_string()
        };
        let code = self.code();
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}

/// Wrap a store failure outside of pagination
pub fn internal_error(err: anyhow::Error) -> async_graphql::Error {
    tracing::error!(error = %err, "Catalog lookup failed");
    async_graphql::Error::new("Internal server error").extend_with(|_, e| e.set("code", INTERNAL))
}

/// Error for an ID that is not a well-formed global ID
pub fn invalid_id(id: &str) -> async_graphql::Error {
    async_graphql::Error::new(format!("Invalid ID: {}", id))
        .extend_with(|_, e| e.set("code", INVALID_ID))
}

/// Database handle stored in the schema data
pub fn db<'a>(ctx: &Context<'a>) -> &'a Database {
    ctx.data_unchecked::<Database>()
}

/// Resolve a connection field with the limits configured on the schema
pub async fn resolve_connection<S>(
    ctx: &Context<'_>,
    source: &S,
    args: PaginationArgs,
) -> async_graphql::Result<Connection<S::Item>>
where
    S: FetchSource + ?Sized,
{
    let limits = ctx.data_opt::<PageLimits>().copied().unwrap_or_default();
    paginate(source, &args, limits)
        .await
        .map_err(|e| e.extend())
}
