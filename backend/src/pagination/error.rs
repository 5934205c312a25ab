//! Pagination error types

use thiserror::Error;

/// Errors produced while resolving a paginated request.
///
/// An offset past the end of the collection is not an error: it resolves to
/// an empty page.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The cursor token could not be decoded into an offset.
    #[error("Invalid cursor '{cursor}': {reason}")]
    InvalidCursor {
        /// The token as supplied by the client.
        cursor: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// `first` or `last` was negative.
    #[error("Invalid pagination arguments: {0}")]
    InvalidArguments(String),

    /// The fetch source failed. Forwarded as-is.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl PaginationError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            PaginationError::InvalidCursor { .. } => "INVALID_CURSOR",
            PaginationError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            PaginationError::Upstream(_) => "INTERNAL",
        }
    }

    /// Whether the error was caused by the request rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PaginationError::Upstream(_))
    }
}

/// Result type for pagination operations.
pub type PaginationResult<T> = Result<T, PaginationError>;
