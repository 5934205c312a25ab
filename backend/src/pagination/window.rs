//! Pagination arguments and window resolution
//!
//! Follows the Relay cursor connection algorithm: `after`/`before` narrow the
//! collection to a range, then `first` keeps the head of that range and `last`
//! keeps its tail. Both page sizes are capped by [`PageLimits`].

use super::cursor::Cursor;
use super::error::{PaginationError, PaginationResult};

/// Page size used when the caller does not configure one.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Server-side bounds applied to every paginated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Largest number of edges a single page may contain.
    pub max_page_size: usize,
}

impl PageLimits {
    pub fn new(max_page_size: usize) -> Self {
        Self {
            max_page_size: max_page_size.max(1),
        }
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGE_SIZE)
    }
}

/// Raw Relay connection arguments as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationArgs {
    /// Return the first N items of the range
    pub first: Option<i32>,
    /// Return items after this cursor
    pub after: Option<String>,
    /// Return the last N items of the range
    pub last: Option<i32>,
    /// Return items before this cursor
    pub before: Option<String>,
}

impl PaginationArgs {
    /// Build from arguments in the order Relay declares them.
    pub fn new(
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Self {
        Self {
            first,
            after,
            last,
            before,
        }
    }

    /// Forward pagination: the first `first` items.
    pub fn forward(first: i32) -> Self {
        Self {
            first: Some(first),
            ..Self::default()
        }
    }

    /// Backward pagination: the last `last` items.
    pub fn backward(last: i32) -> Self {
        Self {
            last: Some(last),
            ..Self::default()
        }
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Validate sizes and decode cursors.
    ///
    /// Does not need the collection size, so callers can reject a bad
    /// request before touching the store.
    pub fn parse(&self) -> PaginationResult<PageRequest> {
        Ok(PageRequest {
            first: non_negative("first", self.first)?,
            after: self.after.as_deref().map(Cursor::decode).transpose()?,
            last: non_negative("last", self.last)?,
            before: self.before.as_deref().map(Cursor::decode).transpose()?,
        })
    }
}

fn non_negative(name: &str, value: Option<i32>) -> PaginationResult<Option<usize>> {
    match value {
        Some(v) if v < 0 => Err(PaginationError::InvalidArguments(format!(
            "{name} must be a non-negative integer, got {v}"
        ))),
        Some(v) => Ok(Some(v as usize)),
        None => Ok(None),
    }
}

/// Validated arguments with cursors decoded to offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub first: Option<usize>,
    pub after: Option<usize>,
    pub last: Option<usize>,
    pub before: Option<usize>,
}

impl PageRequest {
    /// Compute the slice of a collection of `total` items this request selects.
    ///
    /// Offsets past the end clamp to an empty window at the boundary.
    pub fn window(&self, total: usize, limits: PageLimits) -> Window {
        let max = limits.max_page_size;

        let mut start = self.after.map_or(0, |o| o.saturating_add(1)).min(total);
        let mut end = self.before.map_or(total, |o| o.min(total)).max(start);

        if self.first.is_none() && self.last.is_none() {
            end = end.min(start.saturating_add(max));
        }
        if let Some(first) = self.first {
            end = end.min(start.saturating_add(first.min(max)));
        }
        if let Some(last) = self.last {
            start = start.max(end.saturating_sub(last.min(max)));
        }

        Window { start, end, total }
    }
}

/// Half-open range `[start, end)` of a collection holding `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Parse `args` and resolve them against a collection of `total` items.
pub fn resolve_window(
    args: &PaginationArgs,
    total: usize,
    limits: PageLimits,
) -> PaginationResult<Window> {
    Ok(args.parse()?.window(total, limits))
}
