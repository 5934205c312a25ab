//! Fetch sources and the pagination driver

use async_trait::async_trait;

use super::connection::Connection;
use super::error::PaginationResult;
use super::window::{PageLimits, PaginationArgs};

/// An ordered collection that can be counted and read by range.
///
/// Implementations push the offset/limit down to the backing store so a page
/// never loads more than the rows it returns.
#[async_trait]
pub trait FetchSource: Send + Sync {
    type Item: Send;

    /// Total number of items in the collection.
    async fn count(&self) -> anyhow::Result<usize>;

    /// Items at offsets `[offset, offset + limit)`, in collection order.
    async fn fetch_range(&self, offset: usize, limit: usize) -> anyhow::Result<Vec<Self::Item>>;
}

/// Resolve one page of `source`.
///
/// Issues at most one `count` and one `fetch_range`. Arguments are validated
/// before the source is touched; source errors come back unchanged as
/// [`PaginationError::Upstream`](super::PaginationError::Upstream).
pub async fn paginate<S>(
    source: &S,
    args: &PaginationArgs,
    limits: PageLimits,
) -> PaginationResult<Connection<S::Item>>
where
    S: FetchSource + ?Sized,
{
    let request = args.parse()?;
    let total = source.count().await?;
    let window = request.window(total, limits);

    tracing::debug!(
        total,
        start = window.start,
        end = window.end,
        "Resolved pagination window"
    );

    let items = if window.is_empty() {
        Vec::new()
    } else {
        source.fetch_range(window.start, window.len()).await?
    };

    Ok(Connection::from_window(items, &window))
}

/// Fetch source over an in-memory slice.
pub struct SliceSource<'a, T> {
    items: &'a [T],
}

impl<'a, T> SliceSource<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<'a, T> FetchSource for SliceSource<'a, T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.items.len())
    }

    async fn fetch_range(&self, offset: usize, limit: usize) -> anyhow::Result<Vec<T>> {
        let start = offset.min(self.items.len());
        let end = offset.saturating_add(limit).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}

/// Paginate an already materialized list without going through a source.
pub fn connection_from_slice<T: Clone>(
    items: &[T],
    args: &PaginationArgs,
    limits: PageLimits,
) -> PaginationResult<Connection<T>> {
    let window = args.parse()?.window(items.len(), limits);
    Ok(Connection::from_window(
        items[window.start..window.end].to_vec(),
        &window,
    ))
}
