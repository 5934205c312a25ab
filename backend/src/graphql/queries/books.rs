use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Every book in the catalog
    async fn books(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<BookConnection> {
        let source = db(ctx).books().all();
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(BookConnection::from_connection(conn))
    }

    /// Get a book by global ID
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Book>> {
        let Some(local_id) = GlobalId::local_id(&id, NodeType::Book)? else {
            return Ok(None);
        };

        let record = db(ctx)
            .books()
            .get_by_id(&local_id)
            .await
            .map_err(internal_error)?;

        Ok(record.map(Book::from))
    }
}
