use super::prelude::*;

#[derive(Default)]
pub struct GenreQueries;

#[Object]
impl GenreQueries {
    async fn genres(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<GenreConnection> {
        let source = db(ctx).genres().all();
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(GenreConnection::from_connection(conn))
    }

    /// Get a genre by global ID
    async fn genre(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Genre>> {
        let Some(local_id) = GlobalId::local_id(&id, NodeType::Genre)? else {
            return Ok(None);
        };

        let record = db(ctx)
            .genres()
            .get_by_id(&local_id)
            .await
            .map_err(internal_error)?;

        Ok(record.map(Genre::from))
    }
}
