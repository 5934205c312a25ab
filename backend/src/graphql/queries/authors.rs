use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// All authors
    async fn authors(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<AuthorConnection> {
        let source = db(ctx).authors().all();
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(AuthorConnection::from_connection(conn))
    }

    /// Get an author by global ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let Some(local_id) = GlobalId::local_id(&id, NodeType::Author)? else {
            return Ok(None);
        };

        let record = db(ctx)
            .authors()
            .get_by_id(&local_id)
            .await
            .map_err(internal_error)?;

        Ok(record.map(Author::from))
    }
}
