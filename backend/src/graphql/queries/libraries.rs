use super::prelude::*;

#[derive(Default)]
pub struct LibraryQueries;

#[Object]
impl LibraryQueries {
    /// All libraries
    async fn libraries(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<LibraryConnection> {
        let source = db(ctx).libraries().all();
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(LibraryConnection::from_connection(conn))
    }

    /// Get a library by global ID
    async fn library(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Library>> {
        let Some(local_id) = GlobalId::local_id(&id, NodeType::Library)? else {
            return Ok(None);
        };

        let record = db(ctx)
            .libraries()
            .get_by_id(&local_id)
            .await
            .map_err(internal_error)?;

        Ok(record.map(Library::from))
    }
}
