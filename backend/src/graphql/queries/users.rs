use super::prelude::*;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// All registered users
    async fn users(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<UserConnection> {
        let source = db(ctx).users().all();
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(UserConnection::from_connection(conn))
    }

    /// Get a user by global ID
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let Some(local_id) = GlobalId::local_id(&id, NodeType::User)? else {
            return Ok(None);
        };

        let record = db(ctx)
            .users()
            .get_by_id(&local_id)
            .await
            .map_err(internal_error)?;

        Ok(record.map(User::from))
    }
}
