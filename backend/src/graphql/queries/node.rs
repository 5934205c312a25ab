use super::prelude::*;
use crate::graphql::node::Node;

#[derive(Default)]
pub struct NodeQueries;

#[Object]
impl NodeQueries {
    /// Fetch any object by its global ID
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let GlobalId { node_type, id } = GlobalId::parse(&id)?;
        let db = db(ctx);

        let node = match node_type {
            NodeType::Library => db
                .libraries()
                .get_by_id(&id)
                .await
                .map_err(internal_error)?
                .map(|r| Node::Library(r.into())),
            NodeType::User => db
                .users()
                .get_by_id(&id)
                .await
                .map_err(internal_error)?
                .map(|r| Node::User(r.into())),
            NodeType::Author => db
                .authors()
                .get_by_id(&id)
                .await
                .map_err(internal_error)?
                .map(|r| Node::Author(r.into())),
            NodeType::Book => db
                .books()
                .get_by_id(&id)
                .await
                .map_err(internal_error)?
                .map(|r| Node::Book(r.into())),
            NodeType::Genre => db
                .genres()
                .get_by_id(&id)
                .await
                .map_err(internal_error)?
                .map(|r| Node::Genre(r.into())),
            NodeType::Issue => db
                .issues()
                .get_by_id(&id)
                .await
                .map_err(internal_error)?
                .map(|r| Node::Issue(r.into())),
        };

        Ok(node)
    }
}
