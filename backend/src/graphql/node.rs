//! Global object identification
//!
//! A global ID is `base64("<TypeName>:<id>")`. The set of node types is the
//! static [`NODE_TYPES`] table; lookups by type name go through it.

use async_graphql::{ID, Interface};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};

use super::errors::invalid_id;
use super::types::{Author, Book, Genre, Issue, Library, User};

/// Entity types addressable through `node(id:)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Library,
    User,
    Author,
    Book,
    Genre,
    Issue,
}

/// Every node type, in schema declaration order
pub const NODE_TYPES: [NodeType; 6] = [
    NodeType::Library,
    NodeType::User,
    NodeType::Author,
    NodeType::Book,
    NodeType::Genre,
    NodeType::Issue,
];

impl NodeType {
    /// GraphQL type name, also the prefix inside global IDs
    pub fn type_name(self) -> &'static str {
        match self {
            NodeType::Library => "Library",
            NodeType::User => "User",
            NodeType::Author => "Author",
            NodeType::Book => "Book",
            NodeType::Genre => "Genre",
            NodeType::Issue => "Issue",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        NODE_TYPES.into_iter().find(|t| t.type_name() == name)
    }
}

/// Decoded global ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    pub node_type: NodeType,
    pub id: String,
}

impl GlobalId {
    pub fn new(node_type: NodeType, id: impl Into<String>) -> Self {
        Self {
            node_type,
            id: id.into(),
        }
    }

    /// Encode as the opaque ID handed to clients
    pub fn encode(&self) -> ID {
        ID(BASE64.encode(format!("{}:{}", self.node_type.type_name(), self.id)))
    }

    /// Decode an opaque ID, `None` if it is malformed or names an unknown type
    pub fn decode(token: &str) -> Option<Self> {
        let bytes = BASE64.decode(token).ok()?;
        let decoded = String::from_utf8(bytes).ok()?;
        let (type_name, id) = decoded.split_once(':')?;
        if id.is_empty() {
            return None;
        }
        let node_type = NodeType::from_type_name(type_name)?;
        Some(Self::new(node_type, id))
    }

    /// Decode an ID argument, failing with `INVALID_ID` when malformed
    pub fn parse(id: &ID) -> async_graphql::Result<Self> {
        Self::decode(id.as_str()).ok_or_else(|| invalid_id(id.as_str()))
    }

    /// Local ID for a typed lookup, `None` when the ID names another type
    pub fn local_id(id: &ID, expected: NodeType) -> async_graphql::Result<Option<String>> {
        let global = Self::parse(id)?;
        Ok((global.node_type == expected).then_some(global.id))
    }
}

/// Encode a record ID as a global ID
pub fn to_global_id(node_type: NodeType, id: &str) -> ID {
    GlobalId::new(node_type, id).encode()
}

/// An object with a globally unique ID
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "Globally unique ID"))]
pub enum Node {
    Library(Library),
    User(User),
    Author(Author),
    Book(Book),
    Genre(Genre),
    Issue(Issue),
}

/// A node that records when it was created and last updated
#[derive(Interface)]
#[graphql(
    field(name = "created_at", ty = "DateTime<Utc>"),
    field(name = "updated_at", ty = "DateTime<Utc>")
)]
pub enum MetaNode {
    Library(Library),
    User(User),
    Author(Author),
    Book(Book),
    Genre(Genre),
    Issue(Issue),
}
