//! GraphQL object types for catalog entities
//!
//! Each object wraps its repository record. Relations to many records are
//! connections taking the Relay arguments `after, first, before, last`.

use async_graphql::{Context, ID, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};

use crate::db::{AuthorRecord, BookRecord, GenreRecord, IssueRecord, LibraryRecord, UserRecord};
use crate::define_connection;
use crate::pagination::PaginationArgs;

use super::errors::{db, internal_error, resolve_connection};
use super::loaders::load_record;
use super::node::{NodeType, to_global_id};
use super::scalars::{EmailAddress, PhoneNumber};

/// Postal address
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    /// Apartment, suite or floor
    pub additional: Option<String>,
    pub city: String,
    pub country: String,
    pub zip: String,
}

fn not_found(kind: &str, id: &str) -> async_graphql::Error {
    internal_error(anyhow::anyhow!("{} {} referenced but missing", kind, id))
}

// ============================================================================
// Library
// ============================================================================

#[derive(Debug, Clone)]
pub struct Library(pub LibraryRecord);

impl From<LibraryRecord> for Library {
    fn from(record: LibraryRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Library {
    pub async fn id(&self) -> ID {
        to_global_id(NodeType::Library, &self.0.id)
    }

    pub async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    pub async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn address(&self) -> Address {
        Address {
            street: self.0.street.clone(),
            additional: self.0.additional.clone(),
            city: self.0.city.clone(),
            country: self.0.country.clone(),
            zip: self.0.zip.clone(),
        }
    }

    async fn phone(&self) -> PhoneNumber {
        PhoneNumber(self.0.phone.clone())
    }

    async fn email(&self) -> EmailAddress {
        EmailAddress(self.0.email.clone())
    }

    /// People managing this library
    async fn management(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<UserConnection> {
        let source = db(ctx).users().managing_library(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(UserConnection::from_connection(conn))
    }

    /// Books currently held by this library
    async fn books(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<BookConnection> {
        let source = db(ctx).books().by_location(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(BookConnection::from_connection(conn))
    }

    /// Loans issued from this library
    async fn borrowers(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<IssueConnection> {
        let source = db(ctx).issues().by_location(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(IssueConnection::from_connection(conn))
    }
}

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone)]
pub struct User(pub UserRecord);

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl User {
    pub async fn id(&self) -> ID {
        to_global_id(NodeType::User, &self.0.id)
    }

    pub async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    pub async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> EmailAddress {
        EmailAddress(self.0.email.clone())
    }

    async fn phone(&self) -> PhoneNumber {
        PhoneNumber(self.0.phone.clone())
    }

    async fn address(&self) -> Address {
        Address {
            street: self.0.street.clone(),
            additional: self.0.additional.clone(),
            city: self.0.city.clone(),
            country: self.0.country.clone(),
            zip: self.0.zip.clone(),
        }
    }

    /// Books this user has borrowed
    async fn books_issued(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<IssueConnection> {
        let source = db(ctx).issues().by_borrower(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(IssueConnection::from_connection(conn))
    }

    /// Libraries this user manages
    async fn managing(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<LibraryConnection> {
        let source = db(ctx).libraries().managed_by(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(LibraryConnection::from_connection(conn))
    }
}

// ============================================================================
// Author
// ============================================================================

#[derive(Debug, Clone)]
pub struct Author(pub AuthorRecord);

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Author {
    pub async fn id(&self) -> ID {
        to_global_id(NodeType::Author, &self.0.id)
    }

    pub async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    pub async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Library the author belongs to
    async fn library(&self, ctx: &Context<'_>) -> Result<Option<Library>> {
        Ok(load_record::<LibraryRecord>(ctx, &self.0.library_id).await?.map(Library))
    }

    async fn books(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<BookConnection> {
        let source = db(ctx).books().by_author(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(BookConnection::from_connection(conn))
    }
}

// ============================================================================
// Book
// ============================================================================

#[derive(Debug, Clone)]
pub struct Book(pub BookRecord);

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Book {
    pub async fn id(&self) -> ID {
        to_global_id(NodeType::Book, &self.0.id)
    }

    pub async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    pub async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn isbn(&self) -> Option<&str> {
        self.0.isbn.as_deref()
    }

    /// Shelf identifier
    async fn identifier(&self) -> &str {
        &self.0.identifier
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        load_record::<AuthorRecord>(ctx, &self.0.author_id)
            .await?
            .map(Author)
            .ok_or_else(|| not_found("author", &self.0.author_id))
    }

    /// Library currently holding the book
    async fn location(&self, ctx: &Context<'_>) -> Result<Option<Library>> {
        Ok(load_record::<LibraryRecord>(ctx, &self.0.location_id).await?.map(Library))
    }

    async fn genres(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<GenreConnection> {
        let source = db(ctx).genres().by_book(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(GenreConnection::from_connection(conn))
    }
}

// ============================================================================
// Genre
// ============================================================================

#[derive(Debug, Clone)]
pub struct Genre(pub GenreRecord);

impl From<GenreRecord> for Genre {
    fn from(record: GenreRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Genre {
    pub async fn id(&self) -> ID {
        to_global_id(NodeType::Genre, &self.0.id)
    }

    pub async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    pub async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn books(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Result<BookConnection> {
        let source = db(ctx).books().by_genre(&self.0.id);
        let args = PaginationArgs::new(after, first, before, last);
        let conn = resolve_connection(ctx, &source, args).await?;
        Ok(BookConnection::from_connection(conn))
    }
}

// ============================================================================
// Issue
// ============================================================================

/// A book on loan to a user
#[derive(Debug, Clone)]
pub struct Issue(pub IssueRecord);

impl From<IssueRecord> for Issue {
    fn from(record: IssueRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Issue {
    pub async fn id(&self) -> ID {
        to_global_id(NodeType::Issue, &self.0.id)
    }

    pub async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    pub async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    async fn due_date(&self) -> DateTime<Utc> {
        self.0.due_date
    }

    async fn book(&self, ctx: &Context<'_>) -> Result<Book> {
        load_record::<BookRecord>(ctx, &self.0.book_id)
            .await?
            .map(Book)
            .ok_or_else(|| not_found("book", &self.0.book_id))
    }

    async fn borrower(&self, ctx: &Context<'_>) -> Result<User> {
        load_record::<UserRecord>(ctx, &self.0.borrower_id)
            .await?
            .map(User)
            .ok_or_else(|| not_found("user", &self.0.borrower_id))
    }

    /// Library the book was issued from
    async fn location(&self, ctx: &Context<'_>) -> Result<Library> {
        load_record::<LibraryRecord>(ctx, &self.0.location_id)
            .await?
            .map(Library)
            .ok_or_else(|| not_found("library", &self.0.location_id))
    }
}

// ============================================================================
// Connections
// ============================================================================

define_connection!(LibraryConnection, LibraryEdge, Library);
define_connection!(UserConnection, UserEdge, User);
define_connection!(AuthorConnection, AuthorEdge, Author);
define_connection!(BookConnection, BookEdge, Book);
define_connection!(GenreConnection, GenreEdge, Genre);
define_connection!(IssueConnection, IssueEdge, Issue);
