//! Integration tests for the GraphQL schema
//!
//! Queries run against a seeded in-memory catalog through
//! `CatalogSchema::execute`, the same path the HTTP handler uses.

use async_graphql::{Request, Variables};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use catalog::db::Database;
use catalog::graphql::{CatalogSchema, NodeType, build_schema, node::to_global_id};
use catalog::pagination::{Cursor, PageLimits};

async fn schema_with(limits: PageLimits) -> CatalogSchema {
    let db = Database::connect_in_memory().await.unwrap();
    db.migrate().await.unwrap();
    db.seed().await;
    build_schema(db, limits)
}

async fn schema() -> CatalogSchema {
    schema_with(PageLimits::default()).await
}

async fn run(schema: &CatalogSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

async fn run_err(schema: &CatalogSchema, query: &str, variables: Value) -> Vec<String> {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    response
        .errors
        .iter()
        .map(|e| {
            e.extensions
                .as_ref()
                .and_then(|ext| ext.get("code"))
                .map(|code| code.to_string().trim_matches('"').to_string())
                .unwrap_or_default()
        })
        .collect()
}

fn cursor(offset: usize) -> String {
    Cursor::encode(offset).into_string()
}

const BOOKS_PAGE: &str = r#"
    query Books($first: Int, $after: String, $last: Int, $before: String) {
        books(first: $first, after: $after, last: $last, before: $before) {
            edges { cursor node { title } }
            pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
        }
    }
"#;

fn titles(data: &Value) -> Vec<&str> {
    data["books"]["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["node"]["title"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Root connections
// ============================================================================

#[tokio::test]
async fn test_first_page() {
    let schema = schema().await;
    let data = run(&schema, BOOKS_PAGE, json!({ "first": 3 })).await;

    assert_eq!(
        titles(&data),
        vec!["Pride and Prejudice", "Emma", "Persuasion"]
    );
    assert_eq!(
        data["books"]["pageInfo"],
        json!({
            "hasNextPage": true,
            "hasPreviousPage": false,
            "startCursor": cursor(0),
            "endCursor": cursor(2),
        })
    );
}

#[tokio::test]
async fn test_after_cursor() {
    let schema = schema().await;
    let data = run(&schema, BOOKS_PAGE, json!({ "first": 3, "after": cursor(2) })).await;

    assert_eq!(
        titles(&data),
        vec!["Sense and Sensibility", "The Hobbit", "The Fellowship of the Ring"]
    );
    assert_eq!(data["books"]["pageInfo"]["hasNextPage"], json!(true));
    assert_eq!(data["books"]["pageInfo"]["hasPreviousPage"], json!(true));
    assert_eq!(data["books"]["edges"][0]["cursor"], json!(cursor(3)));
}

#[tokio::test]
async fn test_last_page() {
    let schema = schema().await;
    let data = run(&schema, BOOKS_PAGE, json!({ "last": 3 })).await;

    assert_eq!(
        titles(&data),
        vec!["The Left Hand of Darkness", "The Dispossessed", "The Lathe of Heaven"]
    );
    assert_eq!(data["books"]["pageInfo"]["hasNextPage"], json!(false));
    assert_eq!(data["books"]["pageInfo"]["hasPreviousPage"], json!(true));
    assert_eq!(data["books"]["pageInfo"]["endCursor"], json!(cursor(11)));
}

#[tokio::test]
async fn test_cursor_past_end_is_empty_page() {
    let schema = schema().await;
    let data = run(&schema, BOOKS_PAGE, json!({ "first": 3, "after": cursor(50) })).await;

    assert_eq!(data["books"]["edges"], json!([]));
    assert_eq!(
        data["books"]["pageInfo"],
        json!({
            "hasNextPage": false,
            "hasPreviousPage": true,
            "startCursor": null,
            "endCursor": null,
        })
    );
}

#[tokio::test]
async fn test_page_size_is_capped() {
    let schema = schema_with(PageLimits::new(4)).await;
    let data = run(&schema, BOOKS_PAGE, json!({ "first": 50 })).await;

    assert_eq!(titles(&data).len(), 4);
    assert_eq!(data["books"]["pageInfo"]["hasNextPage"], json!(true));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_malformed_cursor_is_an_error() {
    let schema = schema().await;
    let codes = run_err(&schema, BOOKS_PAGE, json!({ "first": 3, "after": "garbage" })).await;
    assert_eq!(codes, vec!["INVALID_CURSOR"]);
}

#[tokio::test]
async fn test_negative_first_is_an_error() {
    let schema = schema().await;
    let codes = run_err(&schema, BOOKS_PAGE, json!({ "first": -1 })).await;
    assert_eq!(codes, vec!["INVALID_ARGUMENTS"]);
}

#[tokio::test]
async fn test_malformed_id_is_an_error() {
    let schema = schema().await;
    let codes = run_err(&schema, "{ node(id: \"not-an-id\") { id } }", json!({})).await;
    assert_eq!(codes, vec!["INVALID_ID"]);
}

// ============================================================================
// Nested connections
// ============================================================================

#[tokio::test]
async fn test_library_sibling_connections() {
    let schema = schema().await;
    let query = r#"
        query Library($id: ID!) {
            library(id: $id) {
                name
                address { street city additional }
                management(first: 10) { edges { node { name } } }
                books(first: 2) {
                    edges { node { title } }
                    pageInfo { hasNextPage }
                }
                borrowers(first: 10) {
                    edges { node { borrower { name } book { title } } }
                }
            }
        }
    "#;
    let id = to_global_id(NodeType::Library, "lib-central");
    let data = run(&schema, query, json!({ "id": id.as_str() })).await;
    let library = &data["library"];

    assert_eq!(library["name"], json!("Central Library"));
    assert_eq!(library["address"]["additional"], Value::Null);
    assert_eq!(
        library["management"]["edges"],
        json!([
            { "node": { "name": "Ada Lovelace" } },
            { "node": { "name": "Grace Hopper" } },
        ])
    );
    assert_eq!(
        library["books"]["edges"],
        json!([
            { "node": { "title": "Pride and Prejudice" } },
            { "node": { "title": "Emma" } },
        ])
    );
    assert_eq!(library["books"]["pageInfo"]["hasNextPage"], json!(true));
    assert_eq!(
        library["borrowers"]["edges"][1]["node"],
        json!({ "borrower": { "name": "Linus Pauling" }, "book": { "title": "The Hobbit" } })
    );
    assert_eq!(library["borrowers"]["edges"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_genre_books_and_book_genres() {
    let schema = schema().await;
    let query = r#"
        query Genre($id: ID!) {
            genre(id: $id) {
                name
                books(last: 1) {
                    edges { node { title genres { edges { node { name } } } } }
                    pageInfo { hasPreviousPage }
                }
            }
        }
    "#;
    let id = to_global_id(NodeType::Genre, "genre-fantasy");
    let data = run(&schema, query, json!({ "id": id.as_str() })).await;

    assert_eq!(data["genre"]["name"], json!("Fantasy"));
    assert_eq!(
        data["genre"]["books"]["edges"][0]["node"],
        json!({
            "title": "A Wizard of Earthsea",
            "genres": { "edges": [{ "node": { "name": "Fantasy" } }] },
        })
    );
    assert_eq!(data["genre"]["books"]["pageInfo"]["hasPreviousPage"], json!(true));
}

#[tokio::test]
async fn test_user_relations() {
    let schema = schema().await;
    let query = r#"
        query User($id: ID!) {
            user(id: $id) {
                name
                booksIssued(first: 5) { edges { node { book { title } location { name } } } }
                managing(first: 5) { edges { node { name } } }
            }
        }
    "#;
    let id = to_global_id(NodeType::User, "user-linus");
    let data = run(&schema, query, json!({ "id": id.as_str() })).await;

    assert_eq!(
        data["user"]["booksIssued"]["edges"],
        json!([
            { "node": { "book": { "title": "The Hobbit" }, "location": { "name": "Central Library" } } },
            { "node": { "book": { "title": "A Wizard of Earthsea" }, "location": { "name": "Riverside Branch" } } },
        ])
    );
    assert_eq!(data["user"]["managing"]["edges"], json!([]));
}

#[tokio::test]
async fn test_author_books() {
    let schema = schema().await;
    let query = r#"
        {
            authors(first: 1, after: "Y3Vyc29yOjA=") {
                edges {
                    node {
                        name
                        library { name }
                        books(first: 10) { edges { node { title } } }
                    }
                }
            }
        }
    "#;
    let data = run(&schema, query, json!({})).await;
    let author = &data["authors"]["edges"][0]["node"];

    assert_eq!(author["name"], json!("J. R. R. Tolkien"));
    assert_eq!(author["library"]["name"], json!("Central Library"));
    assert_eq!(author["books"]["edges"].as_array().unwrap().len(), 4);
}

// ============================================================================
// Global object identification
// ============================================================================

#[tokio::test]
async fn test_node_lookup() {
    let schema = schema().await;
    let query = r#"
        query Node($id: ID!) {
            node(id: $id) {
                __typename
                id
                ... on Book { title author { name } }
                ... on MetaNode { createdAt }
            }
        }
    "#;
    let id = to_global_id(NodeType::Book, "book-hobbit");
    let data = run(&schema, query, json!({ "id": id.as_str() })).await;

    assert_eq!(data["node"]["__typename"], json!("Book"));
    assert_eq!(data["node"]["id"], json!(id.as_str()));
    assert_eq!(data["node"]["title"], json!("The Hobbit"));
    assert_eq!(data["node"]["author"]["name"], json!("J. R. R. Tolkien"));
    assert!(data["node"]["createdAt"].as_str().unwrap().starts_with("2024-01-01"));
}

#[tokio::test]
async fn test_typed_lookup_with_other_type_is_null() {
    let schema = schema().await;
    let id = to_global_id(NodeType::Genre, "genre-fantasy");
    let data = run(
        &schema,
        "query Book($id: ID!) { book(id: $id) { title } }",
        json!({ "id": id.as_str() }),
    )
    .await;

    assert_eq!(data["book"], Value::Null);
}

#[tokio::test]
async fn test_unknown_node_is_null() {
    let schema = schema().await;
    let id = to_global_id(NodeType::Issue, "issue-404");
    let data = run(
        &schema,
        "query Node($id: ID!) { node(id: $id) { id } }",
        json!({ "id": id.as_str() }),
    )
    .await;

    assert_eq!(data["node"], Value::Null);
}

// ============================================================================
// Single-valued relations
// ============================================================================

#[tokio::test]
async fn test_full_page_resolves_every_relation() {
    let schema = schema().await;
    let query = r#"
        {
            books(first: 12) {
                edges { node { title author { name } location { name } } }
            }
            libraries(first: 2) {
                edges {
                    node {
                        borrowers(first: 10) {
                            edges { node { book { title } borrower { name } location { name } } }
                        }
                    }
                }
            }
        }
    "#;
    let data = run(&schema, query, json!({})).await;

    let books = data["books"]["edges"].as_array().unwrap();
    assert_eq!(books.len(), 12);
    let count = |field: &str, name: &str| {
        books
            .iter()
            .filter(|e| e["node"][field]["name"] == json!(name))
            .count()
    };
    assert_eq!(count("author", "Jane Austen"), 4);
    assert_eq!(count("author", "J. R. R. Tolkien"), 4);
    assert_eq!(count("author", "Ursula K. Le Guin"), 4);
    assert_eq!(count("location", "Central Library"), 6);

    let central = data["libraries"]["edges"][0]["node"]["borrowers"]["edges"]
        .as_array()
        .unwrap();
    assert_eq!(central.len(), 3);
    assert_eq!(
        central[0]["node"],
        json!({
            "book": { "title": "Pride and Prejudice" },
            "borrower": { "name": "Ada Lovelace" },
            "location": { "name": "Central Library" },
        })
    );
    let riverside = data["libraries"]["edges"][1]["node"]["borrowers"]["edges"]
        .as_array()
        .unwrap();
    assert_eq!(riverside.len(), 2);
    assert!(riverside.iter().all(|e| e["node"]["location"]["name"] == json!("Riverside Branch")));
}

#[tokio::test]
async fn test_contact_scalars_and_nullable_relations() {
    let schema = schema().await;
    let id = to_global_id(NodeType::Library, "lib-central");
    let data = run(
        &schema,
        r#"query Contact($id: ID!) {
            library(id: $id) { email phone }
            meta: __type(name: "MetaNode") { fields { name } }
            author: __type(name: "Author") { fields { name type { kind } } }
        }"#,
        json!({ "id": id.as_str() }),
    )
    .await;

    assert_eq!(
        data["library"],
        json!({ "email": "central@library.example", "phone": "+1 555 0100" })
    );
    assert_eq!(
        data["meta"]["fields"],
        json!([{ "name": "createdAt" }, { "name": "updatedAt" }])
    );
    let library_field = data["author"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == json!("library"))
        .unwrap();
    assert_eq!(library_field["type"]["kind"], json!("OBJECT"));
}
