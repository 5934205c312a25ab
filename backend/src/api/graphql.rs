//! GraphQL HTTP handlers

use std::time::Instant;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header::ACCEPT};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}

/// Execute a query and log how long it took
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    let query = request.query.clone();
    let operation = request.operation_name.clone();
    let variables = serde_json::to_string(&request.variables).unwrap_or_default();

    let started = Instant::now();
    let response = state.schema.execute(request).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        operation = operation.as_deref().unwrap_or("anonymous"),
        query = %query,
        variables = %variables,
        elapsed_ms,
        errors = response.errors.len(),
        "GraphQL request executed"
    );

    response.into()
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response()
    } else {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}
