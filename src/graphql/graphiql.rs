use async_graphql::http::GraphiQLSource;
use axum::response::Html;

/// GraphiQL UI handler.
///
/// # Overview
///
/// Serves the embedded GraphiQL UI for interactive GraphQL exploration.
///
/// # Intended Usage
///
/// - Development and debugging only
/// - Mounted conditionally (see the `GRAPHIQL` flag in
///   [`AppConfig`](crate::config::app::AppConfig))
///
/// Note that GraphiQL itself issues plain requests against the endpoint:
/// guarded operations still require a bearer token header.
///
/// # Example
///
/// ```no_run
/// use keyway_user_api::graphql::graphiql::graphiql_handler;
///
/// # async fn example() {
/// let html = graphiql_handler("/graphql").await;
/// # }
/// ```
pub async fn graphiql_handler(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}
