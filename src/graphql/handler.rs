use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::http::HeaderMap;

use crate::auth::{RequestContext, RequestGuard};
use crate::graphql::guard::rejection_response;
use crate::graphql::schema::AppSchema;

/// GraphQL endpoint handler.
///
/// # Overview
///
/// Authenticates the request once, up front, against the identity
/// provider, then executes the GraphQL document with the resulting
/// [`RequestContext`] injected into the execution context.
///
/// # Responsibilities
///
/// - Extract and validate the bearer credential from the request headers
/// - Reject unauthenticated requests before any resolver runs
/// - Inject the per-request [`RequestContext`] for the field guards
///
/// # Non-Responsibilities
///
/// - Authorization: scope checks belong to the per-field
///   [`RequireScope`](crate::graphql::guard::RequireScope) guards
/// - Domain logic: resolvers own it
///
/// Rejections follow the GraphQL-over-HTTP convention: HTTP 200 with an
/// `errors` array carrying a machine-readable `extensions.code`.
pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    Extension(guard): Extension<RequestGuard>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request_ctx = RequestContext::new(headers);

    // Authentication happens once per request. On failure the document
    // is never executed and no resolver side effects can occur.
    if let Err(err) = guard.authenticate(&mut request_ctx).await {
        return rejection_response(&err).into();
    }

    schema
        .execute(req.into_inner().data(request_ctx))
        .await
        .into()
}
