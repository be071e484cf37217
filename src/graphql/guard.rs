//! # GraphQL Guards
//!
//! Bridges the access-control pipeline into schema execution.
//!
//! [`RequireScope`] is the field guard attached to every operation; it
//! reads the request's [`RequestContext`] out of the GraphQL context data
//! and evaluates the operation's rule. [`rejection_response`] shapes
//! whole-request rejections for failures caught before execution starts.
//!
//! Both paths produce the same client-facing error shape: a generic
//! message plus a stable `code` extension (`UNAUTHORIZED` or `FORBIDDEN`),
//! with no hint of why validation failed.

use async_graphql::{Context, Error, ErrorExtensions, Guard, Pos, Response};

use crate::auth::{AuthError, AuthorizationRule, RequestContext, check_request};

/// Field guard enforcing one operation's [`AuthorizationRule`].
///
/// Attached declaratively at the resolver:
///
/// ```ignore
/// #[graphql(guard = "RequireScope::new(USER_VIEW)")]
/// async fn user(&self, ...) -> ... { ... }
/// ```
pub struct RequireScope {
    rule: AuthorizationRule,
}

impl RequireScope {
    pub fn new(rule: AuthorizationRule) -> Self {
        Self { rule }
    }
}

impl Guard for RequireScope {
    async fn check(&self, ctx: &Context<'_>) -> async_graphql::Result<()> {
        // The handler injects a context into every execution. A schema
        // executed without one (direct use, tests) must still deny.
        match ctx.data_opt::<RequestContext>() {
            Some(request) => check_request(request, self.rule).map_err(|err| rejection(&err)),
            None => Err(rejection(&AuthError::Unauthorized)),
        }
    }
}

/// Client-facing GraphQL error for a pipeline rejection.
pub fn rejection(err: &AuthError) -> Error {
    let code = err.code();
    Error::new(err.client_message()).extend_with(|_, e| e.set("code", code))
}

/// Whole-response rejection for failures caught before execution starts.
///
/// GraphQL-over-HTTP answers stay `200 OK`; the rejection travels in the
/// `errors` array, mirroring what a failed field guard produces.
pub fn rejection_response(err: &AuthError) -> Response {
    Response::from_errors(vec![rejection(err).into_server_error(Pos::default())])
}
