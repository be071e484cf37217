//! # Request Guard
//!
//! The two halves of the access-control pipeline:
//!
//! - [`RequestGuard::authenticate`] runs once per request, before GraphQL
//!   execution: extract the bearer token, validate it against the
//!   provider, attach the resulting [`Identity`] to the request context.
//! - [`check_request`] runs per operation, inside execution: compare the
//!   attached identity against the operation's [`AuthorizationRule`].
//!
//! Authentication failures and authorization failures stay distinct all
//! the way out: the former answer "who are you" with [`AuthError::Unauthorized`]
//! (or the more specific extraction errors), the latter answer "you may
//! not" with [`AuthError::Forbidden`].

use crate::auth::bearer::extract_bearer;
use crate::auth::context::RequestContext;
use crate::auth::error::AuthError;
use crate::auth::identity::Identity;
use crate::auth::rule::AuthorizationRule;
use crate::auth::validator::TokenValidator;

/// Authenticates requests ahead of GraphQL execution.
///
/// Cheap to clone; clones share the underlying validator and provider.
#[derive(Clone)]
pub struct RequestGuard {
    validator: TokenValidator,
}

impl RequestGuard {
    pub fn new(validator: TokenValidator) -> Self {
        Self { validator }
    }

    /// Extracts and validates the request's bearer token, attaching the
    /// resulting identity to `ctx` on success.
    ///
    /// The raw credential is dropped as soon as validation finishes; only
    /// the identity outlives this call. Running it again revalidates from
    /// the headers and replaces the attached identity.
    ///
    /// # Errors
    /// - [`AuthError::MissingCredential`] / [`AuthError::UnsupportedScheme`]
    ///   when no usable bearer token is present
    /// - [`AuthError::Unauthorized`] when the provider rejects the token
    ///   or cannot be reached
    pub async fn authenticate(&self, ctx: &mut RequestContext) -> Result<(), AuthError> {
        let token = extract_bearer(ctx.headers())?.to_owned();
        let claims = self.validator.validate(&token).await?;
        ctx.attach_identity(Identity::from_claims(claims));
        Ok(())
    }
}

/// Checks an operation's rule against the request's authentication state.
///
/// # Errors
/// [`AuthError::Unauthorized`] when no identity is attached, and
/// [`AuthError::Forbidden`] when the identity lacks the required scope.
pub fn check_request(ctx: &RequestContext, rule: AuthorizationRule) -> Result<(), AuthError> {
    let Some(identity) = ctx.identity() else {
        return Err(AuthError::Unauthorized);
    };

    if identity.has_scope(rule.scope) {
        Ok(())
    } else {
        tracing::info!(
            name = %identity.name,
            resource = rule.resource,
            scope = rule.scope,
            "scope check failed"
        );
        Err(AuthError::Forbidden)
    }
}
