//! # Token Validator
//!
//! [`TokenValidator`] turns an extracted bearer token into provider claims
//! by making the two provider calls in order: introspection first, then
//! the userinfo fetch, which only runs for tokens the provider accepted.
//!
//! ## Fail closed
//!
//! Every way this can go wrong collapses to [`AuthError::Unauthorized`]:
//! an inactive token, a provider timeout, a transport failure, or a
//! malformed answer. The distinction is logged for operators and never
//! surfaced to clients, so probing the API cannot reveal whether a token
//! is expired, revoked, or simply unknown.

use std::sync::Arc;

use crate::auth::error::AuthError;
use crate::auth::provider::{Claims, IdentityProvider};

/// Validates bearer tokens against the identity provider.
///
/// Cheap to clone; clones share the underlying provider.
#[derive(Clone)]
pub struct TokenValidator {
    provider: Arc<dyn IdentityProvider>,
}

impl TokenValidator {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Validates a token and returns the claims the provider holds for it.
    ///
    /// The token is passed to the provider exactly as extracted, with no
    /// local decoding or normalization.
    ///
    /// # Errors
    /// [`AuthError::Unauthorized`] for an inactive token and for any
    /// provider failure on either call.
    pub async fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let active = self
            .provider
            .validate_access_token(token)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "token introspection failed");
                AuthError::Unauthorized
            })?;

        if !active {
            tracing::debug!("token rejected by the identity provider");
            return Err(AuthError::Unauthorized);
        }

        self.provider.user_info(token).await.map_err(|err| {
            tracing::warn!(error = %err, "userinfo fetch failed");
            AuthError::Unauthorized
        })
    }
}
