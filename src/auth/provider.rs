//! # Identity provider port
//!
//! Capability interface over the external identity provider. The two
//! methods mirror the two provider calls the guard pipeline makes per
//! request: a validity check for the credential, then a profile fetch for
//! the decoded claims.
//!
//! Cryptographic verification, expiry checking and the wire protocol are
//! entirely the provider's concern. Implementations adapt whatever
//! transport the deployment uses (see
//! [`KeycloakProvider`](crate::auth::keycloak::KeycloakProvider)), and tests
//! substitute in-memory fakes.
//!
//! ## Thread safety
//!
//! Implementations must be `Send + Sync`: a single provider instance is
//! shared via `Arc` across all concurrent request executions.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Failure of an identity-provider call.
///
/// These never reach a client. The guard pipeline converts every variant to
/// the same opaque rejection (fail-closed); the variant only feeds the log.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The call did not complete within the configured deadline.
    #[error("identity provider call timed out")]
    Timeout,
    /// The call could not be completed (connection refused, DNS, TLS, ...).
    #[error("identity provider unreachable: {0}")]
    Transport(String),
    /// The provider answered, but not with anything this crate understands.
    #[error("identity provider returned an unexpected response: {0}")]
    Malformed(String),
}

/// Decoded claims about a principal, as the provider reports them.
///
/// Field names follow the provider's wire format (OpenID Connect userinfo
/// with realm roles), so the struct deserializes straight from the response
/// body. `realm_access` and `scope` are omitted by the provider for
/// principals without roles or grants; missing means empty here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Human-readable principal name.
    pub preferred_username: String,
    /// Realm-level role container.
    #[serde(default)]
    pub realm_access: RealmAccess,
    /// Space-separated grant string, e.g. `"openid view create"`.
    #[serde(default)]
    pub scope: String,
}

/// The `realm_access` claim object: the principal's realm roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Asynchronous port over the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// First provider call: is this credential currently valid?
    ///
    /// `Ok(false)` means the provider answered and said no (revoked,
    /// expired, unknown); an `Err` means the question could not be asked or
    /// answered. Callers must treat both as a rejection.
    async fn validate_access_token(&self, token: &str) -> Result<bool, ProviderError>;

    /// Second provider call: the full profile claims for a credential the
    /// provider has already accepted.
    async fn user_info(&self, token: &str) -> Result<Claims, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_deserialize_from_full_userinfo_payload() {
        let json = r#"{
            "sub": "f3b0d1c2",
            "preferred_username": "alice",
            "realm_access": { "roles": ["user", "offline_access"] },
            "scope": "openid view"
        }"#;

        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.preferred_username, "alice");
        assert_eq!(claims.realm_access.roles, vec!["user", "offline_access"]);
        assert_eq!(claims.scope, "openid view");
    }

    #[test]
    fn absent_realm_access_and_scope_default_to_empty() {
        let json = r#"{ "preferred_username": "bob" }"#;

        let claims: Claims = serde_json::from_str(json).unwrap();

        assert!(claims.realm_access.roles.is_empty());
        assert!(claims.scope.is_empty());
    }

    #[test]
    fn missing_username_is_a_deserialization_error() {
        // A payload without the principal name is malformed for our
        // purposes; the caller maps this to a rejection.
        let json = r#"{ "scope": "view" }"#;

        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn provider_error_display_names_the_failure_mode() {
        assert!(ProviderError::Timeout.to_string().contains("timed out"));
        assert!(
            ProviderError::Transport("connection refused".into())
                .to_string()
                .contains("connection refused")
        );
        assert!(
            ProviderError::Malformed("HTTP 502".into())
                .to_string()
                .contains("HTTP 502")
        );
    }
}
