//! # Authenticated Identity
//!
//! [`Identity`] is the immutable snapshot of a principal produced by a
//! successful validation: the human-readable name, the realm roles, and
//! the granted scopes. It reflects what the provider said at validation
//! time and is never refreshed within a request.
//!
//! Role and scope checks are exact, case-sensitive membership tests. The
//! sets stay ordered so log output and comparisons are deterministic.

use std::collections::BTreeSet;

use crate::auth::provider::Claims;

/// Snapshot of an authenticated principal for the lifetime of one request.
///
/// # Example
/// ```rust
/// use keyway_user_api::auth::identity::Identity;
/// use keyway_user_api::auth::provider::{Claims, RealmAccess};
///
/// let identity = Identity::from_claims(Claims {
///     preferred_username: "alice".into(),
///     realm_access: RealmAccess { roles: vec!["user".into()] },
///     scope: "view".into(),
/// });
///
/// assert_eq!(identity.name, "alice");
/// assert!(identity.has_scope("view"));
/// assert!(!identity.has_scope("create"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Human-readable principal name (the provider's `preferred_username`).
    pub name: String,
    /// Realm roles as reported by the provider.
    pub roles: BTreeSet<String>,
    /// Granted scopes, split out of the provider's space-separated grant
    /// string.
    pub scopes: BTreeSet<String>,
}

impl Identity {
    /// Builds an identity from provider claims.
    ///
    /// The `scope` claim arrives as one space-separated string
    /// (`"openid view create"`); it is split on ASCII whitespace here so
    /// authorization checks are set lookups, not substring matches.
    pub fn from_claims(claims: Claims) -> Self {
        let scopes = claims
            .scope
            .split_ascii_whitespace()
            .map(str::to_owned)
            .collect();

        Self {
            name: claims.preferred_username,
            roles: claims.realm_access.roles.into_iter().collect(),
            scopes,
        }
    }

    /// Exact, case-sensitive scope membership test.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Exact, case-sensitive role membership test.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
