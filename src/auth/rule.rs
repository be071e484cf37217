//! # Authorization Rules
//!
//! An [`AuthorizationRule`] is the declarative access requirement attached
//! to one API operation: the resource it touches and the scope a caller
//! must hold. Every operation carries exactly one rule; there is no
//! unguarded path into a resolver.
//!
//! Rules are plain data. Evaluation lives in
//! [`check_request`](crate::auth::guard::check_request).

/// Access requirement for a single operation.
///
/// Rules are `const`-constructible so operations can declare them as
/// compile-time constants next to the resolver:
///
/// ```rust
/// use keyway_user_api::auth::rule::AuthorizationRule;
///
/// const USER_VIEW: AuthorizationRule = AuthorizationRule::new("user", "view");
/// assert_eq!(USER_VIEW.scope, "view");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorizationRule {
    /// Resource the operation touches; feeds log output only.
    pub resource: &'static str,
    /// Scope the caller must hold, matched exactly and case-sensitively.
    pub scope: &'static str,
}

impl AuthorizationRule {
    pub const fn new(resource: &'static str, scope: &'static str) -> Self {
        Self { resource, scope }
    }
}
