//! # Authentication and Authorization
//!
//! The access-control pipeline for the API, from HTTP header to
//! per-operation verdict:
//!
//! 1. [`bearer`] extracts the bearer token from the `Authorization` header
//! 2. [`validator`] checks it against the identity provider via the
//!    [`provider`] port (the [`keycloak`] adapter in production)
//! 3. [`context`] carries the resulting [`Identity`] through execution
//! 4. [`guard`] evaluates each operation's [`AuthorizationRule`]
//!
//! Nothing here knows about GraphQL; the wiring into schema execution
//! lives in [`crate::graphql`].

pub mod bearer;
pub mod context;
pub mod error;
pub mod guard;
pub mod identity;
pub mod keycloak;
pub mod provider;
pub mod rule;
pub mod validator;

pub use context::RequestContext;
pub use error::AuthError;
pub use guard::{RequestGuard, check_request};
pub use identity::Identity;
pub use keycloak::KeycloakProvider;
pub use rule::AuthorizationRule;
pub use validator::TokenValidator;
