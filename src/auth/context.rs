//! # Request Context
//!
//! [`RequestContext`] carries per-request authentication state from the
//! HTTP layer into GraphQL execution. It starts unauthenticated, holding
//! only the request headers; validation attaches an [`Identity`], and
//! per-operation checks read it back out.
//!
//! One context is built per request and shared with every resolver through
//! the GraphQL context data. It is never reused across requests.

use axum::http::HeaderMap;

use crate::auth::identity::Identity;

/// Per-request authentication state.
///
/// # Example
/// ```rust
/// use axum::http::HeaderMap;
/// use keyway_user_api::auth::context::RequestContext;
///
/// let ctx = RequestContext::new(HeaderMap::new());
/// assert!(!ctx.is_authenticated());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    headers: HeaderMap,
    identity: Option<Identity>,
}

impl RequestContext {
    /// Wraps the incoming request headers; no identity is attached yet.
    pub fn new(headers: HeaderMap) -> Self {
        Self {
            headers,
            identity: None,
        }
    }

    /// The headers the request arrived with.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Attaches the identity produced by a successful validation.
    ///
    /// A second call replaces the first; the context never holds two
    /// identities at once.
    pub fn attach_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// The authenticated identity, if validation has run and succeeded.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
