use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::user::repo::UserRepo;
use crate::user::resolver::{UserMutation, UserQuery};

/// The application schema: user CRUD behind scope guards.
pub type AppSchema = Schema<UserQuery, UserMutation, EmptySubscription>;

/// Builds the schema with its dependencies attached.
///
/// The repository is the only schema-level dependency; per-request state
/// ([`RequestContext`](crate::auth::RequestContext)) is injected by the
/// HTTP handler on every execution.
pub fn build_schema(repo: Arc<dyn UserRepo>) -> AppSchema {
    Schema::build(UserQuery, UserMutation, EmptySubscription)
        .data(repo)
        .finish()
}
