//! # User Resolvers
//!
//! Query and mutation roots for the user CRUD surface. Every operation
//! carries a [`RequireScope`] guard, so a request whose identity lacks the
//! matching scope is rejected before the resolver body runs.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::auth::AuthorizationRule;
use crate::error::NotFoundError;
use crate::graphql::guard::RequireScope;
use crate::user::input::CreateUserInput;
use crate::user::model::User;
use crate::user::repo::{NewUser, UserRepo};

/// Scope required to read users.
pub const USER_VIEW: AuthorizationRule = AuthorizationRule::new("user", "view");
/// Scope required to create a user.
pub const USER_CREATE: AuthorizationRule = AuthorizationRule::new("user", "create");
/// Scope required to delete a user.
pub const USER_DELETE: AuthorizationRule = AuthorizationRule::new("user", "delete");

pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Fetches a single user by id.
    #[graphql(guard = "RequireScope::new(USER_VIEW)")]
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<User> {
        let repo = ctx.data::<Arc<dyn UserRepo>>()?;
        match repo.find_by_id(id).await.map_err(storage_error)? {
            Some(user) => Ok(user),
            None => Err(NotFoundError::new("User").into_graphql_error()),
        }
    }

    /// Lists all users, oldest first.
    #[graphql(guard = "RequireScope::new(USER_VIEW)")]
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let repo = ctx.data::<Arc<dyn UserRepo>>()?;
        repo.find_all().await.map_err(storage_error)
    }
}

pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Creates a user and returns it with its assigned id.
    #[graphql(guard = "RequireScope::new(USER_CREATE)")]
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
        let repo = ctx.data::<Arc<dyn UserRepo>>()?;
        let new_user = NewUser {
            name: input.name,
            nick_name: input.nick_name,
        };
        repo.create(new_user).await.map_err(storage_error)
    }

    /// Deletes a user. Returns `false` when the id matched nothing.
    #[graphql(guard = "RequireScope::new(USER_DELETE)")]
    async fn remove_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let repo = ctx.data::<Arc<dyn UserRepo>>()?;
        repo.remove(id).await.map_err(storage_error)
    }
}

/// The cause goes to the log; the client sees a generic error. Storage
/// detail (SQL, connection state) must not leak into responses.
fn storage_error(err: anyhow::Error) -> async_graphql::Error {
    tracing::error!(error = ?err, "user storage failure");
    async_graphql::Error::new("Internal server error")
        .extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
}
