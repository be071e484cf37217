use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// A registered user.
///
/// `id` and `created_at` are assigned by the repository at creation time
/// and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub nick_name: Option<String>,
    pub created_at: NaiveDateTime,
}
