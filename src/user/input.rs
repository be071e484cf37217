use async_graphql::InputObject;

/// Input for the `createUser` mutation.
///
/// The validators mirror what the storage layer accepts; violations are
/// rejected before the resolver runs.
#[derive(Clone, Debug, InputObject)]
pub struct CreateUserInput {
    /// Display name, at most 30 characters.
    #[graphql(validator(max_length = 30))]
    pub name: String,
    /// Optional nickname. When present it must be 30 to 255 characters.
    #[graphql(validator(min_length = 30, max_length = 255))]
    pub nick_name: Option<String>,
}
