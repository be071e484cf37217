use async_graphql::ErrorExtensions;
use thiserror::Error;

/// A common error representing that a requested entity was not found.
///
/// This error is intended to be used across layers (repository,
/// application, presentation) without depending on domain-specific
/// business rules.
///
/// # Design
/// - Infrastructure-agnostic (no DB / HTTP dependency)
/// - Reusable across entities
/// - Suitable for repository or resolver boundaries
///
/// # Example
/// ```
/// use keyway_user_api::error::entity::NotFoundError;
///
/// let err = NotFoundError::new("User");
/// assert_eq!(err.to_string(), "User not found");
/// ```
#[derive(Debug, Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Name of the entity that was not found (e.g. `"User"`)
    pub entity: &'static str,
}

impl NotFoundError {
    /// Create a new `NotFoundError` for the specified entity.
    ///
    /// # Example
    /// ```
    /// use keyway_user_api::error::entity::NotFoundError;
    ///
    /// let err = NotFoundError::new("User");
    /// assert_eq!(err.entity, "User");
    /// ```
    pub fn new(entity: &'static str) -> Self {
        Self { entity }
    }

    /// Converts into a client-facing GraphQL error with a stable
    /// `NOT_FOUND` extension code.
    pub fn into_graphql_error(self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", "NOT_FOUND"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_entity_correctly() {
        let err = NotFoundError::new("User");
        assert_eq!(err.entity, "User");
    }

    #[test]
    fn display_format_is_correct() {
        let err = NotFoundError::new("User");
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn debug_output_contains_struct_name_and_entity() {
        let err = NotFoundError::new("User");
        let debug = format!("{:?}", err);

        assert!(debug.contains("NotFoundError"));
        assert!(debug.contains("User"));
    }

    #[test]
    fn graphql_error_carries_the_not_found_code() {
        let err = NotFoundError::new("User").into_graphql_error();

        assert_eq!(err.message, "User not found");
        assert!(err.extensions.is_some());
    }
}
