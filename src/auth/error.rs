use thiserror::Error;

/// Terminal rejection reasons for the request guard pipeline.
///
/// The four variants cover the whole taxonomy: the first two come from
/// credential extraction, `Unauthorized` from provider-side validation, and
/// `Forbidden` from the scope check. None of them is retried; a rejected
/// request stays rejected.
///
/// # Client mapping
///
/// What the client sees is deliberately coarser than the taxonomy:
/// everything up to and including `Unauthorized` surfaces as the
/// 401-equivalent `"UNAUTHORIZED"`, while `Forbidden` (the caller is known
/// but lacks permission) surfaces as the 403-equivalent `"FORBIDDEN"`. The
/// full variant is kept for logging; the [`Display`](std::fmt::Display)
/// messages below are internal and must not be echoed to clients.
///
/// # Example
/// ```
/// use keyway_user_api::auth::error::AuthError;
///
/// assert_eq!(AuthError::MissingCredential.code(), "UNAUTHORIZED");
/// assert_eq!(AuthError::Forbidden.code(), "FORBIDDEN");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `authorization` header was present on the request.
    #[error("authorization header is missing")]
    MissingCredential,
    /// The `authorization` header did not carry a well-formed Bearer value.
    #[error("authorization header is not a well-formed Bearer credential")]
    UnsupportedScheme,
    /// The identity provider rejected the credential, or the provider call
    /// itself failed (fail-closed).
    #[error("credential was rejected by the identity provider")]
    Unauthorized,
    /// The authenticated identity does not hold the scope the operation
    /// requires.
    #[error("authenticated identity lacks the required scope")]
    Forbidden,
}

impl AuthError {
    /// Machine-readable code surfaced in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Forbidden => "FORBIDDEN",
            _ => "UNAUTHORIZED",
        }
    }

    /// Client-facing message. Never includes extraction or provider detail.
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::Forbidden => "Forbidden",
            _ => "Unauthorized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_and_validation_failures_map_to_unauthorized() {
        for err in [
            AuthError::MissingCredential,
            AuthError::UnsupportedScheme,
            AuthError::Unauthorized,
        ] {
            assert_eq!(err.code(), "UNAUTHORIZED");
            assert_eq!(err.client_message(), "Unauthorized");
        }
    }

    #[test]
    fn forbidden_maps_to_forbidden() {
        assert_eq!(AuthError::Forbidden.code(), "FORBIDDEN");
        assert_eq!(AuthError::Forbidden.client_message(), "Forbidden");
    }

    #[test]
    fn internal_display_is_more_specific_than_client_message() {
        let err = AuthError::MissingCredential;
        assert!(err.to_string().contains("authorization header"));
        assert_ne!(err.to_string(), err.client_message());
    }
}
