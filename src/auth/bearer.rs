//! # Bearer credential extraction
//!
//! First stage of the guard pipeline: pull the opaque bearer credential out
//! of the request headers, without interpreting it. The credential lives
//! only as long as validation needs it.
//!
//! Two failures are distinguished so the log can tell a client that sent
//! nothing from one that sent the wrong kind of credential:
//! - no `authorization` header at all → [`AuthError::MissingCredential`]
//! - any value not shaped like `Bearer <token>` → [`AuthError::UnsupportedScheme`]
//!
//! The scheme match is case-insensitive (`bearer`, `BEARER`, ... all pass);
//! header-name lookup is case-insensitive by construction in [`HeaderMap`].

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use crate::auth::error::AuthError;

/// Extracts the bearer token from the `authorization` header.
///
/// Returns the `<token>` substring unmodified, borrowed from the header
/// value. No provider interaction and no logging happen here; the token
/// must never reach the log.
///
/// # Errors
/// - [`AuthError::MissingCredential`] if the header is absent
/// - [`AuthError::UnsupportedScheme`] if the value is not exactly
///   `Bearer <token>` (wrong scheme, missing token, trailing garbage, or a
///   value that is not visible ASCII)
///
/// # Example
/// ```
/// use axum::http::HeaderMap;
/// use keyway_user_api::auth::bearer::extract_bearer;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("authorization", "Bearer abc123".parse().unwrap());
///
/// assert_eq!(extract_bearer(&headers).unwrap(), "abc123");
/// ```
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let raw = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::UnsupportedScheme)?;

    let mut parts = raw.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthError::UnsupportedScheme);
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::UnsupportedScheme);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", value.parse().unwrap());
        headers
    }

    #[test]
    fn missing_header_is_missing_credential() {
        let headers = HeaderMap::new();

        assert_eq!(
            extract_bearer(&headers),
            Err(AuthError::MissingCredential)
        );
    }

    #[test]
    fn bearer_token_is_returned_unmodified() {
        let headers = headers_with_authorization("Bearer abc123");

        assert_eq!(extract_bearer(&headers).unwrap(), "abc123");
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        for value in ["bearer tok", "BEARER tok", "BeArEr tok"] {
            let headers = headers_with_authorization(value);
            assert_eq!(extract_bearer(&headers).unwrap(), "tok");
        }
    }

    #[test]
    fn header_name_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer abc123".parse().unwrap());

        assert_eq!(extract_bearer(&headers).unwrap(), "abc123");
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");

        assert_eq!(
            extract_bearer(&headers),
            Err(AuthError::UnsupportedScheme)
        );
    }

    #[test]
    fn scheme_without_token_is_rejected() {
        for value in ["Bearer", "Bearer "] {
            let headers = headers_with_authorization(value);
            assert_eq!(
                extract_bearer(&headers),
                Err(AuthError::UnsupportedScheme),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn trailing_parts_are_rejected() {
        let headers = headers_with_authorization("Bearer abc extra");

        assert_eq!(
            extract_bearer(&headers),
            Err(AuthError::UnsupportedScheme)
        );
    }

    #[test]
    fn extraction_does_not_trim_or_rewrite_the_token() {
        // Base64url-ish payloads with dots must come back byte-for-byte.
        let token = "eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiIxIn0.sig";
        let headers = headers_with_authorization(&format!("Bearer {token}"));

        assert_eq!(extract_bearer(&headers).unwrap(), token);
    }
}
